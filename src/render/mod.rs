//! Rendering module
//!
//! The simulation never draws. [`render`] turns a session into draw calls
//! on whatever [`DrawSink`] the host provides.

pub mod draw_list;
pub mod scene;
pub mod sink;

pub use draw_list::{DrawCommand, DrawList};
pub use scene::render;
pub use sink::{Asset, Color, DrawSink, TextStyle};
