//! Shadow Run - a monochrome endless side-scrolling runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, world generation, collisions)
//! - `render`: Backend-agnostic draw pass over an abstract draw sink
//! - `driver`: Per-frame driver tying input, simulation and rendering together
//! - `tuning`: Data-driven game balance
//! - `settings`: Render-only preferences

pub mod driver;
pub mod render;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use driver::{FrameDriver, ScoreDisplay};
pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

/// Fixed screen geometry. Gameplay balance lives in [`Tuning`].
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 1200.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Top edge of every platform
    pub const GROUND_Y: f32 = 480.0;

    /// Player column (the world scrolls, the player never moves horizontally)
    pub const PLAYER_X: f32 = 150.0;
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;

    /// Opening layout: this many platforms of this width, laid edge to edge
    pub const INITIAL_PLATFORMS: usize = 5;
    pub const INITIAL_PLATFORM_WIDTH: f32 = 300.0;
}

/// Text shown in the score display and on the game over screen
pub fn distance_label(score: u64) -> String {
    format!("DISTANCE: {}", score)
}
