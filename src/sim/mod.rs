//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (left to right)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod obstacle;
pub mod parallax;
pub mod platform;
pub mod player;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use input::{InputState, Keys};
pub use obstacle::{Obstacle, ObstacleKind};
pub use parallax::ParallaxLayer;
pub use platform::Platform;
pub use player::{JumpKind, Player, PlayerState, hitbox_for};
pub use state::{DeathCause, GameEvent, GamePhase, Session};
pub use tick::{TickInput, check_collisions, tick};
