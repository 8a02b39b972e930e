//! The runner: vertical physics and the locomotion state machine
//!
//! The player never moves horizontally; the world scrolls past a fixed
//! column. Each tick integrates gravity, resolves landing against the
//! platforms under that column, and picks the next [`PlayerState`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::platform::Platform;
use crate::consts::*;
use crate::tuning::Tuning;

/// Locomotion state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    /// Running on the ground
    Run,
    /// Airborne after a single jump, or after running off an edge
    Jump,
    /// Airborne double jump, spinning
    Flip,
    /// Crouched on the ground
    Slide,
}

/// Hitbox for a state at a sprite position (top-left of the upright sprite)
///
/// Slide and flip are deliberately smaller than the sprite.
pub fn hitbox_for(state: PlayerState, pos: Vec2) -> Rect {
    match state {
        PlayerState::Slide => Rect::new(pos.x, pos.y + 35.0, 60.0, 25.0),
        PlayerState::Flip => Rect::new(pos.x + 5.0, pos.y + 15.0, 30.0, 30.0),
        PlayerState::Run | PlayerState::Jump => Rect::new(pos.x, pos.y, PLAYER_WIDTH, PLAYER_HEIGHT),
    }
}

/// Outcome of a jump request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    Double,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left of the upright sprite
    pub pos: Vec2,
    pub vel_y: f32,
    pub state: PlayerState,
    pub on_ground: bool,
    pub has_double_jumped: bool,
    /// Flip spin (radians)
    pub rotation: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, GROUND_Y - PLAYER_HEIGHT),
            vel_y: 0.0,
            state: PlayerState::Run,
            on_ground: true,
            has_double_jumped: false,
            rotation: 0.0,
        }
    }
}

impl Player {
    pub fn hitbox(&self) -> Rect {
        hitbox_for(self.state, self.pos)
    }

    /// Feet position (bottom of the upright sprite)
    #[inline]
    pub fn feet(&self) -> f32 {
        self.pos.y + PLAYER_HEIGHT
    }

    /// Try to jump. Returns `None` when no jump is available.
    pub fn jump(&mut self, tuning: &Tuning) -> Option<JumpKind> {
        if self.on_ground {
            self.vel_y = tuning.jump_velocity;
            self.on_ground = false;
            self.state = PlayerState::Jump;
            self.has_double_jumped = false;
            Some(JumpKind::Ground)
        } else if !self.has_double_jumped {
            self.vel_y = tuning.double_jump_velocity;
            self.has_double_jumped = true;
            self.state = PlayerState::Flip;
            self.rotation = 0.0;
            Some(JumpKind::Double)
        } else {
            None
        }
    }

    /// Whether the player, at its current height, is supported by a platform
    ///
    /// Any horizontal overlap with a platform counts, so a runner whose
    /// back foot is still on a ledge or who straddles two touching
    /// platforms stays up.
    pub fn is_supported(&self, platforms: &[Platform], tolerance: f32) -> bool {
        let feet = self.feet();
        if feet < GROUND_Y || feet > GROUND_Y + tolerance {
            return false;
        }
        let body = Rect::new(self.pos.x, self.pos.y, PLAYER_WIDTH, PLAYER_HEIGHT);
        platforms.iter().any(|p| body.overlaps_span(p.x, p.width))
    }

    /// Advance one tick. Returns true if the player touched down this tick.
    pub fn update(&mut self, down_held: bool, platforms: &[Platform], tuning: &Tuning) -> bool {
        let was_on_ground = self.on_ground;

        self.vel_y += tuning.gravity;
        self.pos.y += self.vel_y;

        if self.is_supported(platforms, tuning.landing_tolerance) {
            self.pos.y = GROUND_Y - PLAYER_HEIGHT;
            self.vel_y = 0.0;
            self.on_ground = true;
            self.has_double_jumped = false;
            self.rotation = 0.0;
            self.state = if down_held {
                PlayerState::Slide
            } else {
                PlayerState::Run
            };
        } else {
            self.on_ground = false;
            if self.state == PlayerState::Flip {
                self.rotation += tuning.flip_spin;
            }
            if down_held && self.state != PlayerState::Flip {
                self.vel_y = self.vel_y.max(tuning.fast_fall_speed);
            }
        }

        // Ran off an edge
        if !self.on_ground && self.state == PlayerState::Run {
            self.state = PlayerState::Jump;
        }

        self.on_ground && !was_on_ground
    }
}
