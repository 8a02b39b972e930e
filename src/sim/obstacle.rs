//! Obstacles
//!
//! Two kinds force a choice each time one spawns: `Jump` sits on the
//! surface and is tall enough to catch a sliding player, `Duck` hangs at
//! head height and clears the slide hitbox.

use serde::{Deserialize, Serialize};

use super::collision::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Must be jumped over
    Jump,
    /// Must be slid under
    Duck,
}

impl ObstacleKind {
    /// (width, height, lift above the platform surface to the top edge)
    pub const fn geometry(self) -> (f32, f32, f32) {
        match self {
            ObstacleKind::Jump => (40.0, 40.0, 40.0),
            ObstacleKind::Duck => (60.0, 30.0, 80.0),
        }
    }

    pub fn width(self) -> f32 {
        self.geometry().0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub rect: Rect,
}

impl Obstacle {
    /// Place an obstacle of `kind` with its left edge at `x`, relative to a platform surface
    pub fn new(x: f32, surface_y: f32, kind: ObstacleKind) -> Self {
        let (width, height, lift) = kind.geometry();
        Self {
            kind,
            rect: Rect::new(x, surface_y - lift, width, height),
        }
    }

    /// Place an obstacle horizontally centered on a span
    pub fn centered_on(span_x: f32, span_width: f32, surface_y: f32, kind: ObstacleKind) -> Self {
        let x = span_x + span_width / 2.0 - kind.width() / 2.0;
        Self::new(x, surface_y, kind)
    }

    pub fn scroll(&mut self, speed: f32) {
        self.rect.x -= speed;
    }

    pub fn is_off_screen(&self) -> bool {
        self.rect.right() < 0.0
    }

    pub fn collides_with(&self, hitbox: &Rect) -> bool {
        self.rect.overlaps(hitbox)
    }
}
