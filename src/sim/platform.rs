//! Ground segments
//!
//! Platforms all share the ground line and extend to the bottom of the
//! screen; only their horizontal span varies.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::{CANVAS_HEIGHT, GROUND_Y};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub width: f32,
    /// Whether a gap was left before this platform when it spawned
    pub has_gap: bool,
}

impl Platform {
    pub fn new(x: f32, width: f32, has_gap: bool) -> Self {
        Self { x, width, has_gap }
    }

    /// Top edge (the surface the player runs on)
    #[inline]
    pub fn top(&self) -> f32 {
        GROUND_Y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, GROUND_Y, self.width, CANVAS_HEIGHT - GROUND_Y)
    }

    pub fn scroll(&mut self, speed: f32) {
        self.x -= speed;
    }

    pub fn is_off_screen(&self) -> bool {
        self.right() < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry() {
        let p = Platform::new(100.0, 250.0, false);
        let r = p.rect();
        assert_eq!(r.y, GROUND_Y);
        assert_eq!(r.bottom(), CANVAS_HEIGHT);
        assert_eq!(p.right(), 350.0);
    }

    #[test]
    fn test_off_screen_only_when_trailing_edge_passes_origin() {
        let mut p = Platform::new(10.0, 20.0, false);
        p.scroll(30.0);
        // Trailing edge exactly at 0 is still on screen
        assert!(!p.is_off_screen());
        p.scroll(0.5);
        assert!(p.is_off_screen());
    }
}
