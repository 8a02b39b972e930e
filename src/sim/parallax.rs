//! Decorative background skyline
//!
//! A layer is a fixed strip of buildings that repeats every `PERIOD`
//! pixels. It scrolls at a fraction of world speed and never interacts
//! with gameplay.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;

/// Buildings per strip
pub const ELEMENT_COUNT: usize = 10;
/// Horizontal spacing between building origins
pub const ELEMENT_SPACING: f32 = 200.0;
/// Strip length; the layer offset wraps at this period
pub const PERIOD: f32 = ELEMENT_COUNT as f32 * ELEMENT_SPACING;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParallaxLayer {
    /// Fraction of world speed this layer moves at
    pub scroll_factor: f32,
    /// RGBA fill
    pub color: [u8; 4],
    pub y_offset: f32,
    /// Current scroll offset, always in (-PERIOD, 0]
    pub offset: f32,
    /// Buildings in strip-local coordinates
    pub elements: Vec<Rect>,
}

impl ParallaxLayer {
    pub fn new<R: Rng>(rng: &mut R, scroll_factor: f32, color: [u8; 4], y_offset: f32) -> Self {
        let elements = (0..ELEMENT_COUNT)
            .map(|i| {
                Rect::new(
                    i as f32 * ELEMENT_SPACING,
                    100.0 + rng.random::<f32>() * 200.0,
                    60.0 + rng.random::<f32>() * 80.0,
                    150.0 + rng.random::<f32>() * 200.0,
                )
            })
            .collect();

        Self {
            scroll_factor,
            color,
            y_offset,
            offset: 0.0,
            elements,
        }
    }

    pub fn scroll(&mut self, world_speed: f32) {
        self.offset -= world_speed * self.scroll_factor;
        // A single step never exceeds one period at sane speeds, but stay exact if it does
        while self.offset <= -PERIOD {
            self.offset += PERIOD;
        }
    }

    /// Screen-space rects of every element copy intersecting `[0, view_width)`
    ///
    /// Two copies of the strip are laid end to end so the wrap point is
    /// never visible.
    pub fn visible_rects(&self, view_width: f32) -> Vec<Rect> {
        let mut out = Vec::with_capacity(ELEMENT_COUNT);
        for copy in 0..2 {
            let base = self.offset + copy as f32 * PERIOD;
            for el in &self.elements {
                let rect = Rect::new(base + el.x, el.y + self.y_offset, el.width, el.height);
                if rect.right() > 0.0 && rect.x < view_width {
                    out.push(rect);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn layer(scroll_factor: f32) -> ParallaxLayer {
        let mut rng = Pcg32::seed_from_u64(7);
        ParallaxLayer::new(&mut rng, scroll_factor, [0xc0, 0xc0, 0xc0, 0xff], 0.0)
    }

    #[test]
    fn test_elements_are_generated_in_range() {
        let l = layer(0.3);
        assert_eq!(l.elements.len(), ELEMENT_COUNT);
        for (i, el) in l.elements.iter().enumerate() {
            assert_eq!(el.x, i as f32 * ELEMENT_SPACING);
            assert!((100.0..300.0).contains(&el.y));
            assert!((60.0..140.0).contains(&el.width));
            assert!((150.0..350.0).contains(&el.height));
        }
    }

    #[test]
    fn test_scroll_uses_factor() {
        let mut l = layer(0.5);
        l.scroll(10.0);
        assert_eq!(l.offset, -5.0);
    }

    #[test]
    fn test_offset_stays_within_one_period() {
        let mut l = layer(1.0);
        for _ in 0..10_000 {
            l.scroll(7.5);
            assert!(l.offset > -PERIOD && l.offset <= 0.0);
        }
    }

    #[test]
    fn test_wrap_is_seamless() {
        let mut l = layer(1.0);
        l.offset = -PERIOD + 1.0;
        l.scroll(2.0);
        // Wrapped: -PERIOD - 1 + PERIOD
        assert_eq!(l.offset, -1.0);

        // What an unwrapped strip at -PERIOD - 1 would show
        let unwrapped = -PERIOD - 1.0;
        let mut expected: Vec<Rect> = (0..3)
            .flat_map(|copy| {
                let base = unwrapped + copy as f32 * PERIOD;
                l.elements
                    .iter()
                    .map(move |el| Rect::new(base + el.x, el.y, el.width, el.height))
            })
            .filter(|r| r.right() > 0.0 && r.x < 1200.0)
            .collect();

        let mut actual = l.visible_rects(1200.0);
        let by_x = |a: &Rect, b: &Rect| a.x.total_cmp(&b.x);
        expected.sort_by(by_x);
        actual.sort_by(by_x);
        assert_eq!(actual, expected);
    }
}
