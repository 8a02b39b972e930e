//! Drawing primitives the host must provide

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Rect;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const RED: Color = Color::rgb(0xff, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string, e.g. `rgba(255, 0, 0, 1.000)`
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.r,
            self.g,
            self.b,
            self.a as f32 / 255.0
        )
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

/// Sprite images the renderer may ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Asset {
    Run1,
    Run2,
    Jump,
    Sliding,
    /// Double-jump (flip) sprite
    WJump,
    ObstacleJump,
    ObstacleDuck,
}

impl Asset {
    pub const ALL: [Asset; 7] = [
        Asset::Run1,
        Asset::Run2,
        Asset::Jump,
        Asset::Sliding,
        Asset::WJump,
        Asset::ObstacleJump,
        Asset::ObstacleDuck,
    ];

    /// Image file the host loads for this sprite
    pub fn file_name(&self) -> &'static str {
        match self {
            Asset::Run1 => "Run1.png",
            Asset::Run2 => "Run2.png",
            Asset::Jump => "jump.png",
            Asset::Sliding => "Sliding.png",
            Asset::WJump => "wjump.png",
            Asset::ObstacleJump => "obstacle_jump.png",
            Asset::ObstacleDuck => "obstacle_duck.png",
        }
    }
}

/// Text size and weight. Text is always centered on its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub size: f32,
    pub bold: bool,
}

impl TextStyle {
    pub const fn new(size: f32, bold: bool) -> Self {
        Self { size, bold }
    }

    /// CSS font shorthand
    pub fn to_css(&self) -> String {
        let weight = if self.bold { "bold " } else { "" };
        format!("{}{}px Courier New", weight, self.size)
    }
}

/// Rendering backend
///
/// Rotations are in radians, clockwise on screen, about the rect center.
pub trait DrawSink {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn fill_rotated_rect(&mut self, rect: Rect, rotation: f32, color: Color);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn fill_text(&mut self, text: &str, anchor: Vec2, style: TextStyle, color: Color);

    /// Draw a sprite into `rect` if it is ready. Returns false (and draws
    /// nothing) when the image is unavailable, so the caller can fall back.
    fn try_draw_asset(&mut self, asset: Asset, rect: Rect, rotation: f32) -> bool;

    fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color) {
        let tl = Vec2::new(rect.x, rect.y);
        let tr = Vec2::new(rect.right(), rect.y);
        let br = Vec2::new(rect.right(), rect.bottom());
        let bl = Vec2::new(rect.x, rect.bottom());
        self.stroke_line(tl, tr, width, color);
        self.stroke_line(tr, br, width, color);
        self.stroke_line(br, bl, width, color);
        self.stroke_line(bl, tl, width, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_strings() {
        assert_eq!(Color::RED.to_css(), "rgba(255, 0, 0, 1.000)");
        assert_eq!(
            Color::rgba(0, 0, 0, 0).to_css(),
            "rgba(0, 0, 0, 0.000)"
        );
        assert_eq!(TextStyle::new(60.0, true).to_css(), "bold 60px Courier New");
        assert_eq!(TextStyle::new(20.0, false).to_css(), "20px Courier New");
    }
}
