//! Recording draw sink
//!
//! Captures draw calls instead of rasterizing them. Used by tests and the
//! headless demo.

use std::collections::HashSet;

use glam::Vec2;

use super::sink::{Asset, Color, DrawSink, TextStyle};
use crate::sim::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        rect: Rect,
        color: Color,
    },
    RotatedRect {
        rect: Rect,
        rotation: f32,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Text {
        text: String,
        anchor: Vec2,
        style: TextStyle,
        color: Color,
    },
    Sprite {
        asset: Asset,
        rect: Rect,
        rotation: f32,
    },
}

#[derive(Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
    loaded: HashSet<Asset>,
}

impl DrawList {
    /// A list with no sprites available; everything falls back
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_assets(assets: impl IntoIterator<Item = Asset>) -> Self {
        Self {
            commands: Vec::new(),
            loaded: assets.into_iter().collect(),
        }
    }

    pub fn mark_loaded(&mut self, asset: Asset) {
        self.loaded.insert(asset);
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn sprites(&self) -> impl Iterator<Item = (Asset, Rect)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Sprite { asset, rect, .. } => Some((*asset, *rect)),
            _ => None,
        })
    }

    pub fn filled_rects(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect { rect, color } => Some((*rect, *color)),
            _ => None,
        })
    }
}

impl DrawSink for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn fill_rotated_rect(&mut self, rect: Rect, rotation: f32, color: Color) {
        self.commands.push(DrawCommand::RotatedRect {
            rect,
            rotation,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, anchor: Vec2, style: TextStyle, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            anchor,
            style,
            color,
        });
    }

    fn try_draw_asset(&mut self, asset: Asset, rect: Rect, rotation: f32) -> bool {
        if !self.loaded.contains(&asset) {
            return false;
        }
        self.commands.push(DrawCommand::Sprite {
            asset,
            rect,
            rotation,
        });
        true
    }
}
