//! Render preferences
//!
//! These only change how a frame is drawn, never what the simulation does.

use serde::{Deserialize, Serialize};

/// Visual detail presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Full,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Full => "Full",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "full" | "high" => Some(QualityPreset::Full),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub quality: QualityPreset,
    /// Draw the background skyline
    pub parallax: bool,
    /// Drop shadow under the grounded runner
    pub ground_shadow: bool,
    /// Outline collision hitboxes (debug)
    pub show_hitboxes: bool,
    /// Draw the flip sprite without spinning
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Full,
            parallax: true,
            ground_shadow: true,
            show_hitboxes: false,
            reduced_motion: false,
        }
    }
}

impl Settings {
    pub fn from_preset(preset: QualityPreset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    pub fn apply_preset(&mut self, preset: QualityPreset) {
        self.quality = preset;
        let full = preset == QualityPreset::Full;
        self.parallax = full;
        self.ground_shadow = full;
    }

    /// Spin angle to draw for a flip of `rotation` radians
    pub fn effective_rotation(&self, rotation: f32) -> f32 {
        if self.reduced_motion { 0.0 } else { rotation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_round_trip_names() {
        for preset in [QualityPreset::Low, QualityPreset::Full] {
            assert_eq!(QualityPreset::from_str(preset.as_str()), Some(preset));
        }
        assert_eq!(QualityPreset::from_str("ultra"), None);
    }

    #[test]
    fn test_low_preset_drops_decoration() {
        let settings = Settings::from_preset(QualityPreset::Low);
        assert!(!settings.parallax);
        assert!(!settings.ground_shadow);
        assert!(!settings.show_hitboxes);
    }

    #[test]
    fn test_reduced_motion_stops_spin() {
        let mut settings = Settings::default();
        assert_eq!(settings.effective_rotation(1.2), 1.2);
        settings.reduced_motion = true;
        assert_eq!(settings.effective_rotation(1.2), 0.0);
    }

    #[test]
    fn test_partial_json() {
        let settings: Settings = serde_json::from_str(r#"{ "show_hitboxes": true }"#).unwrap();
        assert!(settings.show_hitboxes);
        assert!(settings.parallax);
    }
}
