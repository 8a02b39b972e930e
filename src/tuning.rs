//! Game balance constants
//!
//! Every number that shapes how a run plays lives here so it can be
//! overridden from JSON without touching the simulation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to load a [`Tuning`] override
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Gameplay balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Vertical velocity applied by a ground jump (negative is up)
    pub jump_velocity: f32,
    /// Vertical velocity applied by the airborne flip
    pub double_jump_velocity: f32,
    /// Flip rotation per tick (radians)
    pub flip_spin: f32,
    /// Minimum fall speed while holding down in the air
    pub fast_fall_speed: f32,
    /// How far below the ground line the feet may be and still land
    pub landing_tolerance: f32,

    // === Speed ramp / score ===
    pub base_speed: f32,
    pub speed_step: f32,
    /// Ticks between speed increases
    pub speed_interval: u64,
    /// Ticks per point of distance
    pub ticks_per_point: u64,

    // === World generation ===
    /// Live platforms kept in the world at all times
    pub min_platforms: usize,
    pub gap_chance: f64,
    pub gap_min: f32,
    pub gap_max: f32,
    pub platform_width_min: f32,
    pub platform_width_max: f32,
    /// Per-tick obstacle spawn probability
    pub obstacle_chance: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.8,
            jump_velocity: -16.0,
            double_jump_velocity: -14.0,
            flip_spin: 0.3,
            fast_fall_speed: 8.0,
            landing_tolerance: 20.0,

            base_speed: 6.0,
            speed_step: 0.5,
            speed_interval: 300,
            ticks_per_point: 10,

            min_platforms: 5,
            gap_chance: 0.3,
            gap_min: 100.0,
            gap_max: 200.0,
            platform_width_min: 200.0,
            platform_width_max: 400.0,
            obstacle_chance: 0.02,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// A world with no gaps and no obstacles, for attract screens and tests
    pub fn flat_and_empty() -> Self {
        Self {
            gap_chance: 0.0,
            obstacle_chance: 0.0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        if !(self.gravity > 0.0) {
            return invalid("gravity", "must be positive");
        }
        if !(self.jump_velocity < 0.0) {
            return invalid("jump_velocity", "must point upward (negative)");
        }
        if !(self.double_jump_velocity < 0.0) {
            return invalid("double_jump_velocity", "must point upward (negative)");
        }
        if self.landing_tolerance < 0.0 {
            return invalid("landing_tolerance", "must not be negative");
        }
        if self.speed_interval == 0 {
            return invalid("speed_interval", "must be at least one tick");
        }
        if self.ticks_per_point == 0 {
            return invalid("ticks_per_point", "must be at least one tick");
        }
        if self.min_platforms == 0 {
            return invalid("min_platforms", "the world needs at least one platform");
        }
        if !(0.0..=1.0).contains(&self.gap_chance) {
            return invalid("gap_chance", "must be a probability");
        }
        if !(0.0..=1.0).contains(&self.obstacle_chance) {
            return invalid("obstacle_chance", "must be a probability");
        }
        if !(self.gap_min < self.gap_max) {
            return invalid("gap_min", "must be below gap_max");
        }
        if !(0.0 < self.platform_width_min && self.platform_width_min < self.platform_width_max) {
            return invalid("platform_width_min", "must be positive and below platform_width_max");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
        assert!(Tuning::flat_and_empty().validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "base_speed": 8.0, "obstacle_chance": 0.05 }"#)
            .expect("valid override");
        assert_eq!(tuning.base_speed, 8.0);
        assert_eq!(tuning.obstacle_chance, 0.05);
        assert_eq!(tuning.gravity, 0.8);
        assert_eq!(tuning.min_platforms, 5);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Tuning::from_json("{ base_speed: ").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let err = Tuning::from_json(r#"{ "gap_chance": 1.5 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "gap_chance", .. }));

        let err = Tuning::from_json(r#"{ "speed_interval": 0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "speed_interval", .. }));

        let err = Tuning::from_json(r#"{ "jump_velocity": 16.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "jump_velocity", .. }));
    }
}
