//! Data-driven gameplay tuning
//!
//! Every gameplay constant the simulation reads lives here. Overrides are
//! validated up front and only take effect at the next round reset, so a
//! running round never sees its physics change underneath it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a tuning override is rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    #[error("{field} must be > 0 (got {value})")]
    NonPositive { field: &'static str, value: f32 },

    #[error("lift must point upward (negative), got {0}")]
    LiftNotUpward(f32),

    #[error("spawn_period must be at least one frame")]
    ZeroSpawnPeriod,

    #[error("gap top range [{min}, {max}) is empty")]
    EmptyGapRange { min: f32, max: f32 },

    #[error("gap [{top}, {bottom}] does not fit inside play height {height}")]
    GapOutOfBounds { top: f32, bottom: f32, height: f32 },

    #[error("body start y {y} is outside the play area [0, {height}]")]
    StartOutOfBounds { y: f32, height: f32 },
}

/// Gameplay constants for one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub play_width: f32,
    pub play_height: f32,

    pub body_x: f32,
    pub body_start_y: f32,
    pub body_radius: f32,
    pub gravity: f32,
    pub lift: f32,

    pub hover_period_divisor: f32,
    pub hover_amplitude: f32,

    pub obstacle_width: f32,
    pub obstacle_speed: f32,
    pub gap_height: f32,
    pub gap_top_min: f32,
    pub gap_top_max: f32,
    pub spawn_period: u64,

    pub score_cap: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            play_width: PLAY_WIDTH,
            play_height: PLAY_HEIGHT,
            body_x: BODY_X,
            body_start_y: BODY_START_Y,
            body_radius: BODY_RADIUS,
            gravity: GRAVITY,
            lift: LIFT,
            hover_period_divisor: HOVER_PERIOD_DIVISOR,
            hover_amplitude: HOVER_AMPLITUDE,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_speed: OBSTACLE_SPEED,
            gap_height: GAP_HEIGHT,
            gap_top_min: GAP_TOP_MIN,
            gap_top_max: GAP_TOP_MAX,
            spawn_period: SPAWN_PERIOD,
            score_cap: SCORE_CAP,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every invariant the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        let floats = [
            ("play_width", self.play_width),
            ("play_height", self.play_height),
            ("body_x", self.body_x),
            ("body_start_y", self.body_start_y),
            ("body_radius", self.body_radius),
            ("gravity", self.gravity),
            ("lift", self.lift),
            ("hover_period_divisor", self.hover_period_divisor),
            ("hover_amplitude", self.hover_amplitude),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_speed", self.obstacle_speed),
            ("gap_height", self.gap_height),
            ("gap_top_min", self.gap_top_min),
            ("gap_top_max", self.gap_top_max),
        ];
        for (field, value) in floats {
            if !value.is_finite() {
                return Err(TuningError::NonFinite { field });
            }
        }

        let positives = [
            ("play_width", self.play_width),
            ("play_height", self.play_height),
            ("body_radius", self.body_radius),
            ("hover_period_divisor", self.hover_period_divisor),
            ("obstacle_width", self.obstacle_width),
            // Obstacles must move left every frame or they are never purged
            ("obstacle_speed", self.obstacle_speed),
            ("gap_height", self.gap_height),
        ];
        for (field, value) in positives {
            if value <= 0.0 {
                return Err(TuningError::NonPositive { field, value });
            }
        }

        if self.lift >= 0.0 {
            return Err(TuningError::LiftNotUpward(self.lift));
        }
        if self.spawn_period == 0 {
            return Err(TuningError::ZeroSpawnPeriod);
        }
        if self.gap_top_min >= self.gap_top_max {
            return Err(TuningError::EmptyGapRange {
                min: self.gap_top_min,
                max: self.gap_top_max,
            });
        }

        // Worst case: top drawn just under gap_top_max
        let bottom = self.gap_top_max + self.gap_height;
        if self.gap_top_min < 0.0 || bottom > self.play_height {
            return Err(TuningError::GapOutOfBounds {
                top: self.gap_top_min,
                bottom,
                height: self.play_height,
            });
        }

        if !(0.0..=self.play_height).contains(&self.body_start_y) {
            return Err(TuningError::StartOutOfBounds {
                y: self.body_start_y,
                height: self.play_height,
            });
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
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.5, "spawn_period": 90 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.5);
        assert_eq!(tuning.spawn_period, 90);
        assert_eq!(tuning.lift, LIFT);
        assert_eq!(tuning.gap_height, GAP_HEIGHT);
    }

    #[test]
    fn test_rejects_bad_overrides() {
        assert!(matches!(
            Tuning::from_json(r#"{ "spawn_period": 0 }"#),
            Err(TuningError::ZeroSpawnPeriod)
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "lift": 3.0 }"#),
            Err(TuningError::LiftNotUpward(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "gap_top_min": 300, "gap_top_max": 300 }"#),
            Err(TuningError::EmptyGapRange { .. })
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "gap_height": 500 }"#),
            Err(TuningError::GapOutOfBounds { .. })
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "obstacle_speed": 0 }"#),
            Err(TuningError::NonPositive { field: "obstacle_speed", .. })
        ));
        assert!(matches!(
            Tuning::from_json("not json"),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning {
            gravity: 0.4,
            ..Default::default()
        };
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }
}
