//! Game balance and tuning
//!
//! Every gameplay constant lives here so hosts can tweak the feel without a
//! rebuild. Loaded from JSON; missing keys fall back to the design values in
//! `crate::consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Chain ===
    /// Head pursuit blend factor (0, 1]
    pub follow_alpha: f32,
    /// Maximum pixel gap between adjacent segments
    pub segment_gap: f32,
    /// Head radius (pixels)
    pub head_radius: f32,
    /// Tail radius (pixels, render only)
    pub tail_radius: f32,
    /// Segments in a fresh chain
    pub initial_length: usize,

    // === Apples ===
    pub apple_radius: f32,
    pub growth_per_apple: usize,
    pub score_per_apple: u64,
    /// Inset from the viewport edges for apple spawns (normalized)
    pub spawn_margin: f32,

    // === Particles ===
    pub particle_burst: usize,
    pub particle_decay: f32,
    pub particle_speed_min: f32,
    pub particle_speed_max: f32,
    pub apple_color: u32,

    // === Presentation ===
    pub pulse_rate: f32,
    pub pulse_amplitude: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            follow_alpha: FOLLOW_ALPHA,
            segment_gap: SEGMENT_GAP,
            head_radius: HEAD_RADIUS,
            tail_radius: TAIL_RADIUS,
            initial_length: INITIAL_LENGTH,

            apple_radius: APPLE_RADIUS,
            growth_per_apple: GROWTH_PER_APPLE,
            score_per_apple: SCORE_PER_APPLE,
            spawn_margin: SPAWN_MARGIN,

            particle_burst: PARTICLE_BURST,
            particle_decay: PARTICLE_DECAY,
            particle_speed_min: PARTICLE_SPEED_MIN,
            particle_speed_max: PARTICLE_SPEED_MAX,
            apple_color: APPLE_COLOR,

            pulse_rate: PULSE_RATE,
            pulse_amplitude: PULSE_AMPLITUDE,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!("Loaded tuning: {:?}", tuning);
        Ok(tuning)
    }

    /// Serialize to pretty JSON (for writing a starter tuning file)
    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would break the chain solver or spawner
    pub fn validate(&self) -> Result<(), SimError> {
        fn bad(msg: &str) -> Result<(), SimError> {
            Err(SimError::InvalidTuning(msg.to_string()))
        }

        if !(self.follow_alpha > 0.0 && self.follow_alpha <= 1.0) {
            return bad("follow_alpha must be in (0, 1]");
        }
        if !(self.segment_gap > 0.0) {
            return bad("segment_gap must be positive");
        }
        if !(self.head_radius > 0.0 && self.apple_radius > 0.0 && self.tail_radius > 0.0) {
            return bad("radii must be positive");
        }
        if self.initial_length == 0 {
            return bad("initial_length must be at least 1");
        }
        if !(self.spawn_margin >= 0.0 && self.spawn_margin < 0.5) {
            return bad("spawn_margin must be in [0, 0.5)");
        }
        if !(self.particle_decay > 0.0) {
            return bad("particle_decay must be positive");
        }
        if !(self.particle_speed_min >= 0.0 && self.particle_speed_min <= self.particle_speed_max) {
            return bad("particle speed range is inverted or negative");
        }
        if !self.pulse_rate.is_finite() || !self.pulse_amplitude.is_finite() {
            return bad("pulse values must be finite");
        }
        Ok(())
    }

    /// Contact distance between head and apple centers (pixels)
    pub fn contact_distance(&self) -> f32 {
        self.head_radius + self.apple_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
        assert_eq!(Tuning::default().contact_distance(), 34.0);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let tuning = Tuning::from_json(r#"{ "segment_gap": 14.0, "growth_per_apple": 3 }"#)
            .expect("valid tuning");
        assert_eq!(tuning.segment_gap, 14.0);
        assert_eq!(tuning.growth_per_apple, 3);
        assert_eq!(tuning.follow_alpha, FOLLOW_ALPHA);
        assert_eq!(tuning.particle_burst, PARTICLE_BURST);
    }

    #[test]
    fn test_rejects_bad_alpha() {
        let err = Tuning::from_json(r#"{ "follow_alpha": 0.0 }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidTuning(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SimError::TuningParse(_)));
    }

    #[test]
    fn test_json_round_trip_keeps_values() {
        let mut tuning = Tuning::default();
        tuning.score_per_apple = 25;
        let json = tuning.to_json().expect("serialize");
        assert_eq!(Tuning::from_json(&json).expect("parse"), tuning);
    }
}
