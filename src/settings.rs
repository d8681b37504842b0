//! Game settings
//!
//! Defaults come from [`crate::consts`]. A JSON file can override any subset
//! of fields; missing fields keep their defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::sim::{ClampPolicy, ExplosionTiming, Rect, TurnInterval};

/// Upper bound accepted for `target_fps`
pub const MAX_TARGET_FPS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Creeps ===
    pub creep_count: usize,
    /// px/ms at the start of a run
    pub creep_base_speed: f32,
    /// px/ms added per full difficulty interval survived
    pub creep_speed_increment: f32,
    pub difficulty_interval_ms: f32,
    pub turn_interval: TurnInterval,
    /// Minimum spawn distance from the field edge
    pub spawn_margin: i32,

    // === Player ===
    /// px per step while a direction is held
    pub player_speed: f32,
    pub player_start: Vec2,

    // === Simulation ===
    pub explosion: ExplosionTiming,
    pub clamp_policy: ClampPolicy,
    pub target_fps: u32,
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            creep_count: N_CREEPS,
            creep_base_speed: CREEP_BASE_SPEED,
            creep_speed_increment: CREEP_SPEED_INCREMENT,
            difficulty_interval_ms: DIFFICULTY_INTERVAL_MS,
            turn_interval: TurnInterval::default(),
            spawn_margin: SPAWN_MARGIN,

            player_speed: PLAYER_SPEED,
            player_start: Vec2::new(PLAYER_START_X, PLAYER_START_Y),

            explosion: ExplosionTiming::default(),
            clamp_policy: ClampPolicy::default(),
            target_fps: TARGET_FPS,
            seed: None,
        }
    }
}

impl Settings {
    /// Playing field rectangle
    pub fn field(&self) -> Rect {
        Rect::from_size(self.field_width, self.field_height)
    }

    /// Creep speed after surviving `elapsed_play_ms`: a step function that
    /// only ever goes up.
    pub fn creep_speed_for(&self, elapsed_play_ms: f64) -> f32 {
        let bumps = (elapsed_play_ms / self.difficulty_interval_ms as f64).floor().max(0.0);
        self.creep_base_speed + bumps as f32 * self.creep_speed_increment
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<()> {
        if !(self.field_width > 0.0 && self.field_height > 0.0) {
            return Err(Error::InvalidSettings(format!(
                "field must be non-empty, got {}x{}",
                self.field_width, self.field_height
            )));
        }
        if self.turn_interval.min_ms >= self.turn_interval.max_ms {
            return Err(Error::InvalidSettings(format!(
                "turn interval [{}, {}) is empty",
                self.turn_interval.min_ms, self.turn_interval.max_ms
            )));
        }
        if !(self.difficulty_interval_ms > 0.0) {
            return Err(Error::InvalidSettings(
                "difficulty interval must be positive".to_string(),
            ));
        }
        if self.creep_base_speed < 0.0 || self.creep_speed_increment < 0.0 || self.player_speed < 0.0 {
            return Err(Error::InvalidSettings("speeds must not be negative".to_string()));
        }
        if self.target_fps == 0 || self.target_fps > MAX_TARGET_FPS {
            return Err(Error::InvalidSettings(format!(
                "target fps must be in 1..={}, got {}",
                MAX_TARGET_FPS, self.target_fps
            )));
        }
        if !(self.explosion.scroll_period_ms.is_finite() && self.explosion.scroll_period_ms > 0.0) {
            return Err(Error::InvalidSettings(
                "explosion scroll period must be positive".to_string(),
            ));
        }
        if !self.explosion.duration_ms.is_finite() {
            return Err(Error::InvalidSettings(
                "explosion duration must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.field(), Rect::from_size(920.0, 540.0));
        assert_eq!(settings.creep_count, 70);
    }

    #[test]
    fn test_difficulty_steps_every_ten_seconds() {
        let settings = Settings::default();
        let base = settings.creep_base_speed;
        let inc = settings.creep_speed_increment;
        assert_eq!(settings.creep_speed_for(0.0), base);
        assert_eq!(settings.creep_speed_for(9_999.0), base);
        assert!((settings.creep_speed_for(10_000.0) - (base + inc)).abs() < 1e-6);
        assert!((settings.creep_speed_for(25_000.0) - (base + 2.0 * inc)).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "creep_count": 3, "seed": 9 }"#).unwrap();
        assert_eq!(settings.creep_count, 3);
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.field_width, FIELD_WIDTH);
        assert_eq!(settings.clamp_policy, ClampPolicy::FirstViolation);
    }

    #[test]
    fn test_policy_from_json() {
        let settings = Settings::from_json(r#"{ "clamp_policy": "PerAxis" }"#).unwrap();
        assert_eq!(settings.clamp_policy, ClampPolicy::PerAxis);
    }

    #[test]
    fn test_rejects_empty_turn_interval() {
        let err = Settings::from_json(r#"{ "turn_interval": { "min_ms": 10, "max_ms": 10 } }"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidSettings(_)));
    }

    #[test]
    fn test_rejects_out_of_range_fps() {
        let err = Settings::from_json(r#"{ "target_fps": 4294967295 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidSettings(_)));
        assert!(Settings::from_json(r#"{ "target_fps": 1000 }"#).is_ok());
    }

    #[test]
    fn test_rejects_bad_explosion_timing() {
        let zero = r#"{ "explosion": { "scroll_period_ms": 0.0, "duration_ms": 100.0 } }"#;
        assert!(matches!(Settings::from_json(zero), Err(Error::InvalidSettings(_))));

        // Negative duration is the "never expires" marker and stays valid
        let endless = r#"{ "explosion": { "scroll_period_ms": 400.0, "duration_ms": -1.0 } }"#;
        assert!(Settings::from_json(endless).is_ok());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(Error::SettingsParse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load("/nonexistent/creep-dodge.json").unwrap_err();
        assert!(matches!(err, Error::SettingsIo { .. }));
    }
}
