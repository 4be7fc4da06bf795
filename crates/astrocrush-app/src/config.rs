//! Application configuration, read from an optional JSON file.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use astrocrush_core::constants::TICK_RATE;
use astrocrush_core::enums::Difficulty;
use astrocrush_sim::SimConfig;

/// Everything the binary needs to drive a session. Missing fields take
/// their defaults, so `{}` is a valid file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sim: SimConfig,
    /// Frame clock rate of the game loop.
    pub frame_rate_hz: u32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Difficulty of the demo session started by the binary.
    pub difficulty: Difficulty,
    pub muted: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            frame_rate_hz: TICK_RATE,
            viewport_width: 1280.0,
            viewport_height: 720.0,
            difficulty: Difficulty::default(),
            muted: false,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.sim.validate()?;
        if self.frame_rate_hz == 0 || self.frame_rate_hz > 1000 {
            return Err("frame_rate_hz must be in 1..=1000".to_string());
        }
        if !self.viewport_width.is_finite() || self.viewport_width <= 0.0 {
            return Err("viewport_width must be finite and > 0".to_string());
        }
        if !self.viewport_height.is_finite() || self.viewport_height <= 0.0 {
            return Err("viewport_height must be finite and > 0".to_string());
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON text.
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let config: AppConfig = serde_json::from_str(text).context("malformed config JSON")?;
        config.validate().map_err(anyhow::Error::msg)?;
        Ok(config)
    }

    /// Load from `path`, or use the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("loading config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_json_gives_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config.frame_rate_hz, TICK_RATE);
        assert_eq!(config.sim.seed, 42);
        assert_eq!(config.sim.num_targets, 55);
        assert!(!config.muted);
    }

    #[test]
    fn partial_json_overrides_fields() {
        let config = AppConfig::from_json(
            r#"{ "difficulty": "Hard", "muted": true, "sim": { "seed": 7, "wall_impacts": true } }"#,
        )
        .unwrap();
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert!(config.muted);
        assert_eq!(config.sim.seed, 7);
        assert!(config.sim.wall_impacts);
        assert_eq!(config.sim.session_secs, 60);
    }

    #[test]
    fn zero_frame_rate_invalid() {
        let config = AppConfig {
            frame_rate_hz: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert!(AppConfig::from_json(r#"{ "frame_rate_hz": 0 }"#).is_err());
    }

    #[test]
    fn invalid_sim_section_rejected() {
        assert!(AppConfig::from_json(r#"{ "sim": { "session_secs": 0 } }"#).is_err());
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(AppConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = Path::new("/definitely/not/here/astrocrush.json");
        assert!(AppConfig::load(Some(path)).is_err());
        assert!(AppConfig::load(None).is_ok());
    }
}
