use std::fs;
use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::brush::BrushColor;
use crate::error::{PaintError, PaintResult};
use crate::session::RenderMode;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "MINI_PAINT_CONFIG";

/// Start-up settings. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    pub title: String,
    pub canvas_width: usize,
    pub canvas_height: usize,
    pub background: BrushColor,
    pub initial_color: BrushColor,
    pub initial_radius: i32,
    pub min_radius: i32,
    pub max_radius: i32,
    pub radius_step: i32,
    /// Minimum seconds between texture uploads
    pub frame_interval_secs: f64,
    pub render_mode: RenderMode,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            title: "Mini-Paint".to_owned(),
            canvas_width: 1280,
            canvas_height: 720,
            background: BrushColor::White,
            initial_color: BrushColor::Black,
            initial_radius: 5,
            min_radius: 3,
            max_radius: 15,
            radius_step: 2,
            frame_interval_secs: 0.0111,
            render_mode: RenderMode::Replay,
        }
    }
}

impl PaintConfig {
    pub fn from_json_str(json: &str) -> PaintResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> PaintResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load from the file named by [`CONFIG_ENV_VAR`], or defaults if unset.
    pub fn from_env() -> PaintResult<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                log::info!("Loading config from {}", Path::new(&path).display());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> PaintResult<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(PaintError::InvalidConfig(format!(
                "canvas must not be empty: {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if self.min_radius < 1 || self.min_radius > self.max_radius {
            return Err(PaintError::InvalidConfig(format!(
                "radius range {}..={} is empty",
                self.min_radius, self.max_radius
            )));
        }
        if self.radius_step < 1 {
            return Err(PaintError::InvalidConfig(format!(
                "radius step must be positive, got {}",
                self.radius_step
            )));
        }
        if !(self.min_radius..=self.max_radius).contains(&self.initial_radius) {
            return Err(PaintError::InvalidConfig(format!(
                "initial radius {} outside {}..={}",
                self.initial_radius, self.min_radius, self.max_radius
            )));
        }
        if !self.frame_interval_secs.is_finite() || self.frame_interval_secs < 0.0 {
            return Err(PaintError::InvalidConfig(format!(
                "frame interval must be a non-negative number of seconds, got {}",
                self.frame_interval_secs
            )));
        }
        Ok(())
    }

    pub fn background_color(&self) -> Color32 {
        self.background.color32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = PaintConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!((config.canvas_width, config.canvas_height), (1280, 720));
        assert_eq!(config.background_color(), Color32::WHITE);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PaintConfig::from_json_str(r#"{ "canvas_width": 320, "initial_color": "Red" }"#).unwrap();
        assert_eq!(config.canvas_width, 320);
        assert_eq!(config.canvas_height, 720);
        assert_eq!(config.initial_color, BrushColor::Red);
        assert_eq!(config.render_mode, RenderMode::Replay);
    }

    #[test]
    fn test_render_mode_from_json() {
        let config = PaintConfig::from_json_str(r#"{ "render_mode": "Overpaint" }"#).unwrap();
        assert_eq!(config.render_mode, RenderMode::Overpaint);
    }

    #[test]
    fn test_invalid_configs_are_rejected() {
        for json in [
            r#"{ "canvas_width": 0 }"#,
            r#"{ "min_radius": 9, "max_radius": 3 }"#,
            r#"{ "radius_step": 0 }"#,
            r#"{ "initial_radius": 99 }"#,
            r#"{ "frame_interval_secs": -1.0 }"#,
        ] {
            assert!(
                matches!(PaintConfig::from_json_str(json), Err(PaintError::InvalidConfig(_))),
                "accepted {json}"
            );
        }
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            PaintConfig::from_json_str("{ not json"),
            Err(PaintError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            PaintConfig::load("/definitely/not/here/mini_paint.json"),
            Err(PaintError::Io(_))
        ));
    }
}
