//! # Unified Configuration System
//!
//! This module consolidates the configuration structures for every subsystem into
//! a single [`ApplicationConfig`] that can be loaded from TOML or RON.
//!
//! ## Configuration Categories
//!
//! - **Engine Config**: Logging and driver behaviour
//! - **Surface Config**: Reflective ice surface tuning defaults and clear colors
//! - **Screen Config**: Gameplay screen transition and pause timing
//! - **Asset Config**: Content keys for the assets the core loads

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::{Config, ConfigError};
use crate::foundation::color::Color;

/// # Engine Configuration
///
/// Core behaviour shared by every binary built on the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
    /// Number of frames a headless driver runs before exiting
    pub frames: u32,
    /// Fixed frame rate for headless drivers
    pub target_fps: u32,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            frames: 240,
            target_fps: 60,
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Duration of one fixed frame
    pub fn frame_step(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.target_fps.max(1)))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_fps == 0 {
            return Err(ConfigError::Invalid("target_fps must be at least 1".to_string()));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Surface Configuration
///
/// Initial values and step sizes for the reflective surface shader parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Starting surface transparency in [0, 1]
    pub initial_transparency: f32,
    /// Starting reflection blur amount, never negative
    pub initial_blur_amount: f32,
    /// Starting blur mode index (0 or 1)
    pub initial_blur_mode: i32,
    /// Increment applied by one transparency step
    pub transparency_step: f32,
    /// Increment applied by one blur step
    pub blur_step: f32,
    /// Fill color of the reflection target before reflectables are drawn
    pub reflection_clear_color: Color,
    /// Color the default surface is cleared to after the reflection pass
    pub background_color: Color,
}

impl SurfaceConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.initial_transparency) {
            return Err(ConfigError::Invalid(format!(
                "initial_transparency {} is outside [0, 1]",
                self.initial_transparency
            )));
        }
        if self.initial_blur_amount < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "initial_blur_amount {} is negative",
                self.initial_blur_amount
            )));
        }
        if !(0..2).contains(&self.initial_blur_mode) {
            return Err(ConfigError::Invalid(format!(
                "initial_blur_mode {} is not 0 or 1",
                self.initial_blur_mode
            )));
        }
        if !self.initial_blur_amount.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "initial_blur_amount {} is not finite",
                self.initial_blur_amount
            )));
        }
        if !is_positive_finite(self.transparency_step) || !is_positive_finite(self.blur_step) {
            return Err(ConfigError::Invalid("surface steps must be positive and finite".to_string()));
        }
        Ok(())
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            initial_transparency: 0.8,
            initial_blur_amount: 0.001,
            initial_blur_mode: 0,
            transparency_step: 0.1,
            blur_step: 0.001,
            reflection_clear_color: Color::WHITE,
            background_color: Color::CORNFLOWER_BLUE,
        }
    }
}

/// # Screen Configuration
///
/// Timing for the gameplay screen's transitions, pause fade and activation gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Seconds to transition the screen on
    pub transition_on_secs: f32,
    /// Seconds to transition the screen off
    pub transition_off_secs: f32,
    /// Pause alpha change per frame
    pub pause_alpha_step: f32,
    /// Upper bound on the wait for content readiness after activation
    pub activation_timeout_ms: u64,
    /// Back buffer clear color before the session draws
    pub background_color: Color,
}

impl ScreenConfig {
    /// Transition-on time as a duration
    pub fn transition_on_time(&self) -> Duration {
        seconds_to_duration(self.transition_on_secs)
    }

    /// Transition-off time as a duration
    pub fn transition_off_time(&self) -> Duration {
        seconds_to_duration(self.transition_off_secs)
    }

    /// Activation timeout as a duration
    pub const fn activation_timeout(&self) -> Duration {
        Duration::from_millis(self.activation_timeout_ms)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for secs in [self.transition_on_secs, self.transition_off_secs] {
            if !secs.is_finite() || secs < 0.0 {
                return Err(ConfigError::Invalid(format!("transition time {secs} must be finite and non-negative")));
            }
        }
        if !is_positive_finite(self.pause_alpha_step) || self.pause_alpha_step > 1.0 {
            return Err(ConfigError::Invalid(format!(
                "pause_alpha_step {} is outside (0, 1]",
                self.pause_alpha_step
            )));
        }
        Ok(())
    }
}

/// Seconds to a duration; negative and NaN become zero, overflow saturates
fn seconds_to_duration(secs: f32) -> Duration {
    Duration::try_from_secs_f32(secs.max(0.0)).unwrap_or(Duration::MAX)
}

fn is_positive_finite(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            transition_on_secs: 1.5,
            transition_off_secs: 0.5,
            pause_alpha_step: 1.0 / 32.0,
            activation_timeout_ms: 1000,
            background_color: Color::CORNFLOWER_BLUE,
        }
    }
}

/// # Asset Configuration
///
/// Content keys handed to the asset loading collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Plane geometry for the ice surface
    pub surface_model: String,
    /// Effect that composites the surface with its reflection
    pub surface_effect: String,
    /// Base ice texture
    pub surface_texture: String,
    /// Font used by the gameplay screen
    pub game_font: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            surface_model: "Models/Plane2".to_string(),
            surface_effect: "Effects/IceEffect".to_string(),
            surface_texture: "Textures/IceSurface2".to_string(),
            game_font: "Fonts/GameFont".to_string(),
        }
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration that encompasses all engine subsystems.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Engine core configuration
    pub engine: EngineConfig,
    /// Reflective surface configuration
    pub surface: SurfaceConfig,
    /// Gameplay screen configuration
    pub screen: ScreenConfig,
    /// Asset keys
    pub assets: AssetConfig,
}

impl ApplicationConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;
        self.surface.validate()?;
        self.screen.validate()?;
        Ok(())
    }
}

impl Config for ApplicationConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_are_valid() {
        let config = ApplicationConfig::default();
        assert!(config.validate().is_ok());
        assert_relative_eq!(config.surface.initial_transparency, 0.8);
        assert_relative_eq!(config.screen.pause_alpha_step, 1.0 / 32.0);
        assert_eq!(config.screen.activation_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let text = r#"
            [surface]
            initial_transparency = 0.5

            [screen]
            transition_on_secs = 2.0
        "#;

        let config = ApplicationConfig::from_str_with_format(text, ConfigFormat::Toml)
            .expect("partial config should parse");

        assert_relative_eq!(config.surface.initial_transparency, 0.5);
        assert_relative_eq!(config.surface.blur_step, 0.001);
        assert_eq!(config.screen.transition_on_time(), Duration::from_secs(2));
        assert_eq!(config.assets.surface_effect, "Effects/IceEffect");
    }

    #[test]
    fn test_ron_round_trip_through_text() {
        let config = ApplicationConfig::default();
        let text = ron::ser::to_string(&config).expect("serialize");
        let parsed = ApplicationConfig::from_str_with_format(&text, ConfigFormat::Ron).expect("parse");
        assert_eq!(parsed.assets.game_font, config.assets.game_font);
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let mut config = ApplicationConfig::default();
        config.surface.initial_transparency = 1.5;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = ApplicationConfig::default();
        config.surface.initial_blur_mode = 2;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = ApplicationConfig::default();
        config.screen.pause_alpha_step = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_non_finite_screen_timing_rejected() {
        let config = ApplicationConfig::from_str_with_format("[screen]\ntransition_on_secs = inf", ConfigFormat::Toml)
            .expect("inf is valid TOML");
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        assert_eq!(config.screen.transition_on_time(), Duration::MAX);

        let config = ApplicationConfig::from_str_with_format("[screen]\npause_alpha_step = nan", ConfigFormat::Toml)
            .expect("nan is valid TOML");
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = ApplicationConfig::default();
        config.screen.transition_off_secs = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        assert_eq!(config.screen.transition_off_time(), Duration::ZERO);
    }

    #[test]
    fn test_non_finite_surface_steps_rejected() {
        let mut config = ApplicationConfig::default();
        config.surface.transparency_step = f32::INFINITY;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = ApplicationConfig::default();
        config.surface.blur_step = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = ApplicationConfig::default();
        config.surface.initial_blur_amount = f32::INFINITY;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
