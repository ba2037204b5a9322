//! Configuration for the lissajous viewer.
//!
//! Read from `$CONFIG_DIR/lissajous/config.yaml`. Every key is optional;
//! a missing or broken file means defaults. Curve values here are only the
//! starting point of a session and are never written back.

use crate::curve::CurveParameters;
use crate::error::{LissajousError, Result};
use crate::render::DEFAULT_GLYPH;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Initial curve parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Initial x frequency.
    #[serde(default = "default_a")]
    pub a: f64,

    /// Initial y frequency.
    #[serde(default = "default_b")]
    pub b: f64,

    /// Initial phase offset; wrapped into `[0, 2π)` on startup.
    #[serde(default)]
    pub delta: f64,
}

fn default_a() -> f64 {
    2.0
}
fn default_b() -> f64 {
    3.0
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self { a: default_a(), b: default_b(), delta: 0.0 }
    }
}

/// Step sizes applied per key press.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlsConfig {
    /// Change to `a` or `b` per `A`/`a`/`B`/`b` press.
    #[serde(default = "default_frequency_step")]
    pub frequency_step: f64,

    /// Change to `delta` per `+`/`-` press.
    #[serde(default = "default_phase_step")]
    pub phase_step: f64,
}

fn default_frequency_step() -> f64 {
    1.0
}
fn default_phase_step() -> f64 {
    0.025
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self { frequency_step: default_frequency_step(), phase_step: default_phase_step() }
    }
}

/// Drawing and polling settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Character plotted for each curve point.
    #[serde(default = "default_glyph")]
    pub glyph: char,

    /// Sleep between input polls when no key is waiting, in microseconds.
    #[serde(default = "default_idle_sleep_us")]
    pub idle_sleep_us: u64,

    /// Seed for the point color generator. Unset means a fresh seed per run.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_glyph() -> char {
    DEFAULT_GLYPH
}
fn default_idle_sleep_us() -> u64 {
    100
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { glyph: default_glyph(), idle_sleep_us: default_idle_sleep_us(), seed: None }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Initial curve.
    #[serde(default)]
    pub curve: CurveConfig,

    /// Key step sizes.
    #[serde(default)]
    pub controls: ControlsConfig,

    /// Drawing and polling.
    #[serde(default)]
    pub render: RenderConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            curve: CurveConfig::default(),
            controls: ControlsConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location: `$CONFIG_DIR/lissajous/config.yaml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lissajous").join("config.yaml"))
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| LissajousError::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses and validates configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            LissajousError::ConfigParse { line, message: e.to_string() }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values the controller cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`LissajousError::ConfigInvalid`] naming the offending key.
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("curve.a", self.curve.a),
            ("curve.b", self.curve.b),
            ("curve.delta", self.curve.delta),
            ("controls.frequency_step", self.controls.frequency_step),
            ("controls.phase_step", self.controls.phase_step),
        ];
        for (key, value) in finite {
            if !value.is_finite() {
                return Err(invalid(key, "must be a finite number"));
            }
        }

        if self.controls.frequency_step == 0.0 {
            return Err(invalid("controls.frequency_step", "must be non-zero"));
        }
        if self.controls.phase_step == 0.0 {
            return Err(invalid("controls.phase_step", "must be non-zero"));
        }
        if self.render.glyph.is_control() || self.render.glyph.is_whitespace() {
            return Err(invalid("render.glyph", "must be a visible character"));
        }

        Ok(())
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                crate::info!("config", "loaded {}", path.display());
                config
            }
            Err(e) => {
                crate::warn!("config", "using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Starting parameters, phase already wrapped.
    #[must_use]
    pub fn initial_parameters(&self) -> CurveParameters {
        CurveParameters::new(self.curve.a, self.curve.b, self.curve.delta).normalized()
    }

    /// Sleep between empty input polls.
    #[must_use]
    pub fn idle_sleep(&self) -> Duration {
        Duration::from_micros(self.render.idle_sleep_us)
    }
}

fn invalid(key: &str, message: &str) -> LissajousError {
    LissajousError::ConfigInvalid { key: key.to_string(), message: message.to_string() }
}
