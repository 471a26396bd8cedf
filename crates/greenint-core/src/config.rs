use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_DECIMALS, DEFAULT_DISPLAY_STEP, DEFAULT_DISPLAY_X_EXTENSION, DEFAULT_STEP,
};
use crate::error::{GreenError, Result};

/// Grid resolution and result formatting for the integration engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationConfig {
    /// Cell side for both axes. Smaller is more accurate and quadratically
    /// slower.
    pub step: f64,
    /// Digits the result is rounded to.
    pub decimals: u32,
    pub display: DisplayConfig,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            decimals: DEFAULT_DECIMALS,
            display: DisplayConfig::default(),
        }
    }
}

/// Resampling of boundary curves for charts, independent of `step`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub step: f64,
    /// How far past `x_max` the curves are drawn.
    pub x_extension: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_DISPLAY_STEP,
            x_extension: DEFAULT_DISPLAY_X_EXTENSION,
        }
    }
}

impl IntegrationConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(GreenError::InvalidStep(self.step));
        }
        if self.decimals > 15 {
            return Err(GreenError::Config(format!(
                "decimals must be at most 15, got {}",
                self.decimals
            )));
        }
        if !(self.display.step.is_finite() && self.display.step > 0.0) {
            return Err(GreenError::Config(format!(
                "display step must be positive, got {}",
                self.display.step
            )));
        }
        if !(self.display.x_extension.is_finite() && self.display.x_extension >= 0.0) {
            return Err(GreenError::Config(format!(
                "display x_extension must be non-negative, got {}",
                self.display.x_extension
            )));
        }
        Ok(())
    }

    /// Parse and validate a TOML config.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| GreenError::Config(e.to_string()))
    }
}
