//! Interaction configuration.
//!
//! Which modifier keys switch behaviors, whether scaling is proportional by
//! default, and how large handles are. Hosts load it from JSON; any field left
//! out takes its default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_CORNER_SIZE_PX;
use crate::input::ModifierKey;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config field {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(_) => "E_CONFIG_PARSE",
            Self::Invalid { .. } => "E_CONFIG_INVALID",
        }
    }
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Turns edge scaling into skewing, and scale cursors into skew cursors.
    pub alt_action_key: ModifierKey,
    /// Flips whether scale/rotate gestures pivot about the center.
    pub centered_key: ModifierKey,
    /// Flips proportional scaling on corner handles.
    pub uni_scale_key: ModifierKey,
    /// Corner handles scale proportionally unless `uni_scale_key` is held.
    pub uniform_scaling: bool,
    /// Scale gestures pivot about the center for every object.
    pub centered_scaling: bool,
    /// Rotate gestures pivot about the center for every object.
    pub centered_rotation: bool,
    /// Side of a handle's square hit area, in screen pixels.
    pub corner_size: f64,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            alt_action_key: ModifierKey::Shift,
            centered_key: ModifierKey::Alt,
            uni_scale_key: ModifierKey::Shift,
            uniform_scaling: true,
            centered_scaling: false,
            centered_rotation: false,
            corner_size: DEFAULT_CORNER_SIZE_PX,
        }
    }
}

impl ControlsConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Parse` for malformed JSON or unknown key names, and `Invalid`
    /// when the corner size is not a positive finite number.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check numeric fields.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` naming the bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.corner_size.is_finite() && self.corner_size > 0.0) {
            return Err(ConfigError::Invalid {
                field: "corner_size",
                reason: format!("must be a positive number, got {}", self.corner_size),
            });
        }
        Ok(())
    }
}
