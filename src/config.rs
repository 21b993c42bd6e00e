//! Engine configuration.
//!
//! Every field has a default, so an empty document is a valid
//! configuration:
//!
//! ```toml
//! [drag]
//! activation_distance = 5.0
//!
//! [moves]
//! apply_policy = "after_remote"
//! column_order_scope = "all"
//! compensate_partial_move = false
//! ```

use crate::drag::DEFAULT_ACTIVATION_DISTANCE;
use crate::moves::{ApplyPolicy, ColumnOrderScope};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid TOML or has fields of the wrong type.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is out of range.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        /// Offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Top-level configuration of the drag-and-drop engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Drag gesture settings.
    pub drag: DragConfig,
    /// Move execution settings.
    pub moves: MoveConfig,
}

impl EngineConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed input and
    /// [`ConfigError::InvalidValue`] for a negative or non-finite activation
    /// distance.
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a negative or non-finite
    /// activation distance.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let distance = self.drag.activation_distance;
        if !distance.is_finite() || distance < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "drag.activation_distance",
                reason: format!("expected a finite non-negative number, got {distance}"),
            });
        }
        Ok(())
    }
}

/// Drag gesture settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Pointer travel in pixels before a press becomes a drag.
    pub activation_distance: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            activation_distance: DEFAULT_ACTIVATION_DISTANCE,
        }
    }
}

/// Move execution settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveConfig {
    /// When a cross-column move touches local state.
    pub apply_policy: ApplyPolicy,
    /// Which columns get their order rewritten after a column reorder.
    pub column_order_scope: ColumnOrderScope,
    /// Delete the destination copy when the source delete of a cross-column
    /// move fails.
    pub compensate_partial_move: bool,
}
