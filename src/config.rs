//! Engine configuration: naming and transcript windows.
//!
//! Loaded from YAML the same way module definitions are. Every key is
//! optional; absent keys fall back to the defaults below. Style and pattern
//! thresholds are deliberately absent: they are fixed in
//! [`crate::cognitive::thresholds`].

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Default assistant name rendered into every system prompt.
pub const DEFAULT_ASSISTANT_NAME: &str = "MindFlow";

/// Default number of user turns between recalibrations.
pub const DEFAULT_RECALIBRATION_CADENCE: usize = 3;

/// Default number of trailing messages shown to the recalibration call.
pub const DEFAULT_RECALIBRATION_WINDOW: usize = 12;

/// Default number of trailing messages shown to the breakthrough call.
pub const DEFAULT_BREAKTHROUGH_WINDOW: usize = 10;

/// Tunables for prompt composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Persona name used in the system prompt.
    pub assistant_name: String,
    /// User turns between recalibrations. Advisory: orchestrators read it,
    /// the engine never schedules anything itself.
    pub recalibration_cadence: usize,
    /// Trailing messages included in the recalibration prompt.
    pub recalibration_window: usize,
    /// Trailing messages included in the breakthrough prompt.
    pub breakthrough_window: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            assistant_name: DEFAULT_ASSISTANT_NAME.to_string(),
            recalibration_cadence: DEFAULT_RECALIBRATION_CADENCE,
            recalibration_window: DEFAULT_RECALIBRATION_WINDOW,
            breakthrough_window: DEFAULT_BREAKTHROUGH_WINDOW,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, EngineError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a config from a YAML file on disk.
    pub fn from_yaml_file(path: impl AsRef<std::path::Path>) -> Result<Self, EngineError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String, EngineError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check that every window is usable and the name is non-empty.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.assistant_name.trim().is_empty() {
            return Err(EngineError::Validation(
                "assistant_name must not be empty".into(),
            ));
        }
        for (key, value) in [
            ("recalibration_cadence", self.recalibration_cadence),
            ("recalibration_window", self.recalibration_window),
            ("breakthrough_window", self.breakthrough_window),
        ] {
            if value == 0 {
                return Err(EngineError::Validation(format!("{key} must be at least 1")));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
