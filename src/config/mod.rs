//! Rotator configuration.
//!
//! A `RotatorConfig` names the device the interface answers to, the property
//! group its properties are shown under, and optionally overrides the
//! capabilities the driver declares.
//!
//! Validation uses Stillwater's `Validation` type so every problem is
//! reported at once instead of one per attempt.
//!
//! # Example
//!
//! ```rust
//! use rotator::config::RotatorConfig;
//!
//! let config = RotatorConfig::from_json(
//!     r#"{ "device": "Rotator Simulator", "capabilities": { "can_abort": true } }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.group, "Main Control");
//! assert!(config.capabilities.unwrap().can_abort());
//! ```

pub mod error;

pub use error::{ConfigError, ConfigViolation};

use crate::core::{Capabilities, DEFAULT_HISTORY_CAPACITY};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Property group used when none is configured.
pub const DEFAULT_GROUP: &str = "Main Control";

/// Configuration of one rotator interface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RotatorConfig {
    /// Device name commands must be addressed to
    pub device: String,

    /// Group the properties are shown under
    #[serde(default = "default_group")]
    pub group: String,

    /// Overrides the driver's declared capabilities when set
    #[serde(default)]
    pub capabilities: Option<Capabilities>,

    /// Number of property state changes kept in memory
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

fn default_group() -> String {
    DEFAULT_GROUP.to_string()
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

impl RotatorConfig {
    pub fn new(device: &str) -> Self {
        Self {
            device: device.to_string(),
            group: default_group(),
            capabilities: None,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: RotatorConfig = serde_json::from_str(text)?;
        config.check()?;
        Ok(config)
    }

    /// Validate, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        let device = self.device.trim();
        checks.push(if device.is_empty() {
            Validation::fail(ConfigViolation::BlankDevice)
        } else if device.len() != self.device.len() {
            Validation::fail(ConfigViolation::UntrimmedDevice {
                device: self.device.clone(),
            })
        } else {
            Validation::success(())
        });

        checks.push(if self.group.trim().is_empty() {
            Validation::fail(ConfigViolation::BlankGroup)
        } else {
            Validation::success(())
        });

        checks.push(if self.history_capacity == 0 {
            Validation::fail(ConfigViolation::ZeroHistoryCapacity)
        } else {
            Validation::success(())
        });

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate, collecting violations into a `ConfigError`.
    pub fn check(&self) -> Result<(), ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }
}
