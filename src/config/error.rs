//! Configuration errors.

use thiserror::Error;

/// A single problem found while validating a configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Device name is blank")]
    BlankDevice,

    #[error("Device name '{device}' has leading or trailing whitespace")]
    UntrimmedDevice { device: String },

    #[error("Property group is blank")]
    BlankGroup,

    #[error("History capacity must be at least 1")]
    ZeroHistoryCapacity,
}

/// Errors that can occur when loading a rotator configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for a `RotatorConfig`
    #[error("Failed to parse rotator configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Every violation found, in check order
    #[error("Invalid rotator configuration: {}", join(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn join(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
