//! Build errors for the rotator builder.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a rotator interface.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Device name not specified. Call .device(name) or .for_host(host) before .build()")]
    MissingDevice,

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}
