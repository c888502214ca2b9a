//! Builder for constructing rotator interfaces.

use crate::builder::error::BuildError;
use crate::config::{RotatorConfig, DEFAULT_GROUP};
use crate::core::{Capabilities, DEFAULT_HISTORY_CAPACITY};
use crate::effects::{PropertyHost, RotatorDriver};
use crate::interface::RotatorInterface;
use tracing::debug;

/// Builder for a [`RotatorInterface`] with a fluent API.
pub struct RotatorBuilder<D: RotatorDriver> {
    driver: D,
    device: Option<String>,
    group: Option<String>,
    capabilities: Option<Capabilities>,
    history_capacity: usize,
}

impl<D: RotatorDriver> RotatorBuilder<D> {
    /// Create a new builder around the concrete driver.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            device: None,
            group: None,
            capabilities: None,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }

    /// Set the device name commands must be addressed to (required).
    pub fn device(mut self, name: &str) -> Self {
        self.device = Some(name.to_string());
        self
    }

    /// Take the device name from the host.
    pub fn for_host<H: PropertyHost + ?Sized>(self, host: &H) -> Self {
        let name = host.device_name().to_string();
        self.device(&name)
    }

    /// Set the property group (defaults to "Main Control").
    pub fn group(mut self, group: &str) -> Self {
        self.group = Some(group.to_string());
        self
    }

    /// Override the capabilities declared by the driver.
    pub fn capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = Some(capabilities);
        self
    }

    /// Set how many property state changes are kept.
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Apply every field of a configuration.
    pub fn config(mut self, config: RotatorConfig) -> Self {
        self.device = Some(config.device);
        self.group = Some(config.group);
        self.capabilities = config.capabilities;
        self.history_capacity = config.history_capacity;
        self
    }

    /// Build the interface.
    /// Returns an error if the device is missing or the configuration is invalid.
    pub fn build(self) -> Result<RotatorInterface<D>, BuildError> {
        let device = self.device.ok_or(BuildError::MissingDevice)?;

        let config = RotatorConfig {
            device,
            group: self.group.unwrap_or_else(|| DEFAULT_GROUP.to_string()),
            capabilities: self.capabilities,
            history_capacity: self.history_capacity,
        };
        config.check()?;

        let capabilities = config
            .capabilities
            .unwrap_or_else(|| self.driver.capabilities());
        debug!(
            device = %config.device,
            group = %config.group,
            ?capabilities,
            "Rotator interface initialized"
        );

        Ok(RotatorInterface::from_parts(self.driver, config, capabilities))
    }
}
