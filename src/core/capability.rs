//! Capability gate for optional rotator operations.
//!
//! A rotator always supports absolute moves in ticks and degrees. Syncing,
//! homing and aborting are optional; a driver declares which of them its
//! hardware supports once, at setup, and the flags never change afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Optional rotator operation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Capability {
    Sync,
    Home,
    Abort,
}

impl Capability {
    /// All optional capabilities, in registration order.
    pub const ALL: [Capability; 3] = [Capability::Abort, Capability::Sync, Capability::Home];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sync => "sync",
            Self::Home => "home",
            Self::Abort => "abort",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capability flags declared by a concrete driver.
///
/// Pure and read-only once constructed. Missing fields deserialize as
/// unsupported.
///
/// # Example
///
/// ```rust
/// use rotator::core::{Capabilities, Capability};
///
/// let caps = Capabilities::none().with_sync(true).with_abort(true);
///
/// assert!(caps.can_sync());
/// assert!(!caps.can_home());
/// assert!(caps.allows(Capability::Abort));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    can_sync: bool,
    can_home: bool,
    can_abort: bool,
}

impl Capabilities {
    pub fn new(can_sync: bool, can_home: bool, can_abort: bool) -> Self {
        Self {
            can_sync,
            can_home,
            can_abort,
        }
    }

    /// No optional operation supported.
    pub fn none() -> Self {
        Self::default()
    }

    /// Every optional operation supported.
    pub fn all() -> Self {
        Self::new(true, true, true)
    }

    pub fn with_sync(mut self, enabled: bool) -> Self {
        self.can_sync = enabled;
        self
    }

    pub fn with_home(mut self, enabled: bool) -> Self {
        self.can_home = enabled;
        self
    }

    pub fn with_abort(mut self, enabled: bool) -> Self {
        self.can_abort = enabled;
        self
    }

    pub fn can_sync(&self) -> bool {
        self.can_sync
    }

    pub fn can_home(&self) -> bool {
        self.can_home
    }

    pub fn can_abort(&self) -> bool {
        self.can_abort
    }

    /// Check a single capability.
    pub fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::Sync => self.can_sync,
            Capability::Home => self.can_home,
            Capability::Abort => self.can_abort,
        }
    }

    /// Capabilities whose flag is set, in registration order.
    pub fn enabled(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL
            .into_iter()
            .filter(move |capability| self.allows(*capability))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_allows_nothing() {
        let caps = Capabilities::none();
        for capability in Capability::ALL {
            assert!(!caps.allows(capability));
        }
        assert_eq!(caps.enabled().count(), 0);
    }

    #[test]
    fn all_allows_everything() {
        let caps = Capabilities::all();
        assert!(caps.can_sync());
        assert!(caps.can_home());
        assert!(caps.can_abort());
        assert_eq!(caps.enabled().count(), 3);
    }

    #[test]
    fn allows_matches_individual_predicates() {
        let caps = Capabilities::new(true, false, true);
        assert_eq!(caps.allows(Capability::Sync), caps.can_sync());
        assert_eq!(caps.allows(Capability::Home), caps.can_home());
        assert_eq!(caps.allows(Capability::Abort), caps.can_abort());
    }

    #[test]
    fn enabled_preserves_registration_order() {
        let caps = Capabilities::all();
        let enabled: Vec<_> = caps.enabled().collect();
        assert_eq!(
            enabled,
            vec![Capability::Abort, Capability::Sync, Capability::Home]
        );
    }

    #[test]
    fn missing_fields_deserialize_as_unsupported() {
        let caps: Capabilities = serde_json::from_str(r#"{"can_home": true}"#).unwrap();
        assert_eq!(caps, Capabilities::none().with_home(true));
    }
}
