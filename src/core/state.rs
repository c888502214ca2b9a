//! Property states and the `State` trait they implement.
//!
//! Every property the rotator exposes carries one of four states. The
//! `State` trait gives them a stable display name and classifies which of
//! them are settled and which signal a failure.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for state values tracked by the rotator.
///
/// All methods are pure - no side effects.
///
/// # Example
///
/// ```rust
/// use rotator::core::{PropertyState, State};
///
/// assert_eq!(PropertyState::Busy.name(), "Busy");
/// assert!(!PropertyState::Busy.is_final());
/// assert!(PropertyState::Alert.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a settled state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// Status carried by every rotator property.
///
/// - `Idle`: never engaged
/// - `Ok`: settled or successful
/// - `Busy`: an operation is in progress
/// - `Alert`: the last operation failed or was rejected
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum PropertyState {
    #[default]
    Idle,
    Ok,
    Busy,
    Alert,
}

impl PropertyState {
    /// Map a boolean hook outcome onto `Ok`/`Alert`.
    pub fn from_success(success: bool) -> Self {
        if success {
            Self::Ok
        } else {
            Self::Alert
        }
    }
}

impl State for PropertyState {
    fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::Ok => "Ok",
            Self::Busy => "Busy",
            Self::Alert => "Alert",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Ok | Self::Alert)
    }

    fn is_error(&self) -> bool {
        matches!(self, Self::Alert)
    }
}

impl fmt::Display for PropertyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
