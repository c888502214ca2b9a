//! Hardware hooks implemented by a concrete rotator driver.

use crate::core::{Capabilities, PropertyState};
use tracing::error;

/// Hardware operations the rotator interface calls into.
///
/// Moves are required. Syncing, homing and aborting are optional: their
/// default bodies report the operation as unsupported and return the failure
/// value, so calling them on a driver that never implemented them degrades to
/// an `Alert` instead of undefined behavior.
///
/// Which optional operations are exposed to clients is decided by
/// [`capabilities`](RotatorDriver::capabilities), independently of which hooks
/// are overridden.
///
/// # Example
///
/// ```rust
/// use rotator::core::{Capabilities, PropertyState};
/// use rotator::effects::RotatorDriver;
///
/// struct StepperRotator {
///     target: i32,
/// }
///
/// impl RotatorDriver for StepperRotator {
///     fn capabilities(&self) -> Capabilities {
///         Capabilities::none().with_abort(true)
///     }
///
///     fn move_to_ticks(&mut self, ticks: i32) -> PropertyState {
///         self.target = ticks;
///         PropertyState::Busy
///     }
///
///     fn move_to_angle(&mut self, degrees: f64) -> PropertyState {
///         self.move_to_ticks((degrees * 100.0) as i32)
///     }
///
///     fn abort(&mut self) -> bool {
///         true
///     }
/// }
///
/// let mut rotator = StepperRotator { target: 0 };
/// assert_eq!(rotator.move_to_angle(45.0), PropertyState::Busy);
/// assert_eq!(rotator.target, 4500);
/// // Homing was never implemented.
/// assert_eq!(rotator.home(), PropertyState::Alert);
/// ```
pub trait RotatorDriver {
    /// Optional operations the hardware supports. Read once at setup.
    fn capabilities(&self) -> Capabilities {
        Capabilities::none()
    }

    /// Start a move to an absolute position in ticks.
    ///
    /// `Busy` means motion started, `Ok` that it already completed,
    /// `Alert` that it was rejected.
    fn move_to_ticks(&mut self, ticks: i32) -> PropertyState;

    /// Start a move to an absolute angle in degrees, within [0, 360).
    fn move_to_angle(&mut self, degrees: f64) -> PropertyState;

    /// Declare the current position to be `ticks`.
    fn sync(&mut self, ticks: u32) -> bool {
        let _ = ticks;
        error!("Rotator does not support syncing.");
        false
    }

    /// Start homing.
    fn home(&mut self) -> PropertyState {
        error!("Rotator does not support homing.");
        PropertyState::Alert
    }

    /// Stop any motion in progress.
    fn abort(&mut self) -> bool {
        error!("Rotator does not support abort.");
        false
    }
}

impl<D: RotatorDriver + ?Sized> RotatorDriver for Box<D> {
    fn capabilities(&self) -> Capabilities {
        (**self).capabilities()
    }

    fn move_to_ticks(&mut self, ticks: i32) -> PropertyState {
        (**self).move_to_ticks(ticks)
    }

    fn move_to_angle(&mut self, degrees: f64) -> PropertyState {
        (**self).move_to_angle(degrees)
    }

    fn sync(&mut self, ticks: u32) -> bool {
        (**self).sync(ticks)
    }

    fn home(&mut self) -> PropertyState {
        (**self).home()
    }

    fn abort(&mut self) -> bool {
        (**self).abort()
    }
}
