//! Motion state machine.
//!
//! Ticks and angle are two views of the same physical axis. A move commanded
//! in degrees shows up on both; a move commanded in ticks only on the ticks
//! property. A successful abort settles both.

use super::RotatorInterface;
use crate::core::PropertyState;
use crate::effects::{PropertyHost, RotatorDriver};
use crate::property::PropertyId;
use tracing::{debug, warn};

/// Motion a driver can report as finished.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Motion {
    /// A move started in ticks.
    Ticks,
    /// A move started in degrees.
    Angle,
    Home,
}

impl<D: RotatorDriver> RotatorInterface<D> {
    /// Resolve a motion the driver is polling for.
    ///
    /// Called by the concrete driver once the hardware finishes (or fails)
    /// a move that the interface left `Busy`. Publishes what changed.
    pub fn report_motion_complete<H: PropertyHost + ?Sized>(
        &mut self,
        host: &mut H,
        motion: Motion,
        state: PropertyState,
    ) {
        debug!(device = %self.device, ?motion, %state, "Rotator motion reported");
        match motion {
            Motion::Ticks => {
                self.set_state(PropertyId::AbsolutePosition, state);
                self.publish(host, PropertyId::AbsolutePosition);
            }
            Motion::Angle => {
                self.apply_angle_state(state);
                self.publish(host, PropertyId::AbsoluteAngle);
                self.publish(host, PropertyId::AbsolutePosition);
            }
            Motion::Home => {
                if !self.capabilities.can_home() {
                    warn!(device = %self.device, %state, "Ignoring home report, rotator does not support homing");
                    return;
                }
                self.apply_home_state(state);
                self.publish(host, PropertyId::Home);
            }
        }
    }

    /// Update the current position readings without touching their states.
    pub fn report_position<H: PropertyHost + ?Sized>(
        &mut self,
        host: &mut H,
        ticks: i32,
        degrees: f64,
    ) {
        self.ticks.value = f64::from(ticks);
        self.angle.value = degrees;
        self.publish(host, PropertyId::AbsolutePosition);
        self.publish(host, PropertyId::AbsoluteAngle);
    }

    /// Angle state is mirrored onto ticks.
    pub(super) fn apply_angle_state(&mut self, state: PropertyState) {
        self.set_state(PropertyId::AbsoluteAngle, state);
        self.set_state(PropertyId::AbsolutePosition, state);
    }

    /// The home switch is engaged exactly while homing is in progress.
    pub(super) fn apply_home_state(&mut self, state: PropertyState) {
        self.home.active = false;
        self.set_state(PropertyId::Home, state);
        if state == PropertyState::Busy {
            self.home.active = true;
        }
    }

    /// Force both position views to `Ok` after a successful abort.
    /// Returns whether anything changed.
    pub(super) fn settle_positions(&mut self) -> bool {
        if self.ticks.state == PropertyState::Ok && self.angle.state == PropertyState::Ok {
            return false;
        }
        self.set_state(PropertyId::AbsolutePosition, PropertyState::Ok);
        self.set_state(PropertyId::AbsoluteAngle, PropertyState::Ok);
        true
    }

    /// Release the home switch after a successful abort.
    /// Returns whether homing was in progress.
    pub(super) fn settle_home(&mut self) -> bool {
        if !self.home.active {
            return false;
        }
        self.apply_home_state(PropertyState::Ok);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Capabilities;
    use crate::effects::mock::{MockDriver, RecordingHost};

    fn rotator() -> (RotatorInterface<MockDriver>, RecordingHost) {
        let driver = MockDriver::new(Capabilities::all());
        let rotator = RotatorInterface::setup(driver, "Rotator", "Main Control").unwrap();
        (rotator, RecordingHost::new("Rotator"))
    }

    #[test]
    fn angle_state_is_mirrored_onto_ticks() {
        let (mut rotator, _) = rotator();
        rotator.apply_angle_state(PropertyState::Busy);
        assert_eq!(rotator.angle().state, PropertyState::Busy);
        assert_eq!(rotator.ticks().state, PropertyState::Busy);
    }

    #[test]
    fn ticks_completion_leaves_angle_alone() {
        let (mut rotator, mut host) = rotator();
        rotator.apply_angle_state(PropertyState::Busy);

        rotator.report_motion_complete(&mut host, Motion::Ticks, PropertyState::Ok);

        assert_eq!(rotator.ticks().state, PropertyState::Ok);
        assert_eq!(rotator.angle().state, PropertyState::Busy);
        assert_eq!(host.published(), vec!["ABS_ROTATOR_POSITION"]);
    }

    #[test]
    fn angle_completion_settles_both_views() {
        let (mut rotator, mut host) = rotator();
        rotator.apply_angle_state(PropertyState::Busy);

        rotator.report_motion_complete(&mut host, Motion::Angle, PropertyState::Alert);

        assert_eq!(rotator.angle().state, PropertyState::Alert);
        assert_eq!(rotator.ticks().state, PropertyState::Alert);
        assert_eq!(
            host.published(),
            vec!["ABS_ROTATOR_ANGLE", "ABS_ROTATOR_POSITION"]
        );
    }

    #[test]
    fn home_completion_releases_switch() {
        let (mut rotator, mut host) = rotator();
        rotator.apply_home_state(PropertyState::Busy);
        assert!(rotator.is_homing());

        rotator.report_motion_complete(&mut host, Motion::Home, PropertyState::Ok);

        assert!(!rotator.is_homing());
        let published = host.last_switch("ROTATOR_HOME").unwrap();
        assert_eq!(published.state, PropertyState::Ok);
        assert!(!published.active);
    }

    #[test]
    fn home_report_without_capability_is_ignored() {
        let driver = MockDriver::new(Capabilities::none().with_abort(true));
        let mut rotator = RotatorInterface::setup(driver, "Rotator", "Main Control").unwrap();
        let mut host = RecordingHost::new("Rotator");
        rotator.on_connection_change(&mut host, true);

        rotator.report_motion_complete(&mut host, Motion::Home, PropertyState::Busy);
        assert!(!rotator.is_homing());
        assert_eq!(rotator.home_switch().state, PropertyState::Idle);

        assert!(rotator.handle_switch(&mut host, "Rotator", "ROTATOR_ABORT_MOTION"));
        assert!(!rotator.is_homing());
        assert!(!host.published().contains(&"ROTATOR_HOME"));
        assert!(!host.is_registered("ROTATOR_HOME"));
    }

    #[test]
    fn settle_positions_is_noop_when_already_ok() {
        let (mut rotator, _) = rotator();
        rotator.apply_angle_state(PropertyState::Ok);
        let recorded = rotator.history().len();

        assert!(!rotator.settle_positions());
        assert_eq!(rotator.history().len(), recorded);
    }

    #[test]
    fn settle_positions_forces_ok_when_either_view_is_unsettled() {
        let (mut rotator, _) = rotator();
        rotator.apply_angle_state(PropertyState::Ok);
        rotator.set_state(PropertyId::AbsolutePosition, PropertyState::Busy);

        assert!(rotator.settle_positions());
        assert_eq!(rotator.ticks().state, PropertyState::Ok);
        assert_eq!(rotator.angle().state, PropertyState::Ok);
    }

    #[test]
    fn report_position_updates_values_only() {
        let (mut rotator, mut host) = rotator();
        rotator.apply_angle_state(PropertyState::Busy);

        rotator.report_position(&mut host, 1200, 90.5);

        assert_eq!(rotator.ticks().value, 1200.0);
        assert_eq!(rotator.angle().value, 90.5);
        assert_eq!(rotator.ticks().state, PropertyState::Busy);
        let published = host.last_number("ABS_ROTATOR_ANGLE").unwrap();
        assert_eq!(published.value, 90.5);
    }
}
