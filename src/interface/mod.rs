//! The rotator interface: property state, dispatch and lifecycle.
//!
//! `RotatorInterface` owns every rotator property and the concrete driver.
//! Properties are only mutated through its methods, one inbound call at a
//! time, so no locking is needed as long as the host delivers commands
//! serially.

mod dispatch;
mod lifecycle;
mod motion;

pub use motion::Motion;

use crate::builder::{BuildError, RotatorBuilder};
use crate::config::RotatorConfig;
use crate::core::{Capabilities, PropertyState, StatusChange, StatusHistory};
use crate::effects::{PropertyHost, RotatorDriver};
use crate::property::{NumberProperty, NumberRange, PropertyId, SwitchProperty};
use chrono::Utc;
use std::collections::BTreeSet;

/// Capability-gated motion-control state machine for one rotator.
///
/// # Example
///
/// ```rust
/// use rotator::core::{Capabilities, PropertyState};
/// use rotator::effects::mock::{MockDriver, RecordingHost};
/// use rotator::RotatorInterface;
///
/// let driver = MockDriver::new(Capabilities::none().with_abort(true));
/// let mut rotator = RotatorInterface::setup(driver, "Rotator Simulator", "Main Control").unwrap();
/// let mut host = RecordingHost::new("Rotator Simulator");
///
/// rotator.on_connection_change(&mut host, true);
/// assert!(rotator.handle_number(&mut host, "Rotator Simulator", "ABS_ROTATOR_ANGLE", &[45.0]));
/// assert_eq!(rotator.angle().state, PropertyState::Busy);
/// assert_eq!(rotator.ticks().state, PropertyState::Busy);
///
/// assert!(rotator.handle_switch(&mut host, "Rotator Simulator", "ROTATOR_ABORT_MOTION"));
/// assert_eq!(rotator.ticks().state, PropertyState::Ok);
/// ```
pub struct RotatorInterface<D: RotatorDriver> {
    device: String,
    group: String,
    capabilities: Capabilities,
    driver: D,
    ticks: NumberProperty,
    angle: NumberProperty,
    sync: NumberProperty,
    abort: SwitchProperty,
    home: SwitchProperty,
    registered: BTreeSet<PropertyId>,
    history: StatusHistory,
}

impl<D: RotatorDriver> RotatorInterface<D> {
    /// One-time setup with explicit identity and property group.
    /// Capabilities are taken from the driver.
    pub fn setup(driver: D, device: &str, group: &str) -> Result<Self, BuildError> {
        RotatorBuilder::new(driver).device(device).group(group).build()
    }

    /// Start building an interface around `driver`.
    pub fn builder(driver: D) -> RotatorBuilder<D> {
        RotatorBuilder::new(driver)
    }

    /// Assemble an interface from a validated configuration.
    pub(crate) fn from_parts(driver: D, config: RotatorConfig, capabilities: Capabilities) -> Self {
        let device = config.device;
        let group = config.group;
        Self {
            ticks: NumberProperty::new(
                PropertyId::AbsolutePosition,
                &device,
                &group,
                NumberRange::UNBOUNDED,
                "%.f",
            ),
            angle: NumberProperty::new(
                PropertyId::AbsoluteAngle,
                &device,
                &group,
                NumberRange::ANGLE,
                "%.2f",
            ),
            sync: NumberProperty::new(
                PropertyId::SyncRotator,
                &device,
                &group,
                NumberRange::SYNC_TICKS,
                "%.f",
            ),
            abort: SwitchProperty::new(PropertyId::AbortMotion, &device, &group),
            home: SwitchProperty::new(PropertyId::Home, &device, &group),
            registered: BTreeSet::new(),
            history: StatusHistory::with_capacity(config.history_capacity),
            capabilities,
            driver,
            device,
            group,
        }
    }

    /// Device name this interface answers to.
    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Absolute position in ticks.
    pub fn ticks(&self) -> &NumberProperty {
        &self.ticks
    }

    /// Absolute angle in degrees.
    pub fn angle(&self) -> &NumberProperty {
        &self.angle
    }

    pub fn sync_property(&self) -> &NumberProperty {
        &self.sync
    }

    pub fn abort_switch(&self) -> &SwitchProperty {
        &self.abort
    }

    pub fn home_switch(&self) -> &SwitchProperty {
        &self.home
    }

    /// Whether homing is in progress.
    pub fn is_homing(&self) -> bool {
        self.home.active
    }

    /// Current state of any property.
    pub fn state(&self, id: PropertyId) -> PropertyState {
        match id {
            PropertyId::AbsolutePosition => self.ticks.state,
            PropertyId::AbsoluteAngle => self.angle.state,
            PropertyId::SyncRotator => self.sync.state,
            PropertyId::AbortMotion => self.abort.state,
            PropertyId::Home => self.home.state,
        }
    }

    /// Properties currently defined on the host.
    pub fn registered(&self) -> impl Iterator<Item = PropertyId> + '_ {
        self.registered.iter().copied()
    }

    pub fn is_registered(&self, id: PropertyId) -> bool {
        self.registered.contains(&id)
    }

    pub fn history(&self) -> &StatusHistory {
        &self.history
    }

    fn state_slot(&mut self, id: PropertyId) -> &mut PropertyState {
        match id {
            PropertyId::AbsolutePosition => &mut self.ticks.state,
            PropertyId::AbsoluteAngle => &mut self.angle.state,
            PropertyId::SyncRotator => &mut self.sync.state,
            PropertyId::AbortMotion => &mut self.abort.state,
            PropertyId::Home => &mut self.home.state,
        }
    }

    /// Set a property state and record the change.
    fn set_state(&mut self, id: PropertyId, state: PropertyState) {
        let from = std::mem::replace(self.state_slot(id), state);
        self.history.record(StatusChange {
            property: id,
            from,
            to: state,
            timestamp: Utc::now(),
        });
    }

    /// Push a property's current value and state to the host.
    fn publish<H: PropertyHost + ?Sized>(&self, host: &mut H, id: PropertyId) {
        match id {
            PropertyId::AbsolutePosition => host.publish_number(&self.ticks),
            PropertyId::AbsoluteAngle => host.publish_number(&self.angle),
            PropertyId::SyncRotator => host.publish_number(&self.sync),
            PropertyId::AbortMotion => host.publish_switch(&self.abort),
            PropertyId::Home => host.publish_switch(&self.home),
        }
    }

    fn define<H: PropertyHost + ?Sized>(&self, host: &mut H, id: PropertyId) {
        match id {
            PropertyId::AbsolutePosition => host.define_number(&self.ticks),
            PropertyId::AbsoluteAngle => host.define_number(&self.angle),
            PropertyId::SyncRotator => host.define_number(&self.sync),
            PropertyId::AbortMotion => host.define_switch(&self.abort),
            PropertyId::Home => host.define_switch(&self.home),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::mock::MockDriver;

    fn rotator(capabilities: Capabilities) -> RotatorInterface<MockDriver> {
        RotatorInterface::setup(MockDriver::new(capabilities), "Rotator", "Main Control").unwrap()
    }

    #[test]
    fn setup_creates_idle_properties() {
        let rotator = rotator(Capabilities::all());
        for id in PropertyId::ALL {
            assert_eq!(rotator.state(id), PropertyState::Idle);
        }
        assert!(!rotator.is_homing());
        assert_eq!(rotator.registered().count(), 0);
        assert!(rotator.history().is_empty());
    }

    #[test]
    fn setup_stamps_identity_on_properties() {
        let rotator = rotator(Capabilities::none());
        assert_eq!(rotator.device(), "Rotator");
        assert_eq!(rotator.group(), "Main Control");
        assert_eq!(rotator.ticks().device, "Rotator");
        assert_eq!(rotator.home_switch().group, "Main Control");
    }

    #[test]
    fn setup_takes_capabilities_from_driver() {
        let caps = Capabilities::none().with_home(true);
        assert_eq!(rotator(caps).capabilities(), caps);
    }

    #[test]
    fn property_ranges_follow_protocol() {
        let rotator = rotator(Capabilities::all());
        assert_eq!(rotator.angle().range, NumberRange::ANGLE);
        assert_eq!(rotator.sync_property().range, NumberRange::SYNC_TICKS);
        assert_eq!(rotator.ticks().range, NumberRange::UNBOUNDED);
    }

    #[test]
    fn set_state_records_history() {
        let mut rotator = rotator(Capabilities::none());
        rotator.set_state(PropertyId::AbsoluteAngle, PropertyState::Busy);

        let change = rotator.history().last().unwrap();
        assert_eq!(change.property, PropertyId::AbsoluteAngle);
        assert_eq!(change.from, PropertyState::Idle);
        assert_eq!(change.to, PropertyState::Busy);
    }
}
