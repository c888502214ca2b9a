//! Mock collaborators for testing without a host framework or hardware.
//!
//! # Available Mocks
//!
//! - `RecordingHost` - Property host that records every define, delete and publish
//! - `MockDriver` - Rotator driver returning scripted results and logging its calls

use crate::core::{Capabilities, PropertyState};
use crate::effects::{PropertyHost, RotatorDriver};
use crate::property::{NumberProperty, SwitchProperty};
use std::collections::BTreeSet;

// =============================================================================
// RecordingHost
// =============================================================================

/// Something the interface asked the host to do.
#[derive(Clone, Debug, PartialEq)]
pub enum HostEvent {
    Defined(&'static str),
    Deleted(String),
    PublishedNumber(NumberProperty),
    PublishedSwitch(SwitchProperty),
}

/// Property host that keeps a registry and an event log.
#[derive(Clone, Debug)]
pub struct RecordingHost {
    device: String,
    connected: bool,
    registered: BTreeSet<String>,
    events: Vec<HostEvent>,
}

impl RecordingHost {
    pub fn new(device: &str) -> Self {
        Self {
            device: device.to_string(),
            connected: false,
            registered: BTreeSet::new(),
            events: Vec::new(),
        }
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    /// Names currently defined, in sorted order.
    pub fn registered(&self) -> Vec<&str> {
        self.registered.iter().map(String::as_str).collect()
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.registered.contains(name)
    }

    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    /// Published properties, by name, in publish order.
    pub fn published(&self) -> Vec<&'static str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                HostEvent::PublishedNumber(p) => Some(p.name()),
                HostEvent::PublishedSwitch(p) => Some(p.name()),
                _ => None,
            })
            .collect()
    }

    /// The most recently published snapshot of a numeric property.
    pub fn last_number(&self, name: &str) -> Option<&NumberProperty> {
        self.events.iter().rev().find_map(|event| match event {
            HostEvent::PublishedNumber(p) if p.name() == name => Some(p),
            _ => None,
        })
    }

    /// The most recently published snapshot of a switch property.
    pub fn last_switch(&self, name: &str) -> Option<&SwitchProperty> {
        self.events.iter().rev().find_map(|event| match event {
            HostEvent::PublishedSwitch(p) if p.name() == name => Some(p),
            _ => None,
        })
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl PropertyHost for RecordingHost {
    fn device_name(&self) -> &str {
        &self.device
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn define_number(&mut self, property: &NumberProperty) {
        self.registered.insert(property.name().to_string());
        self.events.push(HostEvent::Defined(property.name()));
    }

    fn define_switch(&mut self, property: &SwitchProperty) {
        self.registered.insert(property.name().to_string());
        self.events.push(HostEvent::Defined(property.name()));
    }

    fn delete_property(&mut self, name: &str) {
        self.registered.remove(name);
        self.events.push(HostEvent::Deleted(name.to_string()));
    }

    fn publish_number(&mut self, property: &NumberProperty) {
        self.events.push(HostEvent::PublishedNumber(property.clone()));
    }

    fn publish_switch(&mut self, property: &SwitchProperty) {
        self.events.push(HostEvent::PublishedSwitch(property.clone()));
    }
}

// =============================================================================
// MockDriver
// =============================================================================

/// A hook invocation seen by [`MockDriver`].
#[derive(Clone, Debug, PartialEq)]
pub enum DriverCall {
    MoveToTicks(i32),
    MoveToAngle(f64),
    Sync(u32),
    Home,
    Abort,
}

/// Rotator driver with scripted hook results.
///
/// Moves return `Busy` by default; sync, home and abort succeed (`home`
/// returns `Busy`). Optional hooks fail for capabilities the mock does not
/// declare, the same way the trait defaults do.
///
/// # Example
///
/// ```rust
/// use rotator::core::{Capabilities, PropertyState};
/// use rotator::effects::mock::MockDriver;
/// use rotator::effects::RotatorDriver;
///
/// let mut driver = MockDriver::new(Capabilities::all()).with_move_result(PropertyState::Ok);
/// assert_eq!(driver.move_to_ticks(500), PropertyState::Ok);
/// assert_eq!(driver.calls().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct MockDriver {
    capabilities: Capabilities,
    move_result: PropertyState,
    home_result: PropertyState,
    sync_succeeds: bool,
    abort_succeeds: bool,
    calls: Vec<DriverCall>,
}

impl MockDriver {
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            move_result: PropertyState::Busy,
            home_result: PropertyState::Busy,
            sync_succeeds: true,
            abort_succeeds: true,
            calls: Vec::new(),
        }
    }

    pub fn with_move_result(mut self, state: PropertyState) -> Self {
        self.move_result = state;
        self
    }

    pub fn with_home_result(mut self, state: PropertyState) -> Self {
        self.home_result = state;
        self
    }

    pub fn with_sync_result(mut self, succeeds: bool) -> Self {
        self.sync_succeeds = succeeds;
        self
    }

    pub fn with_abort_result(mut self, succeeds: bool) -> Self {
        self.abort_succeeds = succeeds;
        self
    }

    pub fn set_move_result(&mut self, state: PropertyState) {
        self.move_result = state;
    }

    pub fn set_home_result(&mut self, state: PropertyState) {
        self.home_result = state;
    }

    pub fn set_abort_result(&mut self, succeeds: bool) {
        self.abort_succeeds = succeeds;
    }

    pub fn calls(&self) -> &[DriverCall] {
        &self.calls
    }
}

impl RotatorDriver for MockDriver {
    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    fn move_to_ticks(&mut self, ticks: i32) -> PropertyState {
        self.calls.push(DriverCall::MoveToTicks(ticks));
        self.move_result
    }

    fn move_to_angle(&mut self, degrees: f64) -> PropertyState {
        self.calls.push(DriverCall::MoveToAngle(degrees));
        self.move_result
    }

    fn sync(&mut self, ticks: u32) -> bool {
        self.calls.push(DriverCall::Sync(ticks));
        if !self.capabilities.can_sync() {
            return false;
        }
        self.sync_succeeds
    }

    fn home(&mut self) -> PropertyState {
        self.calls.push(DriverCall::Home);
        if !self.capabilities.can_home() {
            return PropertyState::Alert;
        }
        self.home_result
    }

    fn abort(&mut self) -> bool {
        self.calls.push(DriverCall::Abort);
        if !self.capabilities.can_abort() {
            return false;
        }
        self.abort_succeeds
    }
}
