//! Property registration as the host connects and disconnects.

use super::RotatorInterface;
use crate::effects::{PropertyHost, RotatorDriver};
use crate::property::PropertyId;
use tracing::debug;

impl<D: RotatorDriver> RotatorInterface<D> {
    /// Sync registrations with the host's current connection state.
    pub fn update_properties<H: PropertyHost + ?Sized>(&mut self, host: &mut H) -> bool {
        let connected = host.is_connected();
        self.on_connection_change(host, connected);
        true
    }

    /// Define the exposed properties on connect, delete them on disconnect.
    ///
    /// Position properties are always exposed; abort, sync and home only
    /// when their capability is declared. Repeated calls with the same
    /// connection state change nothing.
    pub fn on_connection_change<H: PropertyHost + ?Sized>(&mut self, host: &mut H, connected: bool) {
        let exposed: Vec<PropertyId> = self.exposed().collect();

        if connected {
            for id in exposed {
                if self.registered.insert(id) {
                    self.define(host, id);
                }
            }
        } else {
            for id in exposed {
                if self.registered.remove(&id) {
                    host.delete_property(id.name());
                }
            }
        }

        debug!(
            device = %self.device,
            connected,
            registered = self.registered.len(),
            "Rotator properties updated"
        );
    }

    /// Properties this rotator exposes while connected, in registration order.
    pub fn exposed(&self) -> impl Iterator<Item = PropertyId> + '_ {
        PropertyId::ALL.into_iter().filter(move |id| {
            id.capability()
                .map_or(true, |capability| self.capabilities.allows(capability))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Capabilities;
    use crate::effects::mock::{HostEvent, MockDriver, RecordingHost};

    fn rotator(capabilities: Capabilities) -> RotatorInterface<MockDriver> {
        RotatorInterface::setup(MockDriver::new(capabilities), "Rotator", "Main Control").unwrap()
    }

    #[test]
    fn connect_defines_mandatory_properties_only_without_capabilities() {
        let mut rotator = rotator(Capabilities::none());
        let mut host = RecordingHost::new("Rotator");

        rotator.on_connection_change(&mut host, true);

        assert_eq!(
            host.registered(),
            vec!["ABS_ROTATOR_ANGLE", "ABS_ROTATOR_POSITION"]
        );
    }

    #[test]
    fn connect_defines_in_registration_order() {
        let mut rotator = rotator(Capabilities::all());
        let mut host = RecordingHost::new("Rotator");

        rotator.on_connection_change(&mut host, true);

        assert_eq!(
            host.events(),
            &[
                HostEvent::Defined("ABS_ROTATOR_POSITION"),
                HostEvent::Defined("ABS_ROTATOR_ANGLE"),
                HostEvent::Defined("ROTATOR_ABORT_MOTION"),
                HostEvent::Defined("SYNC_ROTATOR"),
                HostEvent::Defined("ROTATOR_HOME"),
            ]
        );
    }

    #[test]
    fn disconnect_deletes_what_was_defined() {
        let mut rotator = rotator(Capabilities::none().with_home(true));
        let mut host = RecordingHost::new("Rotator");

        rotator.on_connection_change(&mut host, true);
        rotator.on_connection_change(&mut host, false);

        assert!(host.registered().is_empty());
        assert_eq!(rotator.registered().count(), 0);
        assert!(host
            .events()
            .contains(&HostEvent::Deleted("ROTATOR_HOME".to_string())));
    }

    #[test]
    fn repeated_connect_does_not_redefine() {
        let mut rotator = rotator(Capabilities::all());
        let mut host = RecordingHost::new("Rotator");

        rotator.on_connection_change(&mut host, true);
        host.clear_events();
        rotator.on_connection_change(&mut host, true);

        assert!(host.events().is_empty());
    }

    #[test]
    fn disconnect_before_connect_deletes_nothing() {
        let mut rotator = rotator(Capabilities::all());
        let mut host = RecordingHost::new("Rotator");

        rotator.on_connection_change(&mut host, false);

        assert!(host.events().is_empty());
    }

    #[test]
    fn update_properties_follows_host_connection() {
        let mut rotator = rotator(Capabilities::none().with_sync(true));
        let mut host = RecordingHost::new("Rotator");

        host.set_connected(true);
        assert!(rotator.update_properties(&mut host));
        assert!(rotator.is_registered(PropertyId::SyncRotator));
        assert!(!rotator.is_registered(PropertyId::Home));

        host.set_connected(false);
        rotator.update_properties(&mut host);
        assert!(host.registered().is_empty());
    }
}
