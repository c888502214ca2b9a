//! Host device collaborator.

use crate::property::{NumberProperty, SwitchProperty};

/// Property registry and publisher provided by the host device.
///
/// The host owns the connection lifecycle and the wire protocol. The rotator
/// interface only asks it to define, delete and publish properties. Publishing
/// is fire-and-forget.
pub trait PropertyHost {
    /// Name of the device the host serves.
    fn device_name(&self) -> &str;

    fn is_connected(&self) -> bool;

    fn define_number(&mut self, property: &NumberProperty);

    fn define_switch(&mut self, property: &SwitchProperty);

    fn delete_property(&mut self, name: &str);

    /// Push the current value and state of a numeric property to clients.
    fn publish_number(&mut self, property: &NumberProperty);

    /// Push the current switch and state of a switch property to clients.
    fn publish_switch(&mut self, property: &SwitchProperty);
}
