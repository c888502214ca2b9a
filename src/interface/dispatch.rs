//! Command dispatcher.
//!
//! Routes inbound property writes to the matching operation. Commands that
//! target another device, or that name no known property, are ignored and
//! reported as unhandled so the host can offer them to someone else.

use super::RotatorInterface;
use crate::core::{Capability, PropertyState};
use crate::effects::{PropertyHost, RotatorDriver};
use crate::property::PropertyId;
use tracing::{debug, info, warn};

impl<D: RotatorDriver> RotatorInterface<D> {
    /// Handle a numeric property write.
    ///
    /// Returns `true` when the command was addressed to this rotator and
    /// named one of its numeric properties (sync, absolute ticks, absolute
    /// angle), whatever the outcome of the operation.
    pub fn handle_number<H: PropertyHost + ?Sized>(
        &mut self,
        host: &mut H,
        device: &str,
        name: &str,
        values: &[f64],
    ) -> bool {
        if device != self.device {
            debug!(device = %self.device, requested = device, command = name, "Ignoring command for another device");
            return false;
        }

        match PropertyId::from_command(name) {
            Some(PropertyId::SyncRotator) => self.sync_to(host, values),
            Some(PropertyId::AbsolutePosition) => self.move_to_ticks(host, values),
            Some(PropertyId::AbsoluteAngle) => self.move_to_angle(host, values),
            _ => return false,
        }
        true
    }

    /// Handle a switch property write.
    ///
    /// Returns `true` when the command was addressed to this rotator and
    /// named abort or home.
    pub fn handle_switch<H: PropertyHost + ?Sized>(
        &mut self,
        host: &mut H,
        device: &str,
        name: &str,
    ) -> bool {
        if device != self.device {
            debug!(device = %self.device, requested = device, command = name, "Ignoring command for another device");
            return false;
        }

        match PropertyId::from_command(name) {
            Some(PropertyId::AbortMotion) => self.abort_motion(host),
            Some(PropertyId::Home) => self.start_home(host),
            _ => return false,
        }
        true
    }

    fn sync_to<H: PropertyHost + ?Sized>(&mut self, host: &mut H, values: &[f64]) {
        let id = PropertyId::SyncRotator;
        let synced = match self.accepted_value(id, values) {
            Some(value) => {
                let synced = if self.gate(Capability::Sync) {
                    self.driver.sync(value as u32)
                } else {
                    false
                };
                if synced {
                    self.sync.value = value;
                    info!(device = %self.device, "Rotator synced to {:.0} ticks", value);
                } else {
                    warn!(device = %self.device, "Rotator failed to sync to {:.0} ticks", value);
                }
                synced
            }
            None => false,
        };

        self.set_state(id, PropertyState::from_success(synced));
        self.publish(host, id);
    }

    fn move_to_ticks<H: PropertyHost + ?Sized>(&mut self, host: &mut H, values: &[f64]) {
        let id = PropertyId::AbsolutePosition;
        let Some(value) = self.accepted_value(id, values) else {
            self.set_state(id, PropertyState::Alert);
            self.publish(host, id);
            return;
        };

        // Truncates toward zero, saturating at the i32 bounds.
        let ticks = value as i32;
        let state = self.driver.move_to_ticks(ticks);
        self.set_state(id, state);
        self.publish(host, id);

        match state {
            PropertyState::Busy => {
                info!(device = %self.device, "Rotator moving to {} ticks...", ticks)
            }
            PropertyState::Alert => {
                warn!(device = %self.device, "Rotator rejected move to {} ticks", ticks)
            }
            _ => debug!(device = %self.device, %state, ticks, "Rotator move finished"),
        }
    }

    fn move_to_angle<H: PropertyHost + ?Sized>(&mut self, host: &mut H, values: &[f64]) {
        let state = match self.accepted_value(PropertyId::AbsoluteAngle, values) {
            Some(degrees) => {
                let state = self.driver.move_to_angle(degrees);
                match state {
                    PropertyState::Busy => {
                        info!(device = %self.device, "Rotator moving to {:.2} degrees...", degrees)
                    }
                    PropertyState::Alert => {
                        warn!(device = %self.device, "Rotator rejected move to {:.2} degrees", degrees)
                    }
                    _ => debug!(device = %self.device, %state, degrees, "Rotator move finished"),
                }
                state
            }
            None => PropertyState::Alert,
        };

        self.apply_angle_state(state);
        self.publish(host, PropertyId::AbsoluteAngle);
        self.publish(host, PropertyId::AbsolutePosition);
    }

    fn abort_motion<H: PropertyHost + ?Sized>(&mut self, host: &mut H) {
        let id = PropertyId::AbortMotion;
        let aborted = self.gate(Capability::Abort) && self.driver.abort();

        self.set_state(id, PropertyState::from_success(aborted));
        self.publish(host, id);

        if !aborted {
            warn!(device = %self.device, "Rotator failed to abort motion");
            return;
        }
        info!(device = %self.device, "Rotator motion aborted");
        if self.settle_positions() {
            self.publish(host, PropertyId::AbsolutePosition);
            self.publish(host, PropertyId::AbsoluteAngle);
        }
        if self.settle_home() {
            self.publish(host, PropertyId::Home);
        }
    }

    fn start_home<H: PropertyHost + ?Sized>(&mut self, host: &mut H) {
        let state = if self.gate(Capability::Home) {
            self.driver.home()
        } else {
            PropertyState::Alert
        };

        self.apply_home_state(state);
        self.publish(host, PropertyId::Home);

        match state {
            PropertyState::Busy => info!(device = %self.device, "Rotator homing..."),
            PropertyState::Alert => warn!(device = %self.device, "Rotator failed to start homing"),
            _ => debug!(device = %self.device, %state, "Rotator homing finished"),
        }
    }

    /// Capability check before calling an optional hook.
    fn gate(&self, capability: Capability) -> bool {
        let allowed = self.capabilities.allows(capability);
        if !allowed {
            warn!(
                device = %self.device,
                %capability,
                "Rotator does not advertise {} support, command rejected", capability
            );
        }
        allowed
    }

    /// First value of a numeric command, if present and inside the
    /// property's range.
    fn accepted_value(&self, id: PropertyId, values: &[f64]) -> Option<f64> {
        let Some(&value) = values.first() else {
            warn!(device = %self.device, property = %id, "Command carried no value");
            return None;
        };
        let range = match id {
            PropertyId::AbsolutePosition => self.ticks.range,
            PropertyId::AbsoluteAngle => self.angle.range,
            _ => self.sync.range,
        };
        if !range.contains(value) {
            warn!(
                device = %self.device,
                property = %id,
                value,
                "Value outside [{}, {})", range.min, range.max
            );
            return None;
        }
        Some(value)
    }
}
