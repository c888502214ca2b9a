//! Polled Rotator
//!
//! This example drives a simulated stepper rotator the way a real driver
//! would: commands arrive as property writes, the hardware moves a few steps
//! per poll, and the driver reports progress and completion back to the
//! interface.
//!
//! Key concepts:
//! - Implementing `RotatorDriver` with only the capabilities the hardware has
//! - A `PropertyHost` that prints every definition and update
//! - Polling loop using `report_position` and `report_motion_complete`
//! - Abort settling motion started in degrees
//!
//! Run with: cargo run --example polled_rotator

use rotator::core::{Capabilities, PropertyState};
use rotator::property::{NumberProperty, SwitchProperty};
use rotator::{Motion, PropertyHost, RotatorDriver, RotatorInterface};

const DEVICE: &str = "Rotator Simulator";
const TICKS_PER_DEGREE: f64 = 100.0;
const STEP: i32 = 1_500;

// Simulated hardware
struct SimulatedRotator {
    position: i32,
    target: Option<(i32, Motion)>,
}

impl SimulatedRotator {
    fn new() -> Self {
        Self {
            position: 0,
            target: None,
        }
    }

    fn degrees(&self) -> f64 {
        f64::from(self.position) / TICKS_PER_DEGREE
    }

    /// Advance one poll. Returns the motion that just finished, if any.
    fn poll(&mut self) -> Option<Motion> {
        let (target, motion) = self.target?;
        let remaining = target - self.position;
        self.position += remaining.clamp(-STEP, STEP);
        if self.position == target {
            self.target = None;
            return Some(motion);
        }
        None
    }

    fn start(&mut self, target: i32, motion: Motion) -> PropertyState {
        if target == self.position {
            return PropertyState::Ok;
        }
        self.target = Some((target, motion));
        PropertyState::Busy
    }
}

impl RotatorDriver for SimulatedRotator {
    fn capabilities(&self) -> Capabilities {
        Capabilities::none().with_sync(true).with_abort(true)
    }

    fn move_to_ticks(&mut self, ticks: i32) -> PropertyState {
        self.start(ticks, Motion::Ticks)
    }

    fn move_to_angle(&mut self, degrees: f64) -> PropertyState {
        self.start((degrees * TICKS_PER_DEGREE) as i32, Motion::Angle)
    }

    fn sync(&mut self, ticks: u32) -> bool {
        match i32::try_from(ticks) {
            Ok(ticks) if self.target.is_none() => {
                self.position = ticks;
                true
            }
            _ => false,
        }
    }

    fn abort(&mut self) -> bool {
        self.target = None;
        true
    }
}

// Host printing everything it receives
struct ConsoleHost {
    connected: bool,
}

impl PropertyHost for ConsoleHost {
    fn device_name(&self) -> &str {
        DEVICE
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn define_number(&mut self, property: &NumberProperty) {
        println!("  define {} [{}]", property.id, property.group);
    }

    fn define_switch(&mut self, property: &SwitchProperty) {
        println!("  define {} [{}]", property.id, property.group);
    }

    fn delete_property(&mut self, name: &str) {
        println!("  delete {}", name);
    }

    fn publish_number(&mut self, property: &NumberProperty) {
        println!(
            "  {:<22} {:>10.2}  {}",
            property.id, property.value, property.state
        );
    }

    fn publish_switch(&mut self, property: &SwitchProperty) {
        println!(
            "  {:<22} {:>10}  {}",
            property.id, property.active, property.state
        );
    }
}

fn poll_until_idle(rotator: &mut RotatorInterface<SimulatedRotator>, host: &mut ConsoleHost) {
    while rotator.driver().target.is_some() {
        let finished = rotator.driver_mut().poll();
        let ticks = rotator.driver().position;
        let degrees = rotator.driver().degrees();
        rotator.report_position(host, ticks, degrees);
        if let Some(motion) = finished {
            rotator.report_motion_complete(host, motion, PropertyState::Ok);
        }
    }
}

fn main() -> Result<(), rotator::BuildError> {
    println!("=== Polled Rotator Example ===\n");

    let mut host = ConsoleHost { connected: true };
    let mut rotator = RotatorInterface::builder(SimulatedRotator::new())
        .for_host(&host)
        .build()?;

    println!("Connecting:");
    rotator.update_properties(&mut host);

    println!("\nSync to 1000 ticks:");
    rotator.handle_number(&mut host, DEVICE, "SYNC_ROTATOR", &[1_000.0]);

    println!("\nMove to 45 degrees:");
    rotator.handle_number(&mut host, DEVICE, "ABS_ROTATOR_ANGLE", &[45.0]);
    poll_until_idle(&mut rotator, &mut host);

    println!("\nMove to 9000 ticks, abort after one poll:");
    rotator.handle_number(&mut host, DEVICE, "ABS_ROTATOR_POSITION", &[9_000.0]);
    rotator.driver_mut().poll();
    let (ticks, degrees) = (rotator.driver().position, rotator.driver().degrees());
    rotator.report_position(&mut host, ticks, degrees);
    rotator.handle_switch(&mut host, DEVICE, "ROTATOR_ABORT_MOTION");

    println!("\nHoming is not supported:");
    rotator.handle_switch(&mut host, DEVICE, "ROTATOR_HOME");
    println!("  homing in progress: {}", rotator.is_homing());

    println!("\nDisconnecting:");
    host.connected = false;
    rotator.update_properties(&mut host);

    println!("\nRecorded {} status changes", rotator.history().len());
    Ok(())
}
