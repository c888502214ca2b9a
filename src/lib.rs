//! Rotator: a capability-gated motion-control state machine
//!
//! This crate is the state-machine core of a rotator driver exposed through a
//! property-based remote-control protocol. It reconciles commands arriving as
//! named property writes, the optional hardware capabilities a driver declares,
//! and the motion state several commands share.
//!
//! # Core Concepts
//!
//! - **Properties**: named, stateful values clients address commands to
//! - **States**: `Idle`, `Ok`, `Busy`, `Alert` via the `State` trait
//! - **Capabilities**: sync, home and abort flags that gate exposure and invocation
//! - **Collaborators**: a `RotatorDriver` for hardware and a `PropertyHost` for
//!   registration and publishing
//!
//! # Example
//!
//! ```rust
//! use rotator::core::{Capabilities, PropertyState};
//! use rotator::effects::mock::{MockDriver, RecordingHost};
//! use rotator::interface::Motion;
//! use rotator::RotatorInterface;
//!
//! let driver = MockDriver::new(Capabilities::none().with_sync(true).with_abort(true));
//! let mut host = RecordingHost::new("Rotator Simulator");
//! let mut rotator = RotatorInterface::builder(driver).for_host(&host).build().unwrap();
//!
//! rotator.on_connection_change(&mut host, true);
//! assert_eq!(
//!     host.registered(),
//!     vec!["ABS_ROTATOR_ANGLE", "ABS_ROTATOR_POSITION", "ROTATOR_ABORT_MOTION", "SYNC_ROTATOR"]
//! );
//!
//! rotator.handle_number(&mut host, "Rotator Simulator", "ABS_ROTATOR_POSITION", &[500.0]);
//! assert_eq!(rotator.ticks().state, PropertyState::Busy);
//!
//! // Later, from the driver's polling loop.
//! rotator.report_motion_complete(&mut host, Motion::Ticks, PropertyState::Ok);
//! assert_eq!(rotator.ticks().state, PropertyState::Ok);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod effects;
pub mod interface;
pub mod property;

// Re-export commonly used types
pub use crate::builder::{BuildError, RotatorBuilder};
pub use crate::config::RotatorConfig;
pub use crate::core::{Capabilities, Capability, PropertyState, State};
pub use crate::effects::{PropertyHost, RotatorDriver};
pub use crate::interface::{Motion, RotatorInterface};
pub use crate::property::PropertyId;
