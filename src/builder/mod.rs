//! Builder API for rotator interface construction.
//!
//! # Example
//!
//! ```
//! use rotator::builder::RotatorBuilder;
//! use rotator::core::Capabilities;
//! use rotator::effects::mock::MockDriver;
//!
//! let rotator = RotatorBuilder::new(MockDriver::new(Capabilities::all()))
//!     .device("Rotator Simulator")
//!     .group("Main Control")
//!     .capabilities(Capabilities::none().with_sync(true))
//!     .build()
//!     .unwrap();
//!
//! assert!(rotator.capabilities().can_sync());
//! assert!(!rotator.capabilities().can_abort());
//! ```

pub mod error;
pub mod rotator;

pub use error::BuildError;
pub use rotator::RotatorBuilder;
