//! Side-effecting collaborators of the rotator interface.
//!
//! The interface itself never touches hardware or the wire. It calls into a
//! `RotatorDriver` for motion and a `PropertyHost` for registration and
//! publishing.

pub mod driver;
pub mod host;
pub mod mock;

pub use driver::RotatorDriver;
pub use host::PropertyHost;
