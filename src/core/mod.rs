//! Core rotator types.
//!
//! This module contains the pure building blocks the interface is made of:
//! - Property states via the `State` trait and `PropertyState`
//! - The capability gate for optional operations
//! - Bounded history of property state changes
//!
//! Nothing in this module talks to a host or a driver.

mod capability;
mod history;
mod state;

pub use capability::{Capabilities, Capability};
pub use history::{StatusChange, StatusHistory, DEFAULT_HISTORY_CAPACITY};
pub use state::{PropertyState, State};
