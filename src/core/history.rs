//! Property status history.
//!
//! Records every state change the rotator makes to one of its properties,
//! in the order they happened. The history is bounded; once full, the
//! oldest change is dropped first.

use super::state::PropertyState;
use crate::property::PropertyId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Default number of changes kept by a [`StatusHistory`].
pub const DEFAULT_HISTORY_CAPACITY: usize = 256;

/// Record of a single property state change.
///
/// # Example
///
/// ```rust
/// use rotator::core::{PropertyState, StatusChange};
/// use rotator::property::PropertyId;
/// use chrono::Utc;
///
/// let change = StatusChange {
///     property: PropertyId::AbsoluteAngle,
///     from: PropertyState::Idle,
///     to: PropertyState::Busy,
///     timestamp: Utc::now(),
/// };
/// assert!(change.is_transition());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusChange {
    /// The property whose state changed
    pub property: PropertyId,
    /// The previous state
    pub from: PropertyState,
    /// The new state
    pub to: PropertyState,
    /// When the change was applied
    pub timestamp: DateTime<Utc>,
}

impl StatusChange {
    /// Whether the state actually changed (re-asserting the same state is
    /// still recorded, since it was published).
    pub fn is_transition(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered, bounded history of property state changes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StatusHistory {
    capacity: usize,
    changes: VecDeque<StatusChange>,
}

impl Default for StatusHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusHistory {
    /// Create an empty history with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an empty history keeping at most `capacity` changes.
    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            changes: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a change, evicting the oldest one when full.
    pub fn record(&mut self, change: StatusChange) {
        if self.changes.len() == self.capacity {
            self.changes.pop_front();
        }
        self.changes.push_back(change);
    }

    /// All retained changes, oldest first.
    pub fn changes(&self) -> impl Iterator<Item = &StatusChange> {
        self.changes.iter()
    }

    /// Retained changes of one property, oldest first.
    pub fn for_property(&self, property: PropertyId) -> impl Iterator<Item = &StatusChange> {
        self.changes
            .iter()
            .filter(move |change| change.property == property)
    }

    /// The most recent change.
    pub fn last(&self) -> Option<&StatusChange> {
        self.changes.back()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Time spanned by the retained changes.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.changes.front(), self.changes.back()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }
}
