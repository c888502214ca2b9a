//! Rotator properties as seen by the host.
//!
//! Each property has a stable wire name that clients address commands to.
//! Those names are part of the remote-control protocol and must not change.

use crate::core::{Capability, PropertyState};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a rotator property.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum PropertyId {
    /// Absolute position in ticks.
    #[serde(rename = "ABS_ROTATOR_POSITION")]
    AbsolutePosition,
    /// Absolute angle in degrees.
    #[serde(rename = "ABS_ROTATOR_ANGLE")]
    AbsoluteAngle,
    #[serde(rename = "ROTATOR_ABORT_MOTION")]
    AbortMotion,
    #[serde(rename = "SYNC_ROTATOR")]
    SyncRotator,
    #[serde(rename = "ROTATOR_HOME")]
    Home,
}

/// Kind of value a property carries.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PropertyKind {
    Number,
    Switch,
}

impl PropertyId {
    /// Every property, in registration order.
    pub const ALL: [PropertyId; 5] = [
        PropertyId::AbsolutePosition,
        PropertyId::AbsoluteAngle,
        PropertyId::AbortMotion,
        PropertyId::SyncRotator,
        PropertyId::Home,
    ];

    /// Wire name of the property.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AbsolutePosition => "ABS_ROTATOR_POSITION",
            Self::AbsoluteAngle => "ABS_ROTATOR_ANGLE",
            Self::AbortMotion => "ROTATOR_ABORT_MOTION",
            Self::SyncRotator => "SYNC_ROTATOR",
            Self::Home => "ROTATOR_HOME",
        }
    }

    /// Short command name, also accepted by the dispatcher.
    pub fn alias(&self) -> &'static str {
        match self {
            Self::AbsolutePosition => "ABS_POSITION",
            Self::AbsoluteAngle => "ABS_ANGLE",
            Self::AbortMotion => "ABORT",
            Self::SyncRotator => "SYNC",
            Self::Home => "HOME",
        }
    }

    /// Name of the single element inside the property.
    pub fn element(&self) -> &'static str {
        match self {
            Self::AbsolutePosition => "ROTATOR_ABSOLUTE_POSITION",
            Self::AbsoluteAngle => "ANGLE",
            Self::AbortMotion => "ABORT",
            Self::SyncRotator => "ROTATOR_SYNC_TICK",
            Self::Home => "HOME",
        }
    }

    /// Human-readable property label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AbsolutePosition => "Goto",
            Self::AbsoluteAngle => "Angle",
            Self::AbortMotion => "Abort Motion",
            Self::SyncRotator => "Sync",
            Self::Home => "Home",
        }
    }

    pub fn kind(&self) -> PropertyKind {
        match self {
            Self::AbsolutePosition | Self::AbsoluteAngle | Self::SyncRotator => {
                PropertyKind::Number
            }
            Self::AbortMotion | Self::Home => PropertyKind::Switch,
        }
    }

    /// Capability that must be declared for the property to be exposed.
    /// `None` for the mandatory position properties.
    pub fn capability(&self) -> Option<Capability> {
        match self {
            Self::AbsolutePosition | Self::AbsoluteAngle => None,
            Self::AbortMotion => Some(Capability::Abort),
            Self::SyncRotator => Some(Capability::Sync),
            Self::Home => Some(Capability::Home),
        }
    }

    /// Resolve an inbound command name. Matches the wire name or the short
    /// alias exactly; anything else is `None`.
    pub fn from_command(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.name() == name || id.alias() == name)
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Accepted range of a numeric property. `max` is exclusive.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct NumberRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl NumberRange {
    /// Degrees, [0, 360) in steps of 10.
    pub const ANGLE: NumberRange = NumberRange {
        min: 0.0,
        max: 360.0,
        step: 10.0,
    };

    /// Sync ticks, [0, 100000).
    pub const SYNC_TICKS: NumberRange = NumberRange {
        min: 0.0,
        max: 100_000.0,
        step: 0.0,
    };

    /// No limits advertised.
    pub const UNBOUNDED: NumberRange = NumberRange {
        min: 0.0,
        max: 0.0,
        step: 0.0,
    };

    pub fn is_bounded(&self) -> bool {
        self.max > self.min
    }

    /// Whether `value` is finite and, for bounded ranges, inside `[min, max)`.
    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        !self.is_bounded() || (value >= self.min && value < self.max)
    }
}

/// A numeric property holding one value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NumberProperty {
    pub id: PropertyId,
    pub device: String,
    pub group: String,
    pub value: f64,
    pub range: NumberRange,
    pub format: &'static str,
    pub state: PropertyState,
}

impl NumberProperty {
    pub fn new(
        id: PropertyId,
        device: &str,
        group: &str,
        range: NumberRange,
        format: &'static str,
    ) -> Self {
        Self {
            id,
            device: device.to_string(),
            group: group.to_string(),
            value: 0.0,
            range,
            format,
            state: PropertyState::Idle,
        }
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }
}

/// A one-element switch property.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SwitchProperty {
    pub id: PropertyId,
    pub device: String,
    pub group: String,
    /// Whether the switch element is on.
    pub active: bool,
    pub state: PropertyState,
}

impl SwitchProperty {
    pub fn new(id: PropertyId, device: &str, group: &str) -> Self {
        Self {
            id,
            device: device.to_string(),
            group: group.to_string(),
            active: false,
            state: PropertyState::Idle,
        }
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }
}
