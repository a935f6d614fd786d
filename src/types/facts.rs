//! Fact model for the statistics engine
//!
//! A fact is one countable unit of activity (a group creation, a membership
//! join, a published event, an attendee registration) carrying the instant used
//! for bucketing and the labels it can be broken down by.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Dimension a fact can be broken down along
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Category of the group itself (groups, members)
    Category,
    /// Region of the group itself (groups, members)
    Region,
    /// Category of the event (events, attendees)
    EventCategory,
    /// Category of the hosting group (events, attendees)
    GroupCategory,
    /// Region of the hosting group (events, attendees)
    GroupRegion,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Category => "category",
            Axis::Region => "region",
            Axis::EventCategory => "event_category",
            Axis::GroupCategory => "group_category",
            Axis::GroupRegion => "group_region",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entity family covered by the community report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Groups,
    Members,
    Events,
    Attendees,
}

const GROUP_AXES: &[Axis] = &[Axis::Category, Axis::Region];
const EVENT_AXES: &[Axis] = &[Axis::EventCategory, Axis::GroupCategory, Axis::GroupRegion];

impl Family {
    pub const ALL: [Family; 4] = [
        Family::Groups,
        Family::Members,
        Family::Events,
        Family::Attendees,
    ];

    /// Axes relevant to this family, in report order
    pub fn axes(&self) -> &'static [Axis] {
        match self {
            Family::Groups | Family::Members => GROUP_AXES,
            Family::Events | Family::Attendees => EVENT_AXES,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Groups => "groups",
            Family::Members => "members",
            Family::Events => "events",
            Family::Attendees => "attendees",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which instant an attendee fact is bucketed by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendeeTimeBasis {
    /// When the attendee registered (same convention as membership join)
    #[default]
    Registration,
    /// When the attended event starts
    EventStart,
}

impl FromStr for AttendeeTimeBasis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "registration" => Ok(AttendeeTimeBasis::Registration),
            "event-start" => Ok(AttendeeTimeBasis::EventStart),
            other => Err(format!(
                "unknown attendee time basis '{}' (expected registration or event-start)",
                other
            )),
        }
    }
}

/// One timestamped, labeled unit of countable activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub timestamp: DateTime<Utc>,
    /// Axes without a value are simply absent
    pub labels: BTreeMap<Axis, String>,
}

impl Fact {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            labels: BTreeMap::new(),
        }
    }

    /// Attach a label, dropping the axis entirely when there is no value
    pub fn with_label(mut self, axis: Axis, label: Option<String>) -> Self {
        if let Some(label) = label {
            self.labels.insert(axis, label);
        }
        self
    }

    pub fn label(&self, axis: Axis) -> Option<&str> {
        self.labels.get(&axis).map(String::as_str)
    }
}
