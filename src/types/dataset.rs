//! Import dataset format
//!
//! A JSON document listing the rows to load into the entity store. Every
//! section is optional so a dataset can carry a single community or just a
//! batch of new registrations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub communities: Vec<CommunityRecord>,
    pub group_categories: Vec<ReferenceRecord>,
    pub regions: Vec<ReferenceRecord>,
    pub event_categories: Vec<ReferenceRecord>,
    pub users: Vec<UserRecord>,
    pub groups: Vec<GroupRecord>,
    pub group_members: Vec<GroupMemberRecord>,
    pub events: Vec<EventRecord>,
    pub event_attendees: Vec<EventAttendeeRecord>,
}

impl Dataset {
    /// Parse a dataset from JSON text
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Total number of rows across all sections
    pub fn row_count(&self) -> usize {
        self.communities.len()
            + self.group_categories.len()
            + self.regions.len()
            + self.event_categories.len()
            + self.users.len()
            + self.groups.len()
            + self.group_members.len()
            + self.events.len()
            + self.event_attendees.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityRecord {
    pub community_id: Uuid,
    pub name: String,
    pub display_name: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// Group category, region or event category: an id → display name entry
/// owned by one community
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    pub id: Uuid,
    pub community_id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: Uuid,
    pub username: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub group_id: Uuid,
    pub community_id: Uuid,
    pub group_category_id: Uuid,
    #[serde(default)]
    pub region_id: Option<Uuid>,
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMemberRecord {
    pub group_id: Uuid,
    pub user_id: Uuid,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub event_id: Uuid,
    pub group_id: Uuid,
    pub event_category_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub canceled: bool,
    #[serde(default)]
    pub deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventAttendeeRecord {
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub registered_at: DateTime<Utc>,
}
