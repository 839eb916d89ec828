use serde::{Deserialize, Serialize};

use crate::wire::{EventRef, default_true, non_empty_string};

/// An admin account managed from the super-admin console.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminAccount {
    #[serde(rename(deserialize = "_id"), alias = "id")]
    pub id: String,
    pub username: String,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub email: Option<String>,
    #[serde(rename(deserialize = "isActive"), default = "default_true")]
    pub is_active: bool,
    #[serde(rename(deserialize = "assignedEvents"), default)]
    pub assigned_events: Vec<EventRef>,
}

impl AdminAccount {
    /// Ids of the events this admin may act on.
    #[must_use]
    pub fn assigned_event_ids(&self) -> Vec<String> {
        self.assigned_events.iter().map(|e| e.id.clone()).collect()
    }

    /// Comma-separated event names for list views.
    #[must_use]
    pub fn assigned_event_names(&self) -> String {
        if self.assigned_events.is_empty() {
            return "-".to_string();
        }
        self.assigned_events
            .iter()
            .map(|e| e.name.as_deref().unwrap_or(&e.id))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
