//! The login session persisted between runs.

use cz_core::enums::Role;
use serde::{Deserialize, Serialize};

/// Event ids older clients wrote when nothing was selected.
const PLACEHOLDER_EVENT_IDS: [&str; 3] = ["", "undefined", "null"];

/// Who is logged in and which event they are working on.
///
/// `role` is kept as the raw backend string so an unknown role survives a
/// round trip; [`Session::role`] parses it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
}

impl Session {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::parse)
    }

    /// The selected event, if it is a real id.
    #[must_use]
    pub fn event_id(&self) -> Option<&str> {
        self.event_id.as_deref().filter(|id| is_real_event_id(id))
    }

    /// Drop placeholder event ids and blank fields read from disk.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.event_id = self.event_id.filter(|id| is_real_event_id(id));
        self.token = self.token.filter(|t| !t.trim().is_empty());
        self.role = self.role.filter(|r| !r.trim().is_empty());
        self.username = self.username.filter(|u| !u.trim().is_empty());
        self
    }

    /// Clear the credentials. The event selection is kept.
    pub fn clear_credentials(&mut self) {
        self.token = None;
        self.role = None;
        self.username = None;
    }
}

/// Whether `id` names an event rather than a placeholder.
#[must_use]
pub fn is_real_event_id(id: &str) -> bool {
    !PLACEHOLDER_EVENT_IDS.contains(&id.trim())
}
