use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wire::non_empty_string;

/// An append-only audit record written by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditLogEntry {
    #[serde(rename(deserialize = "_id"), alias = "id")]
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(
        rename(deserialize = "performedByName"),
        default,
        deserialize_with = "non_empty_string"
    )]
    pub performed_by_name: Option<String>,
    pub action: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

impl AuditLogEntry {
    #[must_use]
    pub fn performed_by(&self) -> &str {
        self.performed_by_name.as_deref().unwrap_or("Unknown")
    }

    /// Details as compact JSON, or `-` when the backend recorded none.
    #[must_use]
    pub fn details_text(&self) -> String {
        match &self.details {
            None | Some(serde_json::Value::Null) => "-".to_string(),
            Some(value) => value.to_string(),
        }
    }
}
