use serde::{Deserialize, Serialize};

use crate::wire::default_true;

/// A fundraising or challenge occasion that scopes collections and expenses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    #[serde(rename(deserialize = "_id"), alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(rename(deserialize = "isActive"), default = "default_true")]
    pub is_active: bool,
}

impl Event {
    /// Find an event by id in a fetched list.
    #[must_use]
    pub fn find<'a>(events: &'a [Self], id: &str) -> Option<&'a Self> {
        events.iter().find(|event| event.id == id)
    }
}
