use serde::{Deserialize, Serialize};

use crate::wire::{EventRef, optional_event_ref};

/// An expense category available to one event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpenseCategory {
    #[serde(rename(deserialize = "_id"), alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(
        rename(deserialize = "eventId"),
        default,
        deserialize_with = "optional_event_ref"
    )]
    pub event: Option<EventRef>,
}
