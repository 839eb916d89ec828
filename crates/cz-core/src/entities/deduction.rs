use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::wire::{EventRef, lenient_date, non_empty_string, optional_event_ref};

/// Category assigned when the backend has none on record.
pub const FALLBACK_CATEGORY: &str = "Other";

/// An expense charged against an event's collected funds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "DeductionWire")]
pub struct Deduction {
    pub id: String,
    pub event: Option<EventRef>,
    pub name: String,
    pub amount: Amount,
    pub category: String,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeductionWire {
    #[serde(rename = "_id", alias = "id")]
    id: String,
    #[serde(default, deserialize_with = "optional_event_ref")]
    event_id: Option<EventRef>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    amount: Amount,
    #[serde(default, deserialize_with = "non_empty_string")]
    category: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    description: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    date: Option<NaiveDate>,
}

impl From<DeductionWire> for Deduction {
    fn from(wire: DeductionWire) -> Self {
        Self {
            id: wire.id,
            event: wire.event_id,
            name: wire.name,
            amount: wire.amount,
            category: wire
                .category
                .unwrap_or_else(|| FALLBACK_CATEGORY.to_string()),
            description: wire.description,
            date: wire.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn missing_category_reads_as_other() {
        let deduction: Deduction = serde_json::from_value(json!({
            "_id": "d1",
            "eventId": "evt-1",
            "name": "Trophies",
            "amount": 1200,
            "description": ""
        }))
        .expect("deduction should decode");

        assert_eq!(deduction.category, "Other");
        assert!(deduction.description.is_none());
        assert_eq!(deduction.event, Some(EventRef::id("evt-1")));
    }

    #[test]
    fn non_numeric_amount_is_zero() {
        let deduction: Deduction = serde_json::from_value(json!({
            "_id": "d2",
            "name": "Misc",
            "amount": "abc",
            "category": "Food"
        }))
        .expect("deduction should decode");

        assert_eq!(deduction.amount, Amount::ZERO);
        assert_eq!(deduction.category, "Food");
    }
}
