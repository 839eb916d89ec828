use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::enums::{PaymentMethod, PaymentStatus};
use crate::wire::{EventRef, lenient_date, optional_event_ref, truthy};

/// A single payment entry from a participant ("person" on the backend).
///
/// Decodes from the wire form, folding `status` and the legacy `credit` flag
/// into one [`PaymentStatus`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "PaymentRecordWire")]
pub struct PaymentRecord {
    pub id: String,
    pub event: Option<EventRef>,
    pub name: String,
    pub amount: Amount,
    pub status: PaymentStatus,
    pub payment_method: PaymentMethod,
    pub date: Option<NaiveDate>,
}

impl PaymentRecord {
    #[must_use]
    pub fn event_id(&self) -> Option<&str> {
        self.event.as_ref().map(|e| e.id.as_str())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaymentRecordWire {
    #[serde(rename = "_id", alias = "id")]
    id: String,
    #[serde(default, deserialize_with = "optional_event_ref")]
    event_id: Option<EventRef>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    amount: Amount,
    #[serde(default)]
    status: Option<String>,
    #[serde(default, deserialize_with = "truthy")]
    credit: bool,
    #[serde(default)]
    payment_method: Option<PaymentMethod>,
    #[serde(default, deserialize_with = "lenient_date")]
    date: Option<NaiveDate>,
}

impl From<PaymentRecordWire> for PaymentRecord {
    fn from(wire: PaymentRecordWire) -> Self {
        Self {
            id: wire.id,
            event: wire.event_id,
            name: wire.name,
            amount: wire.amount,
            status: PaymentStatus::normalize(wire.status.as_deref(), wire.credit),
            payment_method: wire.payment_method.unwrap_or_default(),
            date: wire.date,
        }
    }
}
