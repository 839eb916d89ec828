//! Payloads sent to the backend, in its camelCase wire format.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::entities::PaymentRecord;
use crate::enums::{EntryStatus, PaymentMethod};
use crate::errors::CoreError;
use crate::wire::non_empty_string;

/// Login form. `event_id` is required for admins, optional for super-admins.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub event_id: String,
}

/// Successful login response.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub username: String,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub event_id: Option<String>,
}

/// Create/update body for a payment record.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInput {
    pub event_id: String,
    pub name: String,
    pub amount: Amount,
    pub status: EntryStatus,
    pub payment_method: PaymentMethod,
    pub date: NaiveDate,
}

impl PaymentInput {
    /// Validate the fields an operator typed before sending anything.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation("name is required".into()));
        }
        if self.event_id.trim().is_empty() {
            return Err(CoreError::Validation(
                "Please select an event before adding a record.".into(),
            ));
        }
        Ok(())
    }

    /// Pre-fill an edit form from an existing record.
    ///
    /// The record's own event wins over the currently selected one; a record
    /// whose event was never populated falls back to `selected_event`.
    #[must_use]
    pub fn from_record(record: &PaymentRecord, selected_event: &str, today: NaiveDate) -> Self {
        Self {
            event_id: record
                .event_id()
                .unwrap_or(selected_event)
                .to_string(),
            name: record.name.clone(),
            amount: record.amount,
            status: record.status.as_entry(),
            payment_method: record.payment_method,
            date: record.date.unwrap_or(today),
        }
    }
}

/// Partial edit applied on top of [`PaymentInput::from_record`].
#[derive(Debug, Clone, Default)]
pub struct PaymentPatch {
    pub name: Option<String>,
    pub amount: Option<Amount>,
    pub status: Option<EntryStatus>,
    pub payment_method: Option<PaymentMethod>,
    pub date: Option<NaiveDate>,
}

impl PaymentPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.amount.is_none()
            && self.status.is_none()
            && self.payment_method.is_none()
            && self.date.is_none()
    }

    #[must_use]
    pub fn apply(self, mut input: PaymentInput) -> PaymentInput {
        if let Some(name) = self.name {
            input.name = name;
        }
        if let Some(amount) = self.amount {
            input.amount = amount;
        }
        if let Some(status) = self.status {
            input.status = status;
        }
        if let Some(method) = self.payment_method {
            input.payment_method = method;
        }
        if let Some(date) = self.date {
            input.date = date;
        }
        input
    }
}

/// Create body for a deduction.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeductionInput {
    pub event_id: String,
    pub name: String,
    pub amount: Amount,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

impl DeductionInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation("expense name is required".into()));
        }
        if self.event_id.trim().is_empty() {
            return Err(CoreError::Validation(
                "Please select an event before adding an expense.".into(),
            ));
        }
        Ok(())
    }
}

/// Create body for an admin account.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAdmin {
    pub username: String,
    pub password: String,
    pub email: String,
    pub assigned_events: Vec<String>,
}

/// Partial update for an admin account. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdminUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_events: Option<Vec<String>>,
}

/// Create body for an event.
#[derive(Debug, Clone, Serialize)]
pub struct NewEvent {
    pub name: String,
}

/// Partial update for an event.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Create body for an expense category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub event_id: String,
}

/// Rename body for an expense category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryUpdate {
    pub name: String,
}
