//! Roles, payment statuses, payment methods, and cash pools.
//!
//! Read-side statuses (`PaymentStatus`) are normalized from the backend's
//! overlapping `status` string and legacy `credit` flag. Write-side statuses
//! (`EntryStatus`) are the four values an operator can submit.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Role granted by the backend at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[serde(rename = "superadmin")]
    SuperAdmin,
}

impl Role {
    /// Parse a backend role string. Unknown roles are treated as no role.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "admin" => Some(Self::Admin),
            "superadmin" => Some(Self::SuperAdmin),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::SuperAdmin => "superadmin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CashPool
// ---------------------------------------------------------------------------

/// The aggregation bucket a payment record contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CashPool {
    /// Realized cash.
    Cash,
    /// Owed but not collected (credit or unpaid).
    Due,
    /// Awaiting confirmation.
    Pending,
}

// ---------------------------------------------------------------------------
// PaymentStatus
// ---------------------------------------------------------------------------

/// Normalized status of a payment record.
///
/// ```text
/// credit flag + "Unpaid"  → Unpaid
/// credit flag             → Credit
/// "Credit"                → Credit
/// "Unpaid"                → Unpaid
/// "Pending"               → Pending
/// "Paid"                  → Paid
/// anything else           → Unrecorded
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Credit,
    Unpaid,
    Pending,
    /// Missing or unknown status with no credit flag. Counted, never summed.
    Unrecorded,
}

impl PaymentStatus {
    /// Fold the wire `status` string and legacy `credit` flag into one variant.
    #[must_use]
    pub fn normalize(status: Option<&str>, credit_flag: bool) -> Self {
        if credit_flag {
            return if status == Some("Unpaid") {
                Self::Unpaid
            } else {
                Self::Credit
            };
        }
        match status {
            Some("Credit") => Self::Credit,
            Some("Unpaid") => Self::Unpaid,
            Some("Pending") => Self::Pending,
            Some("Paid") => Self::Paid,
            _ => Self::Unrecorded,
        }
    }

    /// The pool this status sums into, if any.
    #[must_use]
    pub const fn pool(self) -> Option<CashPool> {
        match self {
            Self::Paid => Some(CashPool::Cash),
            Self::Credit | Self::Unpaid => Some(CashPool::Due),
            Self::Pending => Some(CashPool::Pending),
            Self::Unrecorded => None,
        }
    }

    /// Label shown in list views and reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unpaid => "Unpaid",
            Self::Credit => "Credit",
            Self::Pending => "Pending",
            Self::Paid | Self::Unrecorded => "Paid",
        }
    }

    /// The status to pre-fill when editing a record.
    #[must_use]
    pub const fn as_entry(self) -> EntryStatus {
        match self {
            Self::Credit => EntryStatus::Credit,
            Self::Unpaid => EntryStatus::Unpaid,
            Self::Pending => EntryStatus::Pending,
            Self::Paid | Self::Unrecorded => EntryStatus::Paid,
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// EntryStatus
// ---------------------------------------------------------------------------

/// Status an operator submits when recording or editing a payment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryStatus {
    #[default]
    Paid,
    Credit,
    Unpaid,
    Pending,
}

impl EntryStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Credit => "Credit",
            Self::Unpaid => "Unpaid",
            Self::Pending => "Pending",
        }
    }
}

impl From<EntryStatus> for PaymentStatus {
    fn from(value: EntryStatus) -> Self {
        match value {
            EntryStatus::Paid => Self::Paid,
            EntryStatus::Credit => Self::Credit,
            EntryStatus::Unpaid => Self::Unpaid,
            EntryStatus::Pending => Self::Pending,
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PaymentMethod
// ---------------------------------------------------------------------------

/// How a participant paid. Missing methods read as `Cash`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    Cash,
    GPay,
    Bank,
    #[serde(other)]
    Other,
}

impl PaymentMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::GPay => "GPay",
            Self::Bank => "Bank",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
