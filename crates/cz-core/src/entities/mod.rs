//! Entity structs for the CHALLENGERZ domain.
//!
//! Every entity decodes from the backend's camelCase, `_id`-keyed JSON and
//! serializes back out in `snake_case` for CLI output.

mod admin;
mod audit;
mod category;
mod deduction;
mod event;
mod payment;

pub use admin::AdminAccount;
pub use audit::AuditLogEntry;
pub use category::ExpenseCategory;
pub use deduction::{Deduction, FALLBACK_CATEGORY};
pub use event::Event;
pub use payment::PaymentRecord;
