//! # cz-core
//!
//! Core types and the financial rules for the CHALLENGERZ collections console.
//!
//! This crate provides the foundational types shared across all `cz-*` crates:
//! - Entity structs for events, payment records, deductions, categories,
//!   admin accounts, and audit log entries
//! - Status, role, and payment method enums
//! - [`Amount`], the lenient money type used for every backend amount
//! - Request payloads sent to the backend
//! - Aggregation of collection and deduction totals ([`ledger`])
//! - Cross-cutting error types

pub mod amount;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ledger;
pub mod requests;
pub mod wire;

pub use amount::Amount;
pub use errors::CoreError;
