use serde::de::DeserializeOwned;

use cz_core::enums::{EntryStatus, PaymentMethod};

const STATUS_CHOICES: &[&str] = &["Paid", "Credit", "Unpaid", "Pending"];
const METHOD_CHOICES: &[&str] = &["Cash", "GPay", "Bank", "Other"];

/// Parse one of `choices` case-insensitively, then decode its wire name.
pub fn parse_choice<T>(raw: &str, field: &str, choices: &[&str]) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let wire = choices
        .iter()
        .find(|choice| choice.eq_ignore_ascii_case(raw.trim()))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "invalid {field} '{raw}': expected one of {}",
                choices.join(", ")
            )
        })?;
    serde_json::from_str(&format!("\"{wire}\""))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

pub fn parse_status(raw: &str) -> anyhow::Result<EntryStatus> {
    parse_choice(raw, "status", STATUS_CHOICES)
}

pub fn parse_method(raw: &str) -> anyhow::Result<PaymentMethod> {
    parse_choice(raw, "payment method", METHOD_CHOICES)
}

/// Parse an optional flag value.
pub fn parse_opt<T>(
    raw: Option<&str>,
    parse: fn(&str) -> anyhow::Result<T>,
) -> anyhow::Result<Option<T>> {
    raw.map(parse).transpose()
}
