//! General console preferences.

use serde::{Deserialize, Serialize};

fn default_currency_symbol() -> String {
    "₹".to_string()
}

fn default_reports_dir() -> String {
    ".".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Prefix for amounts in tables and reports.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Directory exported reports are written to when `--out` is not given.
    #[serde(default = "default_reports_dir")]
    pub reports_dir: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            reports_dir: default_reports_dir(),
        }
    }
}
