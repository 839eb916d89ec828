use chrono::{Local, NaiveDate};

use cz_core::Amount;
use cz_core::entities::{ExpenseCategory, FALLBACK_CATEGORY};
use cz_core::requests::DeductionInput;

use crate::cli::GlobalFlags;
use crate::commands::deduction::NOT_ASSIGNED;
use crate::commands::shared::failure::backend_failure_or;
use crate::context::AppContext;
use crate::output::{Notice, notify};

pub struct NewExpense<'a> {
    pub name: &'a str,
    pub amount: Amount,
    pub category: Option<&'a str>,
    pub description: Option<&'a str>,
    pub date: Option<NaiveDate>,
    pub event: Option<&'a str>,
}

pub async fn run(fields: &NewExpense<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_manager()?;
    let event_id = ctx.event_id_for_entry(
        fields.event,
        "Please select an event before adding an expense.",
    )?;

    let category = match fields.category.map(str::trim).filter(|c| !c.is_empty()) {
        Some(category) => category.to_string(),
        None => match ctx.client.event_categories(&event_id).await {
            Ok(categories) => default_category(&categories),
            Err(error) => {
                tracing::warn!(%error, "could not fetch categories; using {FALLBACK_CATEGORY}");
                FALLBACK_CATEGORY.to_string()
            }
        },
    };

    let input = DeductionInput {
        event_id,
        name: fields.name.trim().to_string(),
        amount: fields.amount,
        category,
        description: fields.description.unwrap_or_default().trim().to_string(),
        date: fields.date.unwrap_or_else(|| Local::now().date_naive()),
    };
    input.validate()?;

    ctx.client
        .create_deduction(&input)
        .await
        .map_err(|error| backend_failure_or(error, NOT_ASSIGNED, "Error adding deduction"))?;

    notify(&Notice::new("Expense added successfully"), flags)
}

/// The event's first category, else the fallback.
fn default_category(categories: &[ExpenseCategory]) -> String {
    categories
        .first()
        .map_or_else(|| FALLBACK_CATEGORY.to_string(), |category| category.name.clone())
}
