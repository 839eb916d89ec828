mod add;
mod categories;
mod delete;
mod export;
mod list;

use cz_core::entities::Deduction;
use cz_core::ledger::{CollectionTotals, DeductionSummary};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DeductionCommands;
use crate::commands::collection::fetch_people;
use crate::commands::shared::failure::backend_failure_or;
use crate::context::AppContext;

/// Shown for a 403 on deduction endpoints that carries no message.
pub(crate) const NOT_ASSIGNED: &str =
    "This event is not assigned to you. Please contact Super Admin.";

/// Handle `cz deduction <subcommand>`.
pub async fn handle(
    action: &DeductionCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DeductionCommands::List { event } => list::run(event.as_deref(), ctx, flags).await,
        DeductionCommands::Add {
            name,
            amount,
            category,
            description,
            date,
            event,
        } => {
            let fields = add::NewExpense {
                name,
                amount: *amount,
                category: category.as_deref(),
                description: description.as_deref(),
                date: *date,
                event: event.as_deref(),
            };
            add::run(&fields, ctx, flags).await
        }
        DeductionCommands::Delete { id } => delete::run(id, ctx, flags).await,
        DeductionCommands::Categories { event } => {
            categories::run(event.as_deref(), ctx, flags).await
        }
        DeductionCommands::Export { event, out } => {
            export::run(event.as_deref(), out.as_deref(), ctx, flags).await
        }
    }
}

/// An event's expenses and the balance against its realized cash.
pub(crate) struct ExpenseSheet {
    pub event_id: String,
    pub deductions: Vec<Deduction>,
    pub summary: DeductionSummary,
}

pub(crate) async fn fetch_sheet(
    ctx: &mut AppContext,
    explicit: Option<&str>,
) -> anyhow::Result<ExpenseSheet> {
    let event_id = ctx.event_id(explicit)?;
    let deductions = ctx
        .client
        .list_deductions(&event_id)
        .await
        .map_err(|error| backend_failure_or(error, NOT_ASSIGNED, "Error fetching data"))?;
    let (event_id, people) = fetch_people(ctx, Some(&event_id)).await?;
    let cash = CollectionTotals::from_records(&people).total_cash;

    Ok(ExpenseSheet {
        summary: DeductionSummary::compute(cash, &deductions),
        event_id,
        deductions,
    })
}
