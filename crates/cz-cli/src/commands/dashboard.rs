use serde::Serialize;

use cz_core::entities::Event;
use cz_core::ledger::DashboardSummary;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DashboardArgs;
use crate::commands::shared::failure::backend_failure;
use crate::context::AppContext;
use crate::output::output_summary;
use crate::views::money;

#[derive(Serialize)]
struct DashboardResponse {
    event_id: String,
    event_name: Option<String>,
    #[serde(flatten)]
    summary: DashboardSummary,
}

/// Handle `cz dashboard`. Open to everyone; the token is sent when present.
pub async fn handle(args: &DashboardArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let event_id = ctx.event_id(args.event.as_deref())?;

    let (people, deductions, events) = tokio::join!(
        ctx.client.list_people(&event_id),
        ctx.client.list_deductions(&event_id),
        ctx.client.public_events(),
    );
    let people = people.map_err(|error| backend_failure(error, "Error fetching dashboard data"))?;
    let deductions =
        deductions.map_err(|error| backend_failure(error, "Error fetching dashboard data"))?;
    let event_name = events
        .ok()
        .and_then(|events| Event::find(&events, &event_id).map(|event| event.name.clone()));

    let summary = DashboardSummary::from_records(&people, &deductions);
    let symbol = ctx.currency();
    let lines = vec![
        ("Collections".to_string(), summary.total_collections_count.to_string()),
        ("Total Paid".to_string(), money(symbol, summary.total_paid)),
        ("Total Due".to_string(), money(symbol, summary.total_due)),
        ("Total Pending".to_string(), money(symbol, summary.total_pending)),
        ("Deductions".to_string(), summary.total_deductions_count.to_string()),
        ("Total Deductions".to_string(), money(symbol, summary.total_deductions)),
        ("Balance".to_string(), money(symbol, summary.balance)),
    ];
    let title = format!(
        "Dashboard for {}",
        event_name.as_deref().unwrap_or(event_id.as_str())
    );

    let response = DashboardResponse {
        event_id,
        event_name,
        summary,
    };
    output_summary(&title, &response, &lines, flags.format)
}
