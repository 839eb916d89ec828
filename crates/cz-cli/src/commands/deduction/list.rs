use serde::Serialize;

use cz_core::ledger::{CategoryTotal, DeductionSummary, category_breakdown};

use crate::cli::GlobalFlags;
use crate::commands::deduction::fetch_sheet;
use crate::context::AppContext;
use crate::output::{ListView, output_list};
use crate::views::{DeductionRow, money};

#[derive(Serialize)]
struct DeductionListSummary {
    event_id: String,
    #[serde(flatten)]
    summary: DeductionSummary,
    categories: Vec<CategoryTotal>,
}

pub async fn run(
    event: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let sheet = fetch_sheet(ctx, event).await?;
    let categories = category_breakdown(&sheet.deductions);

    let symbol = ctx.currency();
    let mut summary_lines = vec![
        ("Total Collection".to_string(), money(symbol, sheet.summary.total_collection)),
        ("Total Expenses".to_string(), money(symbol, sheet.summary.total_deductions)),
        ("Net Balance".to_string(), money(symbol, sheet.summary.balance)),
        ("Expenses".to_string(), sheet.summary.count.to_string()),
    ];
    summary_lines.extend(categories.iter().map(|entry| {
        (
            format!("  {}", entry.category),
            format!("{} ({})", money(symbol, entry.total), entry.count),
        )
    }));

    let summary = DeductionListSummary {
        event_id: sheet.event_id.clone(),
        summary: sheet.summary,
        categories,
    };
    let list = ListView {
        title: format!("Expenses for event {}", sheet.event_id),
        summary: &summary,
        summary_lines,
        rows: DeductionRow::numbered(&sheet.deductions),
    };
    output_list(&list, flags.format)
}
