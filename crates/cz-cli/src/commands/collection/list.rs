use serde::Serialize;

use cz_core::Amount;
use cz_core::ledger::{CollectionTotals, CollectionView, MinAmount};

use crate::cli::GlobalFlags;
use crate::commands::collection::fetch_people;
use crate::context::AppContext;
use crate::output::{ListView, output_list};
use crate::views::{CollectionRow, money};

#[derive(Serialize)]
struct CollectionSummary {
    event_id: String,
    #[serde(flatten)]
    totals: CollectionTotals,
    min_amount: MinAmount,
    shown: usize,
}

pub async fn run(
    event: Option<&str>,
    min_amount: Option<Amount>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let threshold = MinAmount::new(min_amount.unwrap_or_default())?;
    let (event_id, records) = fetch_people(ctx, event).await?;
    let view = CollectionView::build(&records, threshold);

    let summary = CollectionSummary {
        event_id: event_id.clone(),
        totals: view.totals,
        min_amount: threshold,
        shown: view.rows.len(),
    };
    let symbol = ctx.currency();
    let mut summary_lines = vec![
        ("Cash".to_string(), money(symbol, view.totals.total_cash)),
        ("Due".to_string(), money(symbol, view.totals.total_credit)),
        ("Pending".to_string(), money(symbol, view.totals.total_pending)),
        ("Records".to_string(), view.totals.count.to_string()),
    ];
    if threshold != MinAmount::default() {
        summary_lines.push((
            "Shown".to_string(),
            format!("{} (amount >= {})", view.rows.len(), threshold.value()),
        ));
    }

    let list = ListView {
        title: format!("Collection for event {event_id}"),
        summary: &summary,
        summary_lines,
        rows: CollectionRow::numbered(&view.rows),
    };
    output_list(&list, flags.format)
}
