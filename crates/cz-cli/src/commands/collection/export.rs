use std::path::Path;

use cz_core::Amount;
use cz_core::ledger::{CollectionView, MinAmount};

use crate::cli::GlobalFlags;
use crate::commands::collection::fetch_people;
use crate::context::AppContext;
use crate::output::{Notice, notify};
use crate::report::{COLLECTION_REPORT_FILE, collection_report, report_path, write_report};

pub async fn run(
    event: Option<&str>,
    min_amount: Option<Amount>,
    out: Option<&Path>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let threshold = MinAmount::new(min_amount.unwrap_or_default())?;
    let (_, records) = fetch_people(ctx, event).await?;
    let view = CollectionView::build(&records, threshold);

    let path = report_path(out, &ctx.reports_dir(), COLLECTION_REPORT_FILE);
    write_report(&collection_report(&view), &path)?;

    notify(
        &Notice::new(format!("Collection report written to {}", path.display())),
        flags,
    )
}
