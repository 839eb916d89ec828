use std::path::Path;

use crate::cli::GlobalFlags;
use crate::commands::deduction::fetch_sheet;
use crate::context::AppContext;
use crate::output::{Notice, notify};
use crate::report::{DEDUCTION_REPORT_FILE, deduction_report, report_path, write_report};

pub async fn run(
    event: Option<&str>,
    out: Option<&Path>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let sheet = fetch_sheet(ctx, event).await?;

    let path = report_path(out, &ctx.reports_dir(), DEDUCTION_REPORT_FILE);
    write_report(&deduction_report(&sheet.summary, &sheet.deductions), &path)?;

    notify(
        &Notice::new(format!("Deduction report written to {}", path.display())),
        flags,
    )
}
