use crate::cli::GlobalFlags;
use crate::cli::subcommands::LogCommands;
use crate::commands::shared::failure::detailed_failure;
use crate::context::AppContext;
use crate::output::{Notice, notify, output_rows};
use crate::report::{AUDIT_REPORT_FILE, audit_report, report_path, write_report};
use crate::views::AuditRow;

pub async fn run(action: &LogCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let entries = ctx
        .client
        .audit_logs()
        .await
        .map_err(|error| detailed_failure(&error, "Error fetching data"))?;

    match action {
        LogCommands::List => output_rows(&AuditRow::list(&entries), flags.format),
        LogCommands::Export { out } => {
            let path = report_path(out.as_deref(), &ctx.reports_dir(), AUDIT_REPORT_FILE);
            write_report(&audit_report(&entries), &path)?;
            notify(
                &Notice::new(format!("Audit log report written to {}", path.display())),
                flags,
            )
        }
    }
}
