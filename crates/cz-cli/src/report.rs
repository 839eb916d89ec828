//! Plain-text report documents written by the `export` commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Local};

use cz_core::entities::{AuditLogEntry, Deduction};
use cz_core::ledger::{CollectionView, DeductionSummary};
use cz_core::wire::display_date;

use crate::output::table::{TableOptions, render_pairs, render_table};
use crate::views::{grouped, local_time};

pub const COLLECTION_REPORT_FILE: &str = "CHALLENGERZ_Collection.txt";
pub const DEDUCTION_REPORT_FILE: &str = "CHALLENGERZ_Deductions.txt";
pub const AUDIT_REPORT_FILE: &str = "CHALLENGERZ_AuditLogs.txt";

const BRAND: &str = "CHALLENGERZ";

#[derive(Debug, Clone)]
pub struct Report {
    pub subtitle: &'static str,
    pub summary_heading: Option<&'static str>,
    pub summary: Vec<(String, String)>,
    pub headers: &'static [&'static str],
    pub rows: Vec<Vec<String>>,
}

impl Report {
    #[must_use]
    pub fn render(&self, generated: DateTime<Local>) -> String {
        let mut out = format!(
            "{BRAND}\n{}\nGenerated: {}\n",
            self.subtitle,
            generated.format("%Y-%m-%d %H:%M:%S")
        );
        if let Some(heading) = self.summary_heading {
            out.push('\n');
            out.push_str(heading);
            out.push('\n');
            out.push_str(&render_pairs(&self.summary));
            out.push('\n');
        }
        out.push('\n');
        if self.rows.is_empty() {
            out.push_str("(no rows)");
        } else {
            out.push_str(&render_table(self.headers, &self.rows, TableOptions::PLAIN));
        }
        out.push('\n');
        out
    }
}

/// The collection report covers the filtered rows; the summary covers every record.
#[must_use]
pub fn collection_report(view: &CollectionView<'_>) -> Report {
    let totals = view.totals;
    Report {
        subtitle: "Cash Collection Report",
        summary_heading: Some("COLLECTION SUMMARY"),
        summary: vec![
            ("Cash Collected:".into(), grouped(totals.total_cash)),
            ("Total Due:".into(), grouped(totals.total_credit)),
            ("Total Pending:".into(), grouped(totals.total_pending)),
        ],
        headers: &["#", "Date", "Name", "Amount", "Method", "Status"],
        rows: view
            .rows
            .iter()
            .enumerate()
            .map(|(idx, record)| {
                vec![
                    (idx + 1).to_string(),
                    display_date(record.date),
                    record.name.clone(),
                    grouped(record.amount),
                    record.payment_method.to_string(),
                    record.status.label().to_string(),
                ]
            })
            .collect(),
    }
}

#[must_use]
pub fn deduction_report(summary: &DeductionSummary, deductions: &[Deduction]) -> Report {
    Report {
        subtitle: "Expense & Deduction Report",
        summary_heading: Some("FINANCIAL SUMMARY"),
        summary: vec![
            ("Total Collection:".into(), grouped(summary.total_collection)),
            ("Total Expenses:".into(), grouped(summary.total_deductions)),
            ("Net Balance:".into(), grouped(summary.balance)),
        ],
        headers: &["#", "Date", "Expense Name", "Category", "Amount"],
        rows: deductions
            .iter()
            .enumerate()
            .map(|(idx, deduction)| {
                vec![
                    (idx + 1).to_string(),
                    display_date(deduction.date),
                    deduction.name.clone(),
                    deduction.category.clone(),
                    grouped(deduction.amount),
                ]
            })
            .collect(),
    }
}

#[must_use]
pub fn audit_report(entries: &[AuditLogEntry]) -> Report {
    Report {
        subtitle: "Audit Logs Report",
        summary_heading: None,
        summary: Vec::new(),
        headers: &["Time", "User", "Action", "Target", "Details"],
        rows: entries
            .iter()
            .map(|entry| {
                vec![
                    local_time(entry.timestamp),
                    entry.performed_by().to_string(),
                    entry.action.clone(),
                    entry.target.clone(),
                    entry.details_text(),
                ]
            })
            .collect(),
    }
}

/// `out` if given, else `file_name` under the configured reports directory.
#[must_use]
pub fn report_path(out: Option<&Path>, reports_dir: &Path, file_name: &str) -> PathBuf {
    out.map_or_else(|| reports_dir.join(file_name), Path::to_path_buf)
}

/// Render and write a report, creating parent directories as needed.
pub fn write_report(report: &Report, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, report.render(Local::now()))
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = report.rows.len(), "report written");
    Ok(())
}
