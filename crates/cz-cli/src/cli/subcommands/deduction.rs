use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;
use cz_core::Amount;

/// Expense commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DeductionCommands {
    /// List expenses with the financial summary.
    List {
        #[arg(long)]
        event: Option<String>,
    },
    /// Record an expense.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        amount: Amount,
        /// Defaults to the event's first category, else Other
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        event: Option<String>,
    },
    /// Delete an expense.
    Delete { id: String },
    /// List the expense categories of an event.
    Categories {
        #[arg(long)]
        event: Option<String>,
    },
    /// Write the deduction report to a text file.
    Export {
        #[arg(long)]
        event: Option<String>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}
