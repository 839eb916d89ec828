use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;
use cz_core::Amount;

/// Payment record commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CollectionCommands {
    /// List records with collection totals.
    List {
        /// Event to list (defaults to the selected event)
        #[arg(long)]
        event: Option<String>,
        /// Hide rows below this amount. Totals still cover every record.
        #[arg(long)]
        min_amount: Option<Amount>,
    },
    /// Record a payment.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        amount: Amount,
        /// Paid, Credit, Unpaid, or Pending
        #[arg(long)]
        status: Option<String>,
        /// Cash, GPay, Bank, or Other
        #[arg(long)]
        method: Option<String>,
        /// Payment date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        event: Option<String>,
    },
    /// Edit a payment record. Omitted fields keep their current value.
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        amount: Option<Amount>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        method: Option<String>,
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Event the record belongs to (defaults to the selected event)
        #[arg(long)]
        event: Option<String>,
    },
    /// Delete a payment record.
    Delete { id: String },
    /// Write the collection report to a text file.
    Export {
        #[arg(long)]
        event: Option<String>,
        #[arg(long)]
        min_amount: Option<Amount>,
        /// Output file (defaults to CHALLENGERZ_Collection.txt in the reports dir)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}
