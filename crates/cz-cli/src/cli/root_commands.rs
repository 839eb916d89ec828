use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AdminCommands, AuthCommands, CollectionCommands, ConfigCommands, DeductionCommands,
    EventCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Log in, log out, and inspect the stored session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Pick the event the other commands work on.
    Event {
        #[command(subcommand)]
        action: EventCommands,
    },
    /// Payment records for the selected event.
    Collection {
        #[command(subcommand)]
        action: CollectionCommands,
    },
    /// Expenses charged against the selected event.
    Deduction {
        #[command(subcommand)]
        action: DeductionCommands,
    },
    /// Financial summary for an event.
    Dashboard(DashboardArgs),
    /// Super-admin console: admins, events, categories, audit log.
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
    /// Inspect or scaffold configuration.
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    /// Event to summarize (defaults to the selected event)
    #[arg(long)]
    pub event: Option<String>,
}
