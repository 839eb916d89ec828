use std::path::PathBuf;

use clap::Subcommand;

/// Super-admin console.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// Admin accounts.
    Admins {
        #[command(subcommand)]
        action: AdminsCommands,
    },
    /// Events.
    Events {
        #[command(subcommand)]
        action: AdminEventCommands,
    },
    /// Expense categories.
    Categories {
        #[command(subcommand)]
        action: AdminCategoryCommands,
    },
    /// Audit log.
    Logs {
        #[command(subcommand)]
        action: LogCommands,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum AdminsCommands {
    /// List admin accounts.
    List,
    /// Create an admin account.
    Create {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        email: Option<String>,
        /// Event to assign (repeatable)
        #[arg(long = "event")]
        events: Vec<String>,
    },
    /// Change an admin's username, email, or password.
    Update {
        id: String,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// Allow an admin to log in again.
    Activate { id: String },
    /// Block an admin from logging in.
    Deactivate { id: String },
    /// Replace the events assigned to an admin.
    Assign {
        id: String,
        /// Event to assign (repeatable; none clears all assignments)
        #[arg(long = "event")]
        events: Vec<String>,
    },
    /// Delete an admin account.
    Delete { id: String },
}

#[derive(Clone, Debug, Subcommand)]
pub enum AdminEventCommands {
    /// List all events, including inactive ones.
    List,
    /// Create an event.
    Create {
        #[arg(long)]
        name: String,
    },
    /// Rename an event.
    Rename {
        id: String,
        #[arg(long)]
        name: String,
    },
    /// Open an event for login.
    Activate { id: String },
    /// Close an event for login.
    Deactivate { id: String },
    /// Delete an event.
    Delete { id: String },
}

#[derive(Clone, Debug, Subcommand)]
pub enum AdminCategoryCommands {
    /// List expense categories.
    List {
        /// Only categories of this event
        #[arg(long)]
        event: Option<String>,
    },
    /// Create a category for an event.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        event: String,
    },
    /// Rename a category.
    Rename {
        id: String,
        #[arg(long)]
        name: String,
    },
    /// Delete a category. Existing expenses keep their category name.
    Delete { id: String },
}

#[derive(Clone, Debug, Subcommand)]
pub enum LogCommands {
    /// Show the audit log.
    List,
    /// Write the audit log report to a text file.
    Export {
        #[arg(long)]
        out: Option<PathBuf>,
    },
}
