use clap::Subcommand;

/// Event selection commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EventCommands {
    /// List the events open for login.
    List,
    /// Select the event the other commands work on.
    Select { id: String },
    /// Forget the selected event.
    Clear,
    /// Show the selected event.
    Current,
}
