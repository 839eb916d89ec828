use clap::{Args, Subcommand};

/// Session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in to the backend and store the session.
    Login(LoginArgs),
    /// Clear the stored credentials. The selected event is kept.
    Logout,
    /// Show who is logged in and which event is selected.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long, env = "CHALLENGERZ_PASSWORD", hide_env_values = true)]
    pub password: String,
    /// Event to work on (required for admins)
    #[arg(long)]
    pub event: Option<String>,
}
