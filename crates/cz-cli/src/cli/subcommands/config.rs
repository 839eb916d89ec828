use clap::Subcommand;

/// Configuration commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration.
    Show,
    /// Write a default config file.
    Init {
        /// Write the user-level file instead of .challengerz/config.toml
        #[arg(long)]
        global: bool,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
