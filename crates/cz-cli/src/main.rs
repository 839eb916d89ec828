use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;
mod report;
mod ui;
mod views;

use cli::subcommands::ConfigCommands;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("cz error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    if let cli::Commands::Config {
        action: ConfigCommands::Init { global, force },
    } = &cli.command
    {
        return commands::config::init(*global, *force, &flags);
    }

    let mut config =
        cz_config::CzConfig::load_with_dotenv().context("failed to load configuration")?;
    if let Some(url) = &flags.api_url {
        config.api.base_url.clone_from(url);
    }
    config.validate().context("invalid configuration")?;

    if let cli::Commands::Config {
        action: ConfigCommands::Show,
    } = &cli.command
    {
        return commands::config::show(&config, &flags);
    }

    context::warn_unconfigured(&config);

    let mut ctx = context::AppContext::init(config)
        .context("failed to initialize the console context")?;

    commands::dispatch::dispatch(cli.command, &mut ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CHALLENGERZ_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
