//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use mxlogin_core::config::Config;

mod commands;

#[derive(Parser)]
#[command(name = "mxlogin")]
#[command(version)]
#[command(about = "Terminal login client for a Maximo OSLC endpoint")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Submit a login non-interactively and print the outcome
    Login {
        /// Username for the maxauth header
        #[arg(short, long)]
        username: String,

        /// Password for the maxauth header
        #[arg(short, long)]
        password: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the resolved config file path
    Path,
}

/// Parses arguments and dispatches. No subcommand mounts the login screen.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // `config path` must work without touching the log directory.
    if let Some(Commands::Config { command }) = &cli.command {
        return match command {
            ConfigCommands::Path => commands::config_path(),
        };
    }

    let _log_guard = mxlogin_core::logging::init().context("Failed to initialize logging")?;
    let config = Config::load()?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    match cli.command {
        None => runtime.block_on(mxlogin_tui::run_login_screen(&config)),
        Some(Commands::Login { username, password }) => {
            runtime.block_on(commands::login(&config, username, password))
        }
        Some(Commands::Config { .. }) => unreachable!("handled above"),
    }
}
