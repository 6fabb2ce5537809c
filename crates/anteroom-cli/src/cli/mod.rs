//! CLI entry and dispatch.

use std::sync::Arc;

use anteroom_core::auth::HostedAuthClient;
use anteroom_core::config::Config;
use anyhow::{Context, Result};
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(name = "anteroom")]
#[command(version = "1.0")]
#[command(about = "Terminal sign-in for the Anteroom identity provider")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the hosted provider base URL from config
    #[arg(long, value_name = "URL", env = "ANTEROOM_PROVIDER_URL")]
    provider_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive login screen (default)
    Login,
    /// Show the currently signed-in account
    Whoami,
    /// Clear the current session
    Logout,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Print the effective configuration as TOML
    Show,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let _logging_guard = crate::logging::init();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let mut config = Config::load().context("load config")?;

    if let Some(url) = cli.provider_url {
        config.provider.base_url = url;
    }

    match cli.command {
        // Config commands never touch the provider.
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Show => commands::config::show(&config),
        },
        command => {
            let auth: Arc<dyn anteroom_core::auth::AuthCapability> =
                Arc::new(HostedAuthClient::new(&config.provider).context("create auth client")?);
            match command {
                None | Some(Commands::Login) => commands::login::run(&config, auth).await,
                Some(Commands::Whoami) => commands::session::whoami(auth.as_ref()).await,
                Some(Commands::Logout) => commands::session::logout(auth.as_ref()).await,
                Some(Commands::Config { .. }) => unreachable!("handled above"),
            }
        }
    }
}
