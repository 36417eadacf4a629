//! starter - persisted client state CLI
//!
//! Drives the session mirror and theme preference store against the same
//! on-disk records the app uses, printing results as JSON.
//!
//! # Examples
//!
//! ```bash
//! # Sign in and persist the session
//! starter session login --email ann@x.com --password pw
//!
//! # Check where the index screen redirects
//! starter route home --pretty
//!
//! # Switch to dark mode
//! starter theme set dark
//! ```

mod cli;
mod commands;
mod session_commands;
mod theme_commands;

use crate::{
    cli::Cli, commands::Commands, session_commands::SessionCommands,
    theme_commands::ThemeCommands,
};

use sk_auth::{MockAuthenticator, SignUpRequest};
use sk_cli::{App, Result as CliErrorResult, logger};
use sk_config::Config;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliErrorResult<String> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    // Explicit flag > config
    let storage_dir = match cli.data_dir {
        Some(dir) => dir,
        None => config.storage_path()?,
    };

    let authenticator =
        MockAuthenticator::new().with_latency(Duration::from_millis(config.auth.mock_latency_ms));
    let app = App::open(&storage_dir, authenticator).await?;

    let result = match cli.command {
        Commands::Session { action } => match action {
            SessionCommands::Show => app.session_show(),
            SessionCommands::Login { email, password } => app.login(&email, &password).await,
            SessionCommands::Register {
                name,
                email,
                password,
                confirm_password,
            } => {
                let request = SignUpRequest {
                    name,
                    email,
                    password,
                    confirm_password,
                };
                app.register(&request).await
            }
            SessionCommands::ResetPassword { email } => app.reset_password(&email).await,
            SessionCommands::Logout => app.logout().await,
        },

        Commands::Theme { action } => match action {
            ThemeCommands::Show { device_dark } => Ok(app.theme_show(device_dark)),
            ThemeCommands::Set { value, device_dark } => app.theme_set(&value, device_dark),
        },

        Commands::Route { route } => app.route(&route),
    };

    // Queued writes must land before the process exits, even on error.
    app.finish().await;

    let value = result?;
    let json = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(json)
}
