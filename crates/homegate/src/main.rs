mod cli;
mod commands;
mod error;
mod output;

use std::io::IsTerminal;

use clap::Parser;
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

use homegate_api::RouterSession;
use homegate_config::{Config, ConfigStore};

use crate::cli::{Cli, Command, GlobalOpts};
use crate::error::CliError;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli) {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let store = ConfigStore::open_default();

    match cli.command {
        // Config and alias commands don't need a router connection
        Command::Config(args) => commands::config_cmd::handle(args, &store, &cli.global),
        Command::Alias(args) => commands::alias::handle(args, &store, &cli.global),

        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "homegate", &mut std::io::stdout());
            Ok(())
        }

        // All other commands talk to the router
        cmd => {
            let config = resolve_config(&store, &cli.global)?;
            let session = open_session(&config)?;

            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &session, &config, &cli.global)
        }
    }
}

/// Resolve credentials from the config store plus CLI flag overrides.
///
/// A missing config file on first run triggers the interactive setup
/// when a terminal is attached; otherwise the user is pointed at
/// `config init`. A `--gateway` override skips the file requirement.
fn resolve_config(store: &ConfigStore, global: &GlobalOpts) -> Result<Config, CliError> {
    if !store.exists() && global.gateway.is_none() {
        if std::io::stdin().is_terminal() {
            eprintln!("No configuration found -- running first-time setup.\n");
            commands::config_cmd::init(store)?;
        } else {
            return Err(CliError::NoConfig {
                path: store.path().display().to_string(),
            });
        }
    }

    let mut config = store.load()?;
    if let Some(ref gateway) = global.gateway {
        config.auth.gateway = gateway.clone();
    }
    if let Some(ref username) = global.username {
        config.auth.username = username.clone();
    }
    if let Some(ref password) = global.password {
        config.auth.password = password.clone();
    }
    Ok(config)
}

fn open_session(config: &Config) -> Result<RouterSession, CliError> {
    let session = RouterSession::connect(
        &config.auth.gateway,
        config.auth.username.clone(),
        SecretString::from(config.auth.password.clone()),
    )?;
    Ok(session)
}
