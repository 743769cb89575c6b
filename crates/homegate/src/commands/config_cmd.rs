//! Config subcommand handlers.

use dialoguer::Input;

use homegate_config::{Auth, ConfigStore};
use homegate_core::is_valid_gateway;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util::prompt_err;

// ── Helpers ─────────────────────────────────────────────────────────

/// Format config for display, masking the password.
fn format_config_redacted(cfg: &homegate_config::Config) -> String {
    use std::fmt::Write;
    let mut out = String::new();

    let _ = writeln!(out, "[Auth]");
    let _ = writeln!(out, "gateway = \"{}\"", cfg.auth.gateway);
    let _ = writeln!(out, "username = \"{}\"", cfg.auth.username);
    let _ = writeln!(out, "password = \"****\"");

    if !cfg.aliases.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "[Alias]");
        for (mac, name) in &cfg.aliases {
            let _ = writeln!(out, "\"{mac}\" = \"{name}\"");
        }
    }

    out
}

// ── Handlers ────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, store: &ConfigStore, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => init(store),

        ConfigCommand::Show => {
            let cfg = store.load_or_default();
            output::print_output(&format_config_redacted(&cfg), global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            println!("{}", store.path().display());
            Ok(())
        }
    }
}

/// Interactive setup: prompt for gateway/username/password, each
/// optional with a stated default, and write the config file. Recorded
/// aliases survive a re-run.
pub fn init(store: &ConfigStore) -> Result<(), CliError> {
    eprintln!("homegate -- router configuration");
    eprintln!("   Config path: {}\n", store.path().display());

    let defaults = Auth::default();

    let gateway: String = Input::new()
        .with_prompt("Router gateway")
        .default(defaults.gateway)
        .interact_text()
        .map_err(prompt_err)?;

    if !is_valid_gateway(&gateway) {
        return Err(CliError::Validation {
            field: "gateway".into(),
            reason: format!("{gateway:?} is not a bare address like 192.168.1.1"),
        });
    }

    let username: String = Input::new()
        .with_prompt("Router username")
        .default(defaults.username)
        .interact_text()
        .map_err(prompt_err)?;

    let password =
        rpassword::prompt_password(format!("Router password (default {}): ", defaults.password))
            .map_err(prompt_err)?;
    let password = if password.is_empty() {
        defaults.password
    } else {
        password
    };

    let mut cfg = store.load_or_default();
    cfg.auth = Auth {
        gateway,
        username,
        password,
    };
    store.save(&cfg)?;

    eprintln!("\n✓ Configuration written to {}", store.path().display());
    eprintln!("  Try it: homegate leases");
    Ok(())
}
