//! Shared helpers for command handlers.

use homegate_config::Config;
use homegate_core::MacAddress;

use crate::error::CliError;

/// Resolve a block/unblock/limit target: a literal MAC address, or a
/// recorded alias looked up in the config.
pub fn resolve_target(config: &Config, target: &str) -> Result<MacAddress, CliError> {
    if let Ok(mac) = MacAddress::parse(target) {
        return Ok(mac);
    }

    if let Some(mac) = config.mac_for_alias(target) {
        return MacAddress::parse(mac).map_err(CliError::from);
    }

    Err(CliError::NotFound {
        resource_type: "device".into(),
        identifier: target.into(),
        list_command: "alias list".into(),
    })
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Map a dialoguer / interactive I/O failure into CliError.
pub fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}
