//! Command dispatch: bridges CLI args -> router session -> output.

pub mod alias;
pub mod config_cmd;
pub mod control;
pub mod leases;
pub mod stations;
pub mod util;

use homegate_api::RouterSession;
use homegate_config::Config;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a router-bound command to the appropriate handler.
pub fn dispatch(
    cmd: Command,
    session: &RouterSession,
    config: &Config,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Leases => leases::handle(session, global),
        Command::Stations => stations::stations(session, global),
        Command::Devices => stations::devices(session, config, global),
        Command::Blocked => stations::blocked(session, global),
        Command::Reboot => control::reboot(session, global),
        Command::Block { target } => control::block(session, config, &target, global),
        Command::Unblock { target } => control::unblock(session, config, &target, global),
        Command::Limit(args) => control::limit(session, config, &args, global),
        // Handled before dispatch
        Command::Config(_) | Command::Alias(_) | Command::Completions(_) => unreachable!(),
    }
}
