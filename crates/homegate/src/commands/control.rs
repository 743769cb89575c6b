//! State-changing command handlers: reboot, block/unblock, time limit.

use owo_colors::OwoColorize;

use homegate_api::RouterSession;
use homegate_config::Config;
use homegate_core::AccessWindow;

use crate::cli::{GlobalOpts, LimitArgs};
use crate::error::CliError;

use super::util;

pub fn reboot(session: &RouterSession, global: &GlobalOpts) -> Result<(), CliError> {
    if !util::confirm("Reboot the router? Connectivity drops for a minute.", global.yes)? {
        return Ok(());
    }

    session.reboot()?;
    if !global.quiet {
        eprintln!("{} reboot requested", "✓".green());
    }
    Ok(())
}

pub fn block(
    session: &RouterSession,
    config: &Config,
    target: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let mac = util::resolve_target(config, target)?;
    session.block(&mac)?;
    if !global.quiet {
        eprintln!("{} {mac} added to the filter list", "✓".green());
    }
    Ok(())
}

pub fn unblock(
    session: &RouterSession,
    config: &Config,
    target: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let mac = util::resolve_target(config, target)?;
    session.unblock(&mac)?;
    if !global.quiet {
        eprintln!("{} {mac} removed from the filter list", "✓".green());
    }
    Ok(())
}

pub fn limit(
    session: &RouterSession,
    config: &Config,
    args: &LimitArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    // Encode before resolving the target so a malformed window never
    // issues a request.
    let window = AccessWindow::parse(&args.days, &args.start, &args.end)?;
    let mac = util::resolve_target(config, &args.mac)?;

    session.set_time_limit(&args.user, &mac, window)?;
    if !global.quiet {
        eprintln!(
            "{} time limit for {mac}: days mask {}, minutes {} to {}",
            "✓".green(),
            window.days,
            window.start,
            window.end
        );
    }
    Ok(())
}
