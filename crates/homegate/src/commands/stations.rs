//! Station-list handlers: associated stations, alias-annotated
//! devices, and the wireless filter (blocked) list.

use serde::Serialize;
use tabled::Tabled;

use homegate_api::RouterSession;
use homegate_config::Config;
use homegate_core::MacAddress;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct StationRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "MAC-ADDRESSES")]
    mac: String,
}

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "MAC-ADDRESSES")]
    mac: String,
    #[tabled(rename = "ALIAS")]
    alias: String,
}

#[derive(Serialize)]
struct DeviceEntry {
    mac: String,
    alias: Option<String>,
}

pub fn stations(session: &RouterSession, global: &GlobalOpts) -> Result<(), CliError> {
    let stations = session.stations()?;
    print_mac_list(&stations, global);
    Ok(())
}

pub fn blocked(session: &RouterSession, global: &GlobalOpts) -> Result<(), CliError> {
    let blocked = session.blocked()?;
    print_mac_list(&blocked, global);
    Ok(())
}

pub fn devices(
    session: &RouterSession,
    config: &Config,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let entries: Vec<DeviceEntry> = session
        .stations()?
        .iter()
        .map(|mac| DeviceEntry {
            mac: mac.to_string(),
            alias: config.alias_for(mac).map(ToOwned::to_owned),
        })
        .collect();

    let out = output::render(
        &global.output,
        &entries,
        || {
            entries
                .iter()
                .enumerate()
                .map(|(index, entry)| DeviceRow {
                    index,
                    mac: entry.mac.clone(),
                    alias: entry.alias.clone().unwrap_or_default(),
                })
                .collect()
        },
        || entries.iter().map(|entry| entry.mac.clone()).collect(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}

fn print_mac_list(macs: &[MacAddress], global: &GlobalOpts) {
    let out = output::render(
        &global.output,
        &macs,
        || {
            macs.iter()
                .enumerate()
                .map(|(index, mac)| StationRow {
                    index,
                    mac: mac.to_string(),
                })
                .collect()
        },
        || macs.iter().map(ToString::to_string).collect(),
    );
    output::print_output(&out, global.quiet);
}
