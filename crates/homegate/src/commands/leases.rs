//! DHCP lease table handler.

use tabled::Tabled;

use homegate_api::RouterSession;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct LeaseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "HOSTNAME")]
    hostname: String,
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "LOCAL-IP")]
    ip: String,
    #[tabled(rename = "EXPIRES")]
    expires: String,
}

pub fn handle(session: &RouterSession, global: &GlobalOpts) -> Result<(), CliError> {
    let leases = session.dhcp_leases()?;

    let out = output::render(
        &global.output,
        &leases,
        || {
            leases
                .iter()
                .enumerate()
                .map(|(index, (hostname, info))| LeaseRow {
                    index,
                    hostname: hostname.clone(),
                    mac: info.mac.to_string(),
                    ip: info.ip.clone(),
                    expires: info.expires.clone(),
                })
                .collect()
        },
        || leases.values().map(|info| info.mac.to_string()).collect(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
