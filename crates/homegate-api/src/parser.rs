//! Extractors for the firmware's device tables.
//!
//! The admin pages carry no schema; fields are identified purely by
//! their position relative to a MAC-address cell. That layout differs
//! between firmware revisions, so extraction sits behind a capability
//! trait with one implementation per known revision.

use tracing::warn;

use homegate_core::{LeaseInfo, LeaseTable, MacAddress, is_mac};

use crate::html;

/// Turns a fetched status page into structured device records.
pub trait DeviceTableParser {
    /// DHCP leases keyed by hostname, in document order.
    fn parse_leases(&self, page: &str) -> LeaseTable;

    /// MAC addresses of associated stations, in document order,
    /// duplicates preserved.
    fn parse_stations(&self, page: &str) -> Vec<MacAddress>;
}

/// Parser for the Broadcom-based firmware layout.
///
/// In the lease table each row reads `hostname | MAC | local IP |
/// expiry`, so the cell before a MAC match is the hostname and the two
/// after it are IP and expiry. The station and MAC-filter pages list
/// one MAC per cell with `&nbsp;` padding.
#[derive(Debug, Default, Clone, Copy)]
pub struct BcmTableParser;

impl DeviceTableParser for BcmTableParser {
    fn parse_leases(&self, page: &str) -> LeaseTable {
        let cells = html::table_cells(page);
        let mut leases = LeaseTable::new();

        for (i, cell) in cells.iter().enumerate() {
            if !is_mac(cell) {
                continue;
            }
            let Ok(mac) = MacAddress::parse(cell) else {
                continue;
            };

            // A MAC at the very edge of the cell sequence has no full
            // row around it; skip it rather than misattribute fields.
            let hostname = i.checked_sub(1).and_then(|h| cells.get(h));
            let ip = cells.get(i + 1);
            let expires = cells.get(i + 2);
            let (Some(hostname), Some(ip), Some(expires)) = (hostname, ip, expires) else {
                warn!(mac = %mac, "MAC cell at table boundary, skipping row");
                continue;
            };

            leases.insert(
                hostname.clone(),
                LeaseInfo {
                    mac,
                    ip: ip.clone(),
                    expires: expires.clone(),
                },
            );
        }

        leases
    }

    fn parse_stations(&self, page: &str) -> Vec<MacAddress> {
        html::table_cells(page)
            .iter()
            .filter_map(|cell| MacAddress::parse(cell).ok())
            .collect()
    }
}
