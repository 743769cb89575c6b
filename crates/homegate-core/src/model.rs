// ── Scrape result types ──

use indexmap::IndexMap;
use serde::Serialize;

use crate::mac::MacAddress;

/// One DHCP lease as listed on the router's lease page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaseInfo {
    pub mac: MacAddress,
    /// Local IP, as printed by the firmware.
    pub ip: String,
    /// Remaining lease time, free text (e.g. "23 Hours, 59 Minutes").
    pub expires: String,
}

/// DHCP leases keyed by hostname, in document order.
///
/// The firmware page keys rows by hostname; a duplicate hostname later
/// in the table replaces the earlier row.
pub type LeaseTable = IndexMap<String, LeaseInfo>;
