// Read-only scrapes: lease table, station list, filter list.

use homegate_core::{LeaseTable, MacAddress};

use crate::error::Error;
use crate::session::{RouterSession, pages};

impl RouterSession {
    /// Current DHCP leases, keyed by hostname.
    pub fn dhcp_leases(&self) -> Result<LeaseTable, Error> {
        let body = self.fetch_page(pages::DHCP_INFO, &[])?;
        Ok(self.parser().parse_leases(&body))
    }

    /// MAC addresses of stations currently associated over Wi-Fi.
    pub fn stations(&self) -> Result<Vec<MacAddress>, Error> {
        let body = self.fetch_page(pages::STATION_LIST, &[])?;
        Ok(self.parser().parse_stations(&body))
    }

    /// MAC addresses currently on the wireless filter (block) list.
    ///
    /// The filter page lists its entries in the same one-MAC-per-cell
    /// layout as the station page, so the station extractor applies.
    pub fn blocked(&self) -> Result<Vec<MacAddress>, Error> {
        let body = self.fetch_page(pages::MAC_FILTER, &[])?;
        Ok(self.parser().parse_stations(&body))
    }
}
