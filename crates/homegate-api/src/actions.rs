// State-changing actions, all GETs carrying the cached session key.
//
// The firmware reports each action's outcome inside the returned page
// body; that body is handed back raw and not inspected. Success here
// means the request completed without a transport failure.

use homegate_core::{AccessWindow, MacAddress};

use crate::error::Error;
use crate::session::{RouterSession, pages};

impl RouterSession {
    /// Reboot the router.
    pub fn reboot(&self) -> Result<String, Error> {
        let key = self.session_key()?;
        self.fetch_page(pages::REBOOT, &[("sessionKey", &key)])
    }

    /// Add a device to the wireless filter list.
    pub fn block(&self, mac: &MacAddress) -> Result<String, Error> {
        let key = self.session_key()?;
        self.fetch_page(
            pages::MAC_FILTER,
            &[
                ("action", "add"),
                ("rmLst", mac.as_str()),
                ("sessionKey", &key),
            ],
        )
    }

    /// Remove a device from the wireless filter list.
    pub fn unblock(&self, mac: &MacAddress) -> Result<String, Error> {
        let key = self.session_key()?;
        self.fetch_page(
            pages::MAC_FILTER,
            &[
                ("action", "remove"),
                ("rmLst", mac.as_str()),
                ("sessionKey", &key),
            ],
        )
    }

    /// Create a named time-of-day restriction profile for a device.
    ///
    /// The window is write-only: the router never reports it back.
    pub fn set_time_limit(
        &self,
        profile: &str,
        mac: &MacAddress,
        window: AccessWindow,
    ) -> Result<String, Error> {
        let key = self.session_key()?;
        let days = window.days.to_string();
        let start = window.start.to_string();
        let end = window.end.to_string();

        self.fetch_page(
            pages::TOD_MANAGER,
            &[
                ("action", "add"),
                ("username", profile),
                ("mac", mac.as_str()),
                ("days", &days),
                ("start_time", &start),
                ("end_time", &end),
                ("sessionKey", &key),
            ],
        )
    }
}
