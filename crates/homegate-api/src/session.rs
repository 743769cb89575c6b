// ── Router session ──
//
// One authenticated blocking client bound to the gateway's base URL.
// Basic auth goes on every request; the numeric session key that
// state-changing endpoints require is mined from the MAC-filter page
// once and cached for the life of the session.

use std::sync::{LazyLock, OnceLock};

use regex::Regex;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;
use url::Url;

use homegate_core::is_valid_gateway;

use crate::error::Error;
use crate::parser::{BcmTableParser, DeviceTableParser};

/// Paths on the router's web interface.
pub(crate) mod pages {
    /// DHCP lease table.
    pub const DHCP_INFO: &str = "dhcpinfo.html";
    /// Associated wireless stations.
    pub const STATION_LIST: &str = "wlstationlist.cmd";
    /// Wireless MAC filter list; also where the session key is mined.
    pub const MAC_FILTER: &str = "wlmacflt.cmd";
    /// Reboot trigger.
    pub const REBOOT: &str = "rebootinfo.cgi";
    /// Time-of-day access restrictions.
    pub const TOD_MANAGER: &str = "todmngr.tod";
}

/// The key is a bare run of digits somewhere in the page body.
static SESSION_KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{5,13}").expect("session key pattern is valid"));

/// Authenticated session against one router.
pub struct RouterSession {
    http: Client,
    base_url: Url,
    username: String,
    password: SecretString,
    parser: Box<dyn DeviceTableParser + Send + Sync>,
    session_key: OnceLock<String>,
}

impl RouterSession {
    /// Open a session against `gateway` (a bare address like
    /// `192.168.1.1`) with the Broadcom table parser.
    ///
    /// No request is issued yet; credentials are only exercised on the
    /// first fetch.
    pub fn connect(
        gateway: &str,
        username: impl Into<String>,
        password: SecretString,
    ) -> Result<Self, Error> {
        if !is_valid_gateway(gateway) {
            return Err(Error::InvalidGateway {
                gateway: gateway.to_owned(),
            });
        }
        let base_url = Url::parse(&format!("http://{gateway}/"))?;
        let http = Client::builder()
            .user_agent(concat!("homegate/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::Transport)?;

        Ok(Self {
            http,
            base_url,
            username: username.into(),
            password,
            parser: Box::new(BcmTableParser),
            session_key: OnceLock::new(),
        })
    }

    /// Swap in a parser for a different firmware table layout.
    pub fn with_parser(mut self, parser: impl DeviceTableParser + Send + Sync + 'static) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// The router's base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn parser(&self) -> &(dyn DeviceTableParser + Send + Sync) {
        self.parser.as_ref()
    }

    /// GET a page relative to the gateway with this session's
    /// credentials, returning the body.
    ///
    /// One blocking request, no retry. 401 is a credentials failure,
    /// any other non-200 status is unexpected.
    pub fn fetch_page(&self, path: &str, query: &[(&str, &str)]) -> Result<String, Error> {
        let url = self.base_url.join(path)?;
        debug!(%url, "GET");

        let resp = self
            .http
            .get(url)
            .basic_auth(&self.username, Some(self.password.expose_secret()))
            .query(query)
            .send()
            .map_err(Error::Transport)?;

        match resp.status() {
            StatusCode::OK => resp.text().map_err(Error::Transport),
            StatusCode::UNAUTHORIZED => Err(Error::Authentication),
            status => Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                path: path.to_owned(),
            }),
        }
    }

    /// The numeric token the firmware requires on state-changing
    /// requests. Mined from the MAC-filter page on first use, then
    /// cached and reused for the rest of the session.
    pub fn session_key(&self) -> Result<String, Error> {
        if let Some(key) = self.session_key.get() {
            return Ok(key.clone());
        }

        let body = self.fetch_page(pages::MAC_FILTER, &[])?;
        let key = SESSION_KEY_PATTERN
            .find(&body)
            .ok_or_else(|| Error::SessionKey {
                page: pages::MAC_FILTER.to_owned(),
            })?
            .as_str()
            .to_owned();

        debug!("session key mined from {}", pages::MAC_FILTER);
        // Lost race is impossible single-threaded; either way the
        // stored value wins.
        let _ = self.session_key.set(key.clone());
        Ok(key)
    }
}
