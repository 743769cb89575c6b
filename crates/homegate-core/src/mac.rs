// ── MAC address + gateway validation ──
//
// Every MAC accepted anywhere in the workspace goes through this module
// before it can reach the network or the config file.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static MAC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9A-Fa-f]{2}[:-]){5}([0-9A-Fa-f]{2})$").expect("MAC pattern is valid")
});

/// Whether `s` is a well-formed MAC address (colon- or dash-separated).
pub fn is_mac(s: &str) -> bool {
    MAC_PATTERN.is_match(s)
}

/// A bare gateway address the session can build a base URL from:
/// no scheme prefix, no trailing slash. `192.168.1.1` is valid,
/// `http://192.168.1.1` and `192.168.1.1/` are not.
pub fn is_valid_gateway(gateway: &str) -> bool {
    !gateway.contains("http://") && !gateway.contains("https://") && !gateway.ends_with('/')
}

/// Rejected MAC input, carrying the offending string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid MAC address {0:?} (expected aa:bb:cc:dd:ee:ff)")]
pub struct InvalidMac(pub String);

/// MAC address in canonical lowercase colon-separated form.
///
/// Construction validates; a held `MacAddress` is always well-formed.
/// Dash separators and uppercase hex are accepted on input and
/// normalized away.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MacAddress(String);

impl MacAddress {
    /// Parse and normalize a MAC address.
    pub fn parse(raw: &str) -> Result<Self, InvalidMac> {
        if !is_mac(raw) {
            return Err(InvalidMac(raw.to_owned()));
        }
        Ok(Self(raw.to_ascii_lowercase().replace('-', ":")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MacAddress {
    type Err = InvalidMac;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn accepts_colon_separated() {
        assert!(is_mac("AA:BB:CC:DD:EE:FF"));
    }

    #[test]
    fn accepts_dash_separated() {
        assert!(is_mac("aa-bb-cc-dd-ee-ff"));
    }

    #[test]
    fn rejects_bare_hex() {
        assert!(!is_mac("AABBCCDDEEFF"));
    }

    #[test]
    fn rejects_short_final_octet() {
        assert!(!is_mac("AA:BB:CC:DD:EE:F"));
    }

    #[test]
    fn normalizes_case_and_dashes() {
        let mac = MacAddress::parse("AA-BB-CC-DD-EE-FF").unwrap();
        assert_eq!(mac.as_str(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn parse_rejects_and_reports_input() {
        let err = MacAddress::parse("not-a-mac").unwrap_err();
        assert_eq!(err, InvalidMac("not-a-mac".into()));
    }

    #[test]
    fn from_str_round_trips() {
        let mac: MacAddress = "aa:bb:cc:dd:ee:ff".parse().unwrap();
        assert_eq!(mac.to_string(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn gateway_accepts_bare_host() {
        assert!(is_valid_gateway("192.168.1.1"));
        assert!(is_valid_gateway("10.0.0.138"));
    }

    #[test]
    fn gateway_rejects_scheme_and_trailing_slash() {
        assert!(!is_valid_gateway("http://192.168.1.1"));
        assert!(!is_valid_gateway("https://192.168.1.1"));
        assert!(!is_valid_gateway("192.168.1.1/"));
    }
}
