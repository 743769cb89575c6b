//! Credential and alias store for homegate.
//!
//! One `config.ini` under the per-user config directory holds an
//! `[Auth]` section (gateway, username, password) and an `[Alias]`
//! section mapping MAC addresses to user-chosen nicknames. Loading is
//! figment-layered (defaults, then the file; per-invocation overrides
//! arrive through the CLI's `HOMEGATE_*`-backed flags); mutation goes
//! through an explicit [`ConfigStore`] handle that
//! reloads from disk before every write so concurrent external edits
//! are not clobbered. Best effort only: there is no lock, and this
//! deliberately stays that way for a single-user local tool.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use homegate_core::{InvalidMac, MacAddress};

/// File name kept from the tool's first release; the contents are
/// TOML-syntax sections.
pub const FILE_NAME: &str = "config.ini";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    InvalidMac(#[from] InvalidMac),

    #[error("alias name cannot be empty")]
    EmptyAlias,

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Config structs ──────────────────────────────────────────────────

/// Router credentials, the `[Auth]` section.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Auth {
    /// Bare gateway address, e.g. "192.168.1.1".
    #[serde(default = "default_gateway")]
    pub gateway: String,

    #[serde(default = "default_username")]
    pub username: String,

    /// Plaintext, as the firmware's basic auth requires it locally.
    #[serde(default = "default_password")]
    pub password: String,
}

impl Default for Auth {
    fn default() -> Self {
        Self {
            gateway: default_gateway(),
            username: default_username(),
            password: default_password(),
        }
    }
}

fn default_gateway() -> String {
    "192.168.1.1".into()
}
fn default_username() -> String {
    "admin".into()
}
fn default_password() -> String {
    "admin".into()
}

/// Full on-disk configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(rename = "Auth", default)]
    pub auth: Auth,

    /// MAC address -> nickname, insertion order preserved.
    #[serde(rename = "Alias", default)]
    pub aliases: IndexMap<String, String>,
}

impl Config {
    /// Nickname recorded for a MAC, if any.
    pub fn alias_for(&self, mac: &MacAddress) -> Option<&str> {
        self.aliases.get(mac.as_str()).map(String::as_str)
    }

    /// Reverse lookup: the MAC a nickname is bound to.
    pub fn mac_for_alias(&self, name: &str) -> Option<&str> {
        self.aliases
            .iter()
            .find(|(_, alias)| alias.as_str() == name)
            .map(|(mac, _)| mac.as_str())
    }
}

// ── Store handle ────────────────────────────────────────────────────

/// Explicit handle to the config file, passed to every operation that
/// needs one. Opened once at process start.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store at the platform's per-user config directory.
    pub fn open_default() -> Self {
        Self {
            path: default_config_path(),
        }
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load defaults, then the file. Per-invocation overrides come in
    /// through the CLI's flag/env layer, not here.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&self.path));

        Ok(figment.extract()?)
    }

    /// Load, falling back to defaults on any failure.
    pub fn load_or_default(&self) -> Config {
        self.load().unwrap_or_default()
    }

    /// Serialize to disk, creating parent directories as needed.
    pub fn save(&self, cfg: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(cfg)?;
        std::fs::write(&self.path, toml_str)?;
        Ok(())
    }

    /// Bind one nickname to a MAC and write the file back.
    ///
    /// The MAC is validated before anything is touched; the file is
    /// reloaded from disk first so an edit made since our last load
    /// survives.
    pub fn set_alias(&self, mac: &str, name: &str) -> Result<MacAddress, ConfigError> {
        let mac = MacAddress::parse(mac)?;
        if name.trim().is_empty() {
            return Err(ConfigError::EmptyAlias);
        }

        let mut cfg = self.load_or_default();
        cfg.aliases.insert(mac.to_string(), name.to_owned());
        self.save(&cfg)?;
        Ok(mac)
    }

    /// Bind nicknames from parallel MAC/name lists.
    ///
    /// Lists of different lengths are zipped down to the shorter one.
    /// Every surviving entry is validated before the file is touched;
    /// one bad MAC rejects the whole batch.
    pub fn import_aliases(
        &self,
        macs: &[String],
        names: &[String],
    ) -> Result<Vec<MacAddress>, ConfigError> {
        if macs.len() != names.len() {
            warn!(
                macs = macs.len(),
                names = names.len(),
                "alias lists differ in length; extra entries are dropped"
            );
        }

        let entries = macs
            .iter()
            .zip(names)
            .map(|(mac, name)| {
                let mac = MacAddress::parse(mac)?;
                if name.trim().is_empty() {
                    return Err(ConfigError::EmptyAlias);
                }
                Ok((mac, name))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        let mut cfg = self.load_or_default();
        for (mac, name) in &entries {
            cfg.aliases.insert(mac.to_string(), (*name).clone());
        }
        self.save(&cfg)?;

        Ok(entries.into_iter().map(|(mac, _)| mac).collect())
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
fn default_config_path() -> PathBuf {
    ProjectDirs::from("com", "homegate", "homegate").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push(FILE_NAME);
            p
        },
        |dirs| dirs.config_dir().join(FILE_NAME),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("homegate");
    p
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> ConfigStore {
        ConfigStore::at(dir.path().join(FILE_NAME))
    }

    #[test]
    fn defaults_cover_a_fresh_router() {
        let cfg = Config::default();
        assert_eq!(cfg.auth.gateway, "192.168.1.1");
        assert_eq!(cfg.auth.username, "admin");
        assert_eq!(cfg.auth.password, "admin");
        assert!(cfg.aliases.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut cfg = Config::default();
        cfg.auth.gateway = "10.0.0.138".into();
        cfg.aliases
            .insert("aa:bb:cc:dd:ee:ff".into(), "phone".into());
        store.save(&cfg).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.auth.gateway, "10.0.0.138");
        assert_eq!(loaded.aliases["aa:bb:cc:dd:ee:ff"], "phone");
    }

    #[test]
    fn file_uses_auth_and_alias_sections() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store
            .set_alias("AA-BB-CC-DD-EE-FF", "laptop")
            .unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("[Auth]"), "missing [Auth] section:\n{raw}");
        assert!(raw.contains("[Alias]"), "missing [Alias] section:\n{raw}");
        assert!(raw.contains("gateway"), "missing gateway key:\n{raw}");
    }

    #[test]
    fn set_alias_normalizes_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mac = store.set_alias("AA-BB-CC-DD-EE-FF", "laptop").unwrap();
        assert_eq!(mac.as_str(), "aa:bb:cc:dd:ee:ff");

        let cfg = store.load().unwrap();
        assert_eq!(cfg.aliases["aa:bb:cc:dd:ee:ff"], "laptop");
    }

    #[test]
    fn invalid_mac_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let err = store.set_alias("AABBCCDDEEFF", "laptop").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMac(_)));
        assert!(!store.exists(), "rejected alias must not create the file");
    }

    #[test]
    fn empty_alias_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let err = store.set_alias("aa:bb:cc:dd:ee:ff", "  ").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyAlias));
    }

    #[test]
    fn set_alias_keeps_external_edits() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        // An edit made by another process between our load and write.
        let mut external = Config::default();
        external
            .aliases
            .insert("aa:bb:cc:dd:ee:01".into(), "printer".into());
        store.save(&external).unwrap();

        store.set_alias("aa:bb:cc:dd:ee:02", "tablet").unwrap();

        let cfg = store.load().unwrap();
        assert_eq!(cfg.aliases.len(), 2);
        assert_eq!(cfg.aliases["aa:bb:cc:dd:ee:01"], "printer");
        assert_eq!(cfg.aliases["aa:bb:cc:dd:ee:02"], "tablet");
    }

    #[test]
    fn import_zips_down_to_shorter_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let macs = vec![
            "aa:bb:cc:dd:ee:01".to_owned(),
            "aa:bb:cc:dd:ee:02".to_owned(),
            "aa:bb:cc:dd:ee:03".to_owned(),
        ];
        let names = vec!["pc".to_owned(), "phone".to_owned()];

        let imported = store.import_aliases(&macs, &names).unwrap();
        assert_eq!(imported.len(), 2);

        let cfg = store.load().unwrap();
        assert_eq!(cfg.aliases.len(), 2);
        assert!(!cfg.aliases.contains_key("aa:bb:cc:dd:ee:03"));
    }

    #[test]
    fn import_rejects_whole_batch_on_one_bad_mac() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let macs = vec!["aa:bb:cc:dd:ee:01".to_owned(), "nonsense".to_owned()];
        let names = vec!["pc".to_owned(), "phone".to_owned()];

        assert!(store.import_aliases(&macs, &names).is_err());
        assert!(!store.exists(), "failed import must not create the file");
    }

    #[test]
    fn alias_lookups_work_both_ways() {
        let mut cfg = Config::default();
        cfg.aliases
            .insert("aa:bb:cc:dd:ee:ff".into(), "phone".into());

        let mac = MacAddress::parse("aa:bb:cc:dd:ee:ff").unwrap();
        assert_eq!(cfg.alias_for(&mac), Some("phone"));
        assert_eq!(cfg.mac_for_alias("phone"), Some("aa:bb:cc:dd:ee:ff"));
        assert_eq!(cfg.mac_for_alias("unknown"), None);
    }
}
