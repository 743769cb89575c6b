//! Blocking client for a home router's web administration interface.
//!
//! The router exposes no JSON API; everything is mined out of the HTML
//! pages its admin UI serves. This crate wraps that in three layers:
//!
//! - **[`RouterSession`]** -- one authenticated `reqwest` client bound
//!   to the gateway's base URL. Fetches pages with basic auth, mines the
//!   numeric session key state-changing endpoints require, and caches it
//!   for the life of the session.
//! - **[`DeviceTableParser`]** -- capability trait turning a fetched
//!   page into lease/station records. One implementation per known
//!   firmware table layout; [`BcmTableParser`] covers the Broadcom
//!   layout these routers ship.
//! - **Actions** -- reboot, MAC filter add/remove, and time-of-day
//!   restrictions, issued as parameterized GETs carrying the session key.
//!
//! Everything is synchronous: one blocking request at a time, no retry,
//! no connection pooling beyond the single reused client.

pub mod error;
pub mod html;
pub mod parser;
mod actions;
mod scrape;
mod session;

pub use error::Error;
pub use parser::{BcmTableParser, DeviceTableParser};
pub use session::RouterSession;
