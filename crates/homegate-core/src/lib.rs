//! Domain types and pure transforms shared by the homegate workspace.
//!
//! Everything here is I/O-free: MAC address parsing and validation, the
//! gateway-address predicate, the day/time encoding the router's
//! time-of-day scheduler expects, and the record types produced by page
//! scrapes. The HTTP layer lives in `homegate-api`, persistence in
//! `homegate-config`.

pub mod mac;
pub mod model;
pub mod schedule;

pub use mac::{InvalidMac, MacAddress, is_mac, is_valid_gateway};
pub use model::{LeaseInfo, LeaseTable};
pub use schedule::{AccessWindow, EVERYDAY, ScheduleError, day_mask, parse_days, parse_time};
