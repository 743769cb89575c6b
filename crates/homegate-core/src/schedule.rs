// ── Time-of-day encoding ──
//
// The router's scheduler takes a day bitmask plus start/end offsets in
// minutes since midnight. These transforms produce exactly the values
// the firmware endpoint accepts.

use thiserror::Error;

/// All seven weekday bits set.
pub const EVERYDAY: u8 = 127;

/// Bitmask for one day token. Tokens are case-sensitive:
/// `Mon`..`Sun` plus the `Everyday` sentinel.
pub fn day_mask(token: &str) -> Option<u8> {
    Some(match token {
        "Mon" => 1,
        "Tue" => 2,
        "Wed" => 4,
        "Thu" => 8,
        "Fri" => 16,
        "Sat" => 32,
        "Sun" => 64,
        "Everyday" => EVERYDAY,
        _ => return None,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("unknown day {token:?} (expected Mon..Sun or Everyday)")]
    UnknownDay { token: String },

    #[error("too many days in {input:?} (give one day or a two-day range)")]
    TooManyDays { input: String },

    #[error("invalid time {input:?} (expected H or H:MM, 24-hour)")]
    InvalidTime { input: String },
}

/// Encode a day expression (`Mon`, `Mon-Fri`, `Everyday`) into the
/// firmware's day bitmask.
///
/// A two-day range does not union the days: identical endpoints select
/// every day, and distinct endpoints carry only the second day's bit.
/// Callers wanting a true multi-day window issue one request per day.
pub fn parse_days(input: &str) -> Result<u8, ScheduleError> {
    let unknown = |token: &str| ScheduleError::UnknownDay {
        token: token.to_owned(),
    };

    let tokens: Vec<&str> = input.split('-').collect();
    match tokens.as_slice() {
        [day] => day_mask(day).ok_or_else(|| unknown(day)),
        [first, second] => {
            day_mask(first).ok_or_else(|| unknown(first))?;
            let mask = day_mask(second).ok_or_else(|| unknown(second))?;
            if first == second {
                Ok(EVERYDAY)
            } else {
                Ok(mask)
            }
        }
        _ => Err(ScheduleError::TooManyDays {
            input: input.to_owned(),
        }),
    }
}

/// Convert `H` or `H:MM` to minutes since midnight.
///
/// A bare hour defaults the minutes to zero. Magnitudes are not
/// range-checked; the firmware accepts raw minute offsets as-is.
pub fn parse_time(input: &str) -> Result<u32, ScheduleError> {
    let invalid = || ScheduleError::InvalidTime {
        input: input.to_owned(),
    };

    let (hour, minute) = match input.split_once(':') {
        Some((h, m)) => (h, m),
        None => (input, "0"),
    };
    let hour: u32 = hour.trim().parse().map_err(|_| invalid())?;
    let minute: u32 = minute.trim().parse().map_err(|_| invalid())?;
    Ok(hour * 60 + minute)
}

/// A write-only restriction window: the day bitmask and start/end
/// minute offsets sent to the router, never read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessWindow {
    pub days: u8,
    pub start: u32,
    pub end: u32,
}

impl AccessWindow {
    /// Build a window from user-facing day and time strings.
    pub fn parse(days: &str, start: &str, end: &str) -> Result<Self, ScheduleError> {
        Ok(Self {
            days: parse_days(days)?,
            start: parse_time(start)?,
            end: parse_time(end)?,
        })
    }
}
