//! Time-of-day handling for timetable queries.
//!
//! The timetable only knows wall-clock hours and minutes, so every instant
//! the engine compares is expressed as whole seconds since local midnight
//! of the query day. Departures on the following service day are the same
//! value shifted by [`SECONDS_PER_DAY`].

use chrono::{NaiveDateTime, Timelike};
use std::fmt;

/// Seconds in one service day.
pub const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// Error returned when building a time from out-of-range components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid service time: {reason}")]
pub struct InvalidServiceTime {
    reason: &'static str,
}

impl InvalidServiceTime {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// An instant measured in seconds since local midnight of the query day.
///
/// Values at or beyond [`SECONDS_PER_DAY`] belong to the next service day.
///
/// # Examples
///
/// ```
/// use next_train::domain::ServiceTime;
///
/// let t = ServiceTime::from_hms(8, 5, 0).unwrap();
/// assert_eq!(t.seconds(), 8 * 3600 + 5 * 60);
/// assert!(!t.is_next_day());
///
/// let tomorrow = ServiceTime::departure(8, 5, true).unwrap();
/// assert!(tomorrow.is_next_day());
/// assert_eq!(tomorrow.to_string(), "08:05 (+1)");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceTime(u32);

impl ServiceTime {
    /// Build a same-day time from hour, minute and second.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Result<Self, InvalidServiceTime> {
        if hour > 23 {
            return Err(InvalidServiceTime::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(InvalidServiceTime::new("minute must be 0-59"));
        }
        if second > 59 {
            return Err(InvalidServiceTime::new("second must be 0-59"));
        }
        Ok(Self(hour * 3600 + minute * 60 + second))
    }

    /// Build a scheduled departure, optionally on the following service day.
    pub fn departure(hour: u32, minute: u32, next_day: bool) -> Result<Self, InvalidServiceTime> {
        let same_day = Self::from_hms(hour, minute, 0)?;
        if next_day {
            Ok(Self(same_day.0 + SECONDS_PER_DAY))
        } else {
            Ok(same_day)
        }
    }

    /// The time-of-day of a local calendar instant, truncated to the second.
    pub fn of_instant(now: &NaiveDateTime) -> Self {
        Self(now.hour() * 3600 + now.minute() * 60 + now.second())
    }

    /// Raw seconds since midnight of the query day.
    pub fn seconds(&self) -> u32 {
        self.0
    }

    /// Whether this instant falls after the midnight rollover.
    pub fn is_next_day(&self) -> bool {
        self.0 >= SECONDS_PER_DAY
    }

    /// Whole seconds from `now` until `self`.
    ///
    /// Returns `None` if `self` is before `now`.
    pub fn seconds_since(&self, now: ServiceTime) -> Option<u32> {
        self.0.checked_sub(now.0)
    }

    fn wall_clock(&self) -> (u32, u32, u32) {
        let secs = self.0 % SECONDS_PER_DAY;
        (secs / 3600, (secs / 60) % 60, secs % 60)
    }
}

impl fmt::Debug for ServiceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.wall_clock();
        write!(f, "ServiceTime({h:02}:{m:02}:{s:02}")?;
        if self.is_next_day() {
            write!(f, " +1")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for ServiceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, _) = self.wall_clock();
        write!(f, "{h:02}:{m:02}")?;
        if self.is_next_day() {
            write!(f, " (+1)")?;
        }
        Ok(())
    }
}

/// Time remaining until a departure, split into whole minutes and seconds.
///
/// `seconds` is always in `0..60`; `minutes` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct Countdown {
    pub minutes: u32,
    pub seconds: u32,
}

impl Countdown {
    /// Split a total number of seconds into a countdown.
    pub fn from_seconds(total: u32) -> Self {
        Self {
            minutes: total / 60,
            seconds: total % 60,
        }
    }

    /// Total seconds represented by this countdown.
    pub fn total_seconds(&self) -> u32 {
        self.minutes * 60 + self.seconds
    }
}

/// Formats as `M:SS`, the status indicator format.
impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}
