//! Query results handed to the presentation layer.

use serde::Serialize;
use std::fmt;

use crate::domain::Countdown;

/// One upcoming departure and the time left until it leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrainInfo {
    /// Scheduled hour, as written in the timetable.
    pub hour: u32,

    /// Scheduled minute past the hour.
    pub minute: u32,

    /// Whole minutes until departure.
    pub minutes_until: u32,

    /// Remaining seconds (0-59) after `minutes_until`.
    pub seconds_until: u32,

    /// True if the departure is after tonight's midnight.
    pub is_next_day: bool,
}

impl TrainInfo {
    /// The countdown as a single value.
    pub fn countdown(&self) -> Countdown {
        Countdown {
            minutes: self.minutes_until,
            seconds: self.seconds_until,
        }
    }

    /// Total seconds until departure.
    pub fn total_seconds(&self) -> u32 {
        self.countdown().total_seconds()
    }
}

impl fmt::Display for TrainInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02} in {}",
            self.hour,
            self.minute,
            self.countdown()
        )?;
        if self.is_next_day {
            write!(f, " (tomorrow)")?;
        }
        Ok(())
    }
}
