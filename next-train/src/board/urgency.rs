//! How close a departure is, for colouring countdowns.

use crate::query::TrainInfo;

/// Five minutes or less.
const IMMINENT_SECS: u32 = 5 * 60;

/// Ten minutes or less.
const SOON_SECS: u32 = 10 * 60;

/// Urgency band of a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Urgency {
    /// Leaving within five minutes.
    Imminent,
    /// Leaving within ten minutes.
    Soon,
    Later,
}

impl Urgency {
    /// Band for a countdown of `total_seconds`.
    pub fn from_seconds(total_seconds: u32) -> Self {
        if total_seconds <= IMMINENT_SECS {
            Urgency::Imminent
        } else if total_seconds <= SOON_SECS {
            Urgency::Soon
        } else {
            Urgency::Later
        }
    }

    /// Band for a listed departure.
    pub fn of(train: &TrainInfo) -> Self {
        Self::from_seconds(train.total_seconds())
    }

    /// ANSI colour escape for terminal output.
    pub fn ansi_colour(&self) -> &'static str {
        match self {
            Urgency::Imminent => "\x1b[31m",
            Urgency::Soon => "\x1b[33m",
            Urgency::Later => "\x1b[34m",
        }
    }
}
