//! A single hour of scheduled service.

use serde::{Deserialize, Serialize};

use crate::domain::DayKind;

use super::error::LoadError;

/// The departures scheduled within one hour of the day.
///
/// Minute lists are unordered. Duplicate minutes are tolerated; the engine
/// treats every listed minute as its own departure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableEntry {
    hour: u32,
    #[serde(rename = "weekday")]
    weekday_minutes: Vec<u32>,
    #[serde(rename = "holiday")]
    holiday_minutes: Vec<u32>,
}

impl TimetableEntry {
    /// Create a new entry, checking hour and minute ranges.
    pub fn new(
        hour: u32,
        weekday_minutes: Vec<u32>,
        holiday_minutes: Vec<u32>,
    ) -> Result<Self, LoadError> {
        let entry = Self {
            hour,
            weekday_minutes,
            holiday_minutes,
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Minutes past the hour on regular service days.
    pub fn weekday_minutes(&self) -> &[u32] {
        &self.weekday_minutes
    }

    /// Minutes past the hour on reduced-service days.
    pub fn holiday_minutes(&self) -> &[u32] {
        &self.holiday_minutes
    }

    /// The minute list that applies on a day of the given kind.
    pub fn minutes(&self, day: DayKind) -> &[u32] {
        match day {
            DayKind::Regular => &self.weekday_minutes,
            DayKind::Reduced => &self.holiday_minutes,
        }
    }

    /// Returns true if neither minute list has any departures.
    pub fn is_empty(&self) -> bool {
        self.weekday_minutes.is_empty() && self.holiday_minutes.is_empty()
    }

    pub(crate) fn validate(&self) -> Result<(), LoadError> {
        if self.hour > 23 {
            return Err(LoadError::malformed(format!(
                "hour {} out of range 0-23",
                self.hour
            )));
        }
        for (list, minutes) in [
            ("weekday", &self.weekday_minutes),
            ("holiday", &self.holiday_minutes),
        ] {
            if let Some(bad) = minutes.iter().find(|&&m| m > 59) {
                return Err(LoadError::malformed(format!(
                    "minute {bad} in {list} list of hour {} out of range 0-59",
                    self.hour
                )));
            }
        }
        Ok(())
    }

    /// Returns true if either minute list repeats a value.
    pub(crate) fn has_duplicate_minutes(&self) -> bool {
        fn repeats(minutes: &[u32]) -> bool {
            let mut seen = [false; 60];
            minutes.iter().any(|&m| {
                let slot = &mut seen[m as usize % 60];
                std::mem::replace(slot, true)
            })
        }
        repeats(&self.weekday_minutes) || repeats(&self.holiday_minutes)
    }
}
