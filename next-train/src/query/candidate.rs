//! Candidate departure enumeration.
//!
//! Both query operations share this: collect the departures still to come
//! today, fall back to (or top up with) tomorrow's whole timetable, and
//! sort the lot by absolute time.

use crate::domain::{Countdown, DayKind, ServiceTime};
use crate::timetable::{Timetable, TimetableEntry};

use super::departure::TrainInfo;

/// A concrete departure under consideration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub hour: u32,
    pub minute: u32,
    pub at: ServiceTime,
}

impl Candidate {
    fn new(hour: u32, minute: u32, next_day: bool) -> Option<Self> {
        let at = ServiceTime::departure(hour, minute, next_day).ok()?;
        Some(Self { hour, minute, at })
    }

    /// Convert to a result row, or `None` if the departure is in the past.
    pub fn to_train_info(self, now: ServiceTime) -> Option<TrainInfo> {
        let countdown = Countdown::from_seconds(self.at.seconds_since(now)?);
        Some(TrainInfo {
            hour: self.hour,
            minute: self.minute,
            minutes_until: countdown.minutes,
            seconds_until: countdown.seconds,
            is_next_day: self.at.is_next_day(),
        })
    }
}

fn departures_of(
    entry: &TimetableEntry,
    day: DayKind,
    next_day: bool,
) -> impl Iterator<Item = Candidate> + '_ {
    entry
        .minutes(day)
        .iter()
        .filter_map(move |&minute| Candidate::new(entry.hour(), minute, next_day))
}

/// Collect candidate departures strictly after `now`, sorted by time.
///
/// If fewer than `wanted` departures remain today, every departure in the
/// timetable is added again as a next-day candidate. The minute list for
/// both days is the one chosen by `day`.
pub(crate) fn enumerate(
    timetable: &Timetable,
    now: ServiceTime,
    day: DayKind,
    wanted: usize,
) -> Vec<Candidate> {
    let current_hour = now.seconds() / 3600;

    let mut candidates: Vec<Candidate> = timetable
        .entries()
        .iter()
        .filter(|entry| entry.hour() >= current_hour)
        .flat_map(|entry| departures_of(entry, day, false))
        .filter(|c| c.at > now)
        .collect();

    if candidates.len() < wanted {
        candidates.extend(
            timetable
                .entries()
                .iter()
                .flat_map(|entry| departures_of(entry, day, true)),
        );
    }

    candidates.sort_by_key(|c| c.at);
    candidates.retain(|c| c.at > now);
    candidates
}
