//! Departure queries against a loaded timetable.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::domain::{Countdown, DayKind, ServiceCalendar, ServiceTime, WeekendCalendar};
use crate::timetable::Timetable;

use super::candidate::enumerate;
use super::config::QueryConfig;
use super::departure::TrainInfo;

/// The current instant in the host's local calendar.
pub fn now_local() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Everything a caller needs to redraw once: the headline countdown and
/// the list of upcoming departures, computed for the same instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub day_kind: DayKind,
    pub countdown: Option<Countdown>,
    pub departures: Vec<TrainInfo>,
}

/// Answers "when is the next train?" for one timetable.
///
/// The engine holds no mutable state; every call is a pure function of the
/// timetable and the instant passed in.
///
/// # Examples
///
/// ```
/// use next_train::query::QueryEngine;
/// use next_train::timetable::Timetable;
/// use chrono::NaiveDate;
///
/// let timetable = Timetable::from_json_str(r#"{
///     "station": "Aobayama", "destination": "Arai",
///     "entries": [{"hour": 8, "weekday": [5, 20, 35, 50], "holiday": [10, 40]}]
/// }"#).unwrap();
/// let engine = QueryEngine::new(&timetable);
///
/// // A Thursday morning
/// let now = NaiveDate::from_ymd_opt(2025, 11, 6).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// let next = engine.next_countdown(now).unwrap();
/// assert_eq!((next.minutes, next.seconds), (5, 0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a, C = WeekendCalendar> {
    timetable: &'a Timetable,
    calendar: C,
}

impl<'a> QueryEngine<'a> {
    /// Create an engine treating Saturday and Sunday as reduced-service days.
    pub fn new(timetable: &'a Timetable) -> Self {
        Self::with_calendar(timetable, WeekendCalendar)
    }
}

impl<'a, C: ServiceCalendar> QueryEngine<'a, C> {
    /// Create an engine with a custom service calendar.
    pub fn with_calendar(timetable: &'a Timetable, calendar: C) -> Self {
        Self {
            timetable,
            calendar,
        }
    }

    /// The timetable being queried.
    pub fn timetable(&self) -> &'a Timetable {
        self.timetable
    }

    /// Which minute lists apply at `now`.
    pub fn day_kind(&self, now: NaiveDateTime) -> DayKind {
        self.calendar.day_kind(now.date())
    }

    /// Time left until the next departure after `now`.
    ///
    /// Returns `None` if the timetable lists no departures for this kind
    /// of day.
    pub fn next_countdown(&self, now: NaiveDateTime) -> Option<Countdown> {
        let day = self.day_kind(now);
        let at = ServiceTime::of_instant(&now);

        let next = enumerate(self.timetable, at, day, 1).into_iter().next()?;
        let countdown = next.at.seconds_since(at).map(Countdown::from_seconds);

        debug!(%at, %day, next = %next.at, ?countdown, "next departure");
        countdown
    }

    /// Up to `count` departures after `now`, soonest first.
    ///
    /// Departures past tonight's midnight are flagged with `is_next_day`.
    /// Returns fewer than `count` entries (possibly none) if the timetable
    /// doesn't have that many.
    pub fn next_departures(&self, now: NaiveDateTime, count: usize) -> Vec<TrainInfo> {
        if count == 0 {
            return Vec::new();
        }

        let day = self.day_kind(now);
        let at = ServiceTime::of_instant(&now);

        let departures: Vec<TrainInfo> = enumerate(self.timetable, at, day, count)
            .into_iter()
            .filter_map(|c| c.to_train_info(at))
            .take(count)
            .collect();

        debug!(%at, %day, count, found = departures.len(), "next departures");
        departures
    }

    /// Run both queries for the same instant.
    pub fn snapshot(&self, now: NaiveDateTime, config: &QueryConfig) -> Snapshot {
        Snapshot {
            day_kind: self.day_kind(now),
            countdown: self.next_countdown(now),
            departures: self.next_departures(now, config.count),
        }
    }
}

/// Time left until the next departure, or `None` if there is no timetable
/// or nothing scheduled.
pub fn next_countdown(timetable: Option<&Timetable>, now: NaiveDateTime) -> Option<Countdown> {
    QueryEngine::new(timetable?).next_countdown(now)
}

/// Up to `count` upcoming departures; empty if there is no timetable.
pub fn next_departures(
    timetable: Option<&Timetable>,
    now: NaiveDateTime,
    count: usize,
) -> Vec<TrainInfo> {
    match timetable {
        Some(t) => QueryEngine::new(t).next_departures(now, count),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DayKind, SECONDS_PER_DAY};
    use crate::timetable::TimetableEntry;
    use chrono::NaiveDate;

    /// Thursday 2025-11-06
    fn weekday(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 6)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    /// Sunday 2025-11-09
    fn sunday(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 9)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    /// Saturday 2025-11-08
    fn saturday(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 8)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn timetable() -> Timetable {
        Timetable::new(
            "Aobayama",
            "Arai",
            vec![
                TimetableEntry::new(8, vec![5, 20, 35, 50], vec![10, 40]).unwrap(),
                TimetableEntry::new(9, vec![5, 20, 35, 50], vec![10, 40]).unwrap(),
            ],
        )
        .unwrap()
    }

    fn info(hour: u32, minute: u32, total: u32, is_next_day: bool) -> TrainInfo {
        TrainInfo {
            hour,
            minute,
            minutes_until: total / 60,
            seconds_until: total % 60,
            is_next_day,
        }
    }

    #[test]
    fn weekday_morning_countdown() {
        let t = timetable();
        let c = QueryEngine::new(&t).next_countdown(weekday(8, 0, 0)).unwrap();
        assert_eq!(c, Countdown { minutes: 5, seconds: 0 });
    }

    #[test]
    fn weekday_morning_departures() {
        let t = timetable();
        let list = QueryEngine::new(&t).next_departures(weekday(8, 0, 0), 3);
        assert_eq!(
            list,
            vec![
                info(8, 5, 5 * 60, false),
                info(8, 20, 20 * 60, false),
                info(8, 35, 35 * 60, false),
            ]
        );
    }

    #[test]
    fn rollover_after_last_departure() {
        let t = timetable();
        let engine = QueryEngine::new(&t);
        let now = weekday(9, 51, 0);

        let expected = (8 * 3600 + 5 * 60 + SECONDS_PER_DAY) - (9 * 3600 + 51 * 60);
        let c = engine.next_countdown(now).unwrap();
        assert_eq!(c.total_seconds(), expected);

        let list = engine.next_departures(now, 3);
        assert_eq!(list[0], info(8, 5, expected, true));
        assert_eq!(list.len(), 3);
        assert!(list.iter().all(|d| d.is_next_day));
    }

    #[test]
    fn partial_day_tops_up_with_tomorrow() {
        let t = timetable();
        let list = QueryEngine::new(&t).next_departures(weekday(9, 40, 0), 3);
        assert_eq!(list.len(), 3);
        assert_eq!(list[0], info(9, 50, 10 * 60, false));
        assert!(list[1].is_next_day);
        assert_eq!((list[1].hour, list[1].minute), (8, 5));
        assert_eq!((list[2].hour, list[2].minute), (8, 20));
    }

    #[test]
    fn sunday_uses_holiday_list() {
        let t = timetable();
        let c = QueryEngine::new(&t).next_countdown(sunday(8, 0, 0)).unwrap();
        assert_eq!(c, Countdown { minutes: 10, seconds: 0 });
    }

    #[test]
    fn saturday_uses_holiday_list() {
        let t = timetable();
        let list = QueryEngine::new(&t).next_departures(saturday(8, 0, 0), 3);
        let times: Vec<_> = list.iter().map(|d| (d.hour, d.minute)).collect();
        assert_eq!(times, vec![(8, 10), (8, 40), (9, 10)]);
    }

    #[test]
    fn countdown_has_seconds() {
        let t = timetable();
        let c = QueryEngine::new(&t)
            .next_countdown(weekday(8, 4, 59))
            .unwrap();
        assert_eq!(c, Countdown { minutes: 0, seconds: 1 });
    }

    #[test]
    fn departure_at_exact_second_is_skipped() {
        let t = timetable();
        let c = QueryEngine::new(&t).next_countdown(weekday(8, 5, 0)).unwrap();
        assert_eq!(c, Countdown { minutes: 15, seconds: 0 });
    }

    #[test]
    fn count_larger_than_available() {
        let t = timetable();
        // Two departures left today plus all eight tomorrow
        let list = QueryEngine::new(&t).next_departures(weekday(9, 30, 0), 50);
        assert_eq!(list.len(), 10);
    }

    #[test]
    fn count_zero_is_empty() {
        let t = timetable();
        assert!(QueryEngine::new(&t).next_departures(weekday(8, 0, 0), 0).is_empty());
    }

    #[test]
    fn empty_timetable_has_no_result() {
        let t = Timetable::new("A", "B", vec![]).unwrap();
        let engine = QueryEngine::new(&t);
        assert!(engine.next_countdown(weekday(8, 0, 0)).is_none());
        assert!(engine.next_departures(weekday(8, 0, 0), 3).is_empty());
    }

    #[test]
    fn weekday_only_timetable_is_empty_on_weekend() {
        let t = Timetable::new(
            "A",
            "B",
            vec![TimetableEntry::new(8, vec![5], vec![]).unwrap()],
        )
        .unwrap();
        let engine = QueryEngine::new(&t);
        assert!(engine.next_countdown(sunday(7, 0, 0)).is_none());
        assert!(engine.next_countdown(weekday(7, 0, 0)).is_some());
    }

    #[test]
    fn missing_timetable_has_no_result() {
        assert!(next_countdown(None, weekday(8, 0, 0)).is_none());
        assert!(next_departures(None, weekday(8, 0, 0), 3).is_empty());
    }

    #[test]
    fn free_functions_match_engine() {
        let t = timetable();
        let now = weekday(8, 12, 34);
        let engine = QueryEngine::new(&t);
        assert_eq!(next_countdown(Some(&t), now), engine.next_countdown(now));
        assert_eq!(
            next_departures(Some(&t), now, 3),
            engine.next_departures(now, 3)
        );
    }

    #[test]
    fn custom_calendar() {
        struct EveryDayReduced;
        impl ServiceCalendar for EveryDayReduced {
            fn day_kind(&self, _date: NaiveDate) -> DayKind {
                DayKind::Reduced
            }
        }

        let t = timetable();
        let engine = QueryEngine::with_calendar(&t, EveryDayReduced);
        assert_eq!(engine.day_kind(weekday(8, 0, 0)), DayKind::Reduced);
        let c = engine.next_countdown(weekday(8, 0, 0)).unwrap();
        assert_eq!(c, Countdown { minutes: 10, seconds: 0 });
    }

    #[test]
    fn snapshot_is_consistent() {
        let t = timetable();
        let snap = QueryEngine::new(&t).snapshot(weekday(8, 0, 0), &QueryConfig::default());
        assert_eq!(snap.day_kind, DayKind::Regular);
        assert_eq!(snap.departures.len(), 3);
        assert_eq!(snap.countdown, Some(snap.departures[0].countdown()));
    }

    #[test]
    fn first_departure_matches_document() {
        let json = r#"{"station": "Aobayama", "destination": "Arai", "entries": [
            {"hour": 6, "weekday": [12, 41], "holiday": [30]}
        ]}"#;
        let t = Timetable::from_json_str(json).unwrap();
        let list = QueryEngine::new(&t).next_departures(weekday(5, 0, 0), 1);
        assert_eq!((list[0].hour, list[0].minute), (6, 12));
        assert!(!list[0].is_next_day);
    }
}
