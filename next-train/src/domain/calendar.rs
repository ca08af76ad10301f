//! Service-day classification.

use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;

/// Which minute list of a timetable entry applies on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayKind {
    /// Regular (weekday) service.
    Regular,
    /// Reduced service, read from the holiday minute list.
    Reduced,
}

impl DayKind {
    /// Returns true for reduced-service days.
    pub fn is_holiday(&self) -> bool {
        matches!(self, DayKind::Reduced)
    }
}

impl fmt::Display for DayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayKind::Regular => f.write_str("weekday"),
            DayKind::Reduced => f.write_str("holiday"),
        }
    }
}

/// Decides which kind of service runs on a calendar date.
///
/// Implement this to plug in a richer holiday calendar; the engine only
/// ever asks about the date of the query instant.
pub trait ServiceCalendar {
    fn day_kind(&self, date: NaiveDate) -> DayKind;
}

/// The default calendar: Saturday and Sunday are reduced-service days,
/// every other day runs regular service.
///
/// # Examples
///
/// ```
/// use next_train::domain::{DayKind, ServiceCalendar, WeekendCalendar};
/// use chrono::NaiveDate;
///
/// let saturday = NaiveDate::from_ymd_opt(2025, 11, 8).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2025, 11, 10).unwrap();
/// assert_eq!(WeekendCalendar.day_kind(saturday), DayKind::Reduced);
/// assert_eq!(WeekendCalendar.day_kind(monday), DayKind::Regular);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl ServiceCalendar for WeekendCalendar {
    fn day_kind(&self, date: NaiveDate) -> DayKind {
        // Sunday-first ordinals: 1 = Sunday, 7 = Saturday
        match date.weekday().number_from_sunday() {
            1 | 7 => DayKind::Reduced,
            _ => DayKind::Regular,
        }
    }
}

impl<C: ServiceCalendar + ?Sized> ServiceCalendar for &C {
    fn day_kind(&self, date: NaiveDate) -> DayKind {
        (**self).day_kind(date)
    }
}

/// Convenience for callers that only have a weekday.
pub fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}
