//! Domain types for timetable queries.
//!
//! Times of day, countdowns and service-day classification. Types that
//! carry range invariants check them at construction time.

mod calendar;
mod time;

pub use calendar::{DayKind, ServiceCalendar, WeekendCalendar, is_weekend};
pub use time::{Countdown, InvalidServiceTime, SECONDS_PER_DAY, ServiceTime};
