//! Departure query engine.
//!
//! Given a timetable and the current local instant, finds the next
//! departures and the countdown to each, rolling over into the following
//! service day after the last train.

mod candidate;
mod config;
mod departure;
mod engine;

pub use config::{DEFAULT_DEPARTURE_COUNT, QueryConfig};
pub use departure::TrainInfo;
pub use engine::{QueryEngine, Snapshot, next_countdown, next_departures, now_local};
