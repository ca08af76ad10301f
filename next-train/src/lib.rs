//! Next-train countdown for a single station.
//!
//! Loads a weekly timetable with separate weekday and weekend minute lists
//! and answers: "when do the next trains leave, and how long until each?"

pub mod board;
pub mod domain;
pub mod query;
pub mod timetable;
