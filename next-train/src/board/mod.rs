//! Status board: the host side of the engine.
//!
//! Owns the loaded timetable, re-queries it on every tick and renders a
//! short title plus a list of upcoming trains.

mod config;
mod status;
mod urgency;

pub use config::BoardConfig;
pub use status::{Board, BoardStatus, ordinal_label};
pub use urgency::Urgency;
