//! Timetable storage.
//!
//! Loads the station timetable document once at startup. The result is
//! immutable; queries borrow it for as long as the process runs.

mod entry;
mod error;
mod store;

pub use entry::TimetableEntry;
pub use error::LoadError;
pub use store::Timetable;
