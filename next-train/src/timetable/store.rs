//! The loaded, read-only timetable.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::entry::TimetableEntry;
use super::error::LoadError;

/// The document as it appears on disk, before range checks.
#[derive(Debug, Deserialize)]
struct TimetableDocument {
    station: String,
    destination: String,
    entries: Vec<TimetableEntry>,
}

/// A weekly timetable for one station and direction.
///
/// Entries are kept in document order. Nothing here assumes they are
/// sorted by hour or that each hour appears only once.
///
/// # Examples
///
/// ```
/// use next_train::timetable::Timetable;
///
/// let json = r#"{
///     "station": "Aobayama",
///     "destination": "Arai",
///     "entries": [{"hour": 8, "weekday": [5, 20], "holiday": [10]}]
/// }"#;
/// let timetable = Timetable::from_json_str(json).unwrap();
/// assert_eq!(timetable.station(), "Aobayama");
/// assert_eq!(timetable.entries().len(), 1);
///
/// // Out-of-range minutes are rejected
/// let bad = r#"{"station": "A", "destination": "B",
///               "entries": [{"hour": 8, "weekday": [75], "holiday": []}]}"#;
/// assert!(Timetable::from_json_str(bad).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TimetableDocument")]
pub struct Timetable {
    station: String,
    destination: String,
    entries: Vec<TimetableEntry>,
}

impl TryFrom<TimetableDocument> for Timetable {
    type Error = LoadError;

    fn try_from(doc: TimetableDocument) -> Result<Self, Self::Error> {
        Timetable::new(doc.station, doc.destination, doc.entries)
    }
}

impl Timetable {
    /// Create a timetable from already-built entries.
    ///
    /// Fails if any entry has an out-of-range hour or minute.
    pub fn new(
        station: impl Into<String>,
        destination: impl Into<String>,
        entries: Vec<TimetableEntry>,
    ) -> Result<Self, LoadError> {
        for entry in &entries {
            entry.validate()?;
        }
        let timetable = Self {
            station: station.into(),
            destination: destination.into(),
            entries,
        };
        timetable.report_duplicates();
        Ok(timetable)
    }

    /// Read and parse a timetable file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|source| LoadError::MissingResource {
                path: path.to_path_buf(),
                source,
            })?;

        let timetable = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            station = %timetable.station,
            destination = %timetable.destination,
            entries = timetable.entries.len(),
            "loaded timetable"
        );
        Ok(timetable)
    }

    /// Parse a timetable from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a timetable from any JSON byte stream.
    pub fn from_reader(reader: impl Read) -> Result<Self, LoadError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Station the departures leave from.
    pub fn station(&self) -> &str {
        &self.station
    }

    /// Where the departures are heading.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// All entries, in document order.
    pub fn entries(&self) -> &[TimetableEntry] {
        &self.entries
    }

    /// Returns true if no entry lists any departure minute.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(TimetableEntry::is_empty)
    }

    fn report_duplicates(&self) {
        let mut hours = HashSet::new();
        for entry in &self.entries {
            if !hours.insert(entry.hour()) {
                warn!(hour = entry.hour(), "timetable lists the same hour more than once");
            }
            if entry.has_duplicate_minutes() {
                warn!(hour = entry.hour(), "timetable entry repeats a minute");
            }
        }
    }
}
