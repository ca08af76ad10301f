//! Timetable loading error types.

use std::path::PathBuf;

/// Errors that can occur when loading a timetable document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The timetable file could not be read
    #[error("timetable not found at {}: {source}", path.display())]
    MissingResource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document was read but is not a valid timetable
    #[error("malformed timetable document: {message}")]
    MalformedDocument { message: String },
}

impl LoadError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        LoadError::MalformedDocument {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::malformed(err.to_string())
    }
}
