//! Query configuration.

/// Number of upcoming departures listed when the caller doesn't say.
pub const DEFAULT_DEPARTURE_COUNT: usize = 3;

/// Parameters for a departure query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    /// Maximum number of upcoming departures to return.
    pub count: usize,
}

impl QueryConfig {
    /// Create a new configuration listing up to `count` departures.
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_DEPARTURE_COUNT,
        }
    }
}
