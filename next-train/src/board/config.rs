//! Configuration for the status board.

use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::query::QueryConfig;

/// Default timetable file, looked up relative to the working directory.
const DEFAULT_TIMETABLE_PATH: &str = "aobayama_timetable.json";

/// Default redraw interval: once per second.
const DEFAULT_REFRESH: Duration = Duration::from_secs(1);

/// Title shown when there is no countdown and no station name to show.
const DEFAULT_FALLBACK_TITLE: &str = "Aobayama";

/// Configuration for the status board.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Path to the timetable document.
    pub timetable_path: PathBuf,

    /// How many upcoming departures to list.
    pub query: QueryConfig,

    /// How often to recompute and redraw.
    pub refresh_interval: Duration,

    /// Title used when the timetable couldn't be loaded.
    pub fallback_title: String,
}

impl BoardConfig {
    /// Create a config for the given timetable file with default settings.
    pub fn new(timetable_path: impl Into<PathBuf>) -> Self {
        Self {
            timetable_path: timetable_path.into(),
            query: QueryConfig::default(),
            refresh_interval: DEFAULT_REFRESH,
            fallback_title: DEFAULT_FALLBACK_TITLE.to_string(),
        }
    }

    /// Set how many departures to list.
    pub fn with_count(mut self, count: usize) -> Self {
        self.query = QueryConfig::new(count);
        self
    }

    /// Set a custom refresh interval.
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Set the title shown when nothing else is available.
    pub fn with_fallback_title(mut self, title: impl Into<String>) -> Self {
        self.fallback_title = title.into();
        self
    }

    /// Build a config from the process environment.
    ///
    /// Reads `TIMETABLE_PATH`, `DEPARTURE_COUNT` and `REFRESH_INTERVAL_MS`.
    /// Unset variables keep their defaults; unparsable ones are logged and
    /// ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = match lookup("TIMETABLE_PATH") {
            Some(path) if !path.is_empty() => Self::new(path),
            _ => Self::default(),
        };

        if let Some(raw) = lookup("DEPARTURE_COUNT") {
            match raw.parse::<usize>() {
                Ok(count) if count > 0 => config = config.with_count(count),
                _ => warn!(value = %raw, "ignoring invalid DEPARTURE_COUNT"),
            }
        }

        if let Some(raw) = lookup("REFRESH_INTERVAL_MS") {
            match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => {
                    config = config.with_refresh_interval(Duration::from_millis(ms))
                }
                _ => warn!(value = %raw, "ignoring invalid REFRESH_INTERVAL_MS"),
            }
        }

        config
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TIMETABLE_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.timetable_path, PathBuf::from("aobayama_timetable.json"));
        assert_eq!(config.query.count, 3);
        assert_eq!(config.refresh_interval, Duration::from_secs(1));
        assert_eq!(config.fallback_title, "Aobayama");
    }

    #[test]
    fn builder_methods() {
        let config = BoardConfig::new("tt.json")
            .with_count(5)
            .with_refresh_interval(Duration::from_millis(250))
            .with_fallback_title("Station");
        assert_eq!(config.timetable_path, PathBuf::from("tt.json"));
        assert_eq!(config.query.count, 5);
        assert_eq!(config.refresh_interval, Duration::from_millis(250));
        assert_eq!(config.fallback_title, "Station");
    }

    #[test]
    fn from_lookup_reads_all_keys() {
        let config = BoardConfig::from_lookup(lookup(&[
            ("TIMETABLE_PATH", "/data/tt.json"),
            ("DEPARTURE_COUNT", "4"),
            ("REFRESH_INTERVAL_MS", "500"),
        ]));
        assert_eq!(config.timetable_path, PathBuf::from("/data/tt.json"));
        assert_eq!(config.query.count, 4);
        assert_eq!(config.refresh_interval, Duration::from_millis(500));
    }

    #[test]
    fn from_lookup_empty_uses_defaults() {
        let config = BoardConfig::from_lookup(|_| None);
        assert_eq!(config.timetable_path, PathBuf::from("aobayama_timetable.json"));
        assert_eq!(config.query.count, 3);
    }

    #[test]
    fn from_lookup_ignores_garbage() {
        let config = BoardConfig::from_lookup(lookup(&[
            ("DEPARTURE_COUNT", "three"),
            ("REFRESH_INTERVAL_MS", "0"),
        ]));
        assert_eq!(config.query.count, 3);
        assert_eq!(config.refresh_interval, Duration::from_secs(1));
    }
}
