//! Board state and text rendering.

use std::fmt::Write;

use chrono::NaiveDateTime;
use tracing::error;

use crate::domain::Countdown;
use crate::query::{QueryEngine, TrainInfo};
use crate::timetable::{LoadError, Timetable};

use super::config::BoardConfig;
use super::urgency::Urgency;

const ANSI_RESET: &str = "\x1b[0m";

/// What the board has to show at one instant.
///
/// Load failures and "nothing left to run" are kept apart so the display
/// can say which one happened.
#[derive(Debug)]
pub enum BoardStatus<'a> {
    /// The timetable never loaded.
    Unavailable(&'a LoadError),

    /// The timetable loaded but lists nothing for this kind of day.
    NothingScheduled,

    /// Upcoming departures, soonest first.
    Departures {
        countdown: Countdown,
        trains: Vec<TrainInfo>,
    },
}

/// The host-side view: owns the loaded timetable (or the reason it isn't
/// there) and turns queries into text.
#[derive(Debug)]
pub struct Board {
    timetable: Result<Timetable, LoadError>,
    config: BoardConfig,
}

impl Board {
    /// Create a board from an already attempted load.
    pub fn new(timetable: Result<Timetable, LoadError>, config: BoardConfig) -> Self {
        Self { timetable, config }
    }

    /// Load the configured timetable file.
    ///
    /// A failed load still yields a board; it reports itself unavailable.
    pub fn load(config: BoardConfig) -> Self {
        let timetable = Timetable::load(&config.timetable_path);
        if let Err(e) = &timetable {
            error!(error = %e, "timetable unavailable");
        }
        Self::new(timetable, config)
    }

    /// The loaded timetable, if any.
    pub fn timetable(&self) -> Option<&Timetable> {
        self.timetable.as_ref().ok()
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Query the timetable for `now`.
    pub fn status(&self, now: NaiveDateTime) -> BoardStatus<'_> {
        let timetable = match &self.timetable {
            Ok(t) => t,
            Err(e) => return BoardStatus::Unavailable(e),
        };

        let snapshot = QueryEngine::new(timetable).snapshot(now, &self.config.query);
        match snapshot.countdown {
            Some(countdown) => BoardStatus::Departures {
                countdown,
                trains: snapshot.departures,
            },
            None => BoardStatus::NothingScheduled,
        }
    }

    /// Short status-bar title: `M:SS` to the next train, otherwise the
    /// station name.
    pub fn title(&self, now: NaiveDateTime) -> String {
        match self.status(now) {
            BoardStatus::Departures { countdown, .. } => countdown.to_string(),
            BoardStatus::NothingScheduled => self
                .timetable()
                .map(|t| t.station().to_string())
                .unwrap_or_else(|| self.config.fallback_title.clone()),
            BoardStatus::Unavailable(_) => self.config.fallback_title.clone(),
        }
    }

    /// `"{station} → {destination}"`, if the timetable loaded.
    pub fn header(&self) -> Option<String> {
        self.timetable()
            .map(|t| format!("{} → {}", t.station(), t.destination()))
    }

    /// Multi-line board text for `now`.
    ///
    /// With `colour` set, countdowns carry ANSI colours by urgency.
    pub fn render(&self, now: NaiveDateTime, colour: bool) -> String {
        let mut out = String::new();
        match self.status(now) {
            BoardStatus::Unavailable(e) => {
                let _ = writeln!(out, "⚠ timetable unavailable: {e}");
            }
            BoardStatus::NothingScheduled => {
                if let Some(header) = self.header() {
                    let _ = writeln!(out, "{header}");
                }
                let _ = writeln!(out, "no departures scheduled");
            }
            BoardStatus::Departures { trains, .. } => {
                if let Some(header) = self.header() {
                    let _ = writeln!(out, "{header}");
                }
                for (index, train) in trains.iter().enumerate() {
                    let _ = writeln!(out, "{}", render_row(index, train, colour));
                }
            }
        }
        out
    }
}

/// Row label: circled digits for the first three, plain numbers after.
pub fn ordinal_label(index: usize) -> String {
    match index {
        0 => "①".to_string(),
        1 => "②".to_string(),
        2 => "③".to_string(),
        n => (n + 1).to_string(),
    }
}

/// Countdown as shown in a row; minutes are dropped when zero.
fn row_countdown(train: &TrainInfo) -> String {
    if train.minutes_until > 0 {
        format!("{}m {:02}s", train.minutes_until, train.seconds_until)
    } else {
        format!("{:02}s", train.seconds_until)
    }
}

fn render_row(index: usize, train: &TrainInfo, colour: bool) -> String {
    let mut countdown = row_countdown(train);
    if colour {
        countdown = format!("{}{countdown}{ANSI_RESET}", Urgency::of(train).ansi_colour());
    }
    let next_day = if train.is_next_day { " (+1)" } else { "" };
    format!(
        "{} {:02}:{:02}{next_day}  {countdown}",
        ordinal_label(index),
        train.hour,
        train.minute
    )
}
