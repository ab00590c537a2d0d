use serde::{Deserialize, Serialize};

use crate::{segment::SegmentKind, station::Station};

/// Planned segment lengths in minutes, tournament-wide. Only durations are
/// configurable; the segment order never is.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Durations {
    pub dial_in: u32,
    pub cappuccino: u32,
    pub espresso: u32,
}

impl Durations {
    #[must_use]
    pub fn minutes_for(&self, kind: SegmentKind) -> u32 {
        match kind {
            SegmentKind::DialIn => self.dial_in,
            SegmentKind::Cappuccino => self.cappuccino,
            SegmentKind::Espresso => self.espresso,
        }
    }
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            dial_in: 10,
            cappuccino: 8,
            espresso: 8,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Config {
    pub stations: Vec<Station>,
    pub durations: Durations,
}

impl Config {
    /// # Errors
    ///
    /// If the string is not a valid RON config.
    pub fn from_ron(string: &str) -> anyhow::Result<Self> {
        Ok(ron::from_str(string)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stations: vec![
                Station::new("A", 0),
                Station::new("B", 10),
                Station::new("C", 20),
            ],
            durations: Durations::default(),
        }
    }
}
