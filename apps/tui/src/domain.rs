use serde::{Deserialize, Serialize};
use std::fmt;

/// Card number as sent by the API. Some backends send it as a JSON number,
/// others as a string; both are display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardNo {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for CardNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub quarter: u8,
}

impl Period {
    pub fn label(self) -> String {
        format!("Year {} - Quarter {}", self.year, self.quarter)
    }
}

/// A loyalty card with a fixed number of stamp slots.
///
/// `stamps[i]` is slot `i`; its position is what gets rendered, so the
/// vector is never reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StampCardRecord {
    pub no: CardNo,
    pub name: String,
    pub period: Period,
    pub stamps: Vec<bool>,
}

impl StampCardRecord {
    pub fn completed_stamps(&self) -> usize {
        self.stamps.iter().filter(|collected| **collected).count()
    }

    pub fn total_stamps(&self) -> usize {
        self.stamps.len()
    }

    pub fn progress(&self) -> Progress {
        Progress::new(self.completed_stamps(), self.total_stamps())
    }
}

/// Share of collected stamps. An empty card counts as 0%.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    percent: f64,
}

impl Progress {
    pub fn new(completed: usize, total: usize) -> Self {
        if total == 0 {
            return Self { percent: 0.0 };
        }

        #[allow(clippy::cast_precision_loss)]
        let percent = (completed as f64 / total as f64) * 100.0;
        Self {
            percent: percent.clamp(0.0, 100.0),
        }
    }

    pub const fn percent(self) -> f64 {
        self.percent
    }

    /// Fill fraction in `[0, 1]`.
    pub fn ratio(self) -> f64 {
        self.percent / 100.0
    }

    /// Percentage rounded half-up to one decimal, e.g. `"40.0"`, `"6.3"` for 1/16.
    pub fn label(self) -> String {
        // `{:.1}` alone rounds exact ties to even.
        format!("{:.1}", (self.percent * 10.0).round() / 10.0)
    }
}
