use serde::{Deserialize, Serialize};

pub type SamplePoint = i64;

/// A named half-open range `[start, stop)` with the number of events seen in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalRecord {
    pub name: String,
    pub start: i64,
    pub stop: i64,
    pub count: i64,
}

impl IntervalRecord {
    pub fn new(name: impl Into<String>, start: i64, stop: i64, count: i64) -> Self {
        Self {
            name: name.into(),
            start,
            stop,
            count,
        }
    }

    /// Whether `point` falls inside `[start, stop)`.
    pub fn contains(&self, point: SamplePoint) -> bool {
        point >= self.start && point < self.stop
    }

    /// Events per unit of range. `None` when the interval has no positive length.
    pub fn rate(&self) -> Option<f64> {
        (self.stop > self.start).then(|| self.active_rate())
    }

    /// Rate of an interval already known to contain some point, so `stop > start`.
    /// The width is taken in `f64` so extreme bounds cannot overflow.
    pub(crate) fn active_rate(&self) -> f64 {
        debug_assert!(self.stop > self.start, "active interval with stop <= start");
        self.count as f64 / (self.stop as f64 - self.start as f64)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub series: Vec<SamplePoint>,
    pub intervals: Vec<IntervalRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputItem {
    pub name: String,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputRecord {
    pub section: SamplePoint,
    pub items: Vec<OutputItem>,
}

impl OutputRecord {
    pub fn is_idle(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}
