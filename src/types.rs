use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Raw track metadata as handed over by the playlist fetcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artist: String,
    /// Milliseconds since the Unix epoch at which the track was liked.
    pub add_time: i64,
    #[serde(default)]
    pub lyrics: String,
}

/// A normalized track with its calendar date resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRow {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub add_time: Option<i64>,
    pub date: NaiveDateTime,
    pub lyrics: String,
}

/// Sentiment score in `[0, 1]`; 0 is negative, 1 positive, 0.5 neutral.
///
/// Deserializing goes through [`Sentiment::new`], so stored values are clamped too.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Sentiment(f64);

impl Sentiment {
    pub const NEUTRAL: Sentiment = Sentiment(0.5);

    /// Clamps into `[0, 1]`; NaN and infinities collapse to neutral.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Sentiment(value.clamp(0.0, 1.0))
        } else {
            Self::NEUTRAL
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Sentiment {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl From<f64> for Sentiment {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Sentiment> for f64 {
    fn from(sentiment: Sentiment) -> Self {
        sentiment.0
    }
}

/// A track row enriched with its sentiment score.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodRow {
    pub track: TrackRow,
    pub sentiment: Sentiment,
}

impl MoodRow {
    pub fn date(&self) -> NaiveDateTime {
        self.track.date
    }
}

/// Normalized table produced by the ingestion stage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackTable {
    pub rows: Vec<TrackRow>,
}

impl TrackTable {
    pub fn new(rows: Vec<TrackRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Scored table, ordered by date ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoodTable {
    pub rows: Vec<MoodRow>,
}

impl MoodTable {
    pub fn new(rows: Vec<MoodRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn mean_sentiment(&self) -> Option<f64> {
        if self.rows.is_empty() {
            return None;
        }
        let sum: f64 = self.rows.iter().map(|r| r.sentiment.value()).sum();
        Some(sum / self.rows.len() as f64)
    }
}

/// One CSV row of a dataset snapshot. Raw snapshots carry no `sentiment`
/// column, and hand-edited ones may lack `date` or `add_time`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub add_time: Option<i64>,
    #[serde(default)]
    pub lyrics: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub sentiment: Option<f64>,
}

#[derive(Tabled)]
pub struct MonthlyMoodTableRow {
    pub month: String,
    pub tracks: usize,
    pub mean: String,
    pub trend: String,
}

#[derive(Tabled)]
pub struct YearlyMoodTableRow {
    pub year: i32,
    pub tracks: usize,
    pub mean: String,
    pub q1: String,
    pub median: String,
    pub q3: String,
}

#[derive(Tabled)]
pub struct RuleStatsTableRow {
    pub rule: String,
    pub tracks: usize,
}
