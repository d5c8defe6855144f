//! The two pipeline stages: raw records are normalized into a
//! [`TrackTable`](crate::types::TrackTable), which the [`MoodScorer`] turns
//! into a date-ordered [`MoodTable`](crate::types::MoodTable). Each stage
//! consumes its input table and returns a new one.

mod normalize;
mod rules;
mod scorer;

pub use normalize::{limit, normalize, normalize_snapshot};
pub use rules::{
    AudioMoodModel, MIN_LYRIC_CHARS, ScoringContext, ScoringRule, instrumental_marker,
    local_audio_override, text_sentiment,
};
pub use scorer::{MoodScorer, RuleStats, ScoringRun};
