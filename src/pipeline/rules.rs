use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::{
    lyrics,
    sentiment::SentimentClassifier,
    types::{Sentiment, TrackRow},
};

/// Cleaned lyrics shorter than this carry too little signal to classify.
pub const MIN_LYRIC_CHARS: usize = 5;

/// Hook for scoring a track from a local audio file instead of its lyrics.
pub trait AudioMoodModel {
    fn predict(&self, audio_file: &Path) -> Result<f64, String>;
}

/// Collaborators the rules read from.
pub struct ScoringContext {
    pub classifier: Box<dyn SentimentClassifier>,
    pub local_audio_dir: Option<PathBuf>,
    pub audio_model: Option<Box<dyn AudioMoodModel>>,
}

impl ScoringContext {
    /// `<local_audio_dir>/<track name>.mp3`, if such a file exists.
    pub fn local_audio_file(&self, row: &TrackRow) -> Option<PathBuf> {
        let dir = self.local_audio_dir.as_ref()?;
        let path = dir.join(format!("{}.mp3", row.name));
        path.is_file().then_some(path)
    }
}

/// Scoring rules, tried in [`ScoringRule::CHAIN`] order until one yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoringRule {
    InstrumentalMarker,
    LocalAudioOverride,
    TextSentiment,
    Fallback,
}

impl ScoringRule {
    pub const CHAIN: [ScoringRule; 4] = [
        ScoringRule::InstrumentalMarker,
        ScoringRule::LocalAudioOverride,
        ScoringRule::TextSentiment,
        ScoringRule::Fallback,
    ];

    pub fn apply(self, row: &TrackRow, ctx: &ScoringContext) -> Option<Sentiment> {
        match self {
            ScoringRule::InstrumentalMarker => instrumental_marker(row),
            ScoringRule::LocalAudioOverride => local_audio_override(row, ctx),
            ScoringRule::TextSentiment => text_sentiment(row, ctx.classifier.as_ref()),
            ScoringRule::Fallback => Some(Sentiment::NEUTRAL),
        }
    }
}

impl fmt::Display for ScoringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScoringRule::InstrumentalMarker => "instrumental",
            ScoringRule::LocalAudioOverride => "local_audio",
            ScoringRule::TextSentiment => "text_sentiment",
            ScoringRule::Fallback => "fallback",
        };
        write!(f, "{}", s)
    }
}

pub fn instrumental_marker(row: &TrackRow) -> Option<Sentiment> {
    lyrics::is_instrumental(&row.lyrics).then_some(Sentiment::NEUTRAL)
}

/// Inert unless an audio model is configured.
pub fn local_audio_override(row: &TrackRow, ctx: &ScoringContext) -> Option<Sentiment> {
    let model = ctx.audio_model.as_ref()?;
    let file = ctx.local_audio_file(row)?;
    model
        .predict(&file)
        .ok()
        .filter(|p| p.is_finite())
        .map(Sentiment::new)
}

/// `None` means the classifier failed and the row degrades to the fallback.
pub fn text_sentiment(row: &TrackRow, classifier: &dyn SentimentClassifier) -> Option<Sentiment> {
    let cleaned = lyrics::clean(&row.lyrics);
    if cleaned.chars().count() < MIN_LYRIC_CHARS {
        return Some(Sentiment::NEUTRAL);
    }

    classifier
        .positive_probability(&cleaned)
        .ok()
        .filter(|p| p.is_finite())
        .map(Sentiment::new)
}
