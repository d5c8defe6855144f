use std::path::PathBuf;

use super::rules::{AudioMoodModel, ScoringContext, ScoringRule};
use crate::{
    sentiment::{NaiveBayes, SentimentClassifier},
    types::{MoodRow, MoodTable, Sentiment, TrackRow, TrackTable},
};

/// How many rows each rule decided during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleStats {
    pub instrumental: usize,
    pub local_audio: usize,
    pub text_sentiment: usize,
    pub fallback: usize,
}

impl RuleStats {
    fn record(&mut self, rule: ScoringRule) {
        match rule {
            ScoringRule::InstrumentalMarker => self.instrumental += 1,
            ScoringRule::LocalAudioOverride => self.local_audio += 1,
            ScoringRule::TextSentiment => self.text_sentiment += 1,
            ScoringRule::Fallback => self.fallback += 1,
        }
    }

    pub fn get(&self, rule: ScoringRule) -> usize {
        match rule {
            ScoringRule::InstrumentalMarker => self.instrumental,
            ScoringRule::LocalAudioOverride => self.local_audio,
            ScoringRule::TextSentiment => self.text_sentiment,
            ScoringRule::Fallback => self.fallback,
        }
    }

    pub fn total(&self) -> usize {
        self.instrumental + self.local_audio + self.text_sentiment + self.fallback
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoringRun {
    pub table: MoodTable,
    pub stats: RuleStats,
}

pub struct MoodScorer {
    ctx: ScoringContext,
}

impl Default for MoodScorer {
    fn default() -> Self {
        Self::new(Box::new(NaiveBayes::seeded()))
    }
}

impl MoodScorer {
    pub fn new(classifier: Box<dyn SentimentClassifier>) -> Self {
        Self {
            ctx: ScoringContext {
                classifier,
                local_audio_dir: None,
                audio_model: None,
            },
        }
    }

    pub fn with_local_audio_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.ctx.local_audio_dir = Some(dir.into());
        self
    }

    pub fn with_audio_model(mut self, model: Box<dyn AudioMoodModel>) -> Self {
        self.ctx.audio_model = Some(model);
        self
    }

    pub fn context(&self) -> &ScoringContext {
        &self.ctx
    }

    /// Runs the rule chain and reports which rule produced the score.
    pub fn evaluate(&self, row: &TrackRow) -> (ScoringRule, Sentiment) {
        ScoringRule::CHAIN
            .iter()
            .find_map(|rule| rule.apply(row, &self.ctx).map(|s| (*rule, s)))
            .unwrap_or((ScoringRule::Fallback, Sentiment::NEUTRAL))
    }

    pub fn score(&self, row: &TrackRow) -> Sentiment {
        self.evaluate(row).1
    }

    /// Scores rows one by one in input order, then sorts by date ascending.
    /// `on_row` is called after each row, e.g. to advance a progress bar.
    pub fn score_table(&self, table: TrackTable, mut on_row: impl FnMut(&MoodRow)) -> ScoringRun {
        let mut stats = RuleStats::default();
        let mut rows = Vec::with_capacity(table.len());

        for track in table.rows {
            let (rule, sentiment) = self.evaluate(&track);
            stats.record(rule);
            let row = MoodRow { track, sentiment };
            on_row(&row);
            rows.push(row);
        }

        // stable, so same-date rows keep input order
        rows.sort_by_key(|r| r.date());

        ScoringRun {
            table: MoodTable::new(rows),
            stats,
        }
    }
}
