use std::{cell::Cell, fs, path::Path, rc::Rc};

use chrono::NaiveDate;
use lyricmood::{
    error::{ClassifierError, NormalizeError},
    lyrics::INSTRUMENTAL_MARKER,
    pipeline::{
        AudioMoodModel, MoodScorer, ScoringRule, limit, normalize, normalize_snapshot,
        text_sentiment,
    },
    sentiment::{NaiveBayes, SentimentClassifier},
    types::{Sentiment, SnapshotRecord, TrackRecord, TrackTable},
};

// 2023-01-01 00:00:00 UTC
const JAN_1_2023: i64 = 1_672_531_200_000;
const DAY_MS: i64 = 86_400_000;

fn create_test_record(id: &str, add_time: i64, lyrics: &str) -> TrackRecord {
    TrackRecord {
        id: id.to_string(),
        name: format!("Song {}", id),
        artist: "Artist".to_string(),
        add_time,
        lyrics: lyrics.to_string(),
    }
}

fn create_test_table(records: Vec<TrackRecord>) -> TrackTable {
    normalize(records).unwrap()
}

/// Counts calls and always answers with a fixed probability.
struct FixedClassifier {
    value: f64,
    calls: Rc<Cell<usize>>,
}

impl FixedClassifier {
    fn new(value: f64) -> Self {
        Self {
            value,
            calls: Rc::new(Cell::new(0)),
        }
    }
}

impl SentimentClassifier for FixedClassifier {
    fn positive_probability(&self, _text: &str) -> Result<f64, ClassifierError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.value)
    }
}

struct FailingClassifier;

impl SentimentClassifier for FailingClassifier {
    fn positive_probability(&self, _text: &str) -> Result<f64, ClassifierError> {
        Err(ClassifierError::Untrained)
    }
}

struct FixedAudioModel(f64);

impl AudioMoodModel for FixedAudioModel {
    fn predict(&self, _audio_file: &Path) -> Result<f64, String> {
        Ok(self.0)
    }
}

#[test]
fn test_normalize_derives_date_from_add_time() {
    let table = create_test_table(vec![create_test_record("1", JAN_1_2023 + 1_500, "")]);
    let expected = NaiveDate::from_ymd_opt(2023, 1, 1)
        .unwrap()
        .and_hms_milli_opt(0, 0, 1, 500)
        .unwrap();
    assert_eq!(table.rows[0].date, expected);
    assert_eq!(table.rows[0].add_time, Some(JAN_1_2023 + 1_500));
}

#[test]
fn test_normalize_drops_duplicate_ids() {
    let table = create_test_table(vec![
        create_test_record("1", JAN_1_2023, "first"),
        create_test_record("2", JAN_1_2023, ""),
        create_test_record("1", JAN_1_2023, "duplicate"),
    ]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[0].lyrics, "first");
}

#[test]
fn test_normalize_rejects_missing_id() {
    let result = normalize(vec![create_test_record("  ", JAN_1_2023, "")]);
    assert_eq!(result, Err(NormalizeError::MissingId { row: 0 }));
}

#[test]
fn test_normalize_snapshot_prefers_stored_date() {
    let records = vec![SnapshotRecord {
        id: "1".to_string(),
        add_time: Some(JAN_1_2023),
        date: Some("2020-05-06 07:08:09.250".to_string()),
        ..Default::default()
    }];
    let table = normalize_snapshot(records).unwrap();
    let expected = NaiveDate::from_ymd_opt(2020, 5, 6)
        .unwrap()
        .and_hms_milli_opt(7, 8, 9, 250)
        .unwrap();
    assert_eq!(table.rows[0].date, expected);
}

#[test]
fn test_normalize_snapshot_accepts_date_formats() {
    for text in ["2020-05-06 00:00:00", "2020-05-06T00:00:00", "2020-05-06"] {
        let records = vec![SnapshotRecord {
            id: "1".to_string(),
            date: Some(text.to_string()),
            ..Default::default()
        }];
        let table = normalize_snapshot(records).unwrap();
        assert_eq!(
            table.rows[0].date.date(),
            NaiveDate::from_ymd_opt(2020, 5, 6).unwrap(),
            "format {}",
            text
        );
    }
}

#[test]
fn test_normalize_snapshot_falls_back_to_add_time() {
    let records = vec![SnapshotRecord {
        id: "1".to_string(),
        add_time: Some(JAN_1_2023),
        date: Some("".to_string()),
        ..Default::default()
    }];
    let table = normalize_snapshot(records).unwrap();
    assert_eq!(
        table.rows[0].date.date(),
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
    );
}

#[test]
fn test_normalize_snapshot_errors() {
    let missing = vec![SnapshotRecord {
        id: "7".to_string(),
        ..Default::default()
    }];
    assert_eq!(
        normalize_snapshot(missing),
        Err(NormalizeError::MissingTimestamp {
            id: "7".to_string()
        })
    );

    let invalid = vec![SnapshotRecord {
        id: "8".to_string(),
        date: Some("yesterday".to_string()),
        ..Default::default()
    }];
    assert_eq!(
        normalize_snapshot(invalid),
        Err(NormalizeError::InvalidDate {
            id: "8".to_string(),
            value: "yesterday".to_string()
        })
    );
}

#[test]
fn test_limit_keeps_first_rows() {
    let table = create_test_table(vec![
        create_test_record("1", JAN_1_2023, ""),
        create_test_record("2", JAN_1_2023, ""),
        create_test_record("3", JAN_1_2023, ""),
    ]);
    let limited = limit(table, 2);
    let ids: Vec<&str> = limited.rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn test_sentiment_new_clamps_and_rejects_nan() {
    assert_eq!(Sentiment::new(1.7).value(), 1.0);
    assert_eq!(Sentiment::new(-0.2).value(), 0.0);
    assert_eq!(Sentiment::new(f64::NAN), Sentiment::NEUTRAL);
    assert_eq!(Sentiment::new(f64::INFINITY), Sentiment::NEUTRAL);
}

#[test]
fn test_sentiment_deserialize_clamps() {
    let high: Sentiment = serde_json::from_str("1.7").unwrap();
    let low: Sentiment = serde_json::from_str("-0.2").unwrap();
    let mid: Sentiment = serde_json::from_str("0.25").unwrap();
    assert_eq!(high.value(), 1.0);
    assert_eq!(low.value(), 0.0);
    assert_eq!(mid.value(), 0.25);
    assert_eq!(serde_json::to_string(&mid).unwrap(), "0.25");
}

#[test]
fn test_instrumental_marker_wins_without_classifier() {
    let classifier = FixedClassifier::new(0.9);
    let calls = Rc::clone(&classifier.calls);
    let scorer = MoodScorer::new(Box::new(classifier))
        .with_audio_model(Box::new(FixedAudioModel(0.1)));
    let lyrics = format!("[00:00.00]{}\n[00:05.00]我很快乐很幸福的歌词", INSTRUMENTAL_MARKER);
    let table = create_test_table(vec![create_test_record("1", JAN_1_2023, &lyrics)]);

    let (rule, sentiment) = scorer.evaluate(&table.rows[0]);
    assert_eq!(rule, ScoringRule::InstrumentalMarker);
    assert_eq!(sentiment.value(), 0.5);
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_short_cleaned_lyrics_are_neutral() {
    let classifier = FixedClassifier::new(0.9);
    let calls = Rc::clone(&classifier.calls);
    let scorer = MoodScorer::new(Box::new(classifier));
    let table = create_test_table(vec![
        create_test_record("1", JAN_1_2023, ""),
        create_test_record("2", JAN_1_2023, "[00:01.00]作曲：某人\n[00:02.00]爱你"),
        create_test_record("3", JAN_1_2023, "[00:01.00]abcd"),
    ]);

    for row in &table.rows {
        assert_eq!(scorer.score(row).value(), 0.5, "row {}", row.id);
    }
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_text_sentiment_uses_classifier() {
    let classifier = FixedClassifier::new(0.83);
    let calls = Rc::clone(&classifier.calls);
    let scorer = MoodScorer::new(Box::new(classifier));
    let table = create_test_table(vec![create_test_record(
        "1",
        JAN_1_2023,
        "[00:01.00]真正的歌词内容",
    )]);

    let (rule, sentiment) = scorer.evaluate(&table.rows[0]);
    assert_eq!(rule, ScoringRule::TextSentiment);
    assert_eq!(sentiment.value(), 0.83);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_classifier_failure_degrades_to_fallback() {
    let scorer = MoodScorer::new(Box::new(FailingClassifier));
    let table = create_test_table(vec![create_test_record(
        "1",
        JAN_1_2023,
        "plenty of lyric text here",
    )]);

    assert_eq!(text_sentiment(&table.rows[0], &FailingClassifier), None);
    let (rule, sentiment) = scorer.evaluate(&table.rows[0]);
    assert_eq!(rule, ScoringRule::Fallback);
    assert_eq!(sentiment, Sentiment::NEUTRAL);
}

#[test]
fn test_out_of_range_classifier_output_is_clamped() {
    let scorer = MoodScorer::new(Box::new(FixedClassifier::new(3.0)));
    let table = create_test_table(vec![create_test_record("1", JAN_1_2023, "long enough lyrics")]);
    assert_eq!(scorer.score(&table.rows[0]).value(), 1.0);

    let scorer = MoodScorer::new(Box::new(FixedClassifier::new(f64::NAN)));
    let (rule, sentiment) = scorer.evaluate(&table.rows[0]);
    assert_eq!(rule, ScoringRule::Fallback);
    assert_eq!(sentiment, Sentiment::NEUTRAL);
}

#[test]
fn test_local_audio_override_is_inert_without_model() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Song 1.mp3"), b"fake").unwrap();

    let scorer =
        MoodScorer::new(Box::new(FixedClassifier::new(0.8))).with_local_audio_dir(dir.path());
    let table = create_test_table(vec![create_test_record("1", JAN_1_2023, "long enough lyrics")]);

    assert!(scorer.context().local_audio_file(&table.rows[0]).is_some());
    let (rule, sentiment) = scorer.evaluate(&table.rows[0]);
    assert_eq!(rule, ScoringRule::TextSentiment);
    assert_eq!(sentiment.value(), 0.8);
}

#[test]
fn test_local_audio_override_with_model() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Song 1.mp3"), b"fake").unwrap();

    let scorer = MoodScorer::new(Box::new(FixedClassifier::new(0.8)))
        .with_local_audio_dir(dir.path())
        .with_audio_model(Box::new(FixedAudioModel(0.25)));
    let table = create_test_table(vec![
        create_test_record("1", JAN_1_2023, "long enough lyrics"),
        create_test_record("2", JAN_1_2023, "long enough lyrics"),
    ]);

    assert_eq!(
        scorer.evaluate(&table.rows[0]),
        (ScoringRule::LocalAudioOverride, Sentiment::new(0.25))
    );
    // no "Song 2.mp3" on disk
    assert_eq!(
        scorer.evaluate(&table.rows[1]),
        (ScoringRule::TextSentiment, Sentiment::new(0.8))
    );
}

#[test]
fn test_score_table_sorts_by_date_and_counts_rules() {
    let scorer = MoodScorer::default();
    let table = create_test_table(vec![
        create_test_record("late", JAN_1_2023 + 3 * DAY_MS, "[00:01.00]阳光 微笑 温暖"),
        create_test_record("early", JAN_1_2023, INSTRUMENTAL_MARKER),
        create_test_record("mid", JAN_1_2023 + DAY_MS, ""),
        create_test_record("mid2", JAN_1_2023 + DAY_MS, "[00:01.00]眼泪 心碎 告别"),
    ]);

    let mut seen = Vec::new();
    let run = scorer.score_table(table, |row| seen.push(row.track.id.clone()));

    assert_eq!(seen, vec!["late", "early", "mid", "mid2"]);
    let ids: Vec<&str> = run.table.rows.iter().map(|r| r.track.id.as_str()).collect();
    assert_eq!(ids, vec!["early", "mid", "mid2", "late"]);
    assert!(run.table.rows.windows(2).all(|w| w[0].date() <= w[1].date()));

    assert_eq!(run.stats.instrumental, 1);
    assert_eq!(run.stats.text_sentiment, 3);
    assert_eq!(run.stats.total(), 4);
}

#[test]
fn test_scores_are_bounded_and_idempotent() {
    let scorer = MoodScorer::new(Box::new(NaiveBayes::seeded()));
    let lyrics = [
        "",
        "[00:01.00]作词：某人\n[00:05.00]真正的歌词内容",
        "[00:01.00]我很快乐很幸福",
        "[00:01.00]我好孤单好寂寞眼泪流",
        "[00:01.00]!!! ??? ...",
        INSTRUMENTAL_MARKER,
        "[00:01.00]Here comes the sun, and I say it's all right",
    ];
    let records: Vec<TrackRecord> = lyrics
        .iter()
        .enumerate()
        .map(|(i, l)| create_test_record(&i.to_string(), JAN_1_2023 + i as i64 * DAY_MS, l))
        .collect();

    let first = scorer.score_table(create_test_table(records.clone()), |_| {});
    let second = scorer.score_table(create_test_table(records), |_| {});

    for row in &first.table.rows {
        let v = row.sentiment.value();
        assert!(v.is_finite() && (0.0..=1.0).contains(&v), "row {}", row.track.id);
    }
    let a: Vec<f64> = first.table.rows.iter().map(|r| r.sentiment.value()).collect();
    let b: Vec<f64> = second.table.rows.iter().map(|r| r.sentiment.value()).collect();
    assert_eq!(a, b);
}

#[test]
fn test_score_empty_table() {
    let scorer = MoodScorer::default();
    let run = scorer.score_table(TrackTable::default(), |_| {});
    assert!(run.table.is_empty());
    assert_eq!(run.stats.total(), 0);
}
