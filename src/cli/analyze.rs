use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config, error, info,
    management::{ModelManager, SnapshotManager},
    pipeline::{MoodScorer, RuleStats, ScoringRule},
    sentiment::NaiveBayes,
    success,
    types::RuleStatsTableRow,
    warning,
};

/// Scores every track of the latest snapshot and writes the mood snapshot.
///
/// The scored snapshot is preferred as input so that re-runs pick up rule or
/// model changes; the raw snapshot written by `import` is the fallback. The
/// result always overwrites `music_mood_data.csv`.
///
/// # Error Handling
///
/// - **No snapshot / corrupt snapshot**: terminates with an error
/// - **Model file unreadable**: warns and scores with the seed lexicon
/// - **Single track failures**: absorbed as neutral scores
pub async fn analyze() {
    let snapshots = SnapshotManager::new(config::data_dir());

    let path = match snapshots.resolve().await {
        Ok(path) => path,
        Err(e) => error!("{}\nRun lyricmood import first.", e),
    };
    if path == snapshots.raw_path() {
        warning!(
            "Mood snapshot not found, loading raw data {}",
            path.display()
        );
    }

    info!("Loading data from {}", path.display());
    let table = match snapshots.load().await {
        Ok(table) => table,
        Err(e) => error!("Cannot load data. Err: {}", e),
    };
    success!("Loaded {} tracks.", table.len());

    if table.is_empty() {
        warning!("No tracks to analyze.");
        return;
    }

    let model_mgr = ModelManager::new(config::model_path());
    let model = match model_mgr.load_or_seeded().await {
        Ok(model) => model,
        Err(e) => {
            warning!(
                "Cannot load sentiment model {}, using seed lexicon. Err: {}",
                model_mgr.path().display(),
                e
            );
            NaiveBayes::seeded()
        }
    };

    let scorer = MoodScorer::new(Box::new(model)).with_local_audio_dir(config::local_audio_dir());

    let pb = ProgressBar::new(table.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:40.blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb.set_message("Scoring lyrics...");

    let run = scorer.score_table(table, |row| {
        pb.set_message(row.track.name.clone());
        pb.inc(1);
    });
    pb.finish_and_clear();

    print_rule_stats(&run.stats);

    match snapshots.persist(&run.table).await {
        Ok(path) => success!(
            "Analysis finished, {} tracks saved to {} (mean sentiment {:.3}).",
            run.table.len(),
            path.display(),
            run.table.mean_sentiment().unwrap_or(0.5)
        ),
        Err(e) => error!("{}", e),
    }
}

fn print_rule_stats(stats: &RuleStats) {
    let rows: Vec<RuleStatsTableRow> = ScoringRule::CHAIN
        .iter()
        .map(|rule| RuleStatsTableRow {
            rule: rule.to_string(),
            tracks: stats.get(*rule),
        })
        .collect();

    println!("{}", Table::new(rows));

    if stats.fallback > 0 {
        warning!(
            "{} tracks could not be classified and were scored neutral.",
            stats.fallback
        );
    }
}
