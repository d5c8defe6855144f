use tabled::Table;

use crate::{
    config, error, info,
    management::SnapshotManager,
    report::MoodReport,
    success,
    types::{MonthlyMoodTableRow, YearlyMoodTableRow},
    utils, warning,
};

const REPORT_FILE: &str = "mood_report.json";

/// Summarizes the mood snapshot and writes `mood_report.json`.
///
/// The JSON carries the monthly trend, yearly distribution, daily calendar
/// and histogram series for a plotting front end. Unless `json_only` is set,
/// the monthly and yearly series are also printed as tables.
pub async fn report(json_only: bool, bins: usize, window_days: usize) {
    let snapshots = SnapshotManager::new(config::data_dir());
    let table = match snapshots.load_scored().await {
        Ok(table) => table,
        Err(e) => error!("{}\nRun lyricmood analyze first.", e),
    };

    if table.is_empty() {
        warning!("Dataset is empty, nothing to report.");
        return;
    }

    info!("Building mood report for {} tracks...", table.len());
    let report = MoodReport::build_with(&table, bins, window_days);

    if !json_only {
        print_tables(&report);
    }

    let out_dir = config::output_dir();
    let out_path = out_dir.join(REPORT_FILE);
    let json = match serde_json::to_string_pretty(&report) {
        Ok(json) => json,
        Err(e) => error!("Cannot serialize report. Err: {}", e),
    };
    if let Err(e) = async_fs::create_dir_all(&out_dir).await {
        error!("Cannot create {}. Err: {}", out_dir.display(), e);
    }
    match async_fs::write(&out_path, json).await {
        Ok(_) => success!("Report saved to {}", out_path.display()),
        Err(e) => error!("Cannot write {}. Err: {}", out_path.display(), e),
    }
}

fn print_tables(report: &MoodReport) {
    let monthly: Vec<MonthlyMoodTableRow> = report
        .monthly
        .iter()
        .map(|m| MonthlyMoodTableRow {
            month: format!("{}-{:02}", m.year, m.month),
            tracks: m.tracks,
            mean: utils::format_score(m.mean),
            trend: utils::format_score(m.smoothed),
        })
        .collect();
    println!("Monthly mood\n{}\n", Table::new(monthly));

    let yearly: Vec<YearlyMoodTableRow> = report
        .yearly
        .iter()
        .map(|y| YearlyMoodTableRow {
            year: y.year,
            tracks: y.count,
            mean: utils::format_score(Some(y.mean)),
            q1: utils::format_score(Some(y.q1)),
            median: utils::format_score(Some(y.median)),
            q3: utils::format_score(Some(y.q3)),
        })
        .collect();
    println!("Yearly distribution\n{}\n", Table::new(yearly));

    if let Some(mean) = report.histogram.mean {
        info!("Overall mean sentiment: {:.3} (neutral 0.500)", mean);
    }
}
