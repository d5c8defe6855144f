//! Time series derived from a scored table, handed to an external plotting
//! front end as `mood_report.json` and rendered as terminal tables by the CLI.
//!
//! Every series spans the full calendar range of the table. Periods without
//! tracks are kept as `None` so that gaps stay visible.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::{types::MoodTable, utils};

pub const TREND_WINDOW_MONTHS: usize = 12;
pub const TREND_MIN_MONTHS: usize = 3;
pub const CALENDAR_WINDOW_DAYS: usize = 30;
pub const HISTOGRAM_BINS: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    pub year: i32,
    pub month: u32,
    pub tracks: usize,
    pub mean: Option<f64>,
    pub smoothed: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyStats {
    pub year: i32,
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPoint {
    pub day: String,
    pub tracks: usize,
    pub mean: Option<f64>,
    pub smoothed: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
    pub mean: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodReport {
    pub tracks: usize,
    pub monthly: Vec<MonthlyPoint>,
    pub yearly: Vec<YearlyStats>,
    pub daily: Vec<DailyPoint>,
    pub histogram: Histogram,
}

impl MoodReport {
    pub fn build(table: &MoodTable) -> Self {
        Self::build_with(table, HISTOGRAM_BINS, CALENDAR_WINDOW_DAYS)
    }

    pub fn build_with(table: &MoodTable, bins: usize, window_days: usize) -> Self {
        Self {
            tracks: table.len(),
            monthly: monthly_trend(table),
            yearly: yearly_distribution(table),
            daily: daily_calendar(table, window_days),
            histogram: histogram(table, bins),
        }
    }
}

/// Monthly means with a centered 12-month rolling trend, gap-filled by
/// linear interpolation.
pub fn monthly_trend(table: &MoodTable) -> Vec<MonthlyPoint> {
    let Some((first, last)) = day_bounds(table) else {
        return Vec::new();
    };

    let mut groups: BTreeMap<(i32, u32), Vec<f64>> = BTreeMap::new();
    for row in &table.rows {
        let date = row.date();
        groups
            .entry((date.year(), date.month()))
            .or_default()
            .push(row.sentiment.value());
    }

    let months = utils::month_range(first, last);
    let means: Vec<Option<f64>> = months
        .iter()
        .map(|key| groups.get(key).and_then(|v| utils::mean(v)))
        .collect();
    let smoothed = interpolate(&centered_rolling_mean(
        &means,
        TREND_WINDOW_MONTHS,
        TREND_MIN_MONTHS,
    ));

    months
        .into_iter()
        .zip(means)
        .zip(smoothed)
        .map(|(((year, month), mean), smoothed)| MonthlyPoint {
            year,
            month,
            tracks: groups.get(&(year, month)).map_or(0, Vec::len),
            mean,
            smoothed,
        })
        .collect()
}

pub fn yearly_distribution(table: &MoodTable) -> Vec<YearlyStats> {
    let mut groups: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
    for row in &table.rows {
        groups
            .entry(row.date().year())
            .or_default()
            .push(row.sentiment.value());
    }

    groups
        .into_iter()
        .filter_map(|(year, mut values)| {
            values.sort_by(f64::total_cmp);
            Some(YearlyStats {
                year,
                count: values.len(),
                mean: utils::mean(&values)?,
                min: *values.first()?,
                q1: utils::quantile(&values, 0.25)?,
                median: utils::quantile(&values, 0.5)?,
                q3: utils::quantile(&values, 0.75)?,
                max: *values.last()?,
            })
        })
        .collect()
}

/// Daily means with a trailing rolling mean over `window_days` days.
pub fn daily_calendar(table: &MoodTable, window_days: usize) -> Vec<DailyPoint> {
    let Some((first, last)) = day_bounds(table) else {
        return Vec::new();
    };

    let mut groups: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
    for row in &table.rows {
        groups
            .entry(row.date().date())
            .or_default()
            .push(row.sentiment.value());
    }

    let days = utils::day_range(first, last);
    let means: Vec<Option<f64>> = days
        .iter()
        .map(|day| groups.get(day).and_then(|v| utils::mean(v)))
        .collect();
    let smoothed = trailing_rolling_mean(&means, window_days.max(1));

    days.into_iter()
        .zip(means)
        .zip(smoothed)
        .map(|((day, mean), smoothed)| DailyPoint {
            day: day.format("%Y-%m-%d").to_string(),
            tracks: groups.get(&day).map_or(0, Vec::len),
            mean,
            smoothed,
        })
        .collect()
}

/// Equal-width bins over `[0, 1]`; a score of exactly 1.0 lands in the last bin.
pub fn histogram(table: &MoodTable, bins: usize) -> Histogram {
    let bins = bins.max(1);
    let width = 1.0 / bins as f64;
    let mut counts = vec![0usize; bins];
    for row in &table.rows {
        let idx = ((row.sentiment.value() * bins as f64).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Histogram {
        bins: counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                lower: i as f64 * width,
                upper: (i + 1) as f64 * width,
                count,
            })
            .collect(),
        mean: table.mean_sentiment(),
    }
}

/// Each point averages `[i - (w - 1 - (w-1)/2), i + (w-1)/2]`; an even
/// window puts the extra slot before `i`, e.g. `[i-6, i+5]` for 12.
pub fn centered_rolling_mean(
    values: &[Option<f64>],
    window: usize,
    min_periods: usize,
) -> Vec<Option<f64>> {
    let window = window.max(1) as isize;
    let ahead = (window - 1) / 2;
    let behind = window - 1 - ahead;
    let n = values.len() as isize;

    (0..n)
        .map(|i| {
            let end = (i + ahead).min(n - 1);
            let start = (i - behind).max(0);
            let present: Vec<f64> = (start..=end)
                .filter_map(|j| values[j as usize])
                .collect();
            if present.len() >= min_periods.max(1) {
                utils::mean(&present)
            } else {
                None
            }
        })
        .collect()
}

pub fn trailing_rolling_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let present: Vec<f64> = values[start..=i].iter().flatten().copied().collect();
            utils::mean(&present)
        })
        .collect()
}

/// Linear interpolation across gaps. Leading gaps stay empty; trailing gaps
/// repeat the last known value.
pub fn interpolate(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut out = values.to_vec();
    let mut last_known: Option<(usize, f64)> = None;

    for (i, value) in values.iter().enumerate() {
        let Some(v) = *value else {
            continue;
        };
        if let Some((j, prev)) = last_known {
            let span = (i - j) as f64;
            for k in (j + 1)..i {
                out[k] = Some(prev + (v - prev) * (k - j) as f64 / span);
            }
        }
        last_known = Some((i, v));
    }

    if let Some((j, prev)) = last_known {
        for slot in out.iter_mut().skip(j + 1) {
            *slot = Some(prev);
        }
    }

    out
}

fn day_bounds(table: &MoodTable) -> Option<(NaiveDate, NaiveDate)> {
    let first = table.rows.iter().map(|r| r.date().date()).min()?;
    let last = table.rows.iter().map(|r| r.date().date()).max()?;
    Some((first, last))
}
