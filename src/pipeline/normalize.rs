use std::collections::HashSet;

use crate::{
    error::NormalizeError,
    types::{SnapshotRecord, TrackRecord, TrackRow, TrackTable},
    utils,
};

/// Normalizes freshly fetched records, deriving `date` from `add_time`.
pub fn normalize(records: Vec<TrackRecord>) -> Result<TrackTable, NormalizeError> {
    let mut rows = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        if record.id.trim().is_empty() {
            return Err(NormalizeError::MissingId { row: index });
        }
        let date = date_from_add_time(&record.id, record.add_time)?;
        rows.push(TrackRow {
            id: record.id,
            name: record.name,
            artist: record.artist,
            add_time: Some(record.add_time),
            date,
            lyrics: record.lyrics,
        });
    }

    Ok(dedup(rows))
}

/// Normalizes snapshot rows. A stored `date` wins over `add_time`.
pub fn normalize_snapshot(records: Vec<SnapshotRecord>) -> Result<TrackTable, NormalizeError> {
    let mut rows = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        if record.id.trim().is_empty() {
            return Err(NormalizeError::MissingId { row: index });
        }

        let stored_date = record.date.as_deref().filter(|d| !d.trim().is_empty());
        let date = match (stored_date, record.add_time) {
            (Some(text), _) => utils::parse_date(text).ok_or_else(|| NormalizeError::InvalidDate {
                id: record.id.clone(),
                value: text.to_string(),
            })?,
            (None, Some(add_time)) => date_from_add_time(&record.id, add_time)?,
            (None, None) => {
                return Err(NormalizeError::MissingTimestamp { id: record.id });
            }
        };

        rows.push(TrackRow {
            id: record.id,
            name: record.name,
            artist: record.artist,
            add_time: record.add_time,
            date,
            lyrics: record.lyrics,
        });
    }

    Ok(dedup(rows))
}

/// Keeps the first `n` rows, mirroring the fetcher's `limit` option.
pub fn limit(table: TrackTable, n: usize) -> TrackTable {
    let mut rows = table.rows;
    rows.truncate(n);
    TrackTable::new(rows)
}

fn date_from_add_time(id: &str, add_time: i64) -> Result<chrono::NaiveDateTime, NormalizeError> {
    utils::date_from_millis(add_time).ok_or_else(|| NormalizeError::InvalidTimestamp {
        id: id.to_string(),
        add_time,
    })
}

fn dedup(mut rows: Vec<TrackRow>) -> TrackTable {
    let mut seen_ids = HashSet::new();
    rows.retain(|row| seen_ids.insert(row.id.clone()));
    TrackTable::new(rows)
}
