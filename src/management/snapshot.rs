use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::{
    error::DatasetError,
    pipeline,
    types::{MoodRow, MoodTable, Sentiment, SnapshotRecord, TrackRow, TrackTable},
    utils,
};

pub const MOOD_SNAPSHOT: &str = "music_mood_data.csv";
pub const RAW_SNAPSHOT: &str = "music_data_raw.csv";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const RAW_COLUMNS: [&str; 6] = ["id", "name", "artist", "add_time", "lyrics", "date"];
const MOOD_COLUMNS: [&str; 7] = [
    "id",
    "name",
    "artist",
    "add_time",
    "lyrics",
    "date",
    "sentiment",
];

#[derive(Serialize)]
struct RawSnapshotRow<'a> {
    id: &'a str,
    name: &'a str,
    artist: &'a str,
    add_time: Option<i64>,
    lyrics: &'a str,
    date: String,
}

impl<'a> From<&'a TrackRow> for RawSnapshotRow<'a> {
    fn from(row: &'a TrackRow) -> Self {
        Self {
            id: &row.id,
            name: &row.name,
            artist: &row.artist,
            add_time: row.add_time,
            lyrics: &row.lyrics,
            date: utils::format_date(&row.date),
        }
    }
}

// csv cannot serialize flattened structs, so the raw columns are repeated.
#[derive(Serialize)]
struct MoodSnapshotRow<'a> {
    id: &'a str,
    name: &'a str,
    artist: &'a str,
    add_time: Option<i64>,
    lyrics: &'a str,
    date: String,
    sentiment: f64,
}

impl<'a> From<&'a MoodRow> for MoodSnapshotRow<'a> {
    fn from(row: &'a MoodRow) -> Self {
        let track = &row.track;
        Self {
            id: &track.id,
            name: &track.name,
            artist: &track.artist,
            add_time: track.add_time,
            lyrics: &track.lyrics,
            date: utils::format_date(&track.date),
            sentiment: row.sentiment.value(),
        }
    }
}

pub struct SnapshotManager {
    data_dir: PathBuf,
}

impl SnapshotManager {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn mood_path(&self) -> PathBuf {
        self.data_dir.join(MOOD_SNAPSHOT)
    }

    pub fn raw_path(&self) -> PathBuf {
        self.data_dir.join(RAW_SNAPSHOT)
    }

    /// First existing snapshot: the scored one, then the raw one.
    pub async fn resolve(&self) -> Result<PathBuf, DatasetError> {
        let candidates = vec![self.mood_path(), self.raw_path()];
        for path in &candidates {
            if is_file(path).await {
                return Ok(path.clone());
            }
        }
        Err(DatasetError::Unavailable {
            searched: candidates,
        })
    }

    /// Loads whichever snapshot exists as an unscored table.
    pub async fn load(&self) -> Result<TrackTable, DatasetError> {
        let path = self.resolve().await?;
        let records = read_records(&path).await?;
        pipeline::normalize_snapshot(records).map_err(|e| corrupt(&path, e))
    }

    /// Loads the scored snapshot; every row must carry a sentiment.
    pub async fn load_scored(&self) -> Result<MoodTable, DatasetError> {
        let path = self.mood_path();
        if !is_file(&path).await {
            return Err(DatasetError::Unavailable {
                searched: vec![path],
            });
        }

        let records = read_records(&path).await?;
        let mut sentiments: HashMap<String, f64> = HashMap::with_capacity(records.len());
        for record in &records {
            let Some(value) = record.sentiment else {
                return Err(corrupt(
                    &path,
                    format!("track {} has no sentiment", record.id),
                ));
            };
            sentiments.entry(record.id.clone()).or_insert(value);
        }

        let table = pipeline::normalize_snapshot(records).map_err(|e| corrupt(&path, e))?;
        let mut rows: Vec<MoodRow> = table
            .rows
            .into_iter()
            .map(|track| {
                let sentiment = sentiments
                    .get(&track.id)
                    .copied()
                    .map_or(Sentiment::NEUTRAL, Sentiment::new);
                MoodRow { track, sentiment }
            })
            .collect();
        rows.sort_by_key(|r| r.date());

        Ok(MoodTable::new(rows))
    }

    /// Overwrites the raw snapshot and removes the mood snapshot scored from
    /// the previous one, so the next `load` picks up the new tracks.
    pub async fn persist_raw(&self, table: &TrackTable) -> Result<PathBuf, DatasetError> {
        let path = self.raw_path();
        let rows = table.rows.iter().map(RawSnapshotRow::from);
        let bytes = encode(&RAW_COLUMNS, rows).map_err(|e| write_error(&path, e))?;
        write_file(&path, bytes).await?;

        let stale = self.mood_path();
        match async_fs::remove_file(&stale).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(DatasetError::Write {
                    path: stale,
                    source: e,
                });
            }
        }

        Ok(path)
    }

    /// Overwrites the scored snapshot.
    pub async fn persist(&self, table: &MoodTable) -> Result<PathBuf, DatasetError> {
        let path = self.mood_path();
        let rows = table.rows.iter().map(MoodSnapshotRow::from);
        let bytes = encode(&MOOD_COLUMNS, rows).map_err(|e| write_error(&path, e))?;
        write_file(&path, bytes).await?;
        Ok(path)
    }
}

/// Parses snapshot bytes, tolerating a leading UTF-8 BOM.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<SnapshotRecord>, csv::Error> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes)
        .deserialize()
        .collect()
}

fn encode<T: Serialize>(
    columns: &[&str],
    rows: impl Iterator<Item = T>,
) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(UTF8_BOM.to_vec());
    writer.write_record(columns)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.into_inner().map_err(|e| e.into_error().into())
}

async fn read_records(path: &Path) -> Result<Vec<SnapshotRecord>, DatasetError> {
    let bytes = async_fs::read(path).await.map_err(|e| corrupt(path, e))?;
    parse_records(&bytes).map_err(|e| corrupt(path, e))
}

async fn write_file(path: &Path, bytes: Vec<u8>) -> Result<(), DatasetError> {
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| DatasetError::Write {
                path: path.to_path_buf(),
                source: e,
            })?;
    }

    async_fs::write(path, bytes)
        .await
        .map_err(|e| DatasetError::Write {
            path: path.to_path_buf(),
            source: e,
        })
}

async fn is_file(path: &Path) -> bool {
    async_fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

fn corrupt(path: &Path, reason: impl ToString) -> DatasetError {
    DatasetError::Corrupt {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

fn write_error(path: &Path, err: csv::Error) -> DatasetError {
    DatasetError::Write {
        path: path.to_path_buf(),
        source: std::io::Error::other(err.to_string()),
    }
}
