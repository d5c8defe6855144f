use std::path::PathBuf;

use thiserror::Error;

/// Failures that end a pipeline run because no usable dataset is available.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("no dataset snapshot found, searched: {}", display_paths(.searched))]
    Unavailable { searched: Vec<PathBuf> },

    #[error("dataset snapshot {} is corrupt: {reason}", .path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("cannot write dataset snapshot {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Row-shape problems found while normalizing records into a table.
#[derive(Debug, Error, PartialEq)]
pub enum NormalizeError {
    #[error("row {row} has no track id")]
    MissingId { row: usize },

    #[error("track {id} has neither a date nor an add_time")]
    MissingTimestamp { id: String },

    #[error("track {id} has an unparseable date '{value}'")]
    InvalidDate { id: String, value: String },

    #[error("track {id} has an add_time out of range: {add_time}")]
    InvalidTimestamp { id: String, add_time: i64 },
}

/// Raised by a classifier when a text cannot be scored. The scorer absorbs it.
#[derive(Debug, Error, PartialEq)]
pub enum ClassifierError {
    #[error("classifier has no training data")]
    Untrained,

    #[error("text produced no tokens")]
    EmptyInput,
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("model file is not valid: {0}")]
    Serde(#[from] serde_json::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
