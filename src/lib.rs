//! Lyric Mood Tracker Library
//!
//! This library turns a history of liked songs into a mood dataset. Raw track
//! records are normalized into a dated table, each song's lyrics are cleaned and
//! scored for sentiment, and the scored table is persisted as a CSV snapshot
//! from which time-series reports are derived.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Dataset, normalization and classifier error types
//! - `lyrics` - Lyric cleaning and instrumental detection
//! - `management` - Snapshot and model persistence
//! - `pipeline` - Normalizer and mood scorer stages
//! - `report` - Time-series aggregation for visualization
//! - `sentiment` - Text sentiment classifier
//! - `types` - Data structures and type definitions
//! - `utils` - Date helpers shared by the stages
//!
//! # Example
//!
//! ```
//! use lyricmood::{pipeline, management::SnapshotManager};
//!
//! #[tokio::main]
//! async fn main() -> lyricmood::Res<()> {
//!     let table = SnapshotManager::new("data").load().await?;
//!     let scorer = pipeline::MoodScorer::default();
//!     let run = scorer.score_table(table, |_| {});
//!     SnapshotManager::new("data").persist(&run.table).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod lyrics;
pub mod management;
pub mod pipeline;
pub mod report;
pub mod sentiment;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the CLI glue where errors from several layers meet. Library stages
/// return their own typed errors from [`error`].
///
/// # Example
///
/// ```
/// use lyricmood::Res;
///
/// async fn run() -> Res<usize> {
///     Ok(0)
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Loading snapshot...");
/// info!("Found {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Scored {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used for failures that end the current command, such as a missing or
/// corrupt dataset snapshot.
///
/// # Example
///
/// ```
/// error!("Cannot load dataset. Err: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Mood snapshot not found, falling back to raw snapshot");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
