//! # CLI Module
//!
//! This module provides the command-line layer of lyricmood. Each command
//! wires configuration, the snapshot and model managers and the pipeline
//! stages together, and reports progress with the crate's logging macros.
//!
//! ## Command Categories
//!
//! ### Ingestion
//!
//! - [`import`] - Normalizes track records exported by the playlist fetcher and
//!   writes the raw snapshot
//!
//! ### Scoring
//!
//! - [`analyze`] - Loads the latest snapshot, scores every track and writes the
//!   mood snapshot
//! - [`train`] - Trains the sentiment model from labelled corpora
//!
//! ### Reporting
//!
//! - [`report`] - Aggregates the mood snapshot into time series and writes
//!   `mood_report.json` for plotting
//!
//! ## Architecture Design
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Snapshot/Model persistence)
//!     ↓
//! Pipeline Layer (Normalizer → Scorer → Report)
//! ```
//!
//! ## Error Handling Philosophy
//!
//! - **Dataset failures are fatal**: a missing or corrupt snapshot ends the
//!   command with a hint on how to recover
//! - **Row failures are absorbed**: a track that cannot be scored gets the
//!   neutral score and is counted under `fallback`
//!
//! ## Usage Patterns
//!
//! ```bash
//! lyricmood import --input liked_tracks.json   # Store fetched tracks
//! lyricmood analyze                            # Score lyrics
//! lyricmood report                             # Summarize mood over time
//! ```

mod analyze;
mod import;
mod report;
mod train;

pub use analyze::analyze;
pub use import::import;
pub use report::report;
pub use train::train;
