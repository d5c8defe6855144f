//! Configuration management for the lyric mood tracker.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory. Every setting has a default rooted in
//! the data directory, so the tool runs without any configuration.
//!
//! Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf};

/// Loads environment variables from `lyricmood/.env` in the local data directory.
///
/// Creates the directory if needed. A missing `.env` file is not an error;
/// a present but unreadable one is.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/lyricmood/.env`
/// - macOS: `~/Library/Application Support/lyricmood/.env`
/// - Windows: `%LOCALAPPDATA%/lyricmood/.env`
pub async fn load_env() -> Result<(), String> {
    let path = default_data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if async_fs::metadata(&path).await.is_err() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| e.to_string())?;
    Ok(())
}

fn default_data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("lyricmood");
    path
}

fn path_var(name: &str) -> Option<PathBuf> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

/// Directory holding `music_data_raw.csv` and `music_mood_data.csv`.
///
/// Reads `LYRICMOOD_DATA_DIR`, defaulting to the `lyricmood` folder in the
/// local data directory.
pub fn data_dir() -> PathBuf {
    path_var("LYRICMOOD_DATA_DIR").unwrap_or_else(default_data_dir)
}

/// Directory receiving `mood_report.json` (`LYRICMOOD_OUTPUT_DIR`).
pub fn output_dir() -> PathBuf {
    path_var("LYRICMOOD_OUTPUT_DIR").unwrap_or_else(|| data_dir().join("outputs"))
}

/// Directory searched for `<track name>.mp3` files (`LYRICMOOD_LOCAL_AUDIO_DIR`).
pub fn local_audio_dir() -> PathBuf {
    path_var("LYRICMOOD_LOCAL_AUDIO_DIR").unwrap_or_else(|| data_dir().join("local_music"))
}

/// Location of the trained sentiment model (`LYRICMOOD_MODEL_PATH`).
pub fn model_path() -> PathBuf {
    path_var("LYRICMOOD_MODEL_PATH").unwrap_or_else(|| data_dir().join("sentiment_model.json"))
}
