use std::path::{Path, PathBuf};

use crate::{
    Res, config, error, info,
    management::SnapshotManager,
    pipeline, success,
    types::{TrackRecord, TrackTable},
    warning,
};

/// Stores tracks exported by the playlist fetcher as the raw snapshot.
///
/// The input is a JSON array of objects with `id`, `name`, `artist`,
/// `add_time` (epoch milliseconds) and `lyrics`. Records are normalized,
/// duplicates are dropped and, when `limit` is given, only the first `limit`
/// tracks are kept.
pub async fn import(input: PathBuf, limit: Option<usize>) {
    info!("Reading tracks from {}", input.display());

    let table = match load_tracks(&input).await {
        Ok(table) => table,
        Err(e) => error!("Cannot import tracks. Err: {}", e),
    };

    let table = match limit {
        Some(n) if n < table.len() => {
            info!("Keeping the first {} of {} tracks.", n, table.len());
            pipeline::limit(table, n)
        }
        _ => table,
    };

    if table.is_empty() {
        warning!("No tracks found in {}", input.display());
    }

    let snapshots = SnapshotManager::new(config::data_dir());
    match snapshots.persist_raw(&table).await {
        Ok(path) => {
            success!(
                "Raw data saved to {}, {} tracks.",
                path.display(),
                table.len()
            );
            info!("Run lyricmood analyze to score them.");
        }
        Err(e) => error!("{}", e),
    }
}

async fn load_tracks(input: &Path) -> Res<TrackTable> {
    let content = async_fs::read_to_string(input).await?;
    let records: Vec<TrackRecord> = serde_json::from_str(&content)?;
    let table = pipeline::normalize(records)?;
    Ok(table)
}
