mod model;
mod snapshot;

pub use model::ModelManager;
pub use snapshot::MOOD_SNAPSHOT;
pub use snapshot::RAW_SNAPSHOT;
pub use snapshot::SnapshotManager;
pub use snapshot::parse_records;
