//! Persists captured snapshots as timestamped files on disk.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tokio::io::AsyncWriteExt;

use crate::error::ArchiverResult;
use velib_feed::FeedSnapshot;

/// Snapshot writer rooted at a pre-existing data directory.
///
/// The directory is never created here; startup verifies it exists.
#[derive(Clone, Debug)]
pub struct SnapshotStore {
    dir: PathBuf,
    prefix: String,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Filename for a capture time, at minute granularity
    /// (e.g. `velib_2024-01-15_14h30.csv`).
    ///
    /// Two captures within the same minute map to the same name; the
    /// later write replaces the earlier file's contents.
    pub fn file_name(&self, at: DateTime<Local>) -> String {
        format!("{}_{}.csv", self.prefix, at.format("%Y-%m-%d_%Hh%M"))
    }

    /// Write the snapshot payload byte for byte, returning the path.
    pub async fn write(&self, snapshot: &FeedSnapshot) -> ArchiverResult<PathBuf> {
        let path = self.dir.join(self.file_name(snapshot.captured_at));
        let mut file = tokio::fs::File::create(&path).await?;
        file.write_all(&snapshot.body).await?;
        file.sync_all().await?;
        Ok(path)
    }
}
