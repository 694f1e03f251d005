use std::path::PathBuf;
use std::time::Duration;

use crate::error::ArchiverError;
use velib_feed::DEFAULT_FEED_URL;

const DEFAULT_INTERVAL_SECS: u64 = 900;
const DEFAULT_FILE_PREFIX: &str = "velib";

#[derive(Clone, Debug)]
pub struct ArchiverConfig {
    pub feed_url: String,
    pub data_dir: PathBuf,
    pub interval: Duration,
    pub file_prefix: String,
}

impl ArchiverConfig {
    pub fn from_env() -> Result<Self, ArchiverError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function. This avoids mutating global environment in tests and keeps
    /// `from_env()` small and safe.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, ArchiverError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let feed_url = get("VELIB_FEED_URL").unwrap_or_else(|| DEFAULT_FEED_URL.into());
        // The data directory is the one value without a sane default; a
        // baked-in absolute path would be machine-specific.
        let data_dir = get("VELIB_DATA_DIR")
            .map(PathBuf::from)
            .ok_or_else(|| ArchiverError::Config("VELIB_DATA_DIR missing".into()))?;
        let interval_secs = match get("VELIB_FETCH_INTERVAL_SECS") {
            None => DEFAULT_INTERVAL_SECS,
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    ArchiverError::Config(format!(
                        "VELIB_FETCH_INTERVAL_SECS must be a positive integer, got {raw:?}"
                    ))
                })?,
        };
        let file_prefix = get("VELIB_FILE_PREFIX").unwrap_or_else(|| DEFAULT_FILE_PREFIX.into());
        Ok(Self {
            feed_url,
            data_dir,
            interval: Duration::from_secs(interval_secs),
            file_prefix,
        })
    }
}
