//! Minimal `VelibFeed` trait and reqwest-based client for the Vélib
//! open-data CSV export.

use async_trait::async_trait;
use chrono::{DateTime, Local};
use thiserror::Error;

pub mod http_client;

/// Default export URL of the Paris open-data station-availability dataset.
pub const DEFAULT_FEED_URL: &str = "http://opendata.paris.fr/explore/dataset/stations-velib-disponibilites-en-temps-reel/download/?format=csv&timezone=Europe/Berlin&use_labels_for_header=true";

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("configuration error: {0}")]
    Config(String),
}

/// One captured (timestamp, payload) pair produced by a single fetch.
///
/// `captured_at` is assigned once, when the HTTP response is received,
/// and never recomputed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedSnapshot {
    pub captured_at: DateTime<Local>,
    pub status: u16,
    pub body: Vec<u8>,
}

impl FeedSnapshot {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait VelibFeed: Send + Sync + 'static {
    /// Download the current station-availability CSV.
    ///
    /// Any body received over a working connection is returned as a
    /// snapshot, including 4xx/5xx error pages; only transport failures
    /// (DNS, refused connection, timeout) are errors.
    async fn fetch_csv(&self) -> Result<FeedSnapshot, FeedError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn snapshot(status: u16) -> FeedSnapshot {
        FeedSnapshot {
            captured_at: Local::now(),
            status,
            body: b"a,b\n1,2\n".to_vec(),
        }
    }

    #[test]
    fn is_success_covers_2xx_only() {
        assert!(snapshot(200).is_success());
        assert!(snapshot(204).is_success());
        assert!(!snapshot(199).is_success());
        assert!(!snapshot(301).is_success());
        assert!(!snapshot(404).is_success());
        assert!(!snapshot(500).is_success());
    }
}
