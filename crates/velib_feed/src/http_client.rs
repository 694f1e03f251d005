//! HTTP client for the Vélib open-data export.
//!
//! This module provides a reqwest-based implementation of the [`VelibFeed`](crate::VelibFeed) trait.

use crate::{FeedError, FeedSnapshot, VelibFeed};
use async_trait::async_trait;
use chrono::Local;

/// Feed client for a fixed, fully-qualified export URL using reqwest.
#[derive(Clone, Debug)]
pub struct ReqwestVelibFeed {
    url: String,
    client: reqwest::Client,
}

impl ReqwestVelibFeed {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `url` - The fully-qualified CSV export URL, fixed at configuration time
    pub fn new(url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("reqwest client build should not fail");
        Self {
            url: url.into(),
            client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl VelibFeed for ReqwestVelibFeed {
    async fn fetch_csv(&self) -> Result<FeedSnapshot, FeedError> {
        let resp = self.client.get(&self.url).send().await?;
        // Capture time is fixed at response receipt, before the body is read.
        let captured_at = Local::now();
        let status = resp.status().as_u16();
        if !resp.status().is_success() {
            tracing::warn!(
                status,
                url = %self.url,
                "feed returned a non-success status; archiving the body anyway"
            );
        }
        let body = resp.bytes().await?.to_vec();
        Ok(FeedSnapshot {
            captured_at,
            status,
            body,
        })
    }
}
