use velib_feed::{DEFAULT_FEED_URL, VelibFeed, http_client::ReqwestVelibFeed};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example: fetches one snapshot and prints its size; VELIB_FEED_URL overrides the default.
    let url = std::env::var("VELIB_FEED_URL").unwrap_or_else(|_| DEFAULT_FEED_URL.to_string());
    let feed = ReqwestVelibFeed::new(url);
    let snapshot = feed.fetch_csv().await?;
    println!(
        "captured {} bytes (status {}) at {}",
        snapshot.body.len(),
        snapshot.status,
        snapshot.captured_at.format("%Y-%m-%d %H:%M:%S")
    );
    Ok(())
}
