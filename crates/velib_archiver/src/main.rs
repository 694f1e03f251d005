use velib_archiver::scheduler::{self, Clock, Schedule, SystemClock};
use velib_archiver::{ArchiverConfig, SnapshotStore};
use velib_feed::http_client::ReqwestVelibFeed;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), anyhow::Error> {
    // Configure logging from env var `VELIB_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let log_env = std::env::var("VELIB_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::info!("velib_archiver: log filter: {}", log_env);

    let cfg = match ArchiverConfig::from_env() {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::error!(%err, "invalid configuration; aborting startup");
            return Err(err.into());
        }
    };

    // The store never creates its directory; fail fast if it is absent.
    if !cfg.data_dir.is_dir() {
        tracing::error!(dir = %cfg.data_dir.display(), "data directory does not exist; aborting startup");
        anyhow::bail!("data directory {} does not exist", cfg.data_dir.display());
    }

    let feed = ReqwestVelibFeed::new(cfg.feed_url.clone());
    let store = SnapshotStore::new(cfg.data_dir.clone(), cfg.file_prefix.clone());
    let clock = SystemClock;
    let schedule = Schedule::new(cfg.interval, clock.now());

    tracing::info!(
        url = %cfg.feed_url,
        dir = %cfg.data_dir.display(),
        interval_secs = cfg.interval.as_secs(),
        "velib_archiver: starting capture loop"
    );

    scheduler::run(&feed, &store, schedule, &clock).await;

    Ok(())
}
