use criterion::{Criterion, criterion_group, criterion_main};
use tempfile::tempdir;
use tokio::runtime::Builder;
use velib_archiver::SnapshotStore;
use velib_archiver::scheduler::run_cycle;
use velib_feed::http_client::ReqwestVelibFeed;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn bench_archive_cycle(c: &mut Criterion) {
    let rt = Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");

    let server = rt.block_on(async {
        let server = MockServer::start().await;
        let body = vec![b';'; 256 * 1024]; // 256KB payload, roughly one station export
        Mock::given(method("GET"))
            .and(path("/export.csv"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
            .mount(&server)
            .await;
        server
    });

    let feed = ReqwestVelibFeed::new(format!("{}/export.csv", server.uri()));
    c.bench_function("archive_cycle_fetch_and_write", |b| {
        b.to_async(&rt).iter(|| {
            let feed = feed.clone();
            let tmpdir = tempdir().expect("tempdir");
            let store = SnapshotStore::new(tmpdir.path(), "velib");
            async move {
                let _hold_dir = tmpdir; // keep tempdir alive until future completes
                let written = run_cycle(&feed, &store).await.expect("cycle");
                let _ = tokio::fs::metadata(&written).await.expect("metadata");
            }
        })
    });
}

criterion_group!(benches, bench_archive_cycle);
criterion_main!(benches);
