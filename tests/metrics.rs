// tests/metrics.rs
use async_trait::async_trait;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use syphon::report::MemoryReport;
use syphon::target::BlankLines;
use syphon::{build_targets, run, FetchOutcome, PageFetcher};

struct EchoFetcher;

#[async_trait]
impl PageFetcher for EchoFetcher {
    async fn fetch(&self, address: &str, _timeout: Duration) -> FetchOutcome {
        if address.ends_with("/down") {
            FetchOutcome::failure("connection reset")
        } else {
            FetchOutcome::success(format!("<!-- {address} -->"))
        }
    }
}

#[tokio::test]
async fn counters_exposed_after_run() {
    // Install a local recorder for this test binary
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("recorder");

    let list = vec!["up".to_string(), "down".to_string()];
    let targets = build_targets("http://h", Some(list.as_slice()), BlankLines::Keep);
    let mut sink = MemoryReport::new();
    let summary = run(
        &EchoFetcher,
        &targets,
        &mut sink,
        Duration::from_secs(1),
        &CancellationToken::new(),
    )
    .await
    .unwrap();
    assert_eq!(summary.sections_written, 2);

    let out = handle.render();
    assert!(out.contains("syphon_targets_total 2"));
    assert!(out.contains("syphon_sections_written_total 2"));
}
