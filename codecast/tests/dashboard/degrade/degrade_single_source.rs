use codecast::{CodecastError, Dashboard, SourceKind, Stats};

use crate::helpers::{MockConnector, bundle_fixture, history_fixture, stats};

fn boom(kind: SourceKind) -> CodecastError {
    CodecastError::source_failed(kind, "boom")
}

#[tokio::test]
async fn failed_stats_degrade_to_zeros() {
    let c = MockConnector::builder()
        .name("p")
        .with_stats_fn(|| Err(boom(SourceKind::Stats)))
        .returns_forecast_ok(bundle_fixture())
        .returns_logs_ok(history_fixture())
        .build();
    let dashboard = Dashboard::builder().with_connector(c).build().unwrap();
    let snap = dashboard.load().await;

    assert_eq!(snap.stats, Stats::default());
    assert_eq!(snap.series.len(), 2);
    assert_eq!(snap.failures, vec![boom(SourceKind::Stats)]);
    assert!(snap.attribution.connector_for(SourceKind::Stats).is_none());
}

#[tokio::test]
async fn failed_forecast_keeps_history() {
    let c = MockConnector::builder()
        .name("p")
        .returns_stats_ok(stats(2.0, 2.0, 1))
        .with_forecast_fn(|| Err(boom(SourceKind::Forecast)))
        .returns_logs_ok(history_fixture())
        .build();
    let dashboard = Dashboard::builder().with_connector(c).build().unwrap();
    let snap = dashboard.load().await;

    assert_eq!(snap.series.len(), 1);
    assert!(!snap.series.has_forecast());
    assert!(snap.summary.point.is_none());
    assert_eq!(snap.summary.confidence_percent, None);
    assert!(snap.failure(SourceKind::Forecast).is_some());
}

#[tokio::test]
async fn failed_logs_keep_forecast() {
    let c = MockConnector::builder()
        .name("p")
        .returns_stats_ok(stats(2.0, 2.0, 1))
        .returns_forecast_ok(bundle_fixture())
        .with_logs_fn(|| Err(boom(SourceKind::Logs)))
        .build();
    let dashboard = Dashboard::builder().with_connector(c).build().unwrap();
    let snap = dashboard.load().await;

    assert_eq!(snap.series.len(), 1);
    assert!(snap.series.points()[0].is_forecast());
    assert_eq!(snap.summary.confidence_percent, Some(80));
    assert!(snap.failure(SourceKind::Logs).is_some());
}

#[tokio::test]
async fn all_sources_failing_yields_empty_snapshot() {
    let c = MockConnector::builder()
        .name("p")
        .with_stats_fn(|| Err(boom(SourceKind::Stats)))
        .with_forecast_fn(|| Err(boom(SourceKind::Forecast)))
        .with_logs_fn(|| Err(boom(SourceKind::Logs)))
        .build();
    let dashboard = Dashboard::builder().with_connector(c).build().unwrap();
    let snap = dashboard.load().await;

    assert!(snap.is_empty());
    assert_eq!(snap.failures.len(), 3);
    assert_eq!(snap.stats, Stats::default());
    // still accepted: an empty snapshot replaces whatever was shown
    assert_eq!(dashboard.current().map(|s| s.tag), Some(snap.tag));
}

#[tokio::test]
async fn untyped_connector_errors_are_tagged() {
    let c = MockConnector::builder()
        .name("flaky")
        .with_logs_fn(|| Err(CodecastError::Other("connection reset".into())))
        .build();
    let dashboard = Dashboard::builder().with_connector(c).build().unwrap();
    let snap = dashboard.load().await;

    match snap.failure(SourceKind::Logs) {
        Some(CodecastError::Source { kind, msg }) => {
            assert_eq!(*kind, SourceKind::Logs);
            assert!(msg.starts_with("flaky: "), "{msg}");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn wrong_shape_payloads_degrade() {
    let dashboard = Dashboard::builder()
        .with_connector(std::sync::Arc::new(codecast_mock::MockConnector::with_profile(
            "wrong-shape",
        )))
        .build()
        .unwrap();
    let snap = dashboard.load().await;

    assert!(snap.is_empty());
    assert_eq!(snap.failures.len(), 3);
    assert!(
        snap.failures
            .iter()
            .all(|e| matches!(e, CodecastError::UnexpectedShape { .. }))
    );
}
