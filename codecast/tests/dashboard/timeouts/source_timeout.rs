use std::time::Duration;

use codecast::{CodecastError, Dashboard, SourceKind};
use codecast_mock::{DynamicMockConnector, MockBehavior};

use crate::helpers::{bundle_fixture, history_fixture, stats};

#[tokio::test(start_paused = true)]
async fn hanging_source_times_out_and_degrades() {
    let (conn, ctl) = DynamicMockConnector::new_with_controller("dyn");
    ctl.set_stats_behavior(MockBehavior::Hang).await;
    ctl.set_forecast_behavior(MockBehavior::Return(bundle_fixture()))
        .await;
    ctl.set_logs_behavior(MockBehavior::Return(history_fixture()))
        .await;

    let dashboard = Dashboard::builder()
        .with_connector(conn)
        .source_timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    let snap = dashboard.load().await;

    assert_eq!(
        snap.failures,
        vec![CodecastError::source_timeout(SourceKind::Stats, "dyn")]
    );
    assert_eq!(snap.series.len(), 2);
    assert_eq!(snap.attribution.connector_for(SourceKind::Logs), Some("dyn"));
}

#[tokio::test(start_paused = true)]
async fn slow_source_within_timeout_is_kept() {
    let (conn, ctl) = DynamicMockConnector::new_with_controller("dyn");
    ctl.set_stats_behavior(MockBehavior::ReturnAfter(
        Duration::from_millis(20),
        stats(1.0, 1.0, 1),
    ))
    .await;
    ctl.set_forecast_behavior(MockBehavior::Return(bundle_fixture()))
        .await;
    ctl.set_logs_behavior(MockBehavior::Return(history_fixture()))
        .await;

    let dashboard = Dashboard::builder()
        .with_connector(conn)
        .source_timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    let snap = dashboard.load().await;

    assert!(!snap.is_degraded());
    assert_eq!(snap.stats, stats(1.0, 1.0, 1));
}
