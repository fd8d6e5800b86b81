use std::sync::Arc;

use codecast::{Dashboard, PointKind, format_date, format_number};
use codecast_mock::MockConnector;

#[tokio::test]
async fn demo_profile_builds_ordered_series() {
    let dashboard = Dashboard::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap();
    let snap = dashboard.load().await;

    assert!(!snap.is_degraded());
    assert_eq!(snap.series.len(), 18);
    assert!(snap.series.has_forecast());
    assert_eq!(snap.series.points()[0].date, "2024-03-01");
    assert_eq!(snap.series.points()[14].kind, PointKind::History);
    assert_eq!(snap.series.points()[15].date, "2024-03-16");
    assert_eq!(snap.series.points()[17].kind, PointKind::Forecast);
    assert_eq!(snap.unordered_dates, 0);

    let next = snap.summary.point.as_ref().expect("next forecast");
    assert_eq!(format_date(&next.date), "Mar 16, 2024");
    assert_eq!(snap.summary.confidence_percent, Some(72));
    assert_eq!(format_number(&snap.stats.total_hours.into(), 1), "40.5");
}

#[tokio::test]
async fn sparse_profile_without_confidence() {
    let dashboard = Dashboard::builder()
        .with_connector(Arc::new(MockConnector::with_profile("sparse")))
        .build()
        .unwrap();
    let snap = dashboard.load().await;

    assert_eq!(snap.series.len(), 3);
    let dates: Vec<&str> = snap.series.iter().map(|p| p.date.as_str()).collect();
    assert_eq!(dates, ["2024-03-01", "2024-03-02", "2024-03-03"]);
    assert_eq!(snap.summary.confidence_percent, None);
    assert_eq!(snap.summary.expected_hours(), Some(2.0));
}

#[tokio::test]
async fn empty_profile_shows_no_data() {
    let dashboard = Dashboard::builder()
        .with_connector(Arc::new(MockConnector::with_profile("empty")))
        .build()
        .unwrap();
    let snap = dashboard.load().await;

    assert!(snap.is_empty());
    assert!(!snap.is_degraded());
    assert!(snap.summary.point.is_none());
    assert_eq!(snap.summary.confidence_percent, None);
}
