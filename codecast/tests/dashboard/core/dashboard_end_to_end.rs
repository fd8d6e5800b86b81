use codecast::{CodecastError, Dashboard, PointKind, SourceKind, format_percent};

use crate::helpers::{bundle_fixture, history_fixture, m_all, stats};

#[tokio::test]
async fn load_reconciles_history_and_forecast() {
    let c = m_all("primary", stats(2.0, 2.0, 1), bundle_fixture(), history_fixture());
    let dashboard = Dashboard::builder().with_connector(c).build().unwrap();

    let snap = dashboard.load().await;

    assert!(!snap.is_empty());
    assert!(!snap.is_degraded());
    assert_eq!(snap.stats, stats(2.0, 2.0, 1));

    let points = snap.series.points();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].date, "2024-01-01");
    assert_eq!(points[0].kind, PointKind::History);
    assert_eq!(
        (points[0].hours, points[0].min, points[0].max),
        (2.0, 2.0, 2.0)
    );
    assert_eq!(points[1].date, "2024-01-02");
    assert_eq!(points[1].kind, PointKind::Forecast);
    assert_eq!(
        (points[1].hours, points[1].min, points[1].max),
        (3.0, 2.0, 4.0)
    );

    let next = snap.summary.point.as_ref().expect("next forecast");
    assert_eq!(next.date, "2024-01-02");
    assert_eq!(snap.summary.confidence_percent, Some(80));
    assert_eq!(format_percent(snap.summary.confidence_percent), "80%");
}

#[tokio::test]
async fn load_is_stored_as_current() {
    let c = m_all("primary", stats(2.0, 2.0, 1), bundle_fixture(), history_fixture());
    let dashboard = Dashboard::builder().with_connector(c).build().unwrap();
    assert!(dashboard.current().is_none());

    let snap = dashboard.load().await;
    let current = dashboard.current().expect("accepted");
    assert_eq!(current.tag, snap.tag);
    assert_eq!(*current, *snap);
}

#[tokio::test]
async fn repeated_loads_reconcile_identically() {
    let c = m_all("primary", stats(2.0, 2.0, 1), bundle_fixture(), history_fixture());
    let dashboard = Dashboard::builder().with_connector(c).build().unwrap();

    let a = dashboard.load().await;
    let b = dashboard.load().await;
    assert!(b.tag > a.tag);
    assert_eq!(a.series, b.series);
    assert_eq!(a.summary, b.summary);
    assert_eq!(dashboard.current().map(|s| s.tag), Some(b.tag));
}

#[test]
fn build_without_connectors_is_rejected() {
    let res = Dashboard::builder().build();
    assert!(matches!(res, Err(CodecastError::InvalidArg(_))));
}

#[tokio::test]
async fn attribution_records_serving_connector() {
    let c = m_all("primary", stats(1.0, 1.0, 1), bundle_fixture(), history_fixture());
    let dashboard = Dashboard::builder().with_connector(c).build().unwrap();
    let snap = dashboard.load().await;
    for kind in SourceKind::ALL {
        assert_eq!(snap.attribution.connector_for(kind), Some("primary"));
    }
}
