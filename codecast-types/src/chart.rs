//! Chart-ready outputs of reconciliation.

use serde::{Deserialize, Serialize};

use crate::records::ForecastPoint;

/// Origin of a chart point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    /// Derived from a recorded log entry; no uncertainty.
    History,
    /// Derived from a model prediction; carries a min/max band.
    Forecast,
}

/// Canonical chart point. `hours`, `min`, and `max` are always finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Calendar date string as received.
    pub date: String,
    /// Logged or expected hours.
    pub hours: f64,
    /// Lower edge of the band.
    pub min: f64,
    /// Upper edge of the band.
    pub max: f64,
    /// Whether this point is history or forecast.
    pub kind: PointKind,
}

impl ChartPoint {
    /// History point: the band collapses onto `hours`.
    pub fn history(date: impl Into<String>, hours: f64) -> Self {
        Self {
            date: date.into(),
            hours,
            min: hours,
            max: hours,
            kind: PointKind::History,
        }
    }

    /// Forecast point with an explicit band.
    pub fn forecast(date: impl Into<String>, hours: f64, min: f64, max: f64) -> Self {
        Self {
            date: date.into(),
            hours,
            min,
            max,
            kind: PointKind::Forecast,
        }
    }

    /// Returns true when the band is not ordered around `hours` or has a negative edge.
    ///
    /// Such bands are passed through from the source unchanged; this only flags them.
    #[must_use]
    pub fn has_anomalous_band(&self) -> bool {
        self.min > self.max
            || self.min > self.hours
            || self.hours > self.max
            || self.min < 0.0
            || self.max < 0.0
    }

    /// Returns true for forecast points.
    #[must_use]
    pub fn is_forecast(&self) -> bool {
        self.kind == PointKind::Forecast
    }
}

/// History and forecast points in one chronologically ordered sequence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReconciledSeries {
    points: Vec<ChartPoint>,
}

impl ReconciledSeries {
    /// Wrap points that are already in chronological order.
    #[must_use]
    pub const fn from_ordered(points: Vec<ChartPoint>) -> Self {
        Self { points }
    }

    /// The ordered points.
    #[must_use]
    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    /// Take ownership of the ordered points.
    #[must_use]
    pub fn into_points(self) -> Vec<ChartPoint> {
        self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the ordered points.
    pub fn iter(&self) -> std::slice::Iter<'_, ChartPoint> {
        self.points.iter()
    }

    /// Whether the rendered series contains at least one forecast point, i.e.
    /// whether an uncertainty band should be drawn at all.
    #[must_use]
    pub fn has_forecast(&self) -> bool {
        self.points.iter().any(ChartPoint::is_forecast)
    }
}

impl<'a> IntoIterator for &'a ReconciledSeries {
    type Item = &'a ChartPoint;
    type IntoIter = std::slice::Iter<'a, ChartPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Display band for the summary card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryRange {
    /// Lower bound, or the point's hours when the source bound is missing.
    pub min: f64,
    /// Upper bound, or the point's hours when the source bound is missing.
    pub max: f64,
}

/// The "next forecast" record derived from a forecast bundle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastSummary {
    /// Earliest-dated forecast point, untouched from the source.
    pub point: Option<ForecastPoint>,
    /// Bundle confidence as a rounded percentage; `None` when unknown, which is
    /// distinct from `Some(0)`.
    pub confidence_percent: Option<i64>,
}

impl ForecastSummary {
    /// Expected hours of the selected point, coerced like chart values.
    #[must_use]
    pub fn expected_hours(&self) -> Option<f64> {
        self.point.as_ref().map(|p| p.hours.coerce())
    }

    /// Range for display. Each missing or invalid bound falls back to the point's
    /// hours; this is presentation only and independent of the chart band.
    #[must_use]
    pub fn display_range(&self) -> Option<SummaryRange> {
        let p = self.point.as_ref()?;
        let hours = p.hours.coerce();
        Some(SummaryRange {
            min: p.range_min().finite().unwrap_or(hours),
            max: p.range_max().finite().unwrap_or(hours),
        })
    }
}
