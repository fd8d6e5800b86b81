use crate::series::util::date_sort_key;
use crate::{ForecastBundle, ForecastPoint, ForecastSummary, LooseNumber};

/// Forecast points of the bundle in ascending date order, as a new vector.
///
/// The sort is stable, so points sharing a date keep their original relative
/// order. The caller's bundle is not touched.
#[must_use]
pub fn sorted_forecast(bundle: &ForecastBundle) -> Vec<ForecastPoint> {
    let mut points = bundle.forecast.clone();
    points.sort_by_cached_key(|p| date_sort_key(&p.date));
    points
}

/// Bundle confidence as a percentage rounded half up.
///
/// Only a finite JSON number counts as a confidence; anything else is unknown
/// and yields `None`, which is deliberately distinct from `Some(0)`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn confidence_percent(confidence: &LooseNumber) -> Option<i64> {
    match confidence {
        LooseNumber::Number(c) if c.is_finite() => Some((c * 100.0 + 0.5).floor() as i64),
        _ => None,
    }
}

/// Select the next forecast point and the bundle confidence.
///
/// - Absent bundle or empty forecast: `point` and `confidence_percent` are both `None`.
/// - Otherwise `point` is the earliest-dated forecast point (first one on ties).
#[must_use]
pub fn summarize(bundle: Option<&ForecastBundle>) -> ForecastSummary {
    let Some(bundle) = bundle.filter(|b| !b.forecast.is_empty()) else {
        return ForecastSummary::default();
    };
    ForecastSummary {
        point: sorted_forecast(bundle).into_iter().next(),
        confidence_percent: confidence_percent(&bundle.confidence),
    }
}
