use crate::{ChartPoint, ForecastPoint, LogEntry};

/// Convert one log entry into a history point.
///
/// The duration is coerced to a finite number (`0` when it is not one) and the
/// band collapses onto it.
#[must_use]
pub fn history_point(entry: &LogEntry) -> ChartPoint {
    ChartPoint::history(entry.date.clone(), entry.duration.coerce())
}

/// Convert one forecast point into a chart point.
///
/// - `hours` is coerced like history durations.
/// - Each band edge uses the source bound when it is a finite number and falls
///   back to `hours` otherwise. Edges are chosen independently.
/// - Bounds that are present but inverted or negative pass through unchanged.
#[must_use]
pub fn forecast_point(point: &ForecastPoint) -> ChartPoint {
    let hours = point.hours.coerce();
    let min = point.range_min().finite().unwrap_or(hours);
    let max = point.range_max().finite().unwrap_or(hours);
    ChartPoint::forecast(point.date.clone(), hours, min, max)
}

/// Normalize log entries into history points, preserving order and length.
#[must_use]
pub fn normalize_history(entries: &[LogEntry]) -> Vec<ChartPoint> {
    entries.iter().map(history_point).collect()
}

/// Normalize forecast points into chart points, preserving order and length.
///
/// A malformed record becomes a zero-valued point, never an omission.
#[must_use]
pub fn normalize_forecast(points: &[ForecastPoint]) -> Vec<ChartPoint> {
    let out: Vec<ChartPoint> = points.iter().map(forecast_point).collect();
    #[cfg(feature = "tracing")]
    {
        let anomalous = out.iter().filter(|p| p.has_anomalous_band()).count();
        if anomalous > 0 {
            tracing::debug!(
                anomalous,
                "forecast bands passed through unordered or negative"
            );
        }
    }
    out
}
