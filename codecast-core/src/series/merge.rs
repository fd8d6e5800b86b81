use crate::series::util::date_sort_key;
use crate::{ChartPoint, ReconciledSeries};

/// Merge normalized history and forecast points into one chronological series.
///
/// - History points come first in the concatenation, so on equal dates the
///   history point precedes the forecast point.
/// - Points are stable-sorted by parsed date; nothing is dropped or deduplicated,
///   so the output length is always `history.len() + forecast.len()`.
/// - Points whose date cannot be parsed are ordered after all parseable dates,
///   keeping their relative input order.
#[must_use]
pub fn merge(history: Vec<ChartPoint>, forecast: Vec<ChartPoint>) -> ReconciledSeries {
    let mut points = history;
    points.extend(forecast);
    points.sort_by_cached_key(|p| date_sort_key(&p.date));

    #[cfg(feature = "tracing")]
    {
        let unordered = points
            .iter()
            .rev()
            .take_while(|p| crate::series::util::is_unparseable(&p.date))
            .count();
        if unordered > 0 {
            tracing::warn!(
                unordered,
                "points with unparseable dates ordered after the timeline"
            );
        }
    }

    ReconciledSeries::from_ordered(points)
}
