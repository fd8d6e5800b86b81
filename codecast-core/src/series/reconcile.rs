use crate::series::merge::merge;
use crate::series::normalize::{normalize_forecast, normalize_history};
use crate::series::summary::summarize;
use crate::series::util::is_unparseable;
use crate::{
    ChartPoint, CodecastError, DatePolicy, ForecastBundle, ForecastSummary, LogEntry,
    ReconciledSeries,
};

/// Result of reconciling one pair of history and forecast inputs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reconciliation {
    /// Chart-ready series.
    pub series: ReconciledSeries,
    /// Next-forecast record.
    pub summary: ForecastSummary,
    /// Points kept with an unparseable date (ordered after the timeline).
    pub unordered_dates: usize,
    /// One `UnparseableDate` per point excluded under [`DatePolicy::Reject`].
    pub rejected: Vec<CodecastError>,
}

/// Normalize, merge, and summarize one pair of inputs.
///
/// Pure: the same inputs always produce the same output, and neither input is
/// modified. The summary is computed from the raw bundle, not from the chart band.
#[must_use]
pub fn reconcile(
    logs: &[LogEntry],
    bundle: Option<&ForecastBundle>,
    policy: DatePolicy,
) -> Reconciliation {
    let mut history = normalize_history(logs);
    let mut forecast = bundle.map(|b| normalize_forecast(&b.forecast)).unwrap_or_default();

    let mut rejected = Vec::new();
    let mut unordered_dates = 0;
    match policy {
        DatePolicy::Reject => {
            drop_unparseable(&mut history, &mut rejected);
            drop_unparseable(&mut forecast, &mut rejected);
        }
        _ => {
            unordered_dates = history
                .iter()
                .chain(&forecast)
                .filter(|p| is_unparseable(&p.date))
                .count();
        }
    }

    Reconciliation {
        series: merge(history, forecast),
        summary: summarize(bundle),
        unordered_dates,
        rejected,
    }
}

fn drop_unparseable(points: &mut Vec<ChartPoint>, rejected: &mut Vec<CodecastError>) {
    points.retain(|p| {
        if !is_unparseable(&p.date) {
            return true;
        }
        #[cfg(feature = "tracing")]
        tracing::warn!(date = %p.date, kind = ?p.kind, "rejecting point with unparseable date");
        rejected.push(CodecastError::unparseable_date(p.date.as_str()));
        false
    });
}
