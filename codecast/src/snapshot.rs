use chrono::{DateTime, Utc};

use codecast_core::{
    Attribution, CodecastError, ForecastSummary, ReconciledSeries, SourceKind, Stats,
};

use crate::view::RequestTag;

/// Immutable result of one dashboard load.
///
/// Snapshots are never edited in place; a newer load replaces the stored one
/// wholesale through [`crate::ViewState`].
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Tag issued when the load started.
    pub tag: RequestTag,
    /// When the load finished.
    pub loaded_at: DateTime<Utc>,
    /// Aggregate stats, or all zeros when the stats source failed.
    pub stats: Stats,
    /// Chart-ready history and forecast points.
    pub series: ReconciledSeries,
    /// Next-forecast record.
    pub summary: ForecastSummary,
    /// One entry per source that failed, timed out, or is not provided.
    pub failures: Vec<CodecastError>,
    /// Connector that served each source that loaded.
    pub attribution: Attribution,
    /// Points kept with an unparseable date, ordered after the timeline.
    pub unordered_dates: usize,
    /// One `UnparseableDate` per point dropped because of its date.
    pub rejected: Vec<CodecastError>,
}

impl Snapshot {
    /// True when there is nothing to chart ("No data available").
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// True when at least one source did not load.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        !self.failures.is_empty()
    }

    /// The failure recorded for `kind`, if that source did not load.
    #[must_use]
    pub fn failure(&self, kind: SourceKind) -> Option<&CodecastError> {
        self.failures.iter().find(|e| e.kind() == Some(kind))
    }
}
