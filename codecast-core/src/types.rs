//! Re-export of the shared data types from `codecast-types`.
// Consolidated re-exports so downstream crates can depend on `codecast-core` only

pub use codecast_types::{Attribution, CodecastConfig, CodecastError, DatePolicy, Source, SourceKind};

pub use codecast_types::{ForecastBundle, ForecastPoint, ForecastRange, LogEntry, LooseNumber, Stats};

pub use codecast_types::{ChartPoint, ForecastSummary, PointKind, ReconciledSeries, SummaryRange};
