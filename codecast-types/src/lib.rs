//! Codecast data transfer objects and configuration primitives.
//!
//! - `records`: raw inputs as delivered by the stats, forecast, and logs sources.
//! - `chart`: canonical, chart-ready outputs of reconciliation.
//! - `source`: source labels and the `Source<T>` load outcome.
//! - `config`: orchestrator configuration.
#![warn(missing_docs)]

mod attribution;
mod chart;
mod config;
mod error;
mod records;
mod source;

pub use attribution::Attribution;
pub use chart::{ChartPoint, ForecastSummary, PointKind, ReconciledSeries, SummaryRange};
pub use config::{CodecastConfig, DatePolicy};
pub use error::CodecastError;
pub use records::{ForecastBundle, ForecastPoint, ForecastRange, LogEntry, LooseNumber, Stats};
pub use source::{Source, SourceKind};
