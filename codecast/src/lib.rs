//! codecast loads a coding-time dashboard from three independent sources and
//! turns them into one chart-ready series.
//!
//! Overview
//! - Connectors implement the `codecast_core` source contracts (stats, forecast,
//!   logs); one connector may serve any subset.
//! - [`Dashboard::load`] fetches the three sources concurrently, each under a
//!   per-source timeout and an optional overall deadline.
//! - A source that fails is replaced by its empty default and recorded on the
//!   snapshot; a load never fails as a whole.
//! - History and forecast are normalized, merged by date, and summarized into the
//!   next forecast point (see `codecast_core::series`).
//! - [`ViewState`] tags every load and only shows the result of the latest one.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use codecast::{Dashboard, DatePolicy, format_number, format_percent};
//!
//! let dashboard = Dashboard::builder()
//!     .with_connector(Arc::new(HttpConnector::new("http://localhost:8000")))
//!     .request_timeout(std::time::Duration::from_secs(3))
//!     .date_policy(DatePolicy::SortLast)
//!     .build()?;
//!
//! let snapshot = dashboard.load().await;
//! if snapshot.is_empty() {
//!     println!("No data available");
//! }
//! println!("confidence: {}", format_percent(snapshot.summary.confidence_percent));
//! ```
//!
//! See `codecast/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod snapshot;
mod view;

pub use core::{Dashboard, DashboardBuilder, tag_err};
pub use snapshot::Snapshot;
pub use view::{RequestTag, ViewState};

// Re-export core types for convenience
pub use codecast_core::{
    Attribution,
    ChartPoint,
    CodecastConfig,
    CodecastConnector,
    CodecastError,
    DatePolicy,
    ForecastBundle,
    ForecastPoint,
    ForecastRange,
    ForecastSummary,
    LogEntry,
    LooseNumber,
    PLACEHOLDER,
    PointKind,
    ReconciledSeries,
    Source,
    SourceKind,
    Stats,
    SummaryRange,
    format_date,
    format_number,
    format_percent,
};
