//! codecast-core
//!
//! Source contracts and the time-series reconciliation engine shared across the
//! codecast workspace.
//!
//! - `types`: data records and chart outputs (re-exported from `codecast-types`).
//! - `connector`: the `CodecastConnector` trait and the three source role traits.
//! - `series`: normalize, merge, and summarize history and forecast data.
//! - `format`: display helpers for dates and numbers.
//! - `payload`: decode raw JSON payloads into typed source records.
//!
//! Everything under `series` and `format` is synchronous and pure; only the
//! connector traits are async.
#![warn(missing_docs)]

/// Connector capability traits and the primary `CodecastConnector` interface.
pub mod connector;
/// Presentation helpers for dates and numbers.
pub mod format;
/// Decoding of raw source payloads.
pub mod payload;
/// Normalization, merging, and summarizing of history and forecast series.
pub mod series;
pub mod types;

pub use connector::CodecastConnector;
pub use format::{PLACEHOLDER, format_date, format_number, format_percent};
pub use series::merge::merge;
pub use series::normalize::{normalize_forecast, normalize_history};
pub use series::reconcile::{Reconciliation, reconcile};
pub use series::summary::summarize;
pub use types::*;
