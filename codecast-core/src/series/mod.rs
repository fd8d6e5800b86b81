//! History/forecast series utilities.
//!
//! Modules include:
//! - `normalize`: coerce raw records into canonical chart points
//! - `merge`: join history and forecast points into one chronological series
//! - `summary`: pick the next forecast point and the bundle confidence
//! - `reconcile`: run the three steps over one pair of inputs
/// Merging of normalized history and forecast points.
pub mod merge;
/// Normalization of raw log entries and forecast points.
pub mod normalize;
/// Full reconciliation of one pair of inputs.
pub mod reconcile;
/// Forecast summary selection.
pub mod summary;
/// Shared date parsing and ordering helpers.
pub mod util;
