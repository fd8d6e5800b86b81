//! Configuration types shared by the orchestrator and reconciliation helpers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// What reconciliation does with a point whose date cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DatePolicy {
    /// Keep the point and order it after every parseable date, preserving the
    /// relative input order among unparseable points.
    #[default]
    SortLast,
    /// Exclude the point from the series before merging.
    Reject,
}

/// Global configuration for the `Dashboard` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodecastConfig {
    /// Timeout for each individual source call.
    pub source_timeout: Duration,
    /// Optional overall deadline for the fan-out. A source that has not settled
    /// by then is treated as failed.
    pub request_timeout: Option<Duration>,
    /// Handling of unparseable dates during reconciliation.
    pub date_policy: DatePolicy,
}

impl Default for CodecastConfig {
    fn default() -> Self {
        Self {
            source_timeout: Duration::from_secs(5),
            request_timeout: None,
            date_policy: DatePolicy::default(),
        }
    }
}
