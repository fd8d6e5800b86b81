use async_trait::async_trait;

use crate::{CodecastError, ForecastBundle, LogEntry, SourceKind, Stats};

/// Focused role trait for connectors that provide aggregate stats.
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Fetch total hours, average per day, and entry count.
    async fn stats(&self) -> Result<Stats, CodecastError>;
}

/// Focused role trait for connectors that provide the forecast bundle.
#[async_trait]
pub trait ForecastSource: Send + Sync {
    /// Fetch the forecast points and overall confidence.
    async fn forecast(&self) -> Result<ForecastBundle, CodecastError>;
}

/// Focused role trait for connectors that provide historical log entries.
#[async_trait]
pub trait LogsSource: Send + Sync {
    /// Fetch logged sessions, ordered or not.
    async fn logs(&self) -> Result<Vec<LogEntry>, CodecastError>;
}

/// Unified connector interface. A connector may serve any subset of the three sources.
pub trait CodecastConnector: Send + Sync {
    /// A stable identifier used in attribution and error tagging (e.g. "codecast-http").
    fn name(&self) -> &'static str;

    /// Advertise stats capability by returning a usable trait object reference when supported.
    fn as_stats_source(&self) -> Option<&dyn StatsSource> {
        None
    }

    /// Advertise forecast capability by returning a usable trait object reference when supported.
    fn as_forecast_source(&self) -> Option<&dyn ForecastSource> {
        None
    }

    /// Advertise logs capability by returning a usable trait object reference when supported.
    fn as_logs_source(&self) -> Option<&dyn LogsSource> {
        None
    }

    /// Whether this connector serves the given source.
    fn provides(&self, kind: SourceKind) -> bool {
        match kind {
            SourceKind::Stats => self.as_stats_source().is_some(),
            SourceKind::Forecast => self.as_forecast_source().is_some(),
            SourceKind::Logs => self.as_logs_source().is_some(),
        }
    }
}
