use async_trait::async_trait;
use codecast_core::connector::{CodecastConnector, ForecastSource, LogsSource, StatsSource};
use codecast_core::payload::{decode_forecast, decode_logs, decode_stats};
use codecast_core::{CodecastError, ForecastBundle, LogEntry, SourceKind, Stats};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

/// Mock connector for CI-safe examples. Serves all three sources from static
/// JSON fixtures selected by a profile name.
///
/// Profiles: `demo`, `sparse`, `garbled`, `empty`, `wrong-shape`. The special
/// profiles `fail` and `timeout` make every source fail or stall briefly.
pub struct MockConnector {
    profile: &'static str,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Connector serving the `demo` profile.
    #[must_use]
    pub const fn new() -> Self {
        Self { profile: "demo" }
    }

    /// Connector serving the named fixture profile.
    #[must_use]
    pub const fn with_profile(profile: &'static str) -> Self {
        Self { profile }
    }

    async fn maybe_fail_or_timeout(&self, kind: SourceKind) -> Result<(), CodecastError> {
        match self.profile {
            "fail" => Err(CodecastError::source_failed(
                kind,
                format!("forced failure: {kind}"),
            )),
            "timeout" => {
                // Keep short to avoid slowing tests excessively
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn not_found(&self, kind: SourceKind) -> CodecastError {
        CodecastError::source_failed(kind, format!("no fixture for profile {}", self.profile))
    }
}

impl CodecastConnector for MockConnector {
    fn name(&self) -> &'static str {
        "codecast-mock"
    }

    fn as_stats_source(&self) -> Option<&dyn StatsSource> {
        Some(self as &dyn StatsSource)
    }
    fn as_forecast_source(&self) -> Option<&dyn ForecastSource> {
        Some(self as &dyn ForecastSource)
    }
    fn as_logs_source(&self) -> Option<&dyn LogsSource> {
        Some(self as &dyn LogsSource)
    }
}

#[async_trait]
impl StatsSource for MockConnector {
    async fn stats(&self) -> Result<Stats, CodecastError> {
        self.maybe_fail_or_timeout(SourceKind::Stats).await?;
        let raw = fixtures::stats::by_profile(self.profile)
            .ok_or_else(|| self.not_found(SourceKind::Stats))?;
        decode_stats(raw)
    }
}

#[async_trait]
impl ForecastSource for MockConnector {
    async fn forecast(&self) -> Result<ForecastBundle, CodecastError> {
        self.maybe_fail_or_timeout(SourceKind::Forecast).await?;
        let raw = fixtures::forecast::by_profile(self.profile)
            .ok_or_else(|| self.not_found(SourceKind::Forecast))?;
        decode_forecast(raw)
    }
}

#[async_trait]
impl LogsSource for MockConnector {
    async fn logs(&self) -> Result<Vec<LogEntry>, CodecastError> {
        self.maybe_fail_or_timeout(SourceKind::Logs).await?;
        let raw = fixtures::logs::by_profile(self.profile)
            .ok_or_else(|| self.not_found(SourceKind::Logs))?;
        decode_logs(raw)
    }
}
