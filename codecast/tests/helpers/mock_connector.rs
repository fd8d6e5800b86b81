#![allow(dead_code)]
#![allow(clippy::type_complexity)]
#![allow(clippy::missing_const_for_fn)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use codecast_core::connector::{CodecastConnector, ForecastSource, LogsSource, StatsSource};
use codecast_core::{CodecastError, ForecastBundle, LogEntry, Stats};
use tokio::time::{Duration, sleep};

/// Simple in-memory connector used by integration tests.
/// A source is advertised only when a closure for it has been configured.
pub struct MockConnector {
    pub name: &'static str,
    pub delay_ms: u64,
    pub calls: Arc<AtomicUsize>,

    pub stats_fn: Option<Arc<dyn Fn() -> Result<Stats, CodecastError> + Send + Sync>>,
    pub forecast_fn: Option<Arc<dyn Fn() -> Result<ForecastBundle, CodecastError> + Send + Sync>>,
    pub logs_fn: Option<Arc<dyn Fn() -> Result<Vec<LogEntry>, CodecastError> + Send + Sync>>,
}

impl MockConnector {
    async fn enter(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }

    /// Total number of source calls made to this connector.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatsSource for MockConnector {
    async fn stats(&self) -> Result<Stats, CodecastError> {
        self.enter().await;
        match &self.stats_fn {
            Some(f) => (f)(),
            None => Err(CodecastError::unsupported(codecast_core::SourceKind::Stats)),
        }
    }
}

#[async_trait]
impl ForecastSource for MockConnector {
    async fn forecast(&self) -> Result<ForecastBundle, CodecastError> {
        self.enter().await;
        match &self.forecast_fn {
            Some(f) => (f)(),
            None => Err(CodecastError::unsupported(codecast_core::SourceKind::Forecast)),
        }
    }
}

#[async_trait]
impl LogsSource for MockConnector {
    async fn logs(&self) -> Result<Vec<LogEntry>, CodecastError> {
        self.enter().await;
        match &self.logs_fn {
            Some(f) => (f)(),
            None => Err(CodecastError::unsupported(codecast_core::SourceKind::Logs)),
        }
    }
}

impl CodecastConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_stats_source(&self) -> Option<&dyn StatsSource> {
        if self.stats_fn.is_some() {
            Some(self as &dyn StatsSource)
        } else {
            None
        }
    }

    fn as_forecast_source(&self) -> Option<&dyn ForecastSource> {
        if self.forecast_fn.is_some() {
            Some(self as &dyn ForecastSource)
        } else {
            None
        }
    }

    fn as_logs_source(&self) -> Option<&dyn LogsSource> {
        if self.logs_fn.is_some() {
            Some(self as &dyn LogsSource)
        } else {
            None
        }
    }
}

/* ---------- Tiny builder helpers used by tests ---------- */

impl MockConnector {
    pub fn builder() -> MockConnectorBuilder {
        MockConnectorBuilder::new()
    }
}

pub struct MockConnectorBuilder {
    name: &'static str,
    delay_ms: u64,
    stats_fn: Option<Arc<dyn Fn() -> Result<Stats, CodecastError> + Send + Sync>>,
    forecast_fn: Option<Arc<dyn Fn() -> Result<ForecastBundle, CodecastError> + Send + Sync>>,
    logs_fn: Option<Arc<dyn Fn() -> Result<Vec<LogEntry>, CodecastError> + Send + Sync>>,
}

impl MockConnectorBuilder {
    pub fn new() -> Self {
        Self {
            name: "mock",
            delay_ms: 0,
            stats_fn: None,
            forecast_fn: None,
            logs_fn: None,
        }
    }

    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
    pub fn delay(mut self, d: Duration) -> Self {
        self.delay_ms = u64::try_from(d.as_millis()).unwrap_or(u64::MAX);
        self
    }

    // Stats
    pub fn with_stats_fn<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Result<Stats, CodecastError> + Send + Sync + 'static,
    {
        self.stats_fn = Some(Arc::new(f));
        self
    }
    pub fn returns_stats_ok(mut self, s: Stats) -> Self {
        self.stats_fn = Some(Arc::new(move || Ok(s)));
        self
    }

    // Forecast
    pub fn with_forecast_fn<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Result<ForecastBundle, CodecastError> + Send + Sync + 'static,
    {
        self.forecast_fn = Some(Arc::new(f));
        self
    }
    pub fn returns_forecast_ok(mut self, b: ForecastBundle) -> Self {
        self.forecast_fn = Some(Arc::new(move || Ok(b.clone())));
        self
    }

    // Logs
    pub fn with_logs_fn<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Result<Vec<LogEntry>, CodecastError> + Send + Sync + 'static,
    {
        self.logs_fn = Some(Arc::new(f));
        self
    }
    pub fn returns_logs_ok(mut self, logs: Vec<LogEntry>) -> Self {
        self.logs_fn = Some(Arc::new(move || Ok(logs.clone())));
        self
    }

    pub fn build(self) -> Arc<MockConnector> {
        Arc::new(MockConnector {
            name: self.name,
            delay_ms: self.delay_ms,
            calls: Arc::new(AtomicUsize::new(0)),
            stats_fn: self.stats_fn,
            forecast_fn: self.forecast_fn,
            logs_fn: self.logs_fn,
        })
    }
}

/// Convenience constructor for a connector serving all three sources.
pub fn m_all(
    name: &'static str,
    stats: Stats,
    bundle: ForecastBundle,
    logs: Vec<LogEntry>,
) -> Arc<MockConnector> {
    MockConnector::builder()
        .name(name)
        .returns_stats_ok(stats)
        .returns_forecast_ok(bundle)
        .returns_logs_ok(logs)
        .build()
}

/// Convenience constructor for a logs-only mock connector.
pub fn m_logs(name: &'static str, logs: Vec<LogEntry>) -> Arc<MockConnector> {
    MockConnector::builder()
        .name(name)
        .returns_logs_ok(logs)
        .build()
}
