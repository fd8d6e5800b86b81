use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use codecast_core::connector::{CodecastConnector, ForecastSource, LogsSource, StatsSource};
use codecast_core::{CodecastError, ForecastBundle, LogEntry, SourceKind, Stats};

/// Instruction for how a source call should behave.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Return the provided value after a delay.
    ReturnAfter(Duration, T),
    /// Fail immediately with the provided error.
    Fail(CodecastError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

struct Rules<T> {
    queued: VecDeque<MockBehavior<T>>,
    sticky: Option<MockBehavior<T>>,
    calls: usize,
}

impl<T> Default for Rules<T> {
    fn default() -> Self {
        Self {
            queued: VecDeque::new(),
            sticky: None,
            calls: 0,
        }
    }
}

impl<T: Clone> Rules<T> {
    fn next(&mut self) -> Option<MockBehavior<T>> {
        self.calls += 1;
        self.queued.pop_front().or_else(|| self.sticky.clone())
    }

    fn clear(&mut self) {
        self.queued.clear();
        self.sticky = None;
        self.calls = 0;
    }
}

#[derive(Default)]
struct InternalState {
    stats: Rules<Stats>,
    forecast: Rules<ForecastBundle>,
    logs: Rules<Vec<LogEntry>>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
///
/// Each source has a sticky behavior (used for every call) and a queue of one-shot
/// behaviors consumed in order before the sticky one applies.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for every `stats` call.
    pub async fn set_stats_behavior(&self, behavior: MockBehavior<Stats>) {
        self.state.lock().await.stats.sticky = Some(behavior);
    }

    /// Set the behavior for every `forecast` call.
    pub async fn set_forecast_behavior(&self, behavior: MockBehavior<ForecastBundle>) {
        self.state.lock().await.forecast.sticky = Some(behavior);
    }

    /// Set the behavior for every `logs` call.
    pub async fn set_logs_behavior(&self, behavior: MockBehavior<Vec<LogEntry>>) {
        self.state.lock().await.logs.sticky = Some(behavior);
    }

    /// Queue a behavior for the next `stats` call only.
    pub async fn push_stats_behavior(&self, behavior: MockBehavior<Stats>) {
        self.state.lock().await.stats.queued.push_back(behavior);
    }

    /// Queue a behavior for the next `forecast` call only.
    pub async fn push_forecast_behavior(&self, behavior: MockBehavior<ForecastBundle>) {
        self.state.lock().await.forecast.queued.push_back(behavior);
    }

    /// Queue a behavior for the next `logs` call only.
    pub async fn push_logs_behavior(&self, behavior: MockBehavior<Vec<LogEntry>>) {
        self.state.lock().await.logs.queued.push_back(behavior);
    }

    /// Number of calls made so far to the given source.
    pub async fn calls(&self, kind: SourceKind) -> usize {
        let guard = self.state.lock().await;
        match kind {
            SourceKind::Stats => guard.stats.calls,
            SourceKind::Forecast => guard.forecast.calls,
            SourceKind::Logs => guard.logs.calls,
        }
    }

    /// Clear all configured behaviors and call counters.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.stats.clear();
        guard.forecast.clear();
        guard.logs.clear();
    }
}

/// A connector that defers all behavior to an external controller.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn CodecastConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn CodecastConnector>, controller)
    }
}

async fn run<T>(kind: SourceKind, behavior: Option<MockBehavior<T>>) -> Result<T, CodecastError> {
    match behavior {
        Some(MockBehavior::Return(v)) => Ok(v),
        Some(MockBehavior::ReturnAfter(d, v)) => {
            tokio::time::sleep(d).await;
            Ok(v)
        }
        Some(MockBehavior::Fail(e)) => Err(e),
        Some(MockBehavior::Hang) => std::future::pending().await,
        None => Err(CodecastError::source_failed(
            kind,
            "no mock behavior configured",
        )),
    }
}

impl CodecastConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
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
impl StatsSource for DynamicMockConnector {
    async fn stats(&self) -> Result<Stats, CodecastError> {
        // Acquire behavior snapshot without holding the lock across await points
        let behavior = self.state.lock().await.stats.next();
        run(SourceKind::Stats, behavior).await
    }
}

#[async_trait]
impl ForecastSource for DynamicMockConnector {
    async fn forecast(&self) -> Result<ForecastBundle, CodecastError> {
        let behavior = self.state.lock().await.forecast.next();
        run(SourceKind::Forecast, behavior).await
    }
}

#[async_trait]
impl LogsSource for DynamicMockConnector {
    async fn logs(&self) -> Result<Vec<LogEntry>, CodecastError> {
        let behavior = self.state.lock().await.logs.next();
        run(SourceKind::Logs, behavior).await
    }
}
