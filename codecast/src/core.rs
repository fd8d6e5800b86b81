use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use codecast_core::{
    Attribution, CodecastConfig, CodecastConnector, CodecastError, DatePolicy, Source, SourceKind,
    reconcile,
};

use crate::snapshot::Snapshot;
use crate::view::ViewState;

/// Orchestrator that loads the three dashboard sources and reconciles them.
pub struct Dashboard {
    pub(crate) connectors: Vec<Arc<dyn CodecastConnector>>,
    pub(crate) cfg: CodecastConfig,
    pub(crate) view: ViewState,
}

/// Builder for constructing a `Dashboard` with custom configuration.
pub struct DashboardBuilder {
    connectors: Vec<Arc<dyn CodecastConnector>>,
    cfg: CodecastConfig,
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Starts with no connectors; register at least one via [`Self::with_connector`].
    /// Defaults: 5s per-source timeout, no overall deadline, unparseable dates
    /// sorted last.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: CodecastConfig::default(),
        }
    }

    /// Register a connector.
    ///
    /// Each source is served by the first registered connector that provides it.
    /// Later connectors are only consulted for sources earlier ones do not provide;
    /// there is no fallback when the chosen connector fails.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn CodecastConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: CodecastConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the timeout applied to each individual source call.
    #[must_use]
    pub const fn source_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.source_timeout = timeout;
        self
    }

    /// Set an overall deadline for one load.
    ///
    /// Sources that have not settled by the deadline are recorded as
    /// `RequestTimeout` and degrade to their empty default; sources that did
    /// settle are kept.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Select what reconciliation does with unparseable dates.
    #[must_use]
    pub const fn date_policy(mut self, policy: DatePolicy) -> Self {
        self.cfg.date_policy = policy;
        self
    }

    /// Build the `Dashboard`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered via [`Self::with_connector`].
    pub fn build(self) -> Result<Dashboard, CodecastError> {
        if self.connectors.is_empty() {
            return Err(CodecastError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }

        Ok(Dashboard {
            connectors: self.connectors,
            cfg: self.cfg,
            view: ViewState::new(),
        })
    }
}

/// Attribute a connector error to the source it was serving.
///
/// Errors that already name a source pass through; anything else is wrapped as
/// a `Source` failure prefixed with the connector name.
pub fn tag_err(connector: &str, kind: SourceKind, e: CodecastError) -> CodecastError {
    if e.is_source_failure() {
        return e;
    }
    CodecastError::source_failed(kind, format!("{connector}: {e}"))
}

impl Dashboard {
    /// Start building a new `Dashboard`.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    ///
    /// let dashboard = codecast::Dashboard::builder()
    ///     .with_connector(Arc::new(HttpConnector::new("http://localhost:8000")))
    ///     .source_timeout(std::time::Duration::from_secs(2))
    ///     .build()?;
    /// let snapshot = dashboard.load().await;
    /// ```
    #[must_use]
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &CodecastConfig {
        &self.cfg
    }

    /// The connector chosen for `kind`: the first registered one that provides it.
    pub(crate) fn route(&self, kind: SourceKind) -> Option<&Arc<dyn CodecastConnector>> {
        self.connectors.iter().find(|c| c.provides(kind))
    }

    /// Wrap a source future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "codecast::core::source_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                source = %kind,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn source_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        kind: SourceKind,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, CodecastError>
    where
        Fut: core::future::Future<Output = Result<T, CodecastError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(CodecastError::source_timeout(kind, connector_name)))
    }

    /// Run one source call under the per-source timeout and the optional load deadline.
    async fn settle<T, Fut>(
        &self,
        kind: SourceKind,
        deadline: Option<Instant>,
        call: Option<(&'static str, Fut)>,
    ) -> Result<(&'static str, T), CodecastError>
    where
        Fut: core::future::Future<Output = Result<T, CodecastError>>,
    {
        let Some((name, fut)) = call else {
            return Err(CodecastError::unsupported(kind));
        };
        let bounded = Self::source_call_with_timeout(name, kind, self.cfg.source_timeout, fut);
        let res = match deadline {
            Some(at) => (tokio::time::timeout_at(at, bounded).await)
                .unwrap_or_else(|_| Err(CodecastError::request_timeout(kind))),
            None => bounded.await,
        };
        res.map(|v| (name, v)).map_err(|e| tag_err(name, kind, e))
    }

    /// Load all three sources concurrently, degrade failures, and reconcile.
    ///
    /// Never fails: a source that errors, times out, or is not provided is
    /// replaced by its empty default (zeroed stats, no forecast, no logs) and
    /// recorded in [`Snapshot::failures`]. The snapshot is offered to the view
    /// and returned whether or not the view accepted it; a load superseded by a
    /// later call to `load` is not shown.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "codecast::core::load", skip(self))
    )]
    pub async fn load(&self) -> Arc<Snapshot> {
        let tag = self.view.issue();
        let deadline = self.cfg.request_timeout.map(|d| Instant::now() + d);

        let stats_call = self
            .route(SourceKind::Stats)
            .and_then(|c| c.as_stats_source().map(|s| (c.name(), s.stats())));
        let forecast_call = self
            .route(SourceKind::Forecast)
            .and_then(|c| c.as_forecast_source().map(|s| (c.name(), s.forecast())));
        let logs_call = self
            .route(SourceKind::Logs)
            .and_then(|c| c.as_logs_source().map(|s| (c.name(), s.logs())));

        let (stats, forecast, logs) = tokio::join!(
            self.settle(SourceKind::Stats, deadline, stats_call),
            self.settle(SourceKind::Forecast, deadline, forecast_call),
            self.settle(SourceKind::Logs, deadline, logs_call),
        );

        let mut failures = Vec::new();
        let mut attribution = Attribution::new();
        let stats = degrade(SourceKind::Stats, stats, &mut failures, &mut attribution);
        let forecast = degrade(SourceKind::Forecast, forecast, &mut failures, &mut attribution);
        let logs = degrade(SourceKind::Logs, logs, &mut failures, &mut attribution);

        let logs = logs.or_empty();
        let rec = reconcile(&logs, forecast.as_loaded(), self.cfg.date_policy);

        let snapshot = Arc::new(Snapshot {
            tag,
            loaded_at: chrono::Utc::now(),
            stats: stats.or_empty(),
            series: rec.series,
            summary: rec.summary,
            failures,
            attribution,
            unordered_dates: rec.unordered_dates,
            rejected: rec.rejected,
        });

        let accepted = self.view.offer(Arc::clone(&snapshot));
        #[cfg(feature = "tracing")]
        if accepted {
            tracing::debug!(
                %tag,
                points = snapshot.series.len(),
                failures = snapshot.failures.len(),
                "snapshot accepted"
            );
        } else {
            tracing::debug!(%tag, "discarding superseded load");
        }
        #[cfg(not(feature = "tracing"))]
        let _ = accepted;

        snapshot
    }

    /// The snapshot currently shown, if any load has been accepted.
    #[must_use]
    pub fn current(&self) -> Option<Arc<Snapshot>> {
        self.view.current()
    }

    /// Watch accepted snapshots as they replace each other.
    #[must_use]
    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<Option<Arc<Snapshot>>> {
        self.view.subscribe()
    }
}

fn degrade<T>(
    kind: SourceKind,
    res: Result<(&'static str, T), CodecastError>,
    failures: &mut Vec<CodecastError>,
    attribution: &mut Attribution,
) -> Source<T> {
    match res {
        Ok((name, v)) => {
            attribution.push(kind, name);
            Source::Loaded(v)
        }
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(source = %kind, error = %e, "source failed; using empty default");
            failures.push(e);
            Source::Missing
        }
    }
}
