use core::fmt;
use serde::{Deserialize, Serialize};

/// Labels for the three independent data sources, used for routing, errors, and telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Aggregate metrics: total hours, average per day, entry count.
    Stats,
    /// Forecast bundle with per-point ranges and overall confidence.
    Forecast,
    /// Historical log entries.
    Logs,
}

impl SourceKind {
    /// All source kinds in fan-out order.
    pub const ALL: [Self; 3] = [Self::Stats, Self::Forecast, Self::Logs];

    /// Stable, lowercase identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stats => "stats",
            Self::Forecast => "forecast",
            Self::Logs => "logs",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of loading one source: either the value arrived, or it is missing.
///
/// Consumers resolve a `Source<T>` through the total functions below instead of
/// null-checking individual fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Source<T> {
    /// The source settled successfully.
    Loaded(T),
    /// The source failed, timed out, or is not provided.
    #[default]
    Missing,
}

impl<T> Source<T> {
    /// Borrow the loaded value, if any.
    #[must_use]
    pub const fn as_loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(v) => Some(v),
            Self::Missing => None,
        }
    }

    /// Returns true if the source settled successfully.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Convert into an `Option`, dropping the distinction between failure reasons.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Loaded(v) => Some(v),
            Self::Missing => None,
        }
    }
}

impl<T: Default> Source<T> {
    /// Resolve to the loaded value or the source's documented empty default.
    pub fn or_empty(self) -> T {
        self.into_option().unwrap_or_default()
    }
}

impl<T, E> From<Result<T, E>> for Source<T> {
    fn from(r: Result<T, E>) -> Self {
        r.map_or(Self::Missing, Self::Loaded)
    }
}
