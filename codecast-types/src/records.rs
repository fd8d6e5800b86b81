//! Raw records as delivered by the three data sources.
//!
//! Numeric fields arrive as numbers, numeric strings, `null`, or not at all, so
//! they are carried as [`LooseNumber`] and only coerced during normalization.

use serde::{Deserialize, Deserializer, Serialize};

/// A numeric field whose wire type is not trusted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    /// A JSON number.
    Number(f64),
    /// A string that may or may not hold a number.
    Text(String),
    /// `null` or an absent field.
    #[default]
    Missing,
    /// Any other JSON value (booleans, arrays, objects).
    Other(serde_json::Value),
}

impl LooseNumber {
    /// The value as a finite number, if it is one.
    ///
    /// Numeric text is trimmed and parsed; empty text, non-finite results, and
    /// non-numeric values yield `None`.
    #[must_use]
    pub fn finite(&self) -> Option<f64> {
        let v = match self {
            Self::Number(n) => *n,
            Self::Text(s) => {
                let t = s.trim();
                if t.is_empty() {
                    return None;
                }
                t.parse::<f64>().ok()?
            }
            Self::Missing | Self::Other(_) => return None,
        };
        v.is_finite().then_some(v)
    }

    /// Coerce to a finite number, substituting `0` for anything that is not one.
    #[must_use]
    pub fn coerce(&self) -> f64 {
        self.finite().unwrap_or(0.0)
    }

    /// Returns true for `null` or an absent field.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<f64> for LooseNumber {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for LooseNumber {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<Option<f64>> for LooseNumber {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Self::Missing, Self::Number)
    }
}

/// One completed coding session from the logs source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Calendar date of the session, e.g. `2024-01-01`.
    #[serde(default)]
    pub date: String,
    /// Logged duration in hours.
    #[serde(default)]
    pub duration: LooseNumber,
}

impl LogEntry {
    /// Convenience constructor.
    pub fn new(date: impl Into<String>, duration: impl Into<LooseNumber>) -> Self {
        Self {
            date: date.into(),
            duration: duration.into(),
        }
    }
}

/// Confidence band of a single forecast point. Either bound may be absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastRange {
    /// Lower bound in hours.
    #[serde(default)]
    pub min: LooseNumber,
    /// Upper bound in hours.
    #[serde(default)]
    pub max: LooseNumber,
}

/// A predicted value for a future date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Calendar date the prediction applies to.
    #[serde(default)]
    pub date: String,
    /// Expected hours.
    #[serde(default)]
    pub hours: LooseNumber,
    /// Optional confidence band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<ForecastRange>,
}

impl ForecastPoint {
    /// Point without a range.
    pub fn new(date: impl Into<String>, hours: impl Into<LooseNumber>) -> Self {
        Self {
            date: date.into(),
            hours: hours.into(),
            range: None,
        }
    }

    /// Attach a range with both bounds.
    #[must_use]
    pub fn with_range(mut self, min: impl Into<LooseNumber>, max: impl Into<LooseNumber>) -> Self {
        self.range = Some(ForecastRange {
            min: min.into(),
            max: max.into(),
        });
        self
    }

    /// Lower bound, `Missing` when there is no range.
    #[must_use]
    pub fn range_min(&self) -> &LooseNumber {
        self.range.as_ref().map_or(&LooseNumber::Missing, |r| &r.min)
    }

    /// Upper bound, `Missing` when there is no range.
    #[must_use]
    pub fn range_max(&self) -> &LooseNumber {
        self.range.as_ref().map_or(&LooseNumber::Missing, |r| &r.max)
    }
}

/// The forecast source payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastBundle {
    /// Forecast points, ordered or not. `null` and absent both read as empty.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub forecast: Vec<ForecastPoint>,
    /// Overall model trust in `[0, 1]`.
    #[serde(default)]
    pub confidence: LooseNumber,
}

impl ForecastBundle {
    /// Bundle with the given points and confidence.
    #[must_use]
    pub fn new(forecast: Vec<ForecastPoint>, confidence: Option<f64>) -> Self {
        Self {
            forecast,
            confidence: confidence.into(),
        }
    }
}

/// Aggregate metrics from the stats source.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Total logged hours.
    #[serde(default)]
    pub total_hours: f64,
    /// Average hours per logged day.
    #[serde(default)]
    pub avg_per_day: f64,
    /// Number of log entries.
    #[serde(default)]
    pub entries: u64,
}

fn nullable_vec<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(d).map(Option::unwrap_or_default)
}
