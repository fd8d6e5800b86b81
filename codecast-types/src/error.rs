use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::SourceKind;

/// Unified error type for the codecast workspace.
///
/// Source-level failures (rejections, unexpected payload shapes, timeouts) are
/// recovered by the orchestrator through degradation. `UnparseableDate` reports a
/// point dropped during reconciliation; the rest describe argument problems.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CodecastError {
    /// A data source rejected the request.
    #[error("{kind} source failed: {msg}")]
    Source {
        /// Which of the three sources failed.
        kind: SourceKind,
        /// Human-readable error message.
        msg: String,
    },

    /// A data source answered with a payload of the wrong top-level shape.
    #[error("{kind} source returned an unexpected shape: {msg}")]
    UnexpectedShape {
        /// Which of the three sources produced the payload.
        kind: SourceKind,
        /// Decoder message describing the mismatch.
        msg: String,
    },

    /// An individual source call exceeded the configured timeout.
    #[error("source timed out: {kind} via {connector}")]
    SourceTimeout {
        /// Source label that timed out.
        kind: SourceKind,
        /// Connector name serving the source.
        connector: String,
    },

    /// The overall load exceeded the configured deadline before this source settled.
    #[error("request timed out: {kind}")]
    RequestTimeout {
        /// Source label still pending at the deadline.
        kind: SourceKind,
    },

    /// No registered connector provides this source.
    #[error("unsupported source: {kind}")]
    Unsupported {
        /// Source label nobody provides.
        kind: SourceKind,
    },

    /// A record carried a date that cannot be parsed into a calendar instant.
    #[error("unparseable date: {date:?}")]
    UnparseableDate {
        /// The offending date string.
        date: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl CodecastError {
    /// Helper: build a `Source` error for a source label and message.
    pub fn source_failed(kind: SourceKind, msg: impl Into<String>) -> Self {
        Self::Source {
            kind,
            msg: msg.into(),
        }
    }

    /// Helper: build an `UnexpectedShape` error.
    pub fn unexpected_shape(kind: SourceKind, msg: impl Into<String>) -> Self {
        Self::UnexpectedShape {
            kind,
            msg: msg.into(),
        }
    }

    /// Helper: build a `SourceTimeout` error.
    pub fn source_timeout(kind: SourceKind, connector: impl Into<String>) -> Self {
        Self::SourceTimeout {
            kind,
            connector: connector.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub const fn request_timeout(kind: SourceKind) -> Self {
        Self::RequestTimeout { kind }
    }

    /// Helper: build an `Unsupported` error.
    #[must_use]
    pub const fn unsupported(kind: SourceKind) -> Self {
        Self::Unsupported { kind }
    }

    /// Helper: build an `UnparseableDate` error.
    pub fn unparseable_date(date: impl Into<String>) -> Self {
        Self::UnparseableDate { date: date.into() }
    }

    /// The source this error is attributed to, if any.
    #[must_use]
    pub const fn kind(&self) -> Option<SourceKind> {
        match self {
            Self::Source { kind, .. }
            | Self::UnexpectedShape { kind, .. }
            | Self::SourceTimeout { kind, .. }
            | Self::RequestTimeout { kind }
            | Self::Unsupported { kind } => Some(*kind),
            _ => None,
        }
    }

    /// Returns true for failures that are recovered by substituting the source's
    /// empty default.
    #[must_use]
    pub const fn is_source_failure(&self) -> bool {
        self.kind().is_some()
    }
}
