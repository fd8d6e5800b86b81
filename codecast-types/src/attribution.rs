//! Attribution of a load: which connector served which source.

use crate::SourceKind;

/// Records the connector that answered each source during one load.
///
/// Only sources that settled successfully are recorded; failed or unsupported
/// sources are reported as errors on the snapshot instead.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attribution {
    /// Collected entries annotated by connector name.
    pub served: Vec<(SourceKind, &'static str)>, // (source, connector_name)
}

impl Attribution {
    /// Create an empty attribution.
    #[must_use]
    pub const fn new() -> Self {
        Self { served: vec![] }
    }

    /// Record that `connector` served `kind`.
    pub fn push(&mut self, kind: SourceKind, connector: &'static str) {
        self.served.push((kind, connector));
    }

    /// Connector that served `kind`, if it settled successfully.
    #[must_use]
    pub fn connector_for(&self, kind: SourceKind) -> Option<&'static str> {
        self.served
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, name)| *name)
    }
}
