use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use crate::snapshot::Snapshot;

/// Sequence number identifying one load. Later loads carry larger tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTag(u64);

impl RequestTag {
    /// Numeric value of the tag.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Holder of the snapshot currently shown.
///
/// Every load asks for a tag with [`ViewState::issue`] before fetching and hands
/// its result to [`ViewState::offer`] afterwards. Only the result of the most
/// recently issued load is accepted; a slower, superseded load that finishes
/// late is discarded instead of overwriting newer data.
pub struct ViewState {
    issued: AtomicU64,
    tx: watch::Sender<Option<Arc<Snapshot>>>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Empty view: nothing issued, nothing shown.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            issued: AtomicU64::new(0),
            tx,
        }
    }

    /// Issue the tag for a new load. Supersedes every tag issued before it.
    pub fn issue(&self) -> RequestTag {
        RequestTag(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// The most recently issued tag, if any.
    #[must_use]
    pub fn latest_issued(&self) -> Option<RequestTag> {
        match self.issued.load(Ordering::SeqCst) {
            0 => None,
            n => Some(RequestTag(n)),
        }
    }

    /// Offer a finished snapshot for display.
    ///
    /// Returns `true` if it replaced the stored snapshot. Snapshots whose tag is
    /// not the latest issued, or not newer than the stored one, are discarded.
    pub fn offer(&self, snapshot: Arc<Snapshot>) -> bool {
        if self.latest_issued() != Some(snapshot.tag) {
            return false;
        }
        self.tx.send_if_modified(|current| {
            if current.as_ref().is_some_and(|c| c.tag >= snapshot.tag) {
                return false;
            }
            *current = Some(snapshot);
            true
        })
    }

    /// The accepted snapshot, if any load has been accepted yet.
    #[must_use]
    pub fn current(&self) -> Option<Arc<Snapshot>> {
        self.tx.borrow().clone()
    }

    /// Watch for accepted snapshots. Each change is a wholesale replacement.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<Snapshot>>> {
        self.tx.subscribe()
    }
}
