//! Epoch-based cancellation of superseded queries.
//!
//! Every query kind has at most one live handle. Starting a new epoch of a
//! kind supersedes the previous handle of that kind. Cancellation is logical:
//! the network call may still finish, its result is just ignored.

use std::fmt;

/// The independent operations the coordinator issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Suggestion,
    Definition,
    Associations,
}

impl QueryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            QueryKind::Suggestion => "suggestion",
            QueryKind::Definition => "definition",
            QueryKind::Associations => "associations",
        }
    }

    fn index(self) -> usize {
        match self {
            QueryKind::Suggestion => 0,
            QueryKind::Definition => 1,
            QueryKind::Associations => 2,
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token bound to one outstanding operation.
///
/// Only the registry decides liveness; the handle just names the epoch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancellationHandle {
    kind: QueryKind,
    epoch: u64,
}

impl CancellationHandle {
    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Immutable description of one issued query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub term: String,
    pub epoch: u64,
}

impl Query {
    pub fn new(term: impl Into<String>, handle: &CancellationHandle) -> Self {
        Self {
            term: term.into(),
            epoch: handle.epoch,
        }
    }
}

/// Tracks the live handle of every query kind.
#[derive(Debug, Default)]
pub struct CancellationRegistry {
    next_epoch: u64,
    live: [Option<CancellationHandle>; 3],
}

impl CancellationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the live handle of `kind` (if any) and install a new one.
    pub fn begin_epoch(&mut self, kind: QueryKind) -> CancellationHandle {
        self.invalidate(kind);
        self.next_epoch += 1;

        let handle = CancellationHandle {
            kind,
            epoch: self.next_epoch,
        };
        self.live[kind.index()] = Some(handle.clone());
        handle
    }

    /// Cancel the live handle of `kind` without installing a replacement.
    ///
    /// Returns true if a handle was live.
    pub fn invalidate(&mut self, kind: QueryKind) -> bool {
        match self.live[kind.index()].take() {
            Some(previous) => {
                tracing::trace!(kind = %kind, epoch = previous.epoch, "epoch cancelled");
                true
            }
            None => false,
        }
    }

    /// Whether `handle` is still the authoritative operation of its kind.
    pub fn is_live(&self, handle: &CancellationHandle) -> bool {
        self.live[handle.kind.index()]
            .as_ref()
            .is_some_and(|live| live.epoch == handle.epoch)
    }

    pub fn live_epoch(&self, kind: QueryKind) -> Option<u64> {
        self.live[kind.index()].as_ref().map(|live| live.epoch)
    }
}
