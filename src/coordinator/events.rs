//! Events processed by the coordinator loop.

use crate::backend::{AssociationResult, BackendError, ClosestWord, DictionaryEntry};

use super::debounce::DebounceFired;
use super::registry::{CancellationHandle, Query, QueryKind};

/// Everything the coordinator reacts to, in arrival order.
///
/// The first group comes from the rendering side; the rest is posted by
/// the coordinator's own timers and query tasks.
#[derive(Debug)]
pub enum CoordinatorEvent {
    InputChanged(String),
    Submit,
    /// Take the displayed correction and search for it.
    AcceptSuggestion,
    AdvancedConfigChanged {
        split_enabled: Option<bool>,
        limit: Option<u32>,
    },
    ToggleAdvancedSearch,
    ToggleHighlight(String),
    Shutdown,

    /// The input debounce quiet period elapsed.
    DebounceElapsed(DebounceFired),
    /// A query task finished, successfully or not.
    Completed(Completion),
}

/// Result of one query, tagged with where it came from.
#[derive(Debug)]
pub struct Completion {
    pub query: Query,
    pub handle: CancellationHandle,
    pub outcome: QueryOutcome,
}

#[derive(Debug)]
pub enum QueryOutcome {
    Suggestion(Result<ClosestWord, BackendError>),
    Definition(Result<DictionaryEntry, BackendError>),
    Associations(Result<AssociationResult, BackendError>),
}

impl QueryOutcome {
    /// Failed outcome of the given kind.
    pub fn failed(kind: QueryKind, error: BackendError) -> Self {
        match kind {
            QueryKind::Suggestion => QueryOutcome::Suggestion(Err(error)),
            QueryKind::Definition => QueryOutcome::Definition(Err(error)),
            QueryKind::Associations => QueryOutcome::Associations(Err(error)),
        }
    }
}
