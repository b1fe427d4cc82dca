//! Runs queries as detached tasks and posts their completion back.

use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::Instrument;

use crate::backend::{AdvancedConfig, BackendError, WordService};

use super::events::{Completion, CoordinatorEvent, QueryOutcome};
use super::registry::{CancellationHandle, Query};

/// Spawns backend calls. Every spawned call posts exactly one
/// [`CoordinatorEvent::Completed`], whether or not it was superseded
/// in the meantime. A call that panics completes as
/// [`BackendError::TaskFailed`].
#[derive(Clone)]
pub struct QueryDispatcher {
    service: Arc<dyn WordService>,
    events: mpsc::UnboundedSender<CoordinatorEvent>,
}

impl QueryDispatcher {
    pub fn new(
        service: Arc<dyn WordService>,
        events: mpsc::UnboundedSender<CoordinatorEvent>,
    ) -> Self {
        Self { service, events }
    }

    pub fn closest(&self, query: Query, handle: CancellationHandle) {
        let service = Arc::clone(&self.service);
        self.spawn(query, handle, move |term| async move {
            QueryOutcome::Suggestion(service.closest(&term).await)
        });
    }

    pub fn definitions(&self, query: Query, handle: CancellationHandle) {
        let service = Arc::clone(&self.service);
        self.spawn(query, handle, move |term| async move {
            QueryOutcome::Definition(service.definitions(&term).await)
        });
    }

    pub fn associations(&self, query: Query, handle: CancellationHandle, config: AdvancedConfig) {
        let service = Arc::clone(&self.service);
        self.spawn(query, handle, move |term| async move {
            QueryOutcome::Associations(service.associations(&term, config).await)
        });
    }

    fn spawn<F, Fut>(&self, query: Query, handle: CancellationHandle, run: F)
    where
        F: FnOnce(String) -> Fut + Send + 'static,
        Fut: Future<Output = QueryOutcome> + Send + 'static,
    {
        let events = self.events.clone();
        let span = tracing::debug_span!(
            "query",
            kind = %handle.kind(),
            epoch = handle.epoch(),
            term = %query.term
        );

        tokio::spawn(
            async move {
                tracing::debug!("dispatched");
                let kind = handle.kind();
                let call = tokio::spawn(run(query.term.clone()).in_current_span());
                let outcome = match call.await {
                    Ok(outcome) => outcome,
                    Err(err) => {
                        tracing::warn!(error = %err, "query task failed");
                        QueryOutcome::failed(
                            kind,
                            BackendError::TaskFailed {
                                reason: err.to_string(),
                            },
                        )
                    }
                };
                if events
                    .send(CoordinatorEvent::Completed(Completion {
                        query,
                        handle,
                        outcome,
                    }))
                    .is_err()
                {
                    tracing::trace!("completion dropped (coordinator gone)");
                }
            }
            .instrument(span),
        );
    }
}
