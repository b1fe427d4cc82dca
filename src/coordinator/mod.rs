//! Input-driven query coordinator.
//!
//! Decides when closest-word, definition and associations queries are
//! issued, which in-flight queries are superseded, and whether a response
//! may still change the view model.
//!
//! # Concurrency
//!
//! One loop owns the [`ViewState`] and processes [`CoordinatorEvent`]s in
//! arrival order. Timers and query tasks never touch the state; they post
//! events back into the same queue. A completion is applied only if its
//! handle is still live *and* its term still matches the input, so a late
//! response from a superseded epoch can never overwrite a newer one.
//!
//! ```text
//! input ──→ Debouncer ──→ closest ──┐
//! submit ─→ fan-out ──→ definitions ├──→ registry.is_live ──→ StalenessGuard ──→ reducer ──→ watch
//!                   └─→ associations┘
//! ```

mod debounce;
mod dispatch;
mod events;
mod fanout;
mod guard;
mod registry;
mod suggestion;

pub use debounce::{DebounceFired, Debouncer};
pub use dispatch::QueryDispatcher;
pub use events::{Completion, CoordinatorEvent, QueryOutcome};
pub use fanout::{canonical_term, is_valid_term};
pub use guard::StalenessGuard;
pub use registry::{CancellationHandle, CancellationRegistry, Query, QueryKind};
pub use suggestion::SuggestionPhase;

use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{mpsc, watch};

use crate::backend::{AdvancedConfig, DictionaryEntry, WordService};
use crate::config::SearchConfig;
use crate::ui::mvi::Reducer;
use crate::ui::search::{SearchIntent, SearchReducer, ViewState};

/// Errors returned by [`CoordinatorHandle`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordinatorError {
    #[error("Coordinator has shut down")]
    Closed,
}

/// Tunables of the coordinator.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinatorSettings {
    /// Input quiet period before a closest-word query is issued.
    pub quiet_period: Duration,
    /// Initial advanced-search options.
    pub advanced_config: AdvancedConfig,
}

impl Default for CoordinatorSettings {
    fn default() -> Self {
        Self::from(&SearchConfig::default())
    }
}

impl From<&SearchConfig> for CoordinatorSettings {
    fn from(search: &SearchConfig) -> Self {
        Self {
            quiet_period: Duration::from_millis(search.debounce_ms),
            advanced_config: AdvancedConfig {
                split_enabled: search.auto_split,
                limit: search.associations_limit,
            },
        }
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Owner of the view model. Drive it with [`Coordinator::run`].
pub struct Coordinator {
    state: ViewState,
    publisher: watch::Sender<ViewState>,
    events_tx: mpsc::UnboundedSender<CoordinatorEvent>,
    events_rx: mpsc::UnboundedReceiver<CoordinatorEvent>,
    debouncer: Debouncer,
    registry: CancellationRegistry,
    dispatcher: QueryDispatcher,
    suggestion: SuggestionPhase,
    quiet_period: Duration,
}

impl Coordinator {
    pub fn new(
        service: Arc<dyn WordService>,
        settings: CoordinatorSettings,
    ) -> (Self, CoordinatorHandle) {
        let state = ViewState::with_config(settings.advanced_config);
        let (publisher, view) = watch::channel(state.clone());
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let dispatcher = QueryDispatcher::new(service, events_tx.clone());

        let handle = CoordinatorHandle {
            events: events_tx.clone(),
            view,
        };

        let coordinator = Self {
            state,
            publisher,
            events_tx,
            events_rx,
            debouncer: Debouncer::new(),
            registry: CancellationRegistry::new(),
            dispatcher,
            suggestion: SuggestionPhase::default(),
            quiet_period: settings.quiet_period,
        };

        (coordinator, handle)
    }

    /// Process events until [`CoordinatorEvent::Shutdown`].
    pub async fn run(mut self) {
        while self.step().await.is_continue() {}
        tracing::debug!("coordinator stopped");
    }

    /// Wait for the next event and process it.
    pub async fn step(&mut self) -> ControlFlow<()> {
        match self.events_rx.recv().await {
            Some(event) => self.handle_event(event),
            None => ControlFlow::Break(()),
        }
    }

    pub fn handle_event(&mut self, event: CoordinatorEvent) -> ControlFlow<()> {
        match event {
            CoordinatorEvent::InputChanged(text) => self.on_input_changed(text),
            CoordinatorEvent::Submit => {
                let word = self.state.word.clone();
                self.submit(&word);
            }
            CoordinatorEvent::AcceptSuggestion => self.accept_suggestion(),
            CoordinatorEvent::AdvancedConfigChanged {
                split_enabled,
                limit,
            } => self.dispatch(SearchIntent::AdvancedConfigChanged {
                split_enabled,
                limit,
            }),
            CoordinatorEvent::ToggleAdvancedSearch => {
                self.dispatch(SearchIntent::AdvancedSearchToggled)
            }
            CoordinatorEvent::ToggleHighlight(name) => {
                self.dispatch(SearchIntent::HighlightToggled { name })
            }
            CoordinatorEvent::DebounceElapsed(fired) => self.on_debounce_elapsed(fired),
            CoordinatorEvent::Completed(completion) => self.on_completed(completion),
            CoordinatorEvent::Shutdown => {
                self.debouncer.cancel();
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    pub fn view(&self) -> &ViewState {
        &self.state
    }

    pub fn suggestion_phase(&self) -> SuggestionPhase {
        self.suggestion
    }

    pub fn registry(&self) -> &CancellationRegistry {
        &self.registry
    }

    fn on_input_changed(&mut self, text: String) {
        if self.registry.invalidate(QueryKind::Suggestion) {
            tracing::trace!("in-flight suggestion abandoned");
        }
        self.suggestion = self.suggestion.on_input(text.is_empty());

        let events = self.events_tx.clone();
        self.debouncer.schedule(&text, self.quiet_period, move |fired| {
            let _ = events.send(CoordinatorEvent::DebounceElapsed(fired));
        });

        self.dispatch(SearchIntent::InputChanged { text });
    }

    fn on_debounce_elapsed(&mut self, fired: DebounceFired) {
        if !self.debouncer.claim(&fired) {
            tracing::trace!(term = %fired.term, "stale debounce ignored");
            return;
        }

        let handle = self.registry.begin_epoch(QueryKind::Suggestion);
        let query = Query::new(fired.term, &handle);
        self.suggestion = self.suggestion.on_dispatched(handle.epoch());
        self.dispatcher.closest(query, handle);
    }

    fn submit(&mut self, word: &str) {
        let config = self.state.advanced_config;
        if fanout::submit(&self.dispatcher, &mut self.registry, word, config) {
            self.dispatch(SearchIntent::DefinitionStarted);
            self.dispatch(SearchIntent::AssociationsStarted);
        }
    }

    fn accept_suggestion(&mut self) {
        let Some(correction) = self.state.correction().map(str::to_string) else {
            return;
        };

        self.debouncer.cancel();
        self.registry.invalidate(QueryKind::Suggestion);
        self.suggestion = SuggestionPhase::Idle;

        self.dispatch(SearchIntent::WordReplaced {
            word: correction.clone(),
        });
        self.submit(&correction);
    }

    fn on_completed(&mut self, completion: Completion) {
        let Completion {
            query,
            handle,
            outcome,
        } = completion;

        if !self.registry.is_live(&handle) {
            tracing::trace!(
                kind = %handle.kind(),
                epoch = handle.epoch(),
                term = %query.term,
                "superseded response dropped"
            );
            return;
        }

        let accepted = StalenessGuard::accept(&query.term, &self.state.word);
        if !accepted {
            tracing::trace!(
                kind = %handle.kind(),
                term = %query.term,
                word = %self.state.word,
                "stale response dropped"
            );
        }

        match outcome {
            QueryOutcome::Suggestion(result) => {
                let applied = match (accepted, result) {
                    (true, Ok(closest)) => {
                        self.dispatch(SearchIntent::SuggestionApplied {
                            suggestion: closest.word,
                        });
                        true
                    }
                    (true, Err(err)) => {
                        tracing::warn!(kind = err.kind(), error = %err, "closest-word query failed");
                        false
                    }
                    (false, _) => false,
                };
                self.suggestion = self.suggestion.on_resolved(query.epoch, applied);
            }

            QueryOutcome::Definition(result) => {
                if !accepted {
                    self.dispatch(SearchIntent::DefinitionSettled);
                    return;
                }
                let entry = result.unwrap_or_else(|err| {
                    tracing::warn!(kind = err.kind(), error = %err, "definition query failed");
                    DictionaryEntry::default()
                });
                self.dispatch(SearchIntent::DefinitionApplied { entry });
            }

            QueryOutcome::Associations(result) => {
                if !accepted {
                    self.dispatch(SearchIntent::AssociationsSettled);
                    return;
                }
                let result = match result {
                    Ok(result) => Some(result),
                    Err(err) => {
                        tracing::warn!(kind = err.kind(), error = %err, "associations query failed");
                        None
                    }
                };
                self.dispatch(SearchIntent::AssociationsApplied { result });
            }
        }
    }

    fn dispatch(&mut self, intent: SearchIntent) {
        dispatch_mvi!(self, state, SearchReducer, intent);
        let state = &self.state;
        self.publisher.send_if_modified(|published| {
            if published != state {
                *published = state.clone();
                true
            } else {
                false
            }
        });
    }
}

/// Cloneable front door used by the rendering side.
#[derive(Clone)]
pub struct CoordinatorHandle {
    events: mpsc::UnboundedSender<CoordinatorEvent>,
    view: watch::Receiver<ViewState>,
}

impl CoordinatorHandle {
    pub fn input_changed(&self, text: impl Into<String>) -> Result<(), CoordinatorError> {
        self.send(CoordinatorEvent::InputChanged(text.into()))
    }

    pub fn submit(&self) -> Result<(), CoordinatorError> {
        self.send(CoordinatorEvent::Submit)
    }

    pub fn accept_suggestion(&self) -> Result<(), CoordinatorError> {
        self.send(CoordinatorEvent::AcceptSuggestion)
    }

    pub fn advanced_config_changed(
        &self,
        split_enabled: Option<bool>,
        limit: Option<u32>,
    ) -> Result<(), CoordinatorError> {
        self.send(CoordinatorEvent::AdvancedConfigChanged {
            split_enabled,
            limit,
        })
    }

    pub fn toggle_advanced_search(&self) -> Result<(), CoordinatorError> {
        self.send(CoordinatorEvent::ToggleAdvancedSearch)
    }

    pub fn toggle_highlight(&self, name: impl Into<String>) -> Result<(), CoordinatorError> {
        self.send(CoordinatorEvent::ToggleHighlight(name.into()))
    }

    pub fn shutdown(&self) -> Result<(), CoordinatorError> {
        self.send(CoordinatorEvent::Shutdown)
    }

    /// Copy of the latest published view model.
    pub fn snapshot(&self) -> ViewState {
        self.view.borrow().clone()
    }

    /// Receiver notified after every published change.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.view.clone()
    }

    fn send(&self, event: CoordinatorEvent) -> Result<(), CoordinatorError> {
        self.events.send(event).map_err(|_| CoordinatorError::Closed)
    }
}
