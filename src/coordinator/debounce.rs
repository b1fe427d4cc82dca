//! Single-slot debounce timer.
//!
//! Groups rapid input changes: only the last term scheduled before a
//! quiet period elapses is delivered.

use std::time::Duration;
use tokio::task::JoinHandle;

/// Delivered to the scheduled action when the quiet period elapsed.
///
/// Carries the generation it was scheduled under so the owner can
/// [`Debouncer::claim`] it. A timer can fire and queue its event just
/// before a newer `schedule` call; claiming rejects such leftovers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebounceFired {
    pub term: String,
    generation: u64,
}

struct PendingTimer {
    generation: u64,
    task: JoinHandle<()>,
}

/// Debounce timer with one logical slot.
///
/// Must be used from within a tokio runtime.
#[derive(Default)]
pub struct Debouncer {
    generation: u64,
    pending: Option<PendingTimer>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any pending timer with one that runs `action` after `after`.
    ///
    /// An empty `term` only cancels: nothing is rescheduled.
    pub fn schedule<F>(&mut self, term: &str, after: Duration, action: F)
    where
        F: FnOnce(DebounceFired) + Send + 'static,
    {
        self.cancel();
        if term.is_empty() {
            return;
        }

        self.generation += 1;
        let generation = self.generation;
        let fired = DebounceFired {
            term: term.to_string(),
            generation,
        };

        let task = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            action(fired);
        });

        self.pending = Some(PendingTimer { generation, task });
    }

    /// Cancel the pending timer. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                pending.task.abort();
                true
            }
            None => false,
        }
    }

    /// Accept a fired timer if it belongs to the current schedule.
    ///
    /// Succeeds at most once per schedule.
    pub fn claim(&mut self, fired: &DebounceFired) -> bool {
        match &self.pending {
            Some(pending) if pending.generation == fired.generation => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
