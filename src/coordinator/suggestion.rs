//! Lifecycle of the closest-word hint.

/// Where the suggestion path currently is.
///
/// `Applied` and `Discarded` are transient: the next input change
/// restarts the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestionPhase {
    #[default]
    Idle,
    /// Waiting for the input to settle.
    PendingDebounce,
    /// A closest-word query of this epoch is outstanding.
    InFlight { epoch: u64 },
    Applied,
    Discarded,
}

impl SuggestionPhase {
    /// Input mutated. Any in-flight query is abandoned.
    pub fn on_input(self, text_is_empty: bool) -> Self {
        if text_is_empty {
            SuggestionPhase::Idle
        } else {
            SuggestionPhase::PendingDebounce
        }
    }

    /// The debounce timer fired and a query was issued.
    pub fn on_dispatched(self, epoch: u64) -> Self {
        SuggestionPhase::InFlight { epoch }
    }

    /// A query of `epoch` resolved. Completions of older epochs leave
    /// the phase untouched.
    pub fn on_resolved(self, epoch: u64, applied: bool) -> Self {
        match self {
            SuggestionPhase::InFlight { epoch: current } if current == epoch => {
                if applied {
                    SuggestionPhase::Applied
                } else {
                    SuggestionPhase::Discarded
                }
            }
            other => other,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, SuggestionPhase::InFlight { .. })
    }
}
