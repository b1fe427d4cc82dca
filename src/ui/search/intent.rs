//! Intents for the search view model.

use crate::backend::{AssociationResult, DictionaryEntry};
use crate::ui::mvi::Intent;

/// State changes the coordinator applies to the view model.
///
/// Completion intents are only dispatched after the response passed both
/// the cancellation registry and the staleness guard.
#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// The input text changed. Clears the current hint.
    InputChanged { text: String },

    /// The input was replaced programmatically (accepted correction).
    WordReplaced { word: String },

    /// A closest-word response was accepted.
    SuggestionApplied { suggestion: String },

    /// A definitions query was launched.
    DefinitionStarted,

    /// A definitions response was accepted (or failed and is empty).
    DefinitionApplied { entry: DictionaryEntry },

    /// The authoritative definitions query finished but its result was stale.
    DefinitionSettled,

    /// An associations query was launched.
    AssociationsStarted,

    /// The authoritative associations query produced a result.
    AssociationsApplied { result: Option<AssociationResult> },

    /// The authoritative associations query finished but its result was stale.
    AssociationsSettled,

    /// Advanced-search options changed. `None` fields are left as they are.
    AdvancedConfigChanged {
        split_enabled: Option<bool>,
        limit: Option<u32>,
    },

    /// Show or hide the advanced-search panel.
    AdvancedSearchToggled,

    /// Mark or unmark an association name.
    HighlightToggled { name: String },
}

impl Intent for SearchIntent {}
