//! View model for the word search screen.

use crate::backend::{AdvancedConfig, AssociationResult, DictionaryEntry};
use crate::coordinator::is_valid_term;
use crate::ui::mvi::UiState;

/// Everything the rendering side needs to draw the search screen.
///
/// Owned by the coordinator. Renderers only ever see published clones.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Raw input text, as typed.
    pub word: String,
    /// Closest-word hint for `word`, empty when none.
    pub suggestion: String,
    /// Dictionary entry of the last accepted submit.
    pub dictionary: DictionaryEntry,
    /// Associations of the last accepted submit.
    pub association_result: Option<AssociationResult>,
    /// True while the authoritative definition query is outstanding.
    pub loading_definition: bool,
    /// True while the authoritative associations query is outstanding.
    pub loading_associations: bool,
    pub advanced_config: AdvancedConfig,
    pub showing_advanced_search: bool,
    /// Association names the user marked.
    pub highlights: Vec<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            word: String::new(),
            suggestion: String::new(),
            dictionary: DictionaryEntry::default(),
            association_result: None,
            loading_definition: false,
            loading_associations: false,
            advanced_config: AdvancedConfig::default(),
            showing_advanced_search: true,
            highlights: Vec::new(),
        }
    }
}

impl UiState for ViewState {}

impl ViewState {
    pub fn with_config(advanced_config: AdvancedConfig) -> Self {
        Self {
            advanced_config,
            ..Self::default()
        }
    }

    /// True when the input is non-empty and contains anything but letters.
    pub fn has_validation_error(&self) -> bool {
        !self.word.is_empty() && !is_valid_term(&self.word)
    }

    /// The "did you mean" hint, if it differs from what is typed.
    pub fn correction(&self) -> Option<&str> {
        if self.suggestion.is_empty() || self.suggestion.eq_ignore_ascii_case(&self.word) {
            None
        } else {
            Some(&self.suggestion)
        }
    }

    pub fn is_highlighted(&self, name: &str) -> bool {
        self.highlights.iter().any(|h| h == name)
    }

    /// True while either half of a submit is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading_definition || self.loading_associations
    }

    pub fn has_results(&self) -> bool {
        self.association_result
            .as_ref()
            .is_some_and(|result| !result.splits.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shows_advanced_search() {
        let state = ViewState::default();
        assert!(state.showing_advanced_search);
        assert!(!state.loading_associations);
        assert_eq!(state.advanced_config.limit, 10);
    }

    #[test]
    fn validation_error_only_for_non_letters() {
        let mut state = ViewState::default();
        assert!(!state.has_validation_error());

        state.word = "Hello".into();
        assert!(!state.has_validation_error());

        state.word = "ca7t".into();
        assert!(state.has_validation_error());

        state.word = "he y".into();
        assert!(state.has_validation_error());
    }

    #[test]
    fn correction_hidden_when_synced_with_input() {
        let mut state = ViewState {
            word: "Paralyze".into(),
            suggestion: "paralyze".into(),
            ..ViewState::default()
        };
        assert_eq!(state.correction(), None);

        state.word = "paralize".into();
        assert_eq!(state.correction(), Some("paralyze"));

        state.suggestion.clear();
        assert_eq!(state.correction(), None);
    }

    #[test]
    fn has_results_requires_splits() {
        let mut state = ViewState::default();
        assert!(!state.has_results());

        state.association_result = Some(AssociationResult::default());
        assert!(!state.has_results());
    }
}
