//! Reducer for the search view model.

use crate::ui::mvi::Reducer;

use super::intent::SearchIntent;
use super::state::ViewState;

/// Reducer for search view state transitions.
///
/// Pure function: liveness and staleness decisions are made by the
/// coordinator before an intent reaches this point.
pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = ViewState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::InputChanged { text } => ViewState {
                word: text,
                suggestion: String::new(),
                ..state
            },

            SearchIntent::WordReplaced { word } => ViewState { word, ..state },

            SearchIntent::SuggestionApplied { suggestion } => ViewState {
                suggestion,
                ..state
            },

            SearchIntent::DefinitionStarted => ViewState {
                loading_definition: true,
                ..state
            },

            SearchIntent::DefinitionApplied { entry } => ViewState {
                dictionary: entry,
                loading_definition: false,
                ..state
            },

            SearchIntent::DefinitionSettled => ViewState {
                loading_definition: false,
                ..state
            },

            SearchIntent::AssociationsStarted => ViewState {
                loading_associations: true,
                ..state
            },

            SearchIntent::AssociationsApplied { result } => ViewState {
                association_result: result,
                loading_associations: false,
                ..state
            },

            SearchIntent::AssociationsSettled => ViewState {
                loading_associations: false,
                ..state
            },

            SearchIntent::AdvancedConfigChanged {
                split_enabled,
                limit,
            } => {
                let mut config = state.advanced_config;
                if let Some(split_enabled) = split_enabled {
                    config.split_enabled = split_enabled;
                }
                // The backend rejects non-positive limits
                if let Some(limit) = limit.filter(|l| *l > 0) {
                    config.limit = limit;
                }
                ViewState {
                    advanced_config: config,
                    ..state
                }
            }

            SearchIntent::AdvancedSearchToggled => ViewState {
                showing_advanced_search: !state.showing_advanced_search,
                ..state
            },

            SearchIntent::HighlightToggled { name } => {
                let mut highlights = state.highlights;
                match highlights.iter().position(|h| *h == name) {
                    Some(index) => {
                        highlights.remove(index);
                    }
                    None => highlights.push(name),
                }
                ViewState { highlights, ..state }
            }
        }
    }
}
