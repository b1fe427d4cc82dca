//! Plain-text rendering of the search view model.

use std::fmt::Write;

use crate::ui::search::{Definition, ViewState};

const VALIDATION_NOTICE: &str = "We don't associate things that are not letters...";

/// Render a full screen of text for `state`.
pub fn render(state: &ViewState) -> String {
    let mut out = String::new();

    let spinner = if state.is_loading() { " (searching...)" } else { "" };
    let _ = writeln!(out, "> {}{}", state.word, spinner);

    if state.has_validation_error() {
        let _ = writeln!(out, "  ! {}", VALIDATION_NOTICE);
    }

    if let Some(correction) = state.correction() {
        let _ = writeln!(out, "  Did you mean {}? (:accept)", correction);
    }

    if state.showing_advanced_search {
        let split = if state.advanced_config.split_enabled { "on" } else { "off" };
        let _ = writeln!(
            out,
            "  [associations: {} | autosplitting: {}]",
            state.advanced_config.limit, split
        );
    }

    if !state.dictionary.definitions.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "  {}", state.dictionary.word);
        for raw in &state.dictionary.definitions {
            let _ = writeln!(out, "    - {}", Definition::parse(raw));
        }
    }

    if let Some(result) = state.association_result.as_ref().filter(|_| state.has_results()) {
        for split in &result.splits {
            let _ = writeln!(out);
            let _ = writeln!(out, "  # {}", split.word);
            let names: Vec<String> = split
                .associations
                .iter()
                .map(|association| {
                    if state.is_highlighted(&association.name) {
                        format!("*{}*", association.name)
                    } else {
                        association.name.clone()
                    }
                })
                .collect();
            let _ = writeln!(out, "    {}", names.join("  "));
        }
    }

    out
}
