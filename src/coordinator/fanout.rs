//! Submit handling: validation and the definition/associations fan-out.

use crate::backend::AdvancedConfig;

use super::dispatch::QueryDispatcher;
use super::registry::{CancellationRegistry, Query, QueryKind};

/// True when `term` is non-empty and made of ASCII letters only.
pub fn is_valid_term(term: &str) -> bool {
    !term.is_empty() && term.chars().all(|c| c.is_ascii_alphabetic())
}

/// Lower-cased query key for a valid term.
pub fn canonical_term(term: &str) -> Option<String> {
    is_valid_term(term).then(|| term.to_ascii_lowercase())
}

/// Launch the independent definition and associations queries for `term`.
///
/// Returns false without touching the registry or the network when the
/// term fails validation.
pub fn submit(
    dispatcher: &QueryDispatcher,
    registry: &mut CancellationRegistry,
    term: &str,
    config: AdvancedConfig,
) -> bool {
    let Some(term) = canonical_term(term) else {
        tracing::debug!(term = %term, "submit rejected: not a word");
        return false;
    };

    let definition_handle = registry.begin_epoch(QueryKind::Definition);
    dispatcher.definitions(Query::new(term.clone(), &definition_handle), definition_handle);

    let associations_handle = registry.begin_epoch(QueryKind::Associations);
    dispatcher.associations(
        Query::new(term.clone(), &associations_handle),
        associations_handle,
        config,
    );

    tracing::debug!(
        term = %term,
        split = config.split_enabled,
        limit = config.limit,
        "fan-out launched"
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_terms_are_letters_only() {
        assert!(is_valid_term("Hey"));
        assert!(is_valid_term("hello"));
        for illegal in ["Hey_", "_Hey", "Ma3n", "He.y", "!@", "", "he y", "café"] {
            assert!(!is_valid_term(illegal), "{illegal:?} should be rejected");
        }
    }

    #[test]
    fn canonical_term_lowercases() {
        assert_eq!(canonical_term("HeLLo").as_deref(), Some("hello"));
        assert_eq!(canonical_term("ca7t"), None);
    }
}
