//! Final check before a response may touch the view model.

/// Compares a response's originating term with the current input.
pub struct StalenessGuard;

impl StalenessGuard {
    /// True only if `response_term` still matches `current_word`,
    /// ignoring case.
    pub fn accept(response_term: &str, current_word: &str) -> bool {
        response_term.to_lowercase() == current_word.to_lowercase()
    }
}
