//! Display form of raw definition strings.
//!
//! The backend sends definitions as `"<type><sep><text>"`, for example
//! `"n\tan animal that barks"`. Anything that is not an ASCII letter
//! separates words.

use std::fmt;

/// A definition split into its part-of-speech token and its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub kind: String,
    pub text: String,
}

impl Definition {
    pub fn parse(raw: &str) -> Self {
        let mut words = raw
            .split(|c: char| !c.is_ascii_alphabetic())
            .filter(|piece| !piece.is_empty());

        // A leading separator means there is no type token
        let kind = if raw.starts_with(|c: char| c.is_ascii_alphabetic()) {
            words.next().unwrap_or_default().to_string()
        } else {
            String::new()
        };
        let text = words.collect::<Vec<_>>().join(" ");

        Self { kind, text }
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind.is_empty(), self.text.is_empty()) {
            (true, _) => write!(f, "{}.", self.text),
            (false, true) => write!(f, "{}", self.kind),
            (false, false) => write!(f, "{} {}.", self.kind, self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_type_and_text() {
        let def = Definition::parse("n\ta domesticated carnivorous mammal");
        assert_eq!(def.kind, "n");
        assert_eq!(def.text, "a domesticated carnivorous mammal");
        assert_eq!(def.to_string(), "n a domesticated carnivorous mammal.");
    }

    #[test]
    fn punctuation_collapses_to_single_spaces() {
        let def = Definition::parse("adj\t(of a person) lacking, sense");
        assert_eq!(def.kind, "adj");
        assert_eq!(def.text, "of a person lacking sense");
    }

    #[test]
    fn leading_separator_has_no_type() {
        let def = Definition::parse("\tjust text");
        assert_eq!(def.kind, "");
        assert_eq!(def.text, "just text");
        assert_eq!(def.to_string(), "just text.");
    }

    #[test]
    fn type_only() {
        let def = Definition::parse("v");
        assert_eq!(def.kind, "v");
        assert_eq!(def.text, "");
        assert_eq!(def.to_string(), "v");
    }
}
