//! Wire types of the word backend.

use serde::{Deserialize, Serialize};

/// Response of `GET /closest/{word}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClosestWord {
    pub word: String,
}

/// Response of `GET /definitions/{word}`.
///
/// `word` is the dictionary headword the backend resolved, which may be a
/// spelling correction of the requested term.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(default)]
    pub definitions: Vec<String>,
}

impl DictionaryEntry {
    pub fn is_empty(&self) -> bool {
        self.word.is_empty() && self.definitions.is_empty()
    }
}

/// Response of `GET /associations/{word}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssociationResult {
    #[serde(default)]
    pub splits: Vec<WordSplit>,
}

/// One piece of a (possibly auto-split) word and its associations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSplit {
    pub word: String,
    #[serde(default)]
    pub associations: Vec<Association>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Association {
    pub name: String,
}

/// Advanced-search options carried by every associations query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvancedConfig {
    /// Ask the backend to split the word into its most associative parts.
    pub split_enabled: bool,
    /// Maximum associations per split.
    pub limit: u32,
}

/// Default associations limit when nothing is configured.
pub const DEFAULT_ASSOCIATIONS_LIMIT: u32 = 10;

impl Default for AdvancedConfig {
    fn default() -> Self {
        Self {
            split_enabled: false,
            limit: DEFAULT_ASSOCIATIONS_LIMIT,
        }
    }
}
