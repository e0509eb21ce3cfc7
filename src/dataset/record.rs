//! Word pairs and language-pair records.
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::group_by_category;

/// One source/target translation, tagged with a semantic category.
///
/// Categories are lowercase, human readable and open-ended (`food`, `family`, `phrases`...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordPair {
    pub source_word: String,
    pub target_word: String,
    pub category: String,
}

impl WordPair {
    pub fn new(source_word: &str, target_word: &str, category: &str) -> Self {
        Self {
            source_word: source_word.to_string(),
            target_word: target_word.to_string(),
            category: category.to_string(),
        }
    }
}

/// Human readable names of both languages of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageNames {
    pub source: String,
    pub target: String,
}

/// All the vocabulary for one source → target direction.
///
/// `(source, target)` identifies the record inside a [crate::dataset::Dataset].
/// Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePairRecord {
    pub source: String,
    pub target: String,
    pub name: LanguageNames,
    pub pairs: Vec<WordPair>,
}

impl LanguagePairRecord {
    pub fn new(
        source: &str,
        target: &str,
        source_name: &str,
        target_name: &str,
        pairs: Vec<WordPair>,
    ) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            name: LanguageNames {
                source: source_name.to_string(),
                target: target_name.to_string(),
            },
            pairs,
        }
    }

    /// `true` if this record is keyed by `(source, target)`.
    #[inline]
    pub fn is_keyed(&self, source: &str, target: &str) -> bool {
        self.source == source && self.target == target
    }

    /// `source-target`, used in logs and listings.
    pub fn key(&self) -> String {
        format!("{}-{}", self.source, self.target)
    }

    /// `category: count` for each category, in first-seen order.
    pub fn category_counts(&self) -> String {
        group_by_category(&self.pairs)
            .iter()
            .map(|g| format!("{}: {}", g.category, g.pairs.len()))
            .join(", ")
    }
}
