/*! Substitution derivation

Builds a new language-pair record from an existing one (the template) and a word-level [TranslationMap].
The template's `targetWord`s are looked up (exact, case-sensitive) and replaced by their mapped value.

Missing mappings are passed through unchanged by default ([DeriveMode::Lenient]),
since partial maps are routinely used. [DeriveMode::Strict] turns them into errors.
!*/
use std::collections::HashMap;
use std::path::Path;

use log::{debug, warn};

use crate::dataset::LanguagePairRecord;
use crate::error::Error;

/// Maps an existing target word/phrase to its counterpart in the new target language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationMap {
    words: HashMap<String, String>,
}

impl TranslationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a map from a JSON object of strings (`{"pan": "pão", ...}`).
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::fs(path, e))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, Error> {
        let words: HashMap<String, String> = serde_json::from_str(content)
            .map_err(|e| Error::malformed(0, format!("invalid translation map: {}", e)))?;
        Ok(Self { words })
    }

    pub fn insert(&mut self, from: &str, to: &str) -> Option<String> {
        self.words.insert(from.to_string(), to.to_string())
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for TranslationMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Behaviour on a `targetWord` that has no entry in the map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeriveMode {
    /// Keep the word as is.
    #[default]
    Lenient,
    /// Fail with [Error::UnmappedWord].
    Strict,
}

/// Derive a record for `new_target`, passing unmapped words through.
///
/// The template is left untouched.
pub fn derive(
    template: &LanguagePairRecord,
    new_target: &str,
    new_target_name: &str,
    map: &TranslationMap,
) -> LanguagePairRecord {
    let mut derived = template.clone();
    derived.target = new_target.to_string();
    derived.name.target = new_target_name.to_string();

    let mut passed_through = 0;
    for pair in derived.pairs.iter_mut() {
        match map.get(&pair.target_word) {
            Some(word) => pair.target_word = word.to_string(),
            None => passed_through += 1,
        }
    }

    if passed_through > 0 {
        warn!(
            "[{}] {} word(s) without translation kept as is",
            derived.key(),
            passed_through
        );
    }

    derived
}

/// Same as [derive], with the behaviour on missing mappings chosen by `mode`.
pub fn derive_with_mode(
    template: &LanguagePairRecord,
    new_target: &str,
    new_target_name: &str,
    map: &TranslationMap,
    mode: DeriveMode,
) -> Result<LanguagePairRecord, Error> {
    if template.pairs.is_empty() {
        warn!("[{}] template has no pairs", template.key());
    }

    debug!(
        "deriving {}-{} from {} with {} mappings ({:?})",
        template.source,
        new_target,
        template.key(),
        map.len(),
        mode
    );

    if mode == DeriveMode::Strict {
        if let Some((index, pair)) = template
            .pairs
            .iter()
            .enumerate()
            .find(|(_, p)| map.get(&p.target_word).is_none())
        {
            return Err(Error::UnmappedWord {
                index,
                word: pair.target_word.clone(),
            });
        }
    }

    Ok(derive(template, new_target, new_target_name, map))
}
