/*! Dataset model

The dataset is an ordered sequence of [LanguagePairRecord], keyed by `(source, target)`.
It is loaded in full, mutated in memory (append only) and written back in full by [crate::io].
!*/
mod grouping;
mod record;

use std::collections::HashSet;

use crate::error::Error;
pub use grouping::{flatten, group_by_category, CategoryGroup};
pub use record::{LanguageNames, LanguagePairRecord, WordPair};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<LanguagePairRecord>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from already ordered records.
    ///
    /// Fails on the first record whose `(source, target)` was already seen.
    pub fn from_records(records: Vec<LanguagePairRecord>) -> Result<Self, Error> {
        let mut seen = HashSet::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            if !seen.insert((record.source.as_str(), record.target.as_str())) {
                return Err(Error::malformed(
                    idx,
                    format!("duplicate record {}", record.key()),
                ));
            }
        }

        Ok(Self { records })
    }

    /// Exact match on both codes.
    pub fn find_record(&self, source: &str, target: &str) -> Option<&LanguagePairRecord> {
        self.records.iter().find(|r| r.is_keyed(source, target))
    }

    /// Append without checking for uniqueness. See [crate::processing::merge].
    pub(crate) fn push(&mut self, record: LanguagePairRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[LanguagePairRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LanguagePairRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One display line per record, in dataset order.
    pub fn summaries(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| {
                format!(
                    "{} → {} ({}, {} pairs)",
                    r.name.source,
                    r.name.target,
                    r.key(),
                    r.pairs.len()
                )
            })
            .collect()
    }
}

impl IntoIterator for Dataset {
    type Item = LanguagePairRecord;
    type IntoIter = std::vec::IntoIter<LanguagePairRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
