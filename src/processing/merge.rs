//! Merging records into a dataset.
use log::info;

use crate::dataset::{Dataset, LanguagePairRecord};
use crate::error::Error;

/// Append `record` at the end of `dataset`.
///
/// Fails with [Error::DuplicateRecord] if `(source, target)` is already taken,
/// in which case `dataset` is not modified.
pub fn merge(dataset: &mut Dataset, record: LanguagePairRecord) -> Result<(), Error> {
    if dataset.find_record(&record.source, &record.target).is_some() {
        return Err(Error::DuplicateRecord {
            source: record.source,
            target: record.target,
        });
    }

    info!(
        "[{}] merged ({} pairs), dataset now has {} records",
        record.key(),
        record.pairs.len(),
        dataset.len() + 1
    );
    dataset.push(record);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::WordPair;

    fn record(source: &str, target: &str) -> LanguagePairRecord {
        LanguagePairRecord::new(
            source,
            target,
            "English",
            "Other",
            vec![WordPair::new("one", "uno", "numbers")],
        )
    }

    #[test]
    fn appends_last() {
        let mut d = Dataset::from_records(vec![record("en", "es"), record("en", "fr")]).unwrap();
        merge(&mut d, record("en", "ht")).unwrap();
        merge(&mut d, record("en", "de")).unwrap();

        let keys: Vec<String> = d.iter().map(|r| r.key()).collect();
        assert_eq!(keys, vec!["en-es", "en-fr", "en-ht", "en-de"]);
    }

    #[test]
    fn duplicate_leaves_dataset_unchanged() {
        let mut d = Dataset::from_records(vec![record("en", "es"), record("en", "fr")]).unwrap();
        let before = d.clone();

        let mut colliding = record("en", "fr");
        colliding.pairs.clear();
        let err = merge(&mut d, colliding).unwrap_err();

        match err {
            Error::DuplicateRecord { source, target } => {
                assert_eq!(source, "en");
                assert_eq!(target, "fr");
            }
            e => panic!("unexpected error {:?}", e),
        }
        assert_eq!(d, before);
    }

    #[test]
    fn reversed_direction_is_a_different_record() {
        let mut d = Dataset::from_records(vec![record("en", "es")]).unwrap();
        merge(&mut d, record("es", "en")).unwrap();
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn into_empty() {
        let mut d = Dataset::new();
        merge(&mut d, record("en", "es")).unwrap();
        assert_eq!(d.len(), 1);
    }
}
