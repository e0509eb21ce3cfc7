/*!
# IO utilities

Loading and saving of the dataset file.

The file is always read in full and written in full: [save] serializes everything in memory first,
then replaces the file in one go (see [write_atomic]).
!*/
mod atomic;
pub mod canonical;

use std::path::Path;

use log::info;

use crate::dataset::Dataset;
use crate::error::Error;
pub use atomic::write_atomic;
pub use canonical::{deserialize, deserialize_record, serialize, Shape, WriteOptions};

/// Load a dataset file (wrapped or legacy shape).
pub fn load(path: &Path) -> Result<Dataset, Error> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::fs(path, e))?;
    let dataset = deserialize(&text)?;
    info!("loaded {} records from {:?}", dataset.len(), path);
    Ok(dataset)
}

/// Write `dataset` to `path` in canonical form. Returns the number of records written.
pub fn save(path: &Path, dataset: &Dataset, options: &WriteOptions) -> Result<usize, Error> {
    let text = serialize(dataset, options)?;
    write_atomic(path, text.as_bytes())?;
    info!("saved {} records to {:?}", dataset.len(), path);
    Ok(dataset.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{LanguagePairRecord, WordPair};

    #[test]
    fn save_load() {
        let dst = tempfile::tempdir().unwrap();
        let path = dst.path().join("multilingual_words.json");

        let dataset = Dataset::from_records(vec![LanguagePairRecord::new(
            "en",
            "ht",
            "English",
            "Haitian Creole",
            vec![
                WordPair::new("Thank you", "Mèsi", "phrases"),
                WordPair::new("bread", "pen", "food"),
            ],
        )])
        .unwrap();

        assert_eq!(save(&path, &dataset, &WriteOptions::default()).unwrap(), 1);
        assert_eq!(load(&path).unwrap(), dataset);
    }

    #[test]
    fn load_missing_file() {
        let dst = tempfile::tempdir().unwrap();
        let path = dst.path().join("missing.json");
        assert!(matches!(load(&path), Err(Error::FileSystem { .. })));
    }

    #[test]
    fn failed_load_keeps_file() {
        let dst = tempfile::tempdir().unwrap();
        let path = dst.path().join("broken.json");
        std::fs::write(&path, "[{").unwrap();

        assert!(load(&path).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[{");
    }
}
