//! Distribution step: block stream to per language pair files.
use std::path::PathBuf;

use log::info;

use crate::error::Error;
use crate::pipelines::pipeline::Pipeline;
use crate::processing::split::{split, SplitReport, DEFAULT_EXTENSION};

pub struct Splitter {
    src: PathBuf,
    dst: PathBuf,
    extension: String,
}

impl Splitter {
    /// `src` is the block stream file, `dst` the output root.
    pub fn new(src: PathBuf, dst: PathBuf) -> Self {
        Self {
            src,
            dst,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    pub fn extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }
}

impl Pipeline<SplitReport> for Splitter {
    fn run(&self) -> Result<SplitReport, Error> {
        info!("splitting {:?} into {:?}", self.src, self.dst);
        let raw = std::fs::read_to_string(&self.src).map_err(|e| Error::fs(&self.src, e))?;
        split(&raw, &self.dst, &self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_stream() {
        let dir = tempfile::tempdir().unwrap();
        let res = Splitter::new(dir.path().join("blocks.txt"), dir.path().join("out")).run();
        assert!(matches!(res, Err(Error::FileSystem { .. })));
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn custom_extension() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("blocks.txt");
        std::fs::write(
            &src,
            r#",{"source": "en", "target": "ht", "name": {"source": "English", "target": "Haitian Creole"},
                "pairs": [{"sourceWord": "one", "targetWord": "en", "category": "numbers"}]}"#,
        )
        .unwrap();

        let report = Splitter::new(src, dir.path().join("out"))
            .extension(".data")
            .run()
            .unwrap();
        assert_eq!(report.files, 1);
        assert!(dir
            .path()
            .join("out/en/en_ht_numbers.data")
            .is_file());
    }
}
