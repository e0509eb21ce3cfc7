//! Dataset build steps.
//!
//! Each step loads the dataset file in full, transforms it in memory, and writes it back in full.
//! A failing step leaves the dataset file untouched.
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::dataset::Dataset;
use crate::error::Error;
use crate::io::{self, WriteOptions};
use crate::pipelines::pipeline::Pipeline;
use crate::processing::{derive_with_mode, merge, DeriveMode, TranslationMap};

/// Derive a new language pair from an existing one and merge it into the dataset.
pub struct Derive {
    dataset: PathBuf,
    template: (String, String),
    new_target: String,
    new_target_name: String,
    map: PathBuf,
    mode: DeriveMode,
    options: WriteOptions,
    dry_run: bool,
}

impl Derive {
    /// `template` is the `(source, target)` of the record used as a base.
    pub fn new(
        dataset: PathBuf,
        template: (String, String),
        new_target: String,
        new_target_name: String,
        map: PathBuf,
    ) -> Self {
        Self {
            dataset,
            template,
            new_target,
            new_target_name,
            map,
            mode: DeriveMode::default(),
            options: WriteOptions::default(),
            dry_run: false,
        }
    }

    pub fn mode(mut self, mode: DeriveMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn options(mut self, options: WriteOptions) -> Self {
        self.options = options;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

impl Pipeline<usize> for Derive {
    /// Returns the number of records of the resulting dataset.
    fn run(&self) -> Result<usize, Error> {
        let (source, target) = (&self.template.0, &self.template.1);
        info!(
            "[{}-{}] deriving from {}-{}",
            source, self.new_target, source, target
        );

        let mut dataset = io::load(&self.dataset)?;
        let map = TranslationMap::from_path(&self.map)?;
        debug!("{} mappings loaded from {:?}", map.len(), self.map);

        let template = dataset
            .find_record(source, target)
            .ok_or_else(|| Error::RecordNotFound {
                source: source.clone(),
                target: target.clone(),
            })?;
        let derived = derive_with_mode(
            template,
            &self.new_target,
            &self.new_target_name,
            &map,
            self.mode,
        )?;

        merge(&mut dataset, derived)?;
        finish(&self.dataset, &dataset, &self.options, self.dry_run)
    }
}

/// Merge an authored record file into the dataset.
pub struct Merge {
    dataset: PathBuf,
    record: PathBuf,
    options: WriteOptions,
    dry_run: bool,
}

impl Merge {
    pub fn new(dataset: PathBuf, record: PathBuf) -> Self {
        Self {
            dataset,
            record,
            options: WriteOptions::default(),
            dry_run: false,
        }
    }

    pub fn options(mut self, options: WriteOptions) -> Self {
        self.options = options;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

impl Pipeline<usize> for Merge {
    fn run(&self) -> Result<usize, Error> {
        let mut dataset = io::load(&self.dataset)?;

        let text = std::fs::read_to_string(&self.record).map_err(|e| Error::fs(&self.record, e))?;
        let record = io::deserialize_record(&text)?;
        info!("[{}] merging from {:?}", record.key(), self.record);

        merge(&mut dataset, record)?;
        finish(&self.dataset, &dataset, &self.options, self.dry_run)
    }
}

/// Rewrite the dataset in canonical form, in place or to `dst`.
pub struct Reformat {
    src: PathBuf,
    dst: Option<PathBuf>,
    options: WriteOptions,
}

impl Reformat {
    pub fn new(src: PathBuf, dst: Option<PathBuf>, options: WriteOptions) -> Self {
        Self { src, dst, options }
    }
}

impl Pipeline<usize> for Reformat {
    fn run(&self) -> Result<usize, Error> {
        let dataset = io::load(&self.src)?;
        let dst = self.dst.as_deref().unwrap_or(&self.src);
        io::save(dst, &dataset, &self.options)
    }
}

fn finish(
    path: &Path,
    dataset: &Dataset,
    options: &WriteOptions,
    dry_run: bool,
) -> Result<usize, Error> {
    if dry_run {
        info!("dry run: {:?} left untouched", path);
        return Ok(dataset.len());
    }
    io::save(path, dataset, options)
}
