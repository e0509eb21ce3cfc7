/*! splitting

Splits a block stream into one file per language pair and category.

A block stream is a comma-separated sequence of records that is *not* wrapped into an array,
and that usually starts with a stray `,`:

```text
,{"source": "en", "target": "pt", ...},{"source": "en", "target": "pt", ...}
```

Each block lands in `<dst>/<source>/<source>_<target>_<category>.<ext>`, where `category`
is the category shared by all of the block's pairs, or [DEFAULT_CATEGORY] if they don't agree
or share an empty one.
Blocks without `source` or `target`, or whose category holds a path separator, are skipped and reported.
!*/
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::{debug, info, warn};
use rayon::prelude::*;
use serde_json::Value;

use crate::error::Error;
use crate::io::write_atomic;

/// Category used for blocks mixing several categories (or having none).
pub const DEFAULT_CATEGORY: &str = "common";
pub const DEFAULT_EXTENSION: &str = "json";

/// Outcome of a [split] run.
#[derive(Debug, Default)]
pub struct SplitReport {
    /// Number of blocks written.
    pub written: usize,
    /// Number of distinct files. Lower than `written` if some blocks overwrote others.
    pub files: usize,
    /// Why each skipped block was skipped.
    pub skipped: Vec<Error>,
}

impl SplitReport {
    pub fn nb_skipped(&self) -> usize {
        self.skipped.len()
    }
}

/// Parse a block stream into raw records.
///
/// Leading/trailing delimiters are stripped, and the rest is wrapped into an array.
/// Streams that are already an array are parsed as is.
pub fn parse_blocks(raw: &str) -> Result<Vec<Value>, Error> {
    let mut content = raw.trim();
    while let Some(rest) = content.strip_prefix(',') {
        content = rest.trim_start();
    }
    while let Some(rest) = content.strip_suffix(',') {
        content = rest.trim_end();
    }

    if content.is_empty() {
        return Ok(Vec::new());
    }

    let blocks: Vec<Value> = if content.starts_with('[') {
        serde_json::from_str(content)
    } else {
        serde_json::from_str(&format!("[{}]", content))
    }
    .map_err(|e| Error::malformed(0, format!("invalid block stream: {}", e)))?;

    Ok(blocks)
}

/// Non-empty category shared by every pair of the block, or [DEFAULT_CATEGORY].
pub fn block_category(block: &Value) -> &str {
    block
        .get("pairs")
        .and_then(Value::as_array)
        .and_then(|pairs| {
            pairs
                .iter()
                .filter_map(|p| p.get("category").and_then(Value::as_str))
                .unique()
                .exactly_one()
                .ok()
        })
        .filter(|category| !category.is_empty())
        .unwrap_or(DEFAULT_CATEGORY)
}

/// Lowercase, spaces replaced by underscores.
pub fn normalize_category(category: &str) -> String {
    category.to_lowercase().replace(' ', "_")
}

/// `<root>/<source>/<source>_<target>_<category>.<extension>`
pub fn block_path(
    root: &Path,
    source: &str,
    target: &str,
    category: &str,
    extension: &str,
) -> PathBuf {
    let filename = format!(
        "{}_{}_{}.{}",
        source,
        target,
        normalize_category(category),
        extension
    );
    [root, Path::new(source), Path::new(&filename)]
        .iter()
        .collect()
}

/// A code is used as a folder name, so it can't be a path on its own.
fn valid_code(code: &str) -> bool {
    code != "." && code != ".." && !code.contains(['/', '\\'])
}

/// The category ends up in a file name, so it can't hold a separator.
fn valid_category(category: &str) -> bool {
    !category.contains(['/', '\\'])
}

/// Get a non-empty string field of the block.
fn code<'a>(index: usize, block: &'a Value, field: &'static str) -> Result<&'a str, Error> {
    match block.get(field).and_then(Value::as_str) {
        Some(c) if !c.is_empty() => {
            if valid_code(c) {
                Ok(c)
            } else {
                Err(Error::malformed(
                    index,
                    format!("`{}` is not a language code: {:?}", field, c),
                ))
            }
        }
        _ => Err(Error::MissingField { index, field }),
    }
}

/// Split the block stream `raw` into `dst`. See module documentation.
///
/// Existing files are overwritten. If several blocks map to the same file, the last one wins.
/// Files are written in parallel, and the first IO error aborts the run.
pub fn split(raw: &str, dst: &Path, extension: &str) -> Result<SplitReport, Error> {
    let blocks = parse_blocks(raw)?;
    info!("{} blocks to split into {:?}", blocks.len(), dst);

    let mut report = SplitReport::default();

    // resolve paths first, keeping the last block for each path
    let mut files: Vec<(PathBuf, String)> = Vec::with_capacity(blocks.len());
    let mut positions: HashMap<PathBuf, usize> = HashMap::new();

    for (index, block) in blocks.iter().enumerate() {
        let codes = code(index, block, "source")
            .and_then(|source| code(index, block, "target").map(|target| (source, target)));
        let (source, target) = match codes {
            Ok(codes) => codes,
            Err(e) => {
                warn!("skipping block #{}: {}", index, e);
                report.skipped.push(e);
                continue;
            }
        };

        let category = block_category(block);
        if !valid_category(category) {
            let e = Error::malformed(
                index,
                format!("category {:?} is not a file name", category),
            );
            warn!("skipping block #{}: {}", index, e);
            report.skipped.push(e);
            continue;
        }
        let path = block_path(dst, source, target, category, extension);
        debug!("block #{} ({}-{}, {}) → {:?}", index, source, target, category, path);

        let mut content = serde_json::to_string_pretty(block)?;
        content.push('\n');

        match positions.get(&path) {
            Some(&pos) => {
                warn!("block #{} overwrites {:?}", index, path);
                files[pos].1 = content;
            }
            None => {
                positions.insert(path.clone(), files.len());
                files.push((path, content));
            }
        }
        report.written += 1;
    }

    files.par_iter().try_for_each(|(path, content)| {
        if let Some(folder) = path.parent() {
            std::fs::create_dir_all(folder).map_err(|e| Error::fs(folder, e))?;
        }
        write_atomic(path, content.as_bytes())?;
        info!("created {:?}", path);
        Ok::<(), Error>(())
    })?;

    report.files = files.len();
    info!(
        "split done: {} blocks written into {} files, {} skipped",
        report.written,
        report.files,
        report.nb_skipped()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STREAM: &str = r#",{
  "source": "en",
  "target": "ht",
  "name": {"source": "English", "target": "Haitian Creole"},
  "pairs": [
    {"sourceWord": "Hello", "targetWord": "Bonjou", "category": "phrases"},
    {"sourceWord": "Thank you", "targetWord": "Mèsi", "category": "phrases"}
  ]
},{
  "source": "en",
  "target": "pt",
  "name": {"source": "English", "target": "Portuguese"},
  "pairs": [
    {"sourceWord": "bread", "targetWord": "pão", "category": "food"},
    {"sourceWord": "mother", "targetWord": "mãe", "category": "family"}
  ]
}"#;

    #[test]
    fn parse_stray_delimiter() {
        let blocks = parse_blocks(STREAM).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1]["target"], "pt");
    }

    #[test]
    fn parse_without_stray_delimiter() {
        let blocks = parse_blocks(STREAM.trim_start_matches(',')).unwrap();
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn parse_well_formed_array() {
        let blocks = parse_blocks(&format!("[{}]", STREAM.trim_start_matches(','))).unwrap();
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn parse_empty() {
        assert!(parse_blocks("").unwrap().is_empty());
        assert!(parse_blocks(" ,\n").unwrap().is_empty());
    }

    #[test]
    fn parse_garbage() {
        assert!(matches!(
            parse_blocks(",{\"source\": "),
            Err(Error::MalformedDataset { .. })
        ));
    }

    #[test]
    fn category() {
        let blocks = parse_blocks(STREAM).unwrap();
        assert_eq!(block_category(&blocks[0]), "phrases");
        assert_eq!(block_category(&blocks[1]), DEFAULT_CATEGORY);

        let no_pairs: Value = serde_json::from_str(r#"{"source": "en", "pairs": []}"#).unwrap();
        assert_eq!(block_category(&no_pairs), DEFAULT_CATEGORY);
    }

    #[test]
    fn path() {
        let p = block_path(Path::new("out"), "en", "ht", "Body Parts", "json");
        assert_eq!(p, PathBuf::from("out/en/en_ht_body_parts.json"));
    }

    #[test]
    fn codes() {
        let block: Value = serde_json::from_str(r#"{"source": "en", "target": ""}"#).unwrap();
        assert_eq!(code(3, &block, "source").unwrap(), "en");
        assert!(matches!(
            code(3, &block, "target"),
            Err(Error::MissingField {
                index: 3,
                field: "target"
            })
        ));

        let block: Value = serde_json::from_str(r#"{"source": "../en"}"#).unwrap();
        assert!(matches!(
            code(0, &block, "source"),
            Err(Error::MalformedDataset { .. })
        ));
    }

    #[test]
    fn empty_category() {
        let block: Value = serde_json::from_str(
            r#"{"source": "en", "target": "ht", "pairs": [{"sourceWord": "one", "targetWord": "en", "category": ""}]}"#,
        )
        .unwrap();
        assert_eq!(block_category(&block), DEFAULT_CATEGORY);
    }

    #[test]
    fn category_with_separator_is_skipped() {
        let stream = r#",{"source": "en", "target": "ht", "name": {"source": "English", "target": "Haitian Creole"},
            "pairs": [{"sourceWord": "one", "targetWord": "en", "category": "x/../../../escaped"}]}"#;
        let base = tempfile::tempdir().unwrap();
        let dst = base.path().join("out");

        let report = split(stream, &dst, DEFAULT_EXTENSION).unwrap();

        assert_eq!(report.written, 0);
        assert_eq!(report.files, 0);
        assert!(matches!(
            report.skipped[..],
            [Error::MalformedDataset { index: 0, .. }]
        ));
        // nothing written anywhere under the temporary folder
        assert_eq!(std::fs::read_dir(base.path()).unwrap().count(), 0);
        assert!(valid_category("body parts"));
        assert!(!valid_category("a\\b"));
    }

    #[test]
    fn split_writes_files() {
        let dst = tempfile::tempdir().unwrap();
        let report = split(STREAM, dst.path(), DEFAULT_EXTENSION).unwrap();

        assert_eq!(report.written, 2);
        assert_eq!(report.files, 2);
        assert_eq!(report.nb_skipped(), 0);

        let ht = dst.path().join("en").join("en_ht_phrases.json");
        let pt = dst.path().join("en").join("en_pt_common.json");
        assert!(ht.is_file());
        assert!(pt.is_file());

        let content = std::fs::read_to_string(pt).unwrap();
        assert!(content.contains("pão"));
        let value: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["name"]["target"], "Portuguese");
    }

    #[test]
    fn keeps_block_key_order() {
        let dst = tempfile::tempdir().unwrap();
        split(STREAM, dst.path(), DEFAULT_EXTENSION).unwrap();

        let content =
            std::fs::read_to_string(dst.path().join("en").join("en_ht_phrases.json")).unwrap();
        let source = content.find("\"source\"").unwrap();
        let target = content.find("\"target\"").unwrap();
        let pairs = content.find("\"pairs\"").unwrap();
        assert!(source < target && target < pairs);
    }
}
