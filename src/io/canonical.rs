/*! Canonical (de)serialization of the dataset.

The canonical form is pretty-printed JSON (2 spaces), non-ASCII characters kept literally,
record fields in `source, target, name, pairs` order, and pairs grouped by category
(see [crate::dataset::group_by_category]).

Optionally, a marker string (`"// Food"`) precedes each category run.
Markers are dropped on read, so files with and without them load to the same [Dataset].

Two shapes are read:
- the wrapped one, `{"languages": [...]}`, which is the default when writing,
- the legacy bare array `[...]`.
!*/
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dataset::{group_by_category, Dataset, LanguageNames, LanguagePairRecord, WordPair};
use crate::error::Error;

/// Any string element of `pairs` starting with this is a category marker.
pub const MARKER_PREFIX: &str = "//";

/// Top-level layout of the dataset file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Shape {
    /// `{"languages": [...]}`
    #[default]
    Wrapped,
    /// `[...]`
    Legacy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Emit a category marker before each category run.
    pub markers: bool,
    pub shape: Shape,
}

#[derive(Serialize)]
#[serde(untagged)]
enum PairSlot<'a> {
    Marker(String),
    Pair(&'a WordPair),
}

#[derive(Serialize)]
struct CanonicalRecord<'a> {
    source: &'a str,
    target: &'a str,
    name: &'a LanguageNames,
    pairs: Vec<PairSlot<'a>>,
}

#[derive(Serialize)]
struct Wrapped<T> {
    languages: T,
}

/// Record as found on disk, before marker removal and validation.
#[derive(Deserialize)]
struct RawRecord {
    source: String,
    target: String,
    name: LanguageNames,
    pairs: Vec<Value>,
}

/// Marker text for a category: `food` → `// Food`.
pub fn marker(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => format!(
            "{} {}{}",
            MARKER_PREFIX,
            first.to_uppercase(),
            chars.as_str().to_lowercase()
        ),
        None => format!("{} ", MARKER_PREFIX),
    }
}

fn canonical_record(record: &LanguagePairRecord, markers: bool) -> CanonicalRecord<'_> {
    let groups = group_by_category(&record.pairs);
    let mut pairs = Vec::with_capacity(record.pairs.len() + groups.len());

    for group in groups {
        if markers {
            pairs.push(PairSlot::Marker(marker(group.category)));
        }
        pairs.extend(group.pairs.into_iter().map(PairSlot::Pair));
    }

    CanonicalRecord {
        source: &record.source,
        target: &record.target,
        name: &record.name,
        pairs,
    }
}

/// Serialize `dataset` in canonical form. The whole text is returned, ending with a newline.
pub fn serialize(dataset: &Dataset, options: &WriteOptions) -> Result<String, Error> {
    let records: Vec<CanonicalRecord> = dataset
        .iter()
        .map(|r| canonical_record(r, options.markers))
        .collect();

    let mut text = match options.shape {
        Shape::Wrapped => serde_json::to_string_pretty(&Wrapped { languages: &records })?,
        Shape::Legacy => serde_json::to_string_pretty(&records)?,
    };
    text.push('\n');

    Ok(text)
}

/// Parse a dataset in either shape, with or without markers.
///
/// Nothing is returned unless every record is valid.
pub fn deserialize(text: &str) -> Result<Dataset, Error> {
    let value: Value = serde_json::from_str(text).map_err(|e| Error::malformed(0, e))?;

    let records = match value {
        Value::Array(records) => {
            debug!("legacy dataset shape");
            records
        }
        Value::Object(mut top) => match top.remove("languages") {
            Some(Value::Array(records)) => records,
            _ => {
                return Err(Error::malformed(
                    0,
                    "expected a `languages` array at top level",
                ))
            }
        },
        _ => {
            return Err(Error::malformed(
                0,
                "expected an array or an object at top level",
            ))
        }
    };

    let records = records
        .into_iter()
        .enumerate()
        .map(|(index, value)| parse_record(index, value))
        .collect::<Result<Vec<_>, Error>>()?;

    Dataset::from_records(records)
}

/// Parse a single record (markers allowed), as found in authored record files.
pub fn deserialize_record(text: &str) -> Result<LanguagePairRecord, Error> {
    let value: Value = serde_json::from_str(text).map_err(|e| Error::malformed(0, e))?;
    parse_record(0, value)
}

fn parse_record(index: usize, value: Value) -> Result<LanguagePairRecord, Error> {
    let raw: RawRecord = serde_json::from_value(value).map_err(|e| Error::malformed(index, e))?;

    if raw.source.is_empty() {
        return Err(Error::malformed(index, "empty `source`"));
    }
    if raw.target.is_empty() {
        return Err(Error::malformed(index, "empty `target`"));
    }

    let mut pairs = Vec::with_capacity(raw.pairs.len());
    for (pos, slot) in raw.pairs.into_iter().enumerate() {
        match slot {
            Value::String(s) if s.starts_with(MARKER_PREFIX) => continue,
            Value::String(s) => {
                return Err(Error::malformed(
                    index,
                    format!("pair #{}: unexpected string {:?}", pos, s),
                ))
            }
            v => {
                let pair: WordPair = serde_json::from_value(v)
                    .map_err(|e| Error::malformed(index, format!("pair #{}: {}", pos, e)))?;
                if pair.source_word.is_empty() {
                    return Err(Error::malformed(
                        index,
                        format!("pair #{}: empty `sourceWord`", pos),
                    ));
                }
                if pair.category.is_empty() {
                    return Err(Error::malformed(
                        index,
                        format!("pair #{}: empty `category`", pos),
                    ));
                }
                pairs.push(pair);
            }
        }
    }

    Ok(LanguagePairRecord {
        source: raw.source,
        target: raw.target,
        name: raw.name,
        pairs,
    })
}
