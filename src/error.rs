//! Error enum
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Custom(String),

    /// A record with the same `(source, target)` is already in the dataset.
    DuplicateRecord { source: String, target: String },
    /// No record matches `(source, target)`.
    RecordNotFound { source: String, target: String },
    /// Dataset or block stream could not be parsed into valid records.
    MalformedDataset { index: usize, reason: String },
    /// A block lacks `source` or `target`. Recovered by the splitter.
    MissingField { index: usize, field: &'static str },
    /// Strict derivation hit a `targetWord` with no mapping.
    UnmappedWord { index: usize, word: String },
    FileSystem { path: PathBuf, source: std::io::Error },
}

impl Error {
    /// Wrap an io error with the path it happened on.
    pub fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::FileSystem {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(index: usize, reason: impl ToString) -> Self {
        Error::MalformedDataset {
            index,
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Serde(e) => write!(f, "serialization error: {}", e),
            Error::Custom(s) => write!(f, "{}", s),
            Error::DuplicateRecord { source, target } => {
                write!(f, "record {}-{} already exists in dataset", source, target)
            }
            Error::RecordNotFound { source, target } => {
                write!(f, "no record {}-{} in dataset", source, target)
            }
            Error::MalformedDataset { index, reason } => {
                write!(f, "malformed record #{}: {}", index, reason)
            }
            Error::MissingField { index, field } => {
                write!(f, "record #{} is missing field `{}`", index, field)
            }
            Error::UnmappedWord { index, word } => {
                write!(f, "pair #{}: no translation for {:?}", index, word)
            }
            Error::FileSystem { path, source } => write!(f, "{:?}: {}", path, source),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Serde(e) => Some(e),
            Error::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}
