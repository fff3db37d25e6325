use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The record file does not exist. Only a pure read reports this; a
    /// write treats a missing file as having no prior records.
    #[error("record file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("employee {id} has {actual} hour entries but {expected} business days are configured")]
    DayCountMismatch {
        id: u32,
        expected: usize,
        actual: usize,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// A persisted line that does not decode into a record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("line does not start with 'week <n>': {0:?}")]
    MissingWeek(String),

    #[error("expected {expected} fields but found {actual}")]
    FieldCount { expected: usize, actual: usize },

    #[error("field '{field}' is not a valid number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("hour value {0} is outside 0-24")]
    HourOutOfRange(u32),
}

/// Failures while reading a value from the interactive prompt.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("'{0}' is not a whole number")]
    Parse(String),

    #[error("'{0}' is not valid UTF-8 text")]
    Encoding(String),

    #[error("{value} is out of range ({min}-{max})")]
    Range { value: i64, min: i64, max: i64 },

    #[error("input closed")]
    Eof,

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl InputError {
    /// Parse, encoding and range problems are answered with a re-prompt; the
    /// rest end the interactive session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            InputError::Parse(_) | InputError::Encoding(_) | InputError::Range { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}
