// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every way a run can fail. Nothing here is retried; callers propagate.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read settings file {}: {source}", .path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("settings file {} is not valid JSON: {source}", .path.display())]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("settings file {} has no string value for {key}", .path.display())]
    MissingKey { path: PathBuf, key: String },

    #[error("malformed spreadsheet id: {0:?}")]
    InvalidSheetId(String),

    #[error("request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("document has no <table> element")]
    NoTable,

    #[error("table has no row groups")]
    MissingRowGroup,

    #[error("row {row}: {reason}")]
    RowShape { row: usize, reason: String },

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }

    pub(crate) fn row(row: usize, reason: impl Into<String>) -> Self {
        Error::RowShape { row, reason: reason.into() }
    }
}
