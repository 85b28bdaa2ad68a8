// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub extract: ExtractOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    /// JSON settings file holding the spreadsheet id.
    pub settings_path: PathBuf,
    /// Takes precedence over the settings file when set.
    pub sheet_id: Option<String>,
    /// Must contain `{id}`.
    pub url_template: String,
    /// Where the downloaded page is kept (overwritten every run).
    pub raw_path: PathBuf,
    /// Re-extract from the existing raw copy instead of downloading.
    pub skip_fetch: bool,
    pub timeout_secs: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            settings_path: PathBuf::from(SETTINGS_FILE),
            sheet_id: None,
            url_template: s!(URL_TEMPLATE),
            raw_path: PathBuf::from(RAW_FILE),
            skip_fetch: false,
            timeout_secs: TIMEOUT_SECS,
        }
    }
}

impl FetchOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Exact text the last cell must hold for a row to be kept.
    pub sentinel: String,
    /// Leading body rows to ignore before matching.
    pub skip_body_rows: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            sentinel: s!(SENTINEL),
            skip_body_rows: SKIP_BODY_ROWS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_path: PathBuf,
    pub pretty: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from(OUT_FILE),
            pretty: false,
        }
    }
}
