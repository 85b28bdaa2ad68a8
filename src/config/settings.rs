// src/config/settings.rs
//
// The settings file is a flat JSON object shared with other tooling; only
// the spreadsheet id is read here. Unknown keys are ignored.

use std::{fs, path::Path};

use serde_json::Value;

use super::consts::SHEET_ID_KEY;
use crate::error::{Error, Result};

/// Read the spreadsheet id from the JSON settings file at `path`.
pub fn load_sheet_id(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| Error::Settings {
        path: path.to_path_buf(),
        source,
    })?;
    parse_sheet_id(&text, path)
}

fn parse_sheet_id(text: &str, path: &Path) -> Result<String> {
    let value: Value = serde_json::from_str(text).map_err(|source| Error::SettingsParse {
        path: path.to_path_buf(),
        source,
    })?;

    match value.get(SHEET_ID_KEY) {
        Some(Value::String(id)) => Ok(id.clone()),
        _ => Err(Error::MissingKey {
            path: path.to_path_buf(),
            key: s!(SHEET_ID_KEY),
        }),
    }
}
