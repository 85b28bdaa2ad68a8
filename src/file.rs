// src/file.rs

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use crate::data::Record;
use crate::error::{Error, Result};

/// Serialize `records` as a JSON array to `path` (create/truncate).
/// Not atomic: a failed write can leave a partial file behind.
pub fn write_records(records: &[Record], path: &Path, pretty: bool) -> Result<()> {
    ensure_parent(path)?;

    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut out = BufWriter::new(file);
    if pretty {
        serde_json::to_writer_pretty(&mut out, records)?;
    } else {
        serde_json::to_writer(&mut out, records)?;
    }
    out.flush().map_err(|e| Error::io(path, e))?;
    Ok(())
}

/// Parse a file produced by `write_records`.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::io(
            dir,
            std::io::Error::other("path exists but is not a directory"),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}
