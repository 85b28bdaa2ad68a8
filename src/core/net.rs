// src/core/net.rs
// One blocking HTTPS GET per run, and the local raw copy it lands in.

use std::{fs, io, path::Path, time::Duration};

use crate::config::consts::USER_AGENT;
use crate::data::RawDocument;
use crate::error::{Error, Result};
use crate::file::ensure_parent;

/// Published-sheet ids are URL path segments: letters, digits, '-' and '_'.
pub fn validate_sheet_id(id: &str) -> Result<&str> {
    let ok = !id.is_empty()
        && id.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if ok { Ok(id) } else { Err(Error::InvalidSheetId(s!(id))) }
}

/// Substitute a validated id into a `{id}` URL template.
pub fn sheet_url(template: &str, id: &str) -> Result<String> {
    let id = validate_sheet_id(id)?;
    Ok(template.replace("{id}", id))
}

/// GET `url` and return the body. Any non-2xx status is an error.
pub fn http_get(url: &str, timeout: Duration) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;

    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(Error::HttpStatus { status: status.as_u16(), url: s!(url) });
    }
    Ok(resp.text()?)
}

/// Download `url` into `dest`, replacing whatever was there.
pub fn download(url: &str, dest: &Path, timeout: Duration) -> Result<RawDocument> {
    let body = http_get(url, timeout)?;

    match fs::remove_file(dest) {
        Ok(()) => logd!("Removed previous copy at {}", dest.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(Error::io(dest, e)),
    }
    ensure_parent(dest)?;
    fs::write(dest, &body).map_err(|e| Error::io(dest, e))?;

    Ok(RawDocument::new(body))
}

/// Load a copy left behind by an earlier `download`.
pub fn read_local(path: &Path) -> Result<RawDocument> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(RawDocument::new(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::URL_TEMPLATE;

    #[test]
    fn builds_published_sheet_url() {
        let url = sheet_url(URL_TEMPLATE, "1aB_c-9").unwrap();
        assert_eq!(url, "https://docs.google.com/spreadsheets/d/1aB_c-9/pubhtml");
    }

    #[test]
    fn rejects_malformed_ids() {
        for bad in ["", "a/b", "id with space", "x?y=1", "../etc"] {
            assert!(
                matches!(sheet_url(URL_TEMPLATE, bad), Err(Error::InvalidSheetId(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn read_local_missing_file_is_io_error() {
        let err = read_local(Path::new("no/such/pubhtml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
