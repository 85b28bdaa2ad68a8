// src/runner.rs
use std::path::PathBuf;
use std::time::Instant;

use crate::{
    config::{options::AppOptions, settings},
    core::net,
    data::RawDocument,
    error::Result,
    file,
    progress::{NullProgress, Progress},
    specs::responses,
};

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub raw_path: PathBuf,
    pub out_path: PathBuf,
    pub records: usize,
}

/// Fetch → extract → write, in that order, once.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &AppOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    progress.begin(3);
    let result = run_stages(opts, progress);
    if let Err(e) = &result {
        loge!("Run failed: {e}");
    }
    progress.finish();
    result
}

fn run_stages(opts: &AppOptions, progress: &mut dyn Progress) -> Result<RunSummary> {
    let raw_path = opts.fetch.raw_path.clone();
    let out_path = opts.export.out_path.clone();

    // ---------- FETCH ----------
    let doc = fetch(opts, progress)?;
    progress.stage_done("fetch", &raw_path);

    // ---------- EXTRACT ----------
    progress.log("Extracting flagged rows…");
    let t = Instant::now();
    let records = responses::extract(doc, &opts.extract)?;
    logd!("Extract: {} records in {:?}", records.len(), t.elapsed());
    progress.stage_done("extract", &raw_path);

    // ---------- WRITE ----------
    file::write_records(&records, &out_path, opts.export.pretty)?;
    logf!("Wrote {} records to {}", records.len(), out_path.display());
    progress.stage_done("write", &out_path);

    Ok(RunSummary { raw_path, out_path, records: records.len() })
}

fn fetch(opts: &AppOptions, progress: &mut dyn Progress) -> Result<RawDocument> {
    let fetch = &opts.fetch;

    if fetch.skip_fetch {
        progress.log(&join!("Reusing ", &fetch.raw_path.display().to_string()));
        logf!("Skipping download; reading {}", fetch.raw_path.display());
        return net::read_local(&fetch.raw_path);
    }

    let id = match &fetch.sheet_id {
        Some(id) => id.clone(),
        None => settings::load_sheet_id(&fetch.settings_path)?,
    };
    let url = net::sheet_url(&fetch.url_template, &id)?;

    progress.log(&join!("Downloading ", &url));
    logf!("GET {url}");
    let t = Instant::now();
    let doc = net::download(&url, &fetch.raw_path, fetch.timeout())?;
    logd!("Fetch: {} bytes in {:?}", doc.len(), t.elapsed());
    Ok(doc)
}
