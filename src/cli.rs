// src/cli.rs
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::consts::{LOG_FILE, OUT_FILE, RAW_FILE, SENTINEL, SETTINGS_FILE, SKIP_BODY_ROWS, TIMEOUT_SECS, URL_TEMPLATE};
use crate::config::options::{AppOptions, ExportOptions, ExtractOptions, FetchOptions};
use crate::error::Result;
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

/// Download a published spreadsheet and extract its flagged responses to JSON.
#[derive(Debug, Parser)]
#[command(name = "sheet_scrape", version, about)]
pub struct Args {
    /// JSON settings file holding GOOGLE_SPREADSHEET_ID
    #[arg(long, value_name = "PATH", default_value = SETTINGS_FILE)]
    pub config: PathBuf,

    /// Spreadsheet id (overrides the settings file)
    #[arg(long, value_name = "SHEET_ID")]
    pub id: Option<String>,

    /// URL template; `{id}` is replaced with the spreadsheet id
    #[arg(long, value_name = "TEMPLATE", default_value = URL_TEMPLATE)]
    pub url_template: String,

    /// Where the downloaded page is stored
    #[arg(long, value_name = "PATH", default_value = RAW_FILE)]
    pub raw: PathBuf,

    /// Output JSON file
    #[arg(short, long, value_name = "PATH", default_value = OUT_FILE)]
    pub out: PathBuf,

    /// Rows are kept when their last cell holds exactly this text
    #[arg(long, default_value = SENTINEL)]
    pub sentinel: String,

    /// Leading table-body rows to ignore
    #[arg(long, value_name = "N", default_value_t = SKIP_BODY_ROWS)]
    pub skip_rows: usize,

    /// Extract from the existing raw copy instead of downloading
    #[arg(long)]
    pub skip_fetch: bool,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// HTTP timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = TIMEOUT_SECS)]
    pub timeout: u64,

    /// Debug log file
    #[arg(long, value_name = "PATH", default_value = LOG_FILE)]
    pub log_file: PathBuf,

    /// No progress lines on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        AppOptions {
            fetch: FetchOptions {
                settings_path: self.config.clone(),
                sheet_id: self.id.clone(),
                url_template: self.url_template.clone(),
                raw_path: self.raw.clone(),
                skip_fetch: self.skip_fetch,
                timeout_secs: self.timeout,
            },
            extract: ExtractOptions {
                sentinel: self.sentinel.clone(),
                skip_body_rows: self.skip_rows,
            },
            export: ExportOptions {
                out_path: self.out.clone(),
                pretty: self.pretty,
            },
        }
    }
}

/// Prints stage progress to stderr.
pub struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl ConsoleProgress {
    pub fn new() -> Self { Self { total: 0, done: 0 } }
}

impl Default for ConsoleProgress {
    fn default() -> Self { Self::new() }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn stage_done(&mut self, stage: &str, path: &Path) {
        self.done += 1;
        eprintln!("[{}/{}] {stage}: {}", self.done, self.total, path.display());
    }
}

pub fn run() -> Result<RunSummary> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> Result<RunSummary> {
    crate::log::init(&args.log_file);
    logf!("Start: {:?}", args);

    let opts = args.to_options();
    if args.quiet {
        runner::run(&opts, None)
    } else {
        let mut progress = ConsoleProgress::new();
        runner::run(&opts, Some(&mut progress))
    }
}
