// src/config/consts.rs

// Settings
pub const SETTINGS_FILE: &str = "config.json";
pub const SHEET_ID_KEY: &str = "GOOGLE_SPREADSHEET_ID";

// Net config
pub const URL_TEMPLATE: &str = "https://docs.google.com/spreadsheets/d/{id}/pubhtml";
pub const USER_AGENT: &str = concat!("sheet_scrape/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 30;

// Local copy of the published page
pub const RAW_FILE: &str = "pubhtml";

// Extract
pub const SENTINEL: &str = "magic";
pub const SKIP_BODY_ROWS: usize = 1; // sheet's own column titles

// Export
pub const OUT_FILE: &str = "responses.json";

// Debug log
pub const LOG_FILE: &str = ".store/debug.log";
