// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications. Each spec encodes *where the ground
//! truth lives in the HTML* of one page and *how to extract it*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of an already-downloaded page.
//! - **Row/cell selection rules** for that page's fixed layout.
//! - **Light shaping** into `data::Record`s.
//!
//! ## What does **not** live here
//! - **Networking** (`core::net`) and **writing output** (`file`).
//! - **Deciding when to run**: that's `runner`.
//!
//! ## Typical call chain
//! ```text
//! cli → runner::run → core::net::download → specs::responses::extract
//!                                         ↘ file::write_records
//! ```
//!
//! ## Testing notes
//! Specs are tested **offline** against small synthetic pages shaped like the
//! real published output.
pub mod responses;
