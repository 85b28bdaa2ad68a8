// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod file;
pub mod progress;
pub mod runner;
pub mod specs;

pub use data::{RawDocument, Record};
pub use error::{Error, Result};
