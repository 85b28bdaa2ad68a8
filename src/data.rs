// src/data.rs
//
// - RawDocument: the downloaded page text. Moved into the extractor, which
//                consumes it; there is no way to read it twice.
// - Record:      one extracted {date, payload} pair, in source row order.

use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub struct RawDocument {
    text: String,
}

impl RawDocument {
    pub fn new(text: String) -> Self { Self { text } }
    pub fn len(&self) -> usize { self.text.len() }
    pub fn is_empty(&self) -> bool { self.text.is_empty() }
    pub fn into_text(self) -> String { self.text }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub date: String,
    pub payload: String,
}

impl Record {
    pub fn new(date: impl Into<String>, payload: impl Into<String>) -> Self {
        Self { date: date.into(), payload: payload.into() }
    }
}
