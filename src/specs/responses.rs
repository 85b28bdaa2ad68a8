// src/specs/responses.rs
//! Scraping *spec* for the published responses sheet.
//!
//! Purpose:
//! - Parse the **published HTML** of a sheet (`/pubhtml`) and pull out one
//!   `Record { date, payload }` per flagged row.
//! - The page is one `<table class="waffle">`: a `thead` with column letters,
//!   then a `tbody` whose first row repeats the sheet's column titles.
//! - Each body row starts with a `<th>` row-number cell, then the sheet cells.
//!
//! Row rules:
//! - A row is kept iff the first child of its **last** cell is text equal to
//!   the sentinel. Exact match, no trimming, no case folding.
//! - `date` is the text in cell 2 (first sheet column, the form timestamp).
//! - `payload` comes from cell 3. Its first child is either text or an element
//!   (links, styled spans); elements are followed down to the first text.
//!
//! Anything that doesn't fit this shape is an error, never a skipped row.

use scraper::{ElementRef, Html, Node};

use crate::config::options::ExtractOptions;
use crate::data::{RawDocument, Record};
use crate::error::{Error, Result};

/// First child of a cell, typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellContent {
    PlainText(String),
    /// An element; holds whatever its own first child resolves to.
    Wrapped(Box<CellContent>),
}

/// Text at the bottom of a (possibly wrapped) cell content.
pub fn resolve(content: &CellContent) -> &str {
    match content {
        CellContent::PlainText(text) => text,
        CellContent::Wrapped(inner) => resolve(inner),
    }
}

/// `None` when the node is empty or bottoms out in something that isn't text
/// (an empty element, a comment).
pub fn first_content(el: ElementRef<'_>) -> Option<CellContent> {
    let first = el.first_child()?;
    match first.value() {
        Node::Text(text) => Some(CellContent::PlainText(s!(&**text))),
        Node::Element(_) => {
            let inner = first_content(ElementRef::wrap(first)?)?;
            Some(CellContent::Wrapped(Box::new(inner)))
        }
        _ => None,
    }
}

/// Consume the downloaded page and extract every flagged row.
pub fn extract(doc: RawDocument, opts: &ExtractOptions) -> Result<Vec<Record>> {
    let text = doc.into_text();
    parse_doc(&text, opts)
}

/// Split out for unit tests and benches.
pub fn parse_doc(html_doc: &str, opts: &ExtractOptions) -> Result<Vec<Record>> {
    let document = Html::parse_document(html_doc);
    let table = first_table(&document).ok_or(Error::NoTable)?;

    let mut groups = element_children(table);
    if groups.next().is_none() {
        return Err(Error::MissingRowGroup);
    }
    // Header only: nothing to extract.
    let Some(body) = groups.next() else {
        return Ok(Vec::new());
    };

    let mut out = Vec::new();
    for (i, row) in element_children(body).enumerate().skip(opts.skip_body_rows) {
        if let Some(record) = extract_row(row, i + 1, &opts.sentinel)? {
            out.push(record);
        }
    }
    Ok(out)
}

fn first_table(document: &Html) -> Option<ElementRef<'_>> {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "table")
}

fn element_children(el: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    el.children().filter_map(ElementRef::wrap)
}

fn extract_row(row: ElementRef<'_>, row_no: usize, sentinel: &str) -> Result<Option<Record>> {
    let cells: Vec<ElementRef<'_>> = element_children(row).collect();
    let last = cells.last().ok_or_else(|| Error::row(row_no, "row has no cells"))?;

    match first_content(*last) {
        Some(CellContent::PlainText(marker)) if marker == sentinel => {}
        _ => return Ok(None),
    }

    if cells.len() < 3 {
        return Err(Error::row(row_no, format!("expected at least 3 cells, found {}", cells.len())));
    }

    let date = match first_content(cells[1]) {
        Some(CellContent::PlainText(text)) => text,
        Some(CellContent::Wrapped(_)) => return Err(Error::row(row_no, "date cell is not plain text")),
        None => return Err(Error::row(row_no, "date cell is empty")),
    };

    let payload = first_content(cells[2])
        .ok_or_else(|| Error::row(row_no, "payload cell has no text"))?;

    Ok(Some(Record { date, payload: s!(resolve(&payload)) }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEAD: &str = r#"<thead><tr><th class="row-header freezebar-origin-ltr"></th><th>A</th><th>B</th><th>C</th></tr></thead>"#;
    const TITLES: &str = r#"<tr><th>1</th><td>Timestamp</td><td>Payload</td><td>Flag</td></tr>"#;

    fn page(body_rows: &str) -> String {
        format!(
            r#"<html><head><title>Responses</title></head><body>
            <div id="sheets-viewport"><table class="waffle">{HEAD}<tbody>{TITLES}{body_rows}</tbody></table></div>
            </body></html>"#
        )
    }

    fn opts() -> ExtractOptions {
        ExtractOptions::default()
    }

    #[test]
    fn keeps_only_flagged_rows_in_order() {
        let doc = page(concat!(
            r#"<tr><th>2</th><td>1/1/2024 9:00:00</td><td>first</td><td>magic</td></tr>"#,
            r#"<tr><th>3</th><td>1/1/2024 9:05:00</td><td>skipped</td><td>nope</td></tr>"#,
            r#"<tr><th>4</th><td>1/2/2024 8:00:00</td><td>second</td><td>magic</td></tr>"#,
            r#"<tr><th>5</th><td>1/2/2024 8:30:00</td><td>blank flag</td><td></td></tr>"#,
        ));

        let out = parse_doc(&doc, &opts()).unwrap();
        assert_eq!(
            out,
            vec![
                Record::new("1/1/2024 9:00:00", "first"),
                Record::new("1/2/2024 8:00:00", "second"),
            ]
        );
    }

    #[test]
    fn sentinel_match_is_exact() {
        let doc = page(concat!(
            r#"<tr><th>2</th><td>d1</td><td>p1</td><td>Magic</td></tr>"#,
            r#"<tr><th>3</th><td>d2</td><td>p2</td><td> magic</td></tr>"#,
            r#"<tr><th>4</th><td>d3</td><td>p3</td><td><b>magic</b></td></tr>"#,
        ));
        assert!(parse_doc(&doc, &opts()).unwrap().is_empty());
    }

    #[test]
    fn custom_sentinel() {
        let doc = page(r#"<tr><th>2</th><td>d</td><td>p</td><td>ok</td></tr>"#);
        let opts = ExtractOptions { sentinel: s!("ok"), ..ExtractOptions::default() };
        assert_eq!(parse_doc(&doc, &opts).unwrap(), vec![Record::new("d", "p")]);
    }

    #[test]
    fn first_body_row_is_skipped_by_default() {
        let doc = format!(
            r#"<table>{HEAD}<tbody><tr><th>1</th><td>Timestamp</td><td>Payload</td><td>magic</td></tr></tbody></table>"#
        );
        assert!(parse_doc(&doc, &opts()).unwrap().is_empty());

        let keep_all = ExtractOptions { skip_body_rows: 0, ..ExtractOptions::default() };
        assert_eq!(
            parse_doc(&doc, &keep_all).unwrap(),
            vec![Record::new("Timestamp", "Payload")]
        );
    }

    #[test]
    fn header_only_table_is_empty() {
        let doc = format!(r#"<html><body><table>{HEAD}</table></body></html>"#);
        assert!(parse_doc(&doc, &opts()).unwrap().is_empty());

        let empty_body = format!(r#"<table>{HEAD}<tbody></tbody></table>"#);
        assert!(parse_doc(&empty_body, &opts()).unwrap().is_empty());
    }

    #[test]
    fn plain_text_payload_is_literal() {
        let doc = page(r#"<tr><th>2</th><td>d</td><td>2024-01-01 note</td><td>magic</td></tr>"#);
        let out = parse_doc(&doc, &opts()).unwrap();
        assert_eq!(out[0].payload, "2024-01-01 note");
    }

    #[test]
    fn wrapped_payload_is_unwrapped() {
        let doc = page(concat!(
            r#"<tr><th>2</th><td>d1</td><td><span>X</span></td><td>magic</td></tr>"#,
            r#"<tr><th>3</th><td>d2</td><td><div><a href="https://example.com">Y</a> tail</div></td><td>magic</td></tr>"#,
        ));
        let out = parse_doc(&doc, &opts()).unwrap();
        assert_eq!(out[0].payload, "X");
        assert_eq!(out[1].payload, "Y");
    }

    #[test]
    fn entities_are_decoded() {
        let doc = page(r#"<tr><th>2</th><td>d</td><td>a &amp; b &lt;c&gt;</td><td>magic</td></tr>"#);
        assert_eq!(parse_doc(&doc, &opts()).unwrap()[0].payload, "a & b <c>");
    }

    #[test]
    fn only_the_first_table_is_read() {
        let doc = format!(
            r#"<html><body>
            <table>{HEAD}<tbody>{TITLES}<tr><th>2</th><td>d1</td><td>one</td><td>magic</td></tr></tbody></table>
            <table>{HEAD}<tbody>{TITLES}<tr><th>2</th><td>d2</td><td>two</td><td>magic</td></tr></tbody></table>
            </body></html>"#
        );
        assert_eq!(parse_doc(&doc, &opts()).unwrap(), vec![Record::new("d1", "one")]);
    }

    #[test]
    fn missing_table_fails() {
        let err = parse_doc("<html><body><p>Sheet not published</p></body></html>", &opts()).unwrap_err();
        assert!(matches!(err, Error::NoTable));
    }

    #[test]
    fn empty_table_fails() {
        let err = parse_doc("<table></table>", &opts()).unwrap_err();
        assert!(matches!(err, Error::MissingRowGroup));
    }

    #[test]
    fn flagged_row_with_too_few_cells_fails() {
        let doc = page(r#"<tr><th>2</th><td>magic</td></tr>"#);
        let err = parse_doc(&doc, &opts()).unwrap_err();
        assert!(matches!(err, Error::RowShape { row: 2, .. }));
    }

    #[test]
    fn flagged_row_with_empty_payload_fails() {
        let doc = page(r#"<tr><th>2</th><td>d</td><td></td><td>magic</td></tr>"#);
        assert!(matches!(parse_doc(&doc, &opts()), Err(Error::RowShape { .. })));

        let doc = page(r#"<tr><th>2</th><td>d</td><td><span></span></td><td>magic</td></tr>"#);
        assert!(matches!(parse_doc(&doc, &opts()), Err(Error::RowShape { .. })));
    }

    #[test]
    fn wrapped_date_fails() {
        let doc = page(r#"<tr><th>2</th><td><b>d</b></td><td>p</td><td>magic</td></tr>"#);
        assert!(matches!(parse_doc(&doc, &opts()), Err(Error::RowShape { .. })));
    }

    #[test]
    fn row_without_cells_fails() {
        let doc = page("<tr></tr>");
        assert!(matches!(parse_doc(&doc, &opts()), Err(Error::RowShape { .. })));
    }

    #[test]
    fn resolve_descends_to_text() {
        let nested = CellContent::Wrapped(Box::new(CellContent::Wrapped(Box::new(
            CellContent::PlainText(s!("deep")),
        ))));
        assert_eq!(resolve(&nested), "deep");
        assert_eq!(resolve(&CellContent::PlainText(s!("flat"))), "flat");
    }

    #[test]
    fn extract_consumes_raw_document() {
        let doc = RawDocument::new(page(r#"<tr><th>2</th><td>d</td><td>p</td><td>magic</td></tr>"#));
        assert_eq!(extract(doc, &opts()).unwrap(), vec![Record::new("d", "p")]);
    }
}
