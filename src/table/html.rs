use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::{PipelineError, Result};

static TABLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table").expect("static selector"));
static ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("static selector"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static regex"));

/// Header row plus body rows of an HTML table, spans expanded
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HtmlTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl HtmlTable {
    /// Index of the header equal to `name`, ignoring case
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.eq_ignore_ascii_case(name))
    }

    /// Index of the first header starting with `prefix`, ignoring case
    pub fn column_with_prefix(&self, prefix: &str) -> Option<usize> {
        let prefix = prefix.to_lowercase();
        self.headers
            .iter()
            .position(|h| h.to_lowercase().starts_with(&prefix))
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }
}

struct PendingSpan {
    remaining: usize,
    text: String,
}

struct ParsedRow {
    cells: Vec<String>,
    all_header_cells: bool,
}

/// Parse the first `<table>` in the document.
///
/// Leading rows made only of `<th>` cells form the header (the first one is
/// used); if the table has none, its first row is the header. Rows of nested
/// tables are ignored.
pub fn parse_first_table(html: &str) -> Result<HtmlTable> {
    let document = Html::parse_document(html);
    let table = document
        .select(&TABLE_SELECTOR)
        .next()
        .ok_or(PipelineError::NoTable)?;

    let mut spans: Vec<Option<PendingSpan>> = Vec::new();
    let mut parsed = Vec::new();

    for tr in table.select(&ROW_SELECTOR) {
        if !belongs_to(&tr, &table) {
            continue;
        }
        let cells: Vec<ElementRef> = tr
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|e| matches!(e.value().name(), "td" | "th"))
            .collect();
        if cells.is_empty() && !has_pending(&spans, 0) {
            continue;
        }
        let all_header_cells = !cells.is_empty() && cells.iter().all(|c| c.value().name() == "th");
        parsed.push(ParsedRow {
            cells: expand_row(cells, &mut spans),
            all_header_cells,
        });
    }

    let mut rows = parsed.into_iter().peekable();
    let headers = match rows.next() {
        Some(first) => first.cells,
        None => return Err(PipelineError::NoTable),
    };
    while rows.peek().map_or(false, |row| row.all_header_cells) {
        rows.next();
    }

    let body = rows
        .filter(|row| !row.all_header_cells)
        .map(|row| row.cells)
        .collect();

    Ok(HtmlTable {
        headers,
        rows: body,
    })
}

fn belongs_to(tr: &ElementRef, table: &ElementRef) -> bool {
    tr.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "table")
        .map_or(false, |e| e.id() == table.id())
}

fn has_pending(spans: &[Option<PendingSpan>], from: usize) -> bool {
    spans
        .iter()
        .skip(from)
        .any(|s| s.as_ref().map_or(false, |s| s.remaining > 0))
}

fn take_pending(spans: &mut [Option<PendingSpan>], column: usize) -> Option<String> {
    let slot = spans.get_mut(column)?;
    let span = slot.as_mut()?;
    span.remaining -= 1;
    let text = span.text.clone();
    if span.remaining == 0 {
        *slot = None;
    }
    Some(text)
}

fn expand_row(cells: Vec<ElementRef>, spans: &mut Vec<Option<PendingSpan>>) -> Vec<String> {
    let mut out = Vec::new();
    let mut column = 0;
    let mut cells = cells.into_iter();

    loop {
        if let Some(text) = take_pending(spans, column) {
            out.push(text);
            column += 1;
            continue;
        }

        let Some(cell) = cells.next() else {
            // cells spanning down from above may still sit further right
            if has_pending(spans, column) {
                out.push(String::new());
                column += 1;
                continue;
            }
            break;
        };

        let text = cell_text(&cell);
        let colspan = span_attr(&cell, "colspan");
        let rowspan = span_attr(&cell, "rowspan");

        for _ in 0..colspan {
            if spans.len() <= column {
                spans.resize_with(column + 1, || None);
            }
            spans[column] = (rowspan > 1).then(|| PendingSpan {
                remaining: rowspan - 1,
                text: text.clone(),
            });
            out.push(text.clone());
            column += 1;
        }
    }

    out
}

fn span_attr(cell: &ElementRef, name: &str) -> usize {
    cell.value()
        .attr(name)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(1)
}

fn cell_text(cell: &ElementRef) -> String {
    let text: String = cell.text().collect();
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}
