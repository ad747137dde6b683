// src/html/mod.rs
use std::fs;
use std::path::Path;

use ego_tree::NodeRef;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Node, Selector};
use tracing::debug;

use crate::error::{Error, Result};
use crate::table::DocTable;

static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").expect("valid selector"));
static TR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("valid selector"));
static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td, th").expect("valid selector"));

// Tags walked through rather than flattened into a single context line.
const STRUCTURAL_TAGS: &[&str] = &["html", "body", "div", "center"];

/// Read every table from an EnergyPlus html summary report, each paired
/// with the text lines accumulated since the previous table. Those
/// lines carry the table-of-contents annotations used downstream to
/// classify each table.
pub fn read_html(path: &Path) -> Result<Vec<DocTable>> {
    let raw = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(extract_tables(&raw))
}

/// Split an html document into (context lines, cell grid) pairs.
///
/// Block elements outside tables each contribute one whitespace-
/// normalized line; every `<table>` drains the accumulated lines as its
/// context. Cells stay strings, numeric coercion happens downstream.
pub fn extract_tables(html: &str) -> Vec<DocTable> {
    let document = Html::parse_document(html);
    let mut tables = Vec::new();
    let mut context = Vec::new();
    walk(document.tree.root(), &mut context, &mut tables);
    debug!(tables = tables.len(), "extracted document tables");
    tables
}

fn walk(node: NodeRef<Node>, context: &mut Vec<String>, tables: &mut Vec<DocTable>) {
    match node.value() {
        Node::Element(element) => {
            let name = element.name();
            if name == "table" {
                let rows = ElementRef::wrap(node).map(table_rows).unwrap_or_default();
                tables.push(DocTable {
                    context: std::mem::take(context),
                    rows,
                });
                return;
            }
            if matches!(name, "script" | "style" | "head" | "title") {
                return;
            }
            let element_ref = match ElementRef::wrap(node) {
                Some(element_ref) => element_ref,
                None => return,
            };
            if STRUCTURAL_TAGS.contains(&name) || element_ref.select(&TABLE).next().is_some() {
                for child in node.children() {
                    walk(child, context, tables);
                }
            } else if let Some(line) = normalize(&element_ref.text().collect::<String>()) {
                context.push(line);
            }
        }
        Node::Text(text) => {
            if let Some(line) = normalize(text) {
                context.push(line);
            }
        }
        _ => {
            for child in node.children() {
                walk(child, context, tables);
            }
        }
    }
}

fn table_rows(table: ElementRef) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for tr in table.select(&TR) {
        let cells: Vec<String> = tr
            .select(&CELL)
            .map(|cell| normalize(&cell.text().collect::<String>()).unwrap_or_default())
            .collect();
        if !cells.is_empty() {
            rows.push(cells);
        }
    }
    rows
}

/// Collapse whitespace runs (including non-breaking spaces) to single
/// spaces; `None` when nothing printable remains.
fn normalize(text: &str) -> Option<String> {
    let line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if line.is_empty() {
        None
    } else {
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"<html><body>
        <p><a href="#toc">Table of Contents</a></p>
        <p>Report:<b> ZONE MEAN AIR TEMPERATURE [C] (Hourly)</b></p>
        <p>For:<b> ZONE1</b></p>
        <p>Timestamp: 2026-08-24 10:00</p>
        <b>Time Bin Results</b><br><br>
        <table border="1">
          <tr><td>Interval Start</td><td>less than</td><td>Total</td></tr>
          <tr><td>Interval End</td><td>19.00</td><td>Row</td></tr>
          <tr><td>Total</td><td>&nbsp;12.00</td><td>12.00</td></tr>
        </table>
        <p>Trailing notes</p>
        <table><tr><td>second</td></tr></table>
    </body></html>"##;

    #[test]
    fn pairs_tables_with_preceding_lines() {
        let tables = extract_tables(SAMPLE);
        assert_eq!(tables.len(), 2);
        assert_eq!(
            tables[0].context,
            vec![
                "Table of Contents",
                "Report: ZONE MEAN AIR TEMPERATURE [C] (Hourly)",
                "For: ZONE1",
                "Timestamp: 2026-08-24 10:00",
                "Time Bin Results",
            ]
        );
        // context drains at each table
        assert_eq!(tables[1].context, vec!["Trailing notes"]);
        assert_eq!(tables[1].rows, vec![vec!["second".to_string()]]);
    }

    #[test]
    fn cells_are_whitespace_normalized_strings() {
        let tables = extract_tables(SAMPLE);
        assert_eq!(
            tables[0].rows,
            vec![
                vec!["Interval Start", "less than", "Total"],
                vec!["Interval End", "19.00", "Row"],
                vec!["Total", "12.00", "12.00"],
            ]
        );
    }

    #[test]
    fn documents_without_tables_yield_nothing() {
        let tables = extract_tables("<html><body><p>just text</p></body></html>");
        assert!(tables.is_empty());
    }

    #[test]
    fn missing_file_propagates_read_error() {
        let err = read_html(Path::new("does/not/exist.htm")).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }
}
