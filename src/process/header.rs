// src/process/header.rs
use crate::error::Result;
use crate::process::text::{format_boundary, strip_characters};

/// Where a bin column sits in the merged header.
///
/// The report describes every bin with two stacked cells; how the pair
/// renders depends only on its position. `Last` takes priority over
/// `First`/`SecondToLast` so narrow tables with coinciding positions
/// resolve deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinPosition {
    /// First bin column: a named condition (e.g. "below X"), not a range.
    First,
    /// Numeric interval with an exclusive upper bound.
    Interior,
    /// Second-to-last bin column: a named condition (e.g. "above X").
    SecondToLast,
    /// The row-total column.
    Last,
}

fn classify(column: usize, n_columns: usize) -> BinPosition {
    if column == n_columns - 1 {
        BinPosition::Last
    } else if column == 1 {
        BinPosition::First
    } else if column == n_columns - 2 {
        BinPosition::SecondToLast
    } else {
        BinPosition::Interior
    }
}

/// Merge the two interval-description rows of a raw time bin table into
/// one ordered list of column labels, one per bin.
///
/// Column 0 is the zone-identifier column and is excluded; it is
/// represented by the table index, not the header.
pub fn merge_header(interval_start: &[String], interval_end: &[String]) -> Result<Vec<String>> {
    let n_columns = interval_start.len().min(interval_end.len());
    let mut header = Vec::with_capacity(n_columns.saturating_sub(1));
    for column in 1..n_columns {
        let (first, second) = (&interval_start[column], &interval_end[column]);
        let label = match classify(column, n_columns) {
            // "total" reads better than "Total - Row"
            BinPosition::Last => "total".to_string(),
            BinPosition::First | BinPosition::SecondToLast => format!("{first} {second}"),
            BinPosition::Interior => {
                let lower = strip_characters(first, &[" ", "<="]);
                let upper = format_boundary(second)?;
                format!("{lower}-{upper}")
            }
        };
        header.push(label);
    }
    Ok(header)
}
