// src/table/mod.rs
use serde::Serialize;

use crate::error::{Error, Result};

/// One table extracted from the source document: the text lines
/// accumulated since the previous table, and the raw cell grid.
///
/// The context lines carry the table-of-contents annotations used to
/// classify the table; cells are trimmed strings with no numeric
/// coercion applied.
#[derive(Debug, Clone, PartialEq)]
pub struct DocTable {
    pub context: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Final per-metric table: rows are zones, columns are time bins.
///
/// Width is uniform. Every row has exactly `header.len()` values and
/// `index` holds one zone name per row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    /// Temperature metric, e.g. "ZONE MEAN AIR TEMPERATURE".
    pub metric: String,
    /// Bin labels, excluding the zone-identifier column.
    pub header: Vec<String>,
    /// Zone names, one per value row, in first-seen order.
    pub index: Vec<String>,
    /// Per-zone totals, one row per zone.
    pub rows: Vec<Vec<f64>>,
}

impl Distribution {
    pub fn new(metric: impl Into<String>, header: Vec<String>) -> Self {
        Self {
            metric: metric.into(),
            header,
            index: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Display name, e.g. "Distribution ZONE MEAN AIR TEMPERATURE".
    pub fn name(&self) -> String {
        format!("Distribution {}", self.metric)
    }

    /// Output file name, e.g. "Distribution - ZONE MEAN AIR TEMPERATURE.csv".
    pub fn file_name(&self) -> String {
        format!("Distribution - {}.csv", self.metric)
    }

    /// Append one zone's value row, checking it matches the header width.
    pub fn push_row(&mut self, zone: impl Into<String>, row: Vec<f64>) -> Result<()> {
        if row.len() != self.header.len() {
            return Err(Error::ShapeMismatch {
                expected: self.header.len(),
                actual: row.len(),
            });
        }
        self.index.push(zone.into());
        self.rows.push(row);
        Ok(())
    }

    /// Flatten to spreadsheet rows: `[""] + header`, then one
    /// `[zone] + values` row per zone.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        let mut out = Vec::with_capacity(self.rows.len() + 1);
        let mut head = Vec::with_capacity(self.header.len() + 1);
        head.push(String::new());
        head.extend(self.header.iter().cloned());
        out.push(head);
        for (zone, values) in self.index.iter().zip(&self.rows) {
            let mut row = Vec::with_capacity(values.len() + 1);
            row.push(zone.clone());
            row.extend(values.iter().map(f64::to_string));
            out.push(row);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Distribution {
        let mut table = Distribution::new(
            "ZONE MEAN AIR TEMPERATURE",
            vec!["below 19.00".into(), "19.00-19.99".into(), "total".into()],
        );
        table.push_row("ZONE1", vec![1.0, 2.5, 3.5]).unwrap();
        table.push_row("ZONE2", vec![4.0, 5.0, 9.0]).unwrap();
        table
    }

    #[test]
    fn names_derive_from_metric() {
        let table = sample();
        assert_eq!(table.name(), "Distribution ZONE MEAN AIR TEMPERATURE");
        assert_eq!(
            table.file_name(),
            "Distribution - ZONE MEAN AIR TEMPERATURE.csv"
        );
    }

    #[test]
    fn push_row_rejects_wrong_width() {
        let mut table = sample();
        let err = table.push_row("ZONE3", vec![1.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::ShapeMismatch {
                expected: 3,
                actual: 1
            }
        ));
        // nothing partially appended
        assert_eq!(table.index.len(), 2);
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn to_rows_embeds_index_and_header() {
        let rows = sample().to_rows();
        assert_eq!(
            rows,
            vec![
                vec!["", "below 19.00", "19.00-19.99", "total"],
                vec!["ZONE1", "1", "2.5", "3.5"],
                vec!["ZONE2", "4", "5", "9"],
            ]
        );
    }
}
