// src/process/mod.rs
pub mod assemble;
pub mod header;
pub mod locate;
pub mod text;

use tracing::info;

use crate::error::{Error, Result};
use crate::table::{Distribution, DocTable};

/// Run the whole extraction pipeline over the document tables.
///
/// Pure function: locate the time bin tables, merge and validate their
/// headers and project each zone's totals row into one distribution per
/// metric. Returns `Error::NoTemperatureDistribution` when the document
/// has no time bin section at all, which is an informational outcome at
/// the application boundary rather than a malformed report.
#[tracing::instrument(level = "info", skip(tables), fields(tables = tables.len()))]
pub fn process_time_bins(tables: Vec<DocTable>) -> Result<Vec<Distribution>> {
    let bins = locate::find_time_bins(tables);
    if bins.is_empty() {
        return Err(Error::NoTemperatureDistribution);
    }
    let distributions = assemble::format_time_bins(bins)?;
    info!(
        distributions = distributions.len(),
        "extracted time bin distributions"
    );
    Ok(distributions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_reports_structural_absence() {
        let err = process_time_bins(Vec::new()).unwrap_err();
        assert!(matches!(err, Error::NoTemperatureDistribution));
    }

    #[test]
    fn non_matching_tables_report_structural_absence() {
        // a document full of tables, none of them time bins
        let tables = vec![DocTable {
            context: vec![
                "Table of Contents".to_string(),
                "Report: Annual Building Utility Performance Summary".to_string(),
                "For: Entire Facility".to_string(),
                String::new(),
                "Site and Source Energy".to_string(),
            ],
            rows: vec![vec!["Total Energy".to_string(), "100.0".to_string()]],
        }];
        let err = process_time_bins(tables).unwrap_err();
        assert!(matches!(err, Error::NoTemperatureDistribution));
    }
}
