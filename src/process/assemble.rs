// src/process/assemble.rs
use tracing::debug;

use crate::error::{Error, Result};
use crate::process::header::merge_header;
use crate::process::locate::{MetricBins, RawRows, TimeBins};
use crate::table::Distribution;

// Raw time bin tables carry the interval descriptions in their second
// and third physical rows; the totals live in the last row.
const INTERVAL_START_ROW: usize = 1;
const INTERVAL_END_ROW: usize = 2;
const MIN_RAW_ROWS: usize = 3;

/// Build one distribution per metric from the located raw tables.
///
/// All zones under a metric must agree on the merged header; a mismatch
/// means the report structure is inconsistent and the run aborts.
pub fn format_time_bins(bins: TimeBins) -> Result<Vec<Distribution>> {
    let mut distributions = Vec::with_capacity(bins.len());
    for group in bins.into_groups() {
        let MetricBins { metric, zones } = group;
        let header = create_header(&metric, &zones)?;
        let mut distribution = Distribution::new(metric, header);
        for (zone, rows) in &zones {
            let values = values_row(&distribution.metric, zone, rows)?;
            distribution.push_row(zone.clone(), values)?;
        }
        debug!(
            metric = %distribution.metric,
            zones = distribution.index.len(),
            bins = distribution.header.len(),
            "assembled distribution"
        );
        distributions.push(distribution);
    }
    Ok(distributions)
}

/// Merge and validate the header across every zone of one metric.
fn create_header(metric: &str, zones: &[(String, RawRows)]) -> Result<Vec<String>> {
    let mut header: Option<Vec<String>> = None;
    for (zone, rows) in zones {
        if rows.len() < MIN_RAW_ROWS {
            return Err(Error::DegenerateTable {
                metric: metric.to_string(),
                zone: zone.clone(),
            });
        }
        let current = merge_header(&rows[INTERVAL_START_ROW], &rows[INTERVAL_END_ROW])?;
        if current.is_empty() {
            return Err(Error::DegenerateTable {
                metric: metric.to_string(),
                zone: zone.clone(),
            });
        }
        match &header {
            Some(expected) if *expected != current => {
                return Err(Error::HeaderMismatch {
                    metric: metric.to_string(),
                });
            }
            Some(_) => {}
            None => header = Some(current),
        }
    }
    header.ok_or(Error::NoTemperatureDistribution)
}

/// The zone's totals: the last physical row with the leading
/// zone-identifier cell dropped, parsed as numbers.
fn values_row(metric: &str, zone: &str, rows: &RawRows) -> Result<Vec<f64>> {
    let last = rows.last().ok_or_else(|| Error::DegenerateTable {
        metric: metric.to_string(),
        zone: zone.to_string(),
    })?;
    last.iter()
        .skip(1)
        .map(|cell| {
            cell.trim().parse::<f64>().map_err(|_| Error::BadValue {
                zone: zone.to_string(),
                text: cell.clone(),
            })
        })
        .collect()
}
