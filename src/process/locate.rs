// src/process/locate.rs
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::table::DocTable;

/// Degree-Celsius-tagged report title, e.g.
/// "Report: ZONE MEAN AIR TEMPERATURE [C] (Hourly)".
static REPORT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Report: (.*?) \[C\].*$").expect("report pattern is valid"));

const TABLE_OF_CONTENTS: &str = "Table of Contents";
const TIME_BIN_RESULTS: &str = "Time Bin Results";
const ZONE_PREFIX: &str = "For: ";

pub type RawRows = Vec<Vec<String>>;

/// Raw time bin tables for one metric, zones in first-seen order.
#[derive(Debug)]
pub struct MetricBins {
    pub metric: String,
    pub zones: Vec<(String, RawRows)>,
}

/// Time bin tables grouped by metric, then zone, both insertion-ordered.
#[derive(Debug, Default)]
pub struct TimeBins {
    groups: Vec<MetricBins>,
}

impl TimeBins {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn into_groups(self) -> Vec<MetricBins> {
        self.groups
    }

    /// Insert a raw table under (metric, zone). A repeated key replaces
    /// the stored table but keeps its original position.
    fn insert(&mut self, metric: String, zone: String, rows: RawRows) {
        let idx = match self.groups.iter().position(|g| g.metric == metric) {
            Some(idx) => idx,
            None => {
                self.groups.push(MetricBins {
                    metric,
                    zones: Vec::new(),
                });
                self.groups.len() - 1
            }
        };
        let group = &mut self.groups[idx];
        match group.zones.iter_mut().find(|(name, _)| *name == zone) {
            Some((_, slot)) => *slot = rows,
            None => group.zones.push((zone, rows)),
        }
    }
}

/// A table is a time bin table when its context opens with the table of
/// contents banner and announces the time bin section. Returns the
/// (metric, zone) key when it does; anything else is not an error, just
/// not a time bin table.
fn classify(context: &[String]) -> Option<(String, String)> {
    if context.first().map(String::as_str) != Some(TABLE_OF_CONTENTS)
        || context.get(4).map(String::as_str) != Some(TIME_BIN_RESULTS)
    {
        return None;
    }
    let metric = REPORT_PATTERN
        .captures(context.get(1)?)?
        .get(1)?
        .as_str()
        .to_string();
    let zone_line = context.get(2)?;
    let zone = zone_line.strip_prefix(ZONE_PREFIX).unwrap_or(zone_line);
    Some((metric, zone.to_string()))
}

/// Pick the time bin tables out of the whole document table stream.
///
/// Each table is classified independently from its own context; no scan
/// state is carried between tables.
pub fn find_time_bins(tables: Vec<DocTable>) -> TimeBins {
    let mut bins = TimeBins::default();
    for table in tables {
        if let Some((metric, zone)) = classify(&table.context) {
            trace!(metric = %metric, zone = %zone, "matched time bin table");
            bins.insert(metric, zone, table.rows);
        }
    }
    bins
}
