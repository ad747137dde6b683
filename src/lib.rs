//! Extract "time bin" temperature distributions from an EnergyPlus html
//! summary report (`eplustbl.htm`) and re-emit them as one csv table per
//! temperature metric.
//!
//! Pipeline: [`html::read_html`] turns the report into document tables
//! (cell grids with their preceding text lines), [`process::process_time_bins`]
//! locates the time bin tables, merges their two-row interval headers and
//! projects each zone's totals into a [`table::Distribution`], and
//! [`write::write_tables`] emits `Distribution - {metric}.csv` files.

pub mod error;
pub mod html;
pub mod process;
pub mod table;
pub mod write;

pub use error::Error;
pub use table::{Distribution, DocTable};
