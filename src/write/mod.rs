// src/write/mod.rs
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::table::Distribution;

/// Write each distribution to `directory` as
/// "Distribution - {metric}.csv". Returns the written paths.
pub fn write_tables(distributions: &[Distribution], directory: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::with_capacity(distributions.len());
    for distribution in distributions {
        paths.push(write_table(distribution, directory)?);
    }
    Ok(paths)
}

pub fn write_table(distribution: &Distribution, directory: &Path) -> Result<PathBuf> {
    let path = directory.join(distribution.file_name());
    let mut writer = csv::Writer::from_path(&path)?;
    for row in distribution.to_rows() {
        writer.write_record(&row)?;
    }
    writer.flush()?;
    info!(path = %path.display(), "wrote distribution");
    Ok(path)
}
