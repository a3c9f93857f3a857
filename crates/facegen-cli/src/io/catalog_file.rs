// crates/facegen-cli/src/io/catalog_file.rs

use anyhow::{Context, Result};
use facegen_core::catalog::raw::{IngestReport, RawCatalog};
use facegen_core::Catalog;
use tracing::info;

/// Load a raw catalog JSON file and group it by gender + target.
pub fn load_catalog(path: &str) -> Result<(Catalog, IngestReport)> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read catalog {path}"))?;
    let raw: RawCatalog = serde_json::from_str(&text).with_context(|| format!("decode catalog {path}"))?;
    let (catalog, report) = raw.ingest();
    info!(
        path,
        tints = report.tints_kept,
        unclassified = report.unclassified,
        colors_dropped = report.colors_dropped,
        "catalog loaded"
    );
    Ok((catalog, report))
}
