use std::io::Write;

use anyhow::Result;
use rti_core::config::CatalogConfig;

use crate::io::export::write_export;
use crate::output;

pub fn run(config: CatalogConfig, out_dir: &str) -> Result<()> {
    let catalog = super::load(config)?;
    let summary = write_export(out_dir, &catalog)?;
    tracing::info!(out = %out_dir, files = summary.files.len(), "catalog exported");
    output::emit(&summary, |w| {
        for f in &summary.files {
            writeln!(w, "{f}")?;
        }
        Ok(())
    })
}
