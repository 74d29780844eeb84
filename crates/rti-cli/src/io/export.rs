use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rti_catalog::StateCatalog;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ExportSummary {
    pub out_dir: String,
    /// Written files, relative to `out_dir`, in write order.
    pub files: Vec<String>,
}

/// Write the catalog as static JSON:
/// - `<slug>.json` per state record
/// - `sections/<jurisdiction>.json` per sectioned directory
/// - `index.json` listing both key sets
pub fn write_export<P: AsRef<Path>>(out_dir: P, catalog: &StateCatalog) -> Result<ExportSummary> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir.join("sections"))?;

    let mut files = Vec::new();

    for (slug, state) in catalog.iter() {
        let rel = format!("{slug}.json");
        write_json(out_dir, &rel, state)?;
        files.push(rel);
    }

    for jurisdiction in catalog.jurisdictions() {
        if let Some(sections) = catalog.department_sections(jurisdiction) {
            let rel = format!("sections/{jurisdiction}.json");
            write_json(out_dir, &rel, &sections)?;
            files.push(rel);
        }
    }

    write_json(out_dir, "index.json", &catalog.index())?;
    files.push("index.json".to_string());

    Ok(ExportSummary {
        out_dir: out_dir.display().to_string(),
        files,
    })
}

fn write_json<T: Serialize + ?Sized>(out_dir: &Path, rel: &str, value: &T) -> Result<()> {
    let path = out_dir.join(rel);
    let bytes = serde_json::to_vec_pretty(value)?;
    fs::write(&path, bytes).with_context(|| format!("failed to write {}", path.display()))
}
