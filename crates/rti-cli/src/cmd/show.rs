use anyhow::{anyhow, Result};
use rti_core::config::CatalogConfig;

use crate::output;

pub fn run(config: CatalogConfig, slug: &str) -> Result<()> {
    let catalog = super::load(config)?;
    let state = catalog
        .get(slug)
        .ok_or_else(|| anyhow!("state not found: {slug}"))?;
    output::print(state)
}
