use anyhow::{Context, Result};
use rti_core::config::CatalogConfig;
use rti_core::payload::parse_state_payload;

use crate::io::input::read_text_file;
use crate::output;

pub fn run(config: CatalogConfig, payload_path: &str) -> Result<()> {
    let record = parse_state_payload(&read_text_file(payload_path)?, &config.validation)
        .with_context(|| format!("payload rejected: {payload_path}"))?;
    let slug = record.slug.clone();

    let base = super::load(config)?;
    let merged = base.with_overrides([record])?;
    tracing::info!(%slug, replaced = base.get(&slug).is_some(), "payload merged");

    match merged.get(&slug) {
        Some(state) => output::print(state),
        None => anyhow::bail!("merged snapshot has no record for {slug}"),
    }
}
