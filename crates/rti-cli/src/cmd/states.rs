use std::io::Write;

use anyhow::Result;
use rti_core::config::CatalogConfig;
use serde::Serialize;

use crate::output;

#[derive(Debug, Serialize)]
pub struct StatesOut<'a> {
    pub states: Vec<&'a str>,
}

pub fn run(config: CatalogConfig) -> Result<()> {
    let catalog = super::load(config)?;
    let out = StatesOut {
        states: catalog.slugs(),
    };
    output::emit(&out, |w| {
        for slug in &out.states {
            writeln!(w, "{slug}")?;
        }
        Ok(())
    })
}
