use anyhow::Result;

use rti_catalog::StateCatalog;
use rti_core::config::{CatalogConfig, ValidationConfig};

use crate::args::{Cli, Command};

mod export;
mod merge;
mod sections;
mod show;
mod states;
mod validate;

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = catalog_config(&cli);
    match cli.command {
        Command::States => states::run(config),
        Command::Show { slug } => show::run(config, &slug),
        Command::Sections { jurisdiction } => sections::run(config, &jurisdiction),
        Command::Validate { payload } => validate::run(config, payload.as_deref()),
        Command::Export { out } => export::run(config, &out),
        Command::Merge { payload } => merge::run(config, &payload),
    }
}

fn catalog_config(cli: &Cli) -> CatalogConfig {
    CatalogConfig {
        default_theme: cli.default_theme,
        validation: ValidationConfig {
            strict: cli.strict,
            ..ValidationConfig::default()
        },
    }
}

/// Build the built-in catalog with CLI-provided configuration.
fn load(config: CatalogConfig) -> Result<StateCatalog> {
    Ok(StateCatalog::builtin(config)?)
}
