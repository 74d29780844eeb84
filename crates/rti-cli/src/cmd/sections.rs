use std::io::Write;

use anyhow::{anyhow, Result};
use rti_core::config::CatalogConfig;
use rti_core::model::DepartmentSection;
use serde::Serialize;
use termcolor::Color;

use crate::output;

#[derive(Debug, Serialize)]
pub struct SectionsOut<'a> {
    pub jurisdiction: String,
    pub total: usize,
    pub sections: &'a [DepartmentSection],
}

pub fn run(config: CatalogConfig, jurisdiction: &str) -> Result<()> {
    let catalog = super::load(config)?;
    let sections = catalog
        .department_sections(jurisdiction)
        .ok_or_else(|| anyhow!("no department sections for jurisdiction: {jurisdiction}"))?;

    let out = SectionsOut {
        jurisdiction: jurisdiction.to_lowercase(),
        total: sections.iter().map(DepartmentSection::len).sum(),
        sections,
    };
    output::emit(&out, |w| {
        for section in out.sections {
            output::write_colored(w, Color::Cyan, &section.category)?;
            writeln!(w, " ({})", section.len())?;
            for item in &section.items {
                writeln!(w, "  - {item}")?;
            }
        }
        writeln!(w, "{} departments in {} sections", out.total, out.sections.len())
    })
}
