use std::io::Write;

use anyhow::{Context, Result};
use rti_catalog::StateCatalog;
use rti_core::config::CatalogConfig;
use rti_core::payload::decode_state_payload;
use rti_core::validate::{Finding, FindingLevel, ValidationReport};
use serde::Serialize;
use termcolor::Color;

use crate::io::input::read_text_file;
use crate::output;

#[derive(Debug, Serialize)]
pub struct ValidateOut<'a> {
    pub ok: bool,
    pub strict: bool,
    pub failures: usize,
    pub warnings: usize,
    pub findings: &'a [Finding],
}

/// Lists every finding, then exits non-zero if any of them fails the build
/// (errors, plus warnings under `--strict`).
pub fn run(config: CatalogConfig, payload_path: Option<&str>) -> Result<()> {
    let strict = config.validation.strict;
    let report = match payload_path {
        Some(path) => {
            let record = decode_state_payload(&read_text_file(path)?)
                .with_context(|| format!("payload rejected: {path}"))?;
            super::load(config)?.overlay_report([record])
        }
        None => StateCatalog::builtin_report(config)?,
    };

    let out = summarize(&report, strict);
    output::emit(&out, |w| {
        for f in out.findings {
            let color = match f.level {
                FindingLevel::Info => Color::Blue,
                FindingLevel::Warning => Color::Yellow,
                FindingLevel::Error => Color::Red,
            };
            output::write_colored(w, color, f.level.as_str())?;
            writeln!(w, " {} {}: {}", f.code, f.subject, f.message)?;
        }
        if out.ok {
            output::write_colored(w, Color::Green, "ok")?;
        } else {
            output::write_colored(w, Color::Red, "failed")?;
        }
        writeln!(
            w,
            " {} failing finding(s), {} warning(s)",
            out.failures, out.warnings
        )
    })?;

    if !out.ok {
        anyhow::bail!("validation failed: {} failing finding(s)", out.failures);
    }
    Ok(())
}

fn summarize(report: &ValidationReport, strict: bool) -> ValidateOut<'_> {
    ValidateOut {
        ok: report.passes(strict),
        strict,
        failures: report.failures(strict),
        warnings: report.count(FindingLevel::Warning),
        findings: &report.findings,
    }
}
