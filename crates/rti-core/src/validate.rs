//! Construction-time validation for catalog content.
//!
//! Content is literal data compiled into the binary (or a decoded backend
//! payload). Validation runs once when a snapshot is built and collects every
//! finding instead of stopping at the first, so a content author sees the
//! whole list in one pass.
//!
//! Findings carry stable dot-delimited codes:
//! - `state.*`    identity and required fields of a `StateData`
//! - `hero.*`, `faq.*`, `process.*`   nested records
//! - `sections.*` department-section catalogs
//!
//! This module performs no I/O.

use std::collections::HashSet;
use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::config::ValidationConfig;
use crate::errors::{RtiError, RtiResult};
use crate::model::{DepartmentSection, StateData};
use crate::slug::is_canonical_slug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingLevel {
    Info,
    Warning,
    Error,
}

impl FindingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for FindingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub level: FindingLevel,
    pub code: String,
    /// What the finding is about, e.g. `telangana.hero.title`.
    pub subject: String,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} {}: {}", self.level, self.code, self.subject, self.message)
    }
}

/// Validation report. Built up by the `validate_*` functions.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        level: FindingLevel,
        code: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.findings.push(Finding {
            level,
            code: code.into(),
            subject: subject.into(),
            message: message.into(),
        });
    }

    fn error(&mut self, code: &str, subject: impl Into<String>, message: impl Into<String>) {
        self.push(FindingLevel::Error, code, subject, message);
    }

    fn warning(&mut self, code: &str, subject: impl Into<String>, message: impl Into<String>) {
        self.push(FindingLevel::Warning, code, subject, message);
    }

    pub fn count(&self, level: FindingLevel) -> usize {
        self.findings.iter().filter(|f| f.level == level).count()
    }

    pub fn has_errors(&self) -> bool {
        self.count(FindingLevel::Error) > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.count(FindingLevel::Warning) > 0
    }

    /// Findings with a given code, in report order.
    pub fn with_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Finding> + 'a {
        self.findings.iter().filter(move |f| f.code == code)
    }

    /// Whether `finding` fails a build: errors always do, warnings only
    /// under `strict`.
    pub fn is_failure(finding: &Finding, strict: bool) -> bool {
        finding.level == FindingLevel::Error || (strict && finding.level == FindingLevel::Warning)
    }

    /// Number of findings that fail a build under `strict`.
    pub fn failures(&self, strict: bool) -> usize {
        self.findings
            .iter()
            .filter(|f| Self::is_failure(f, strict))
            .count()
    }

    /// True when [`ValidationReport::finish`] would succeed.
    pub fn passes(&self, strict: bool) -> bool {
        self.failures(strict) == 0
    }

    /// Convert the report into a result.
    ///
    /// Errors always fail. Warnings fail only when `strict` is set, and are
    /// otherwise logged and kept in the returned report.
    pub fn finish(self, strict: bool) -> RtiResult<Self> {
        let errors = self.failures(strict);
        if let Some(first) = self.findings.iter().find(|f| Self::is_failure(f, strict)) {
            return Err(RtiError::InvalidCatalog {
                errors,
                summary: first.to_string(),
            });
        }

        for f in self.with_level(FindingLevel::Warning) {
            tracing::warn!(code = %f.code, subject = %f.subject, "{}", f.message);
        }
        Ok(self)
    }

    fn with_level(&self, level: FindingLevel) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.level == level)
    }
}

fn require_text(report: &mut ValidationReport, subject: String, value: &str) {
    if value.trim().is_empty() {
        report.error("state.empty_field", subject, "required text is empty");
    }
}

fn require_optional_text(report: &mut ValidationReport, subject: String, value: Option<&str>) {
    if let Some(v) = value {
        if v.trim().is_empty() {
            report.error(
                "state.empty_field",
                subject,
                "optional field is present but empty; omit it instead",
            );
        }
    }
}

/// Validate one state record stored under catalog key `key`.
pub fn validate_state(
    key: &str,
    state: &StateData,
    cfg: &ValidationConfig,
    report: &mut ValidationReport,
) {
    let at = |field: &str| format!("{key}.{field}");

    if state.slug != key {
        report.error(
            "state.slug_mismatch",
            key,
            format!("record slug {:?} does not match catalog key", state.slug),
        );
    }
    if !is_canonical_slug(key) {
        report.error(
            "state.slug_format",
            key,
            "catalog key must be lowercase [a-z0-9-] without leading or trailing hyphens",
        );
    }

    require_text(report, at("name"), &state.name);

    if state.languages.is_empty() {
        report.error("state.no_languages", key, "at least one language is required");
    }
    for (i, lang) in state.languages.iter().enumerate() {
        require_text(report, at(&format!("languages[{i}]")), lang);
    }

    require_text(report, at("hero.title"), &state.hero.title);
    require_text(report, at("hero.subtitle"), &state.hero.subtitle);
    require_text(report, at("hero.image"), &state.hero.image);
    require_text(report, at("hero.cta"), &state.hero.cta);

    if state.departments.is_empty() {
        report.error("state.no_departments", key, "at least one department is required");
    }
    for (i, dept) in state.departments.iter().enumerate() {
        require_text(report, at(&format!("departments[{i}]")), dept);
    }
    if cfg.check_duplicate_departments {
        for dup in state.departments.iter().duplicates() {
            report.warning(
                "state.duplicate_department",
                at("departments"),
                format!("department listed more than once: {dup}"),
            );
        }
    }

    for (i, h) in state.highlights.iter().enumerate() {
        require_text(report, at(&format!("highlights[{i}]")), h);
    }

    if state.faqs.is_empty() {
        report.error("faq.missing", key, "at least one FAQ is required");
    }
    for (i, faq) in state.faqs.iter().enumerate() {
        require_text(report, at(&format!("faqs[{i}].q")), &faq.q);
        require_text(report, at(&format!("faqs[{i}].a")), &faq.a);
    }

    require_optional_text(report, at("description"), state.description.as_deref());
    require_optional_text(report, at("rtiPortalUrl"), state.rti_portal_url.as_deref());
    require_optional_text(report, at("commission"), state.commission.as_deref());
    require_optional_text(report, at("fee"), state.fee.as_deref());

    if let Some(process) = &state.process {
        if process.steps.is_empty() {
            report.error("process.empty", at("process"), "process is present but has no steps");
        }
        for (i, step) in process.steps.iter().enumerate() {
            let expected = i as u32 + 1;
            if step.step != expected {
                report.error(
                    "process.step_order",
                    at(&format!("process.steps[{i}]")),
                    format!("expected step {expected}, found {}", step.step),
                );
            }
            require_text(report, at(&format!("process.steps[{i}].title")), &step.title);
            require_text(
                report,
                at(&format!("process.steps[{i}].description")),
                &step.description,
            );
        }
    }
}

/// Validate a jurisdiction's sectioned department list.
pub fn validate_sections(
    jurisdiction: &str,
    sections: &[DepartmentSection],
    report: &mut ValidationReport,
) {
    if !is_canonical_slug(jurisdiction) {
        report.error(
            "sections.jurisdiction_format",
            jurisdiction,
            "jurisdiction key must be lowercase [a-z0-9-]",
        );
    }
    if sections.is_empty() {
        report.error("sections.empty", jurisdiction, "no department sections");
    }

    let mut seen = HashSet::new();
    for (i, section) in sections.iter().enumerate() {
        let subject = format!("{jurisdiction}.sections[{i}]");
        if section.category.trim().is_empty() {
            report.error("sections.empty_category", subject.clone(), "category label is empty");
        }
        if !seen.insert(section.category.as_str()) {
            report.error(
                "sections.duplicate_category",
                subject.clone(),
                format!("category appears more than once: {}", section.category),
            );
        }
        if section.items.is_empty() {
            report.error("sections.empty_items", subject.clone(), "section has no departments");
        }
        for (j, item) in section.items.iter().enumerate() {
            if item.trim().is_empty() {
                report.error(
                    "sections.empty_item",
                    format!("{subject}.items[{j}]"),
                    "department name is empty",
                );
            }
        }
    }
}

/// Compare a jurisdiction's sectioned view against its flat department list.
///
/// The two lists are authored separately. Every sectioned item missing from
/// the flat list is reported as a warning; flat-only departments are allowed.
pub fn check_section_drift(
    jurisdiction: &str,
    flat: &[String],
    sections: &[DepartmentSection],
    report: &mut ValidationReport,
) {
    let flat: HashSet<&str> = flat.iter().map(String::as_str).collect();
    for section in sections {
        for item in &section.items {
            if !flat.contains(item.as_str()) {
                report.warning(
                    "sections.drift",
                    jurisdiction,
                    format!(
                        "sectioned department {item:?} ({}) is missing from the flat list",
                        section.category
                    ),
                );
            }
        }
    }
}
