//! Immutable state catalog snapshots.
//!
//! A `StateCatalog` is built once, validated, and then only read. Lookups take
//! `&self` and never allocate shared state, so any number of threads can query
//! a snapshot concurrently without locking.
//!
//! Overriding records (for example with a live backend payload) never mutates
//! a snapshot: `with_overrides` returns a new one that shares every
//! untouched record with its source through `Arc`.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use serde::Serialize;

use rti_core::config::{validate_config, CatalogConfig};
use rti_core::model::{DepartmentSection, DesignTheme, StateData};
use rti_core::slug::normalize_slug;
use rti_core::validate::{
    check_section_drift, validate_sections, validate_state, FindingLevel, ValidationReport,
};
use rti_core::{RtiError, RtiResult};

use crate::data;

/// Keys of a snapshot, suitable for an export index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogIndex {
    pub states: Vec<String>,
    pub jurisdictions: Vec<String>,
}

/// A validated, read-only catalog of state records and department sections.
#[derive(Debug, Clone)]
pub struct StateCatalog {
    config: CatalogConfig,
    states: BTreeMap<String, Arc<StateData>>,
    sections: BTreeMap<String, Arc<[DepartmentSection]>>,
    report: ValidationReport,
}

impl StateCatalog {
    /// The process-wide built-in catalog.
    ///
    /// Built and validated on first access with the default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in content fails validation. Content defects
    /// must stop the process at startup instead of surfacing at render time;
    /// call [`StateCatalog::builtin`] to handle the error instead.
    pub fn global() -> &'static StateCatalog {
        static INSTANCE: OnceLock<StateCatalog> = OnceLock::new();
        INSTANCE.get_or_init(|| match Self::builtin(CatalogConfig::default()) {
            Ok(catalog) => catalog,
            Err(e) => panic!("built-in state catalog is invalid: {e}"),
        })
    }

    /// Build and validate the compiled-in content with `config`.
    pub fn builtin(config: CatalogConfig) -> RtiResult<Self> {
        Self::from_parts(config, data::states(), data::department_sections())
    }

    /// Every finding for the compiled-in content under `config`.
    ///
    /// Unlike [`StateCatalog::builtin`], content findings never fail this
    /// call; use [`ValidationReport::passes`] to decide the outcome. Only a
    /// bad configuration or duplicate keys are errors.
    pub fn builtin_report(config: CatalogConfig) -> RtiResult<ValidationReport> {
        Self::report_parts(config, data::states(), data::department_sections())
    }

    /// Build and validate a snapshot from explicit records.
    ///
    /// States are keyed by their own `slug`; two records with the same slug,
    /// or two directories for the same jurisdiction, are an authoring error.
    pub fn from_parts<J>(
        config: CatalogConfig,
        states: impl IntoIterator<Item = StateData>,
        sections: impl IntoIterator<Item = (J, Vec<DepartmentSection>)>,
    ) -> RtiResult<Self>
    where
        J: Into<String>,
    {
        validate_config(&config)?;
        let (states, sections) = Self::index_parts(states, sections)?;
        Self::validated(config, states, sections)
    }

    /// Validate explicit records without building a snapshot.
    pub fn report_parts<J>(
        config: CatalogConfig,
        states: impl IntoIterator<Item = StateData>,
        sections: impl IntoIterator<Item = (J, Vec<DepartmentSection>)>,
    ) -> RtiResult<ValidationReport>
    where
        J: Into<String>,
    {
        validate_config(&config)?;
        let (states, sections) = Self::index_parts(states, sections)?;
        Ok(Self::check(&config, &states, &sections))
    }

    #[allow(clippy::type_complexity)]
    fn index_parts<J>(
        states: impl IntoIterator<Item = StateData>,
        sections: impl IntoIterator<Item = (J, Vec<DepartmentSection>)>,
    ) -> RtiResult<(
        BTreeMap<String, Arc<StateData>>,
        BTreeMap<String, Arc<[DepartmentSection]>>,
    )>
    where
        J: Into<String>,
    {
        let mut by_slug = BTreeMap::new();
        for state in states {
            let slug = state.slug.clone();
            if by_slug.insert(slug.clone(), Arc::new(state)).is_some() {
                return Err(RtiError::invariant(format!("duplicate state slug: {slug}")));
            }
        }

        let mut by_jurisdiction = BTreeMap::new();
        for (jurisdiction, secs) in sections {
            let jurisdiction: String = jurisdiction.into();
            let secs: Arc<[DepartmentSection]> = Arc::from(secs);
            if by_jurisdiction.insert(jurisdiction.clone(), secs).is_some() {
                return Err(RtiError::invariant(format!(
                    "duplicate department directory: {jurisdiction}"
                )));
            }
        }

        Ok((by_slug, by_jurisdiction))
    }

    fn validated(
        config: CatalogConfig,
        states: BTreeMap<String, Arc<StateData>>,
        sections: BTreeMap<String, Arc<[DepartmentSection]>>,
    ) -> RtiResult<Self> {
        let report = Self::check(&config, &states, &sections).finish(config.validation.strict)?;

        tracing::debug!(
            states = states.len(),
            jurisdictions = sections.len(),
            warnings = report.count(FindingLevel::Warning),
            "state catalog snapshot built"
        );

        Ok(Self {
            config,
            states,
            sections,
            report,
        })
    }

    fn check(
        config: &CatalogConfig,
        states: &BTreeMap<String, Arc<StateData>>,
        sections: &BTreeMap<String, Arc<[DepartmentSection]>>,
    ) -> ValidationReport {
        let mut report = ValidationReport::new();

        if states.is_empty() {
            report.push(FindingLevel::Error, "catalog.empty", "catalog", "no state records");
        }
        for (key, state) in states {
            validate_state(key, state, &config.validation, &mut report);
        }

        for (jurisdiction, secs) in sections {
            validate_sections(jurisdiction, secs, &mut report);
            match states.get(jurisdiction) {
                Some(state) if config.validation.check_section_drift => {
                    check_section_drift(jurisdiction, &state.departments, secs, &mut report);
                }
                Some(_) => {}
                None => report.push(
                    FindingLevel::Info,
                    "sections.unpaired",
                    jurisdiction.as_str(),
                    "no state record shares this jurisdiction; drift not checked",
                ),
            }
        }

        report
    }

    /// Look up a state by slug, case-insensitively.
    ///
    /// Returns `None` for unknown slugs.
    pub fn get(&self, slug: &str) -> Option<&StateData> {
        self.states.get(&*normalize_slug(slug)).map(Arc::as_ref)
    }

    /// All state slugs in ascending order.
    pub fn slugs(&self) -> Vec<&str> {
        self.states.keys().map(String::as_str).collect()
    }

    /// Iterate over `(slug, record)` in slug order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateData)> {
        self.states.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Number of state records.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Sectioned departments for a jurisdiction slug, case-insensitively.
    pub fn department_sections(&self, jurisdiction: &str) -> Option<&[DepartmentSection]> {
        self.sections
            .get(&*normalize_slug(jurisdiction))
            .map(Arc::as_ref)
    }

    /// Jurisdictions that have a sectioned directory, in ascending order.
    pub fn jurisdictions(&self) -> Vec<&str> {
        self.sections.keys().map(String::as_str).collect()
    }

    /// Theme to render a state with, falling back to the configured default.
    pub fn theme_for(&self, slug: &str) -> Option<DesignTheme> {
        self.get(slug)
            .map(|s| s.effective_theme(self.config.default_theme))
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Findings recorded when this snapshot was validated (warnings and info).
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    pub fn index(&self) -> CatalogIndex {
        CatalogIndex {
            states: self.states.keys().cloned().collect(),
            jurisdictions: self.sections.keys().cloned().collect(),
        }
    }

    /// A new snapshot in which each record replaces (or adds) the entry under
    /// its slug. `self` is left unchanged.
    ///
    /// Record slugs are lowercased before insertion. The new snapshot is fully
    /// revalidated; on failure no snapshot is produced.
    pub fn with_overrides(&self, records: impl IntoIterator<Item = StateData>) -> RtiResult<Self> {
        let (states, overrides) = self.overlay(records);
        let next = Self::validated(self.config.clone(), states, self.sections.clone())?;
        tracing::debug!(overrides, "state catalog override snapshot built");
        Ok(next)
    }

    /// Every finding the snapshot `with_overrides(records)` would produce,
    /// without failing on them.
    pub fn overlay_report(&self, records: impl IntoIterator<Item = StateData>) -> ValidationReport {
        let (states, _) = self.overlay(records);
        Self::check(&self.config, &states, &self.sections)
    }

    fn overlay(
        &self,
        records: impl IntoIterator<Item = StateData>,
    ) -> (BTreeMap<String, Arc<StateData>>, usize) {
        let mut states = self.states.clone();
        let mut overrides = 0usize;
        for mut record in records {
            record.slug = normalize_slug(&record.slug).into_owned();
            tracing::debug!(slug = %record.slug, "overriding state record");
            states.insert(record.slug.clone(), Arc::new(record));
            overrides += 1;
        }
        (states, overrides)
    }

    /// Decode a backend payload and return a snapshot that prefers it.
    pub fn with_payload(&self, json: &str) -> RtiResult<Self> {
        let record = rti_core::payload::parse_state_payload(json, &self.config.validation)?;
        self.with_overrides([record])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn builtin() -> StateCatalog {
        StateCatalog::builtin(CatalogConfig::default()).unwrap()
    }

    #[test]
    fn builtin_content_is_valid() {
        let catalog = builtin();
        assert!(!catalog.report().has_errors());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn builtin_content_passes_strict_validation() {
        let mut cfg = CatalogConfig::default();
        cfg.validation.strict = true;
        StateCatalog::builtin(cfg).unwrap();
    }

    #[test]
    fn slugs_are_sorted() {
        assert_eq!(builtin().slugs(), vec!["nagaland", "telangana"]);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let catalog = builtin();
        let a = catalog.get("Telangana").unwrap();
        let b = catalog.get("telangana").unwrap();
        assert!(std::ptr::eq(a, b));
        assert!(catalog.get("delhi").is_none());
    }

    #[test]
    fn unpaired_jurisdictions_are_reported_as_info() {
        let catalog = builtin();
        let unpaired: Vec<_> = catalog
            .report()
            .with_code("sections.unpaired")
            .map(|f| f.subject.as_str())
            .collect();
        assert_eq!(unpaired, vec!["jammu-and-kashmir", "rajasthan"]);
    }

    #[test]
    fn theme_for_uses_configured_default() {
        let mut record = builtin().get("nagaland").unwrap().clone();
        record.slug = "goa".into();
        record.name = "Goa".into();
        record.design_theme = None;

        let cfg = CatalogConfig {
            default_theme: DesignTheme::Telangana,
            ..CatalogConfig::default()
        };
        let catalog =
            StateCatalog::from_parts(cfg, [record], Vec::<(String, Vec<DepartmentSection>)>::new())
                .unwrap();
        assert_eq!(catalog.theme_for("GOA"), Some(DesignTheme::Telangana));
        assert_eq!(catalog.theme_for("delhi"), None);
    }

    #[test]
    fn overrides_leave_source_untouched() {
        let base = builtin();
        let mut record = base.get("telangana").unwrap().clone();
        record.fee = Some("₹20".into());
        record.slug = "TELANGANA".into();

        let next = base.with_overrides([record]).unwrap();
        assert_eq!(next.get("telangana").unwrap().fee.as_deref(), Some("₹20"));
        assert_eq!(base.get("telangana").unwrap().fee.as_deref(), Some("₹10"));
        assert_eq!(next.slugs(), base.slugs());

        let a = base.get("nagaland").unwrap();
        let b = next.get("nagaland").unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn invalid_override_is_rejected() {
        let base = builtin();
        let mut record = base.get("nagaland").unwrap().clone();
        record.faqs.clear();
        assert_matches!(
            base.with_overrides([record]),
            Err(RtiError::InvalidCatalog { .. })
        );
    }

    #[test]
    fn mismatched_slug_in_parts_rejected() {
        let mut record = builtin().get("nagaland").unwrap().clone();
        record.slug = "Nagaland".into();
        let err = StateCatalog::from_parts(
            CatalogConfig::default(),
            [record],
            Vec::<(String, Vec<DepartmentSection>)>::new(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("state.slug_format"));
    }

    #[test]
    fn duplicate_slug_in_parts_rejected() {
        let record = builtin().get("nagaland").unwrap().clone();
        assert_matches!(
            StateCatalog::from_parts(
                CatalogConfig::default(),
                [record.clone(), record],
                Vec::<(String, Vec<DepartmentSection>)>::new(),
            ),
            Err(RtiError::Invariant(msg)) if msg.contains("nagaland")
        );
    }

    #[test]
    fn empty_catalog_rejected() {
        let err = StateCatalog::from_parts(
            CatalogConfig::default(),
            Vec::new(),
            Vec::<(String, Vec<DepartmentSection>)>::new(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("catalog.empty"));
    }

    #[test]
    fn builtin_report_matches_snapshot_report() {
        let report = StateCatalog::builtin_report(CatalogConfig::default()).unwrap();
        assert!(report.passes(true));
        assert_eq!(report.findings, builtin().report().findings);
    }

    #[test]
    fn report_parts_lists_every_defect() {
        let mut record = builtin().get("nagaland").unwrap().clone();
        record.hero.image = String::new();
        record.hero.cta = " ".into();
        let report = StateCatalog::report_parts(
            CatalogConfig::default(),
            [record],
            Vec::<(String, Vec<DepartmentSection>)>::new(),
        )
        .unwrap();

        let subjects: Vec<_> = report
            .with_code("state.empty_field")
            .map(|f| f.subject.as_str())
            .collect();
        assert_eq!(subjects, vec!["nagaland.hero.image", "nagaland.hero.cta"]);
        assert_eq!(report.failures(false), 2);
    }

    #[test]
    fn report_parts_still_rejects_duplicate_keys() {
        let record = builtin().get("nagaland").unwrap().clone();
        assert_matches!(
            StateCatalog::report_parts(
                CatalogConfig::default(),
                [record.clone(), record],
                Vec::<(String, Vec<DepartmentSection>)>::new(),
            ),
            Err(RtiError::Invariant(_))
        );
    }

    #[test]
    fn overlay_report_keeps_all_findings_and_source() {
        let base = builtin();
        let mut record = base.get("telangana").unwrap().clone();
        record.name = String::new();
        record.faqs.clear();

        let report = base.overlay_report([record]);
        assert_eq!(report.with_code("state.empty_field").count(), 1);
        assert_eq!(report.with_code("faq.missing").count(), 1);
        assert!(!report.passes(false));
        assert!(!base.get("telangana").unwrap().faqs.is_empty());
    }

    #[test]
    fn payload_overrides_builtin() {
        let base = builtin();
        let mut record = base.get("nagaland").unwrap().clone();
        record.commission = Some("Nagaland Information Commission, Kohima".into());
        let json = serde_json::to_string(&record).unwrap();

        let next = base.with_payload(&json).unwrap();
        assert_eq!(
            next.get("nagaland").unwrap().commission.as_deref(),
            Some("Nagaland Information Commission, Kohima")
        );
    }
}
