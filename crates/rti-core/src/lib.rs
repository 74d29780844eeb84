//! rti-core
//!
//! Core types for the RTI state catalog:
//! - `StateData` and its nested records (hero, FAQs, process steps)
//! - `DepartmentSection` for sectioned department directories
//! - slug normalization for case-insensitive lookups
//! - construction-time validation with structured findings
//! - decoding of backend-shaped payloads

pub mod config;
pub mod errors;
pub mod model;
pub mod payload;
pub mod slug;
pub mod validate;

pub use crate::errors::{RtiError, RtiResult};

/// Convenience re-exports.
pub mod prelude {
    pub use crate::config::{validate_config, CatalogConfig, ValidationConfig};
    pub use crate::model::{
        flatten_sections, DepartmentSection, DesignTheme, ProcessStep, StateData, StateFaq,
        StateHero, StateProcess,
    };
    pub use crate::payload::{decode_state_payload, parse_state_payload};
    pub use crate::slug::{is_canonical_slug, normalize_slug};
    pub use crate::validate::{Finding, FindingLevel, ValidationReport};
    pub use crate::{RtiError, RtiResult};
}
