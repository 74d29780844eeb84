//! Configuration structures for rti-core.
//!
//! Configuration is passed explicitly by the caller (CLI flags, application
//! setup). The core crate does not read environment variables.

use crate::errors::{RtiError, RtiResult};
use crate::model::DesignTheme;

/// Global configuration container.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    /// Theme applied to records that leave `designTheme` unset.
    pub default_theme: DesignTheme,
    pub validation: ValidationConfig,
}

/// Validation-related configuration.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Treat warnings as errors.
    pub strict: bool,
    /// Warn when a state lists the same department twice.
    pub check_duplicate_departments: bool,
    /// Warn when a jurisdiction's sectioned departments are not a subset of
    /// its flat department list.
    pub check_section_drift: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            strict: false,
            check_duplicate_departments: true,
            check_section_drift: true,
        }
    }
}

/// Validate a full configuration object.
pub fn validate_config(cfg: &CatalogConfig) -> RtiResult<()> {
    let v = &cfg.validation;
    if v.strict && !v.check_duplicate_departments && !v.check_section_drift {
        return Err(RtiError::invalid_argument(
            "strict validation requires at least one warning check to be enabled",
        ));
    }
    Ok(())
}
