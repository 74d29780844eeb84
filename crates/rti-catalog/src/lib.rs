//! rti-catalog
//!
//! Built-in fallback content for state RTI pages, served without touching a
//! backend. The content is validated once on first access and is read-only
//! afterwards.
//!
//! ```
//! let telangana = rti_catalog::get_state_by_slug("Telangana").unwrap();
//! assert_eq!(telangana.fee.as_deref(), Some("₹10"));
//! assert!(rti_catalog::get_state_by_slug("atlantis").is_none());
//! ```

mod catalog;
mod data;

pub use crate::catalog::{CatalogIndex, StateCatalog};

use rti_core::model::{DepartmentSection, StateData};

/// Look up a built-in state by slug, ignoring case.
pub fn get_state_by_slug(slug: &str) -> Option<&'static StateData> {
    StateCatalog::global().get(slug)
}

/// Every built-in state slug, in ascending order.
pub fn get_all_state_slugs() -> Vec<&'static str> {
    StateCatalog::global().slugs()
}

/// Built-in department sections for a jurisdiction slug, ignoring case.
pub fn department_sections(jurisdiction: &str) -> Option<&'static [DepartmentSection]> {
    StateCatalog::global().department_sections(jurisdiction)
}
