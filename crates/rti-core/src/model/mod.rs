//! Data model for the RTI state catalog.
//!
//! These types mirror the payload served by the content backend so the static
//! fallback and a live response decode into the same structures:
//! - field names are camelCase on the wire (`rtiPortalUrl`, `designTheme`)
//! - optional fields are omitted when absent rather than sent as `null`
//!
//! Models are plain data. Invariants (non-empty strings, contiguous process
//! steps, slug/key agreement) are checked by `crate::validate`, not enforced
//! by constructors.

mod section;
mod state;

pub use section::{flatten_sections, DepartmentSection};
pub use state::{DesignTheme, ProcessStep, StateData, StateFaq, StateHero, StateProcess};
