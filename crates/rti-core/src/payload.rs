//! Decoding of backend-shaped state payloads.
//!
//! The content backend serves `StateData` with the same field names as the
//! static fallback. A decoded payload is validated against its own slug before
//! it may replace a fallback record.

use crate::config::ValidationConfig;
use crate::errors::RtiResult;
use crate::model::StateData;
use crate::slug::normalize_slug;
use crate::validate::{validate_state, ValidationReport};

/// Decode a single state payload without validating its content.
///
/// The slug is normalized to lowercase so a payload that spells it
/// `"Telangana"` still lands under the canonical key.
pub fn decode_state_payload(json: &str) -> RtiResult<StateData> {
    let mut state: StateData = serde_json::from_str(json)?;
    state.slug = normalize_slug(&state.slug).into_owned();
    Ok(state)
}

/// Decode and validate a single state payload.
pub fn parse_state_payload(json: &str, cfg: &ValidationConfig) -> RtiResult<StateData> {
    let state = decode_state_payload(json)?;

    let mut report = ValidationReport::new();
    validate_state(&state.slug, &state, cfg, &mut report);
    report.finish(cfg.strict)?;

    tracing::debug!(slug = %state.slug, "decoded state payload");
    Ok(state)
}
