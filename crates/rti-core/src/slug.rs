//! Slug normalization.
//!
//! Lookups are case-insensitive: callers may pass `"Telangana"` or
//! `"NAGALAND"` from a URL segment. The input is lowercased and otherwise
//! used verbatim, so `" telangana"` does not match.

use std::borrow::Cow;

/// Lowercase a lookup key. Borrows when the input is lowercase ASCII.
pub fn normalize_slug(input: &str) -> Cow<'_, str> {
    if input.is_ascii() && !input.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Borrowed(input)
    } else {
        Cow::Owned(input.to_lowercase())
    }
}

/// Returns true if `slug` is a canonical catalog key: non-empty, made of
/// `[a-z0-9-]`, and not starting or ending with a hyphen.
pub fn is_canonical_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
