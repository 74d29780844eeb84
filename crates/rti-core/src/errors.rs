//! Error type shared by the RTI catalog crates.
//!
//! A lookup miss is never an error: accessors return `Option`. Errors only
//! arise while building or validating a catalog snapshot, or while decoding a
//! backend payload.

use thiserror::Error;

pub type RtiResult<T> = Result<T, RtiError>;

#[derive(Debug, Error)]
pub enum RtiError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invariant violated: {0}")]
    Invariant(String),

    /// A catalog snapshot failed validation.
    #[error("invalid catalog: {errors} error(s); first: {summary}")]
    InvalidCatalog { errors: usize, summary: String },

    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl RtiError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::Invariant(msg.into())
    }
}
