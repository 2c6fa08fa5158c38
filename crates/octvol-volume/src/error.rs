//! Error types for building volumes from definitions.

use thiserror::Error;

/// Errors from validating or parsing a volume definition.
///
/// Containment queries never fail; these only come from the
/// definition layer in [`crate::def`].
#[derive(Error, Debug)]
pub enum VolumeError {
    /// A coordinate or dimension is NaN or infinite.
    #[error("non-finite value in `{0}`")]
    NonFinite(&'static str),

    /// A radius, side length or diameter is negative.
    #[error("`{field}` must be non-negative, got {value}")]
    NegativeDimension {
        /// Name of the offending field.
        field: &'static str,
        /// The value given.
        value: f64,
    },

    /// The definition is not valid JSON for any volume kind.
    #[error("invalid volume definition: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for volume definition operations.
pub type Result<T> = std::result::Result<T, VolumeError>;
