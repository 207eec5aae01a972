//! Error types for the listing pipeline.

use thiserror::Error;

/// Result type for normalization and filter parsing.
pub type Result<T> = std::result::Result<T, ListingError>;

/// Listing pipeline errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ListingError {
    /// A raw record is missing one of `id`, `title` or the listing type.
    /// Fatal to that record only; the batch caller decides what happens next.
    #[error("Malformed record (id {id:?}): missing required field `{field}`")]
    MalformedRecord { id: Option<i64>, field: &'static str },

    /// A filter parameter could not be understood at the form boundary
    #[error("Invalid filter value for `{key}`: {value:?}")]
    InvalidFilterValue { key: String, value: String },
}

impl ListingError {
    pub(crate) fn malformed(id: Option<i64>, field: &'static str) -> Self {
        Self::MalformedRecord { id, field }
    }

    pub(crate) fn invalid_filter(key: &str, value: &str) -> Self {
        Self::InvalidFilterValue {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}
