use crate::errors::{IssueError, PatternError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Pattern error: {0}")]
    Pattern(#[from] PatternError),

    #[error("Issue error: {0}")]
    Issue(#[from] IssueError),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Brand not found: {0}")]
    BrandNotFound(String),

    #[error("Issuer not found: {0}")]
    IssuerNotFound(String),

    #[error("Issuer prefix {issuer_prefix} does not match brand prefix {brand_prefix}")]
    PrefixMismatch {
        brand_prefix: String,
        issuer_prefix: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}
