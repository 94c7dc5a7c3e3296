//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the enumeration contract.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

impl DomainError {
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
