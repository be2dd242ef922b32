//! Errors raised by domain rules.
//!
//! Lookups and uniqueness live in the service layer, so only value-level
//! failures appear here.

use thiserror::Error;

use crate::dni::DniError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field value broke a rule; the message is user facing.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Password error: {0}")]
    Password(String),

    /// Hashing or catalog decoding failed.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn password(msg: impl Into<String>) -> Self {
        DomainError::Password(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        DomainError::Internal(msg.into())
    }
}

impl From<DniError> for DomainError {
    fn from(err: DniError) -> Self {
        DomainError::Validation(err.message("dni"))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
