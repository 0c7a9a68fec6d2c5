//! Error taxonomy for record-store operations.

use std::fmt;

use thiserror::Error;

use crate::model::UserId;

/// Client-facing error codes for store failures (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Candidate record failed validation.
    InvalidInput,
    /// Referenced record does not exist.
    NotFound,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::InvalidInput => "INVALID_INPUT",
            ClientCode::NotFound => "NOT_FOUND",
        }
    }
}

/// The validity rule a candidate record broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    EmptyName,
    EmailMissingAt,
    AgeOutOfRange(i32),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::EmptyName => f.write_str("name must not be empty"),
            Violation::EmailMissingAt => f.write_str("email must contain '@'"),
            Violation::AgeOutOfRange(age) => {
                write!(f, "age must be between 1 and 149 (got {age})")
            }
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Failure of a store operation. Neither variant leaves the store modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("invalid user: {0}")]
    InvalidInput(Violation),
    #[error("user not found: id={0}")]
    NotFound(UserId),
}

impl StoreError {
    /// Map to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            StoreError::InvalidInput(_) => ClientCode::InvalidInput,
            StoreError::NotFound(_) => ClientCode::NotFound,
        }
    }
}

impl From<Violation> for StoreError {
    fn from(v: Violation) -> Self {
        StoreError::InvalidInput(v)
    }
}
