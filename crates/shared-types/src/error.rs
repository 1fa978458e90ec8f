use serde::{Deserialize, Serialize};
use std::fmt;

/// Error payload the registration endpoint returns on non-success responses.
///
/// The endpoint contract guarantees at least a human-readable `message`;
/// any additional fields in the body are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ErrorResponse {}
