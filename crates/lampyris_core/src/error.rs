//! Error types for lampyris_core.
//!
//! Every fallible operation validates before mutating, so an `Err` always means
//! the optimizer is exactly as it was before the call.

use lampyris_data::ParseFunctionKeyError;
use thiserror::Error;

/// Main error type for swarm operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SwarmError {
    /// Function identifier is not one of the built-in objectives
    #[error("Unknown function key: {0}")]
    UnknownFunctionKey(String),

    /// Parameter outside its admissible range
    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Result type alias for lampyris_core operations.
pub type Result<T> = std::result::Result<T, SwarmError>;

impl SwarmError {
    #[must_use]
    pub fn invalid(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter { name, value }
    }
}

impl From<ParseFunctionKeyError> for SwarmError {
    fn from(err: ParseFunctionKeyError) -> Self {
        Self::UnknownFunctionKey(err.0)
    }
}
