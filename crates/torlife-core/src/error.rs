//! Error types for grid construction.

use std::error::Error;
use std::fmt;

/// Errors from building a grid.
///
/// Construction validates everything up front, so these are the only
/// recoverable failures in the engine. Stepping and reading a valid grid
/// cannot fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A construction parameter is outside its valid domain: a life ratio
    /// outside `[0, 1]`, a zero grid size, or a malformed initial-state
    /// matrix.
    InvalidParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Human-readable description of what was wrong.
        reason: String,
    },
}

impl GridError {
    /// Shorthand for [`GridError::InvalidParameter`].
    pub fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }

    /// Name of the parameter that failed validation.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidParameter { parameter, .. } => parameter,
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { parameter, reason } => {
                write!(f, "invalid parameter '{parameter}': {reason}")
            }
        }
    }
}

impl Error for GridError {}
