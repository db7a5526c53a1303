//! Error types shared by both solvers.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SolverError>;

/// Errors raised before a search loop starts.
///
/// The loops themselves are total over validated state; a run that never
/// improves simply ends at its budget and is not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// A problem or solver parameter violates a precondition.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Input supplied by the caller could not be parsed.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

impl SolverError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        SolverError::InvalidConfiguration(msg.into())
    }

    pub(crate) fn input(msg: impl Into<String>) -> Self {
        SolverError::MalformedInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_message() {
        let err = SolverError::config("population_size must be even");
        assert_eq!(
            err.to_string(),
            "invalid configuration: population_size must be even"
        );

        let err = SolverError::input("`x` is not an integer");
        assert_eq!(err.to_string(), "malformed input: `x` is not an integer");
    }
}
