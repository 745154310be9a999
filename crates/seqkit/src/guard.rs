//! # Precondition Guards
//!
//! Argument validation helpers shared by the operators.
//!
//! - Reject bad static configuration before any element is pulled
//! - Always report `SeqError::InvalidArgument` with the parameter name
//! - Never panic

use crate::SeqError;

/// Fail with `InvalidArgument` when `violated` is true.
///
/// `name` is the parameter being checked and `message` describes the
/// precondition it broke.
pub fn require_argument(
    name: &'static str,
    violated: bool,
    message: &str,
) -> Result<(), SeqError> {
    if violated {
        tracing::debug!(argument = name, "rejected argument: {}", message);
        return Err(SeqError::InvalidArgument {
            name,
            message: message.to_string(),
        });
    }
    Ok(())
}

/// Unwrap a required value, failing with `InvalidArgument` when it is absent.
pub fn require_present<T>(name: &'static str, value: Option<T>) -> Result<T, SeqError> {
    match value {
        Some(v) => Ok(v),
        None => {
            tracing::debug!(argument = name, "required value is absent");
            Err(SeqError::InvalidArgument {
                name,
                message: "value must be present".to_string(),
            })
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
