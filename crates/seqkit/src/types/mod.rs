//! # Core Type Definitions
//!
//! Shared types for every operator family:
//! - Error type (`SeqError`) and the crate `Result` alias
//! - Argument positions (`Position`) used to report which input ran long
//!
//! ## Error Guarantees
//!
//! - Errors are raised at the point of violation and never retried or swallowed
//! - Lazy operators report errors on the pull that detects them
//! - No operator panics on caller input

use std::fmt;
use thiserror::Error;

// =============================================================================
// ARGUMENT POSITION
// =============================================================================

/// Position of an input sequence in a multi-sequence combinator call.
///
/// `First` is the leftmost argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Position {
    First,
    Second,
    Third,
    Fourth,
}

impl Position {
    /// Map a zero-based argument index to its position.
    ///
    /// Returns `None` for indices past the widest combinator (four inputs).
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::First),
            1 => Some(Self::Second),
            2 => Some(Self::Third),
            3 => Some(Self::Fourth),
            _ => None,
        }
    }

    /// Get the zero-based argument index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
            Self::Fourth => 3,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
            Self::Fourth => "fourth",
        };
        f.write_str(name)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised by sequence operators.
///
/// - `InvalidArgument`: bad static configuration (zero batch size, zero step, missing value)
/// - `LengthMismatch`: a strict combinator saw inputs of unequal length
/// - `EmptyInput`: an extremum operator was given zero elements
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// A required argument violated its precondition.
    #[error("Invalid argument `{name}`: {message}")]
    InvalidArgument {
        /// The name of the offending parameter.
        name: &'static str,
        /// What was wrong with it.
        message: String,
    },

    /// Inputs to a strict combinator had different lengths.
    #[error("Length mismatch: the {longer} sequence has more elements than the others")]
    LengthMismatch {
        /// The first input that still had an element when another was exhausted.
        longer: Position,
    },

    /// The operator needs at least one element.
    #[error("Sequence contains no elements")]
    EmptyInput,

    /// Configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T, E = SeqError> = std::result::Result<T, E>;

// =============================================================================
// TESTS
// =============================================================================
