//! # Lazy sequences with a chainable wrapper
//!
//! This library provides a small set of lazy sequence generators and a thin
//! wrapper that chains lazy transformations over any iterable and finishes
//! them with an eager terminal operation.
//!
//! ## Components
//!
//! 1. **Generators**: free functions returning single-pass iterators
//!    (`concat`, `cycle`, `infinity`, `range`, `repeat`, `zip`)
//! 2. **Wrap**: an immutable adapter around one source. Lazy methods stack
//!    new adapters, terminal methods drain the chain exactly once.
//!
//! Nothing is pulled from a source until a terminal operation runs.
//!
//! ## Usage Example
//!
//! ```
//! use seqwrap::Wrap;
//!
//! let evens = Wrap::naturals::<i64>()
//!     .filter(|n, _| n % 2 == 0)
//!     .take(4)
//!     .join(None);
//! assert_eq!(evens, "0,2,4,6");
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules
pub mod generators; // Lazy sequence primitives
pub mod wrap;       // Chainable wrapper

// Re-exports for convenience
pub use generators::{Append, Concat, Cycle, Infinity, Repeat, Step, StepRange, Zip, ZipAll};
pub use wrap::{Filter, MapEntry, Narrow, Seed, TakeWhile, Wrap};

use thiserror::Error;

/// Errors raised by terminal operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// An element handed to an argument-less `to_map` is not a key/value pair
    #[error("{operation}: iterator value {value} is not an entry object")]
    InvalidShape {
        /// Operation that rejected the element
        operation: &'static str,
        /// `Debug` rendering of the offending element
        value: String,
    },

    /// `reduce` without a seed reached the end of an empty sequence
    #[error("{operation} of empty sequence with no initial value")]
    EmptySequence {
        /// Operation that found the sequence empty
        operation: &'static str,
    },
}

impl SequenceError {
    /// Helper for constructing shape errors from any debuggable element.
    pub fn invalid_shape(operation: &'static str, value: &impl std::fmt::Debug) -> Self {
        SequenceError::InvalidShape {
            operation,
            value: format!("{:?}", value),
        }
    }
}

/// Result alias used by fallible terminal operations.
pub type Result<T> = std::result::Result<T, SequenceError>;

/// Wrap any iterable without consuming it.
///
/// Shorthand for [`Wrap::new`].
pub fn wrap<S: IntoIterator>(sequence: S) -> Wrap<S::IntoIter> {
    Wrap::new(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_shape_message_names_value() {
        let err = SequenceError::invalid_shape("to_map", &vec!["Foo"]);
        assert_eq!(
            err.to_string(),
            "to_map: iterator value [\"Foo\"] is not an entry object"
        );
    }

    #[test]
    fn test_empty_sequence_message_names_operation() {
        let err = SequenceError::EmptySequence { operation: "reduce" };
        assert_eq!(
            err.to_string(),
            "reduce of empty sequence with no initial value"
        );
    }
}
