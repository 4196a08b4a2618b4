//! Error types for parsing the command line & setting up the algorithms' data.

use thiserror::Error;

/// Reasons for not running any algorithm and showing the usage message instead
#[derive(Debug, Error, PartialEq)]
pub enum UsageError {
    /// No size argument was given
    #[error("missing the number of items")]
    Missing,

    /// The size argument is not a non-negative integer
    #[error("'{0}' is not a number of items")]
    NotANumber(String),

    /// Zero items leaves nothing to measure
    #[error("the number of items must be greater than zero")]
    Zero,
}

/// Fatal errors while building the [crate::environment::Environment]
#[derive(Debug, Error, PartialEq)]
pub enum SetupError {
    /// The requested number of items could not be allocated
    #[error("unable to allocate {items} items")]
    Allocation { items: usize },

    /// Range-sum query bounds outside of `from <= to <= len`
    #[error("invalid range-sum query [{from}, {to}) for an array of {len} items")]
    InvalidRange { from: usize, to: usize, len: usize },
}
