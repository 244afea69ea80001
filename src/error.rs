//! Error type for vector construction and arithmetic.

use std::error::Error as StdError;
use std::fmt;

/// Violations detected by vector constructors, builders, and binary
/// operations. Every variant is a caller-correctable precondition failure,
/// raised synchronously at the point of violation; nothing is retried or
/// logged internally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VectorError {
    /// A vector of size zero was requested; vectors hold at least one element.
    InvalidSize(usize),
    /// An index-to-element mapping does not cover `0..expected` densely.
    NonContiguousIndices {
        /// Number of elements the mapping was expected to cover.
        expected: usize,
        /// First index of `0..expected` absent from the mapping.
        missing: usize,
    },
    /// A binary operation was invoked on vectors of different sizes.
    SizeMismatch {
        /// Size of the receiver.
        left: usize,
        /// Size of the other operand.
        right: usize,
    },
    /// Indexed access outside `[0, size)`.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Size of the vector.
        size: usize,
    },
    /// A builder was finalized before every index was populated.
    IncompleteVector {
        /// Declared size of the vector under construction.
        size: usize,
        /// First index still missing an element.
        missing: usize,
    },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::InvalidSize(size) => {
                write!(f, "vector size must be at least 1 but was {size}")
            }
            VectorError::NonContiguousIndices { expected, missing } => {
                write!(
                    f,
                    "indices must cover 0..{expected} densely but {missing} is absent"
                )
            }
            VectorError::SizeMismatch { left, right } => {
                write!(f, "equal sizes expected but {left} != {right}")
            }
            VectorError::IndexOutOfRange { index, size } => {
                write!(f, "index {index} out of range for vector of size {size}")
            }
            VectorError::IncompleteVector { size, missing } => {
                write!(
                    f,
                    "vector of size {size} is still missing an element at index {missing}"
                )
            }
        }
    }
}

impl StdError for VectorError {}
