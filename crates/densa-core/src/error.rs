//! Error types for tensor construction.

use std::collections::TryReserveError;
use thiserror::Error;

/// Errors raised while building a [`Tensor`](crate::Tensor).
#[derive(Error, Debug)]
pub enum TensorError {
    #[error("Shape {shape:?} overflows: element count exceeds usize::MAX")]
    ShapeOverflow { shape: Vec<usize> },

    #[error("Shape {shape:?} requires {expected} elements, but got {actual}")]
    LengthMismatch {
        shape: Vec<usize>,
        expected: usize,
        actual: usize,
    },

    #[error("Buffer allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Result alias used throughout densa-core.
pub type Result<T> = std::result::Result<T, TensorError>;
