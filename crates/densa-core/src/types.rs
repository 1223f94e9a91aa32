//! Core type definitions for densa tensors.
//!
//! - Type aliases for tensor dimensions ([`Rank`], [`Shape`])
//! - Checked element counting ([`checked_numel`])
//!
//! # Examples
//!
//! ```
//! use densa_core::{checked_numel, Shape};
//!
//! let shape: Shape = Shape::from_slice(&[2, 3, 4]);
//! assert_eq!(checked_numel(&shape), Some(24));
//! ```

use smallvec::SmallVec;

// Re-export the actual Tensor implementation
pub use crate::dense::Tensor;

/// Type alias for tensor rank (number of dimensions).
///
/// # Examples
///
/// ```
/// use densa_core::{Rank, Tensor};
///
/// let matrix = Tensor::<f64>::zeros(&[2, 3]);
/// let rank: Rank = matrix.rank();
/// assert_eq!(rank, 2);
/// ```
pub type Rank = usize;

/// Shape descriptor using SmallVec to avoid heap allocation for common cases.
///
/// Up to 6 dimensions are stored inline; higher ranks spill to the heap.
pub type Shape = SmallVec<[usize; 6]>;

/// Number of elements described by `shape`, or `None` if the product
/// does not fit in a `usize`.
///
/// The empty shape describes a scalar and yields 1. Any zero extent yields 0
/// regardless of the other extents, so `[0, usize::MAX, 2]` is not an overflow.
///
/// # Examples
///
/// ```
/// use densa_core::checked_numel;
///
/// assert_eq!(checked_numel(&[3, 4, 5]), Some(60));
/// assert_eq!(checked_numel(&[]), Some(1));
/// assert_eq!(checked_numel(&[0, 5]), Some(0));
/// assert_eq!(checked_numel(&[usize::MAX, 2]), None);
/// ```
pub fn checked_numel(shape: &[usize]) -> Option<usize> {
    if shape.contains(&0) {
        return Some(0);
    }
    shape
        .iter()
        .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
}
