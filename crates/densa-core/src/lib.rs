//! # densa-core
//!
//! Fixed-shape, contiguous, row-major dense tensor container.
//!
//! - **Dense tensor** ([`Tensor`]) owning a single buffer plus its shape
//! - **Shape descriptor** ([`Shape`]) with checked element counting ([`checked_numel`])
//! - **Errors** ([`TensorError`]) for overflowing shapes, mismatched buffers and failed allocations
//!
//! There is deliberately no arithmetic, indexing, slicing or reshaping here:
//! a tensor is built once with a fixed shape and read or written through its
//! raw buffer.
//!
//! ## Quick Start
//!
//! ```
//! use densa_core::Tensor;
//!
//! // Default-filled tensor from a literal shape
//! let tensor = Tensor::<f32>::new(&[3, 4, 5]);
//! assert_eq!(tensor.shape(), &[3, 4, 5]);
//! assert_eq!(tensor.len(), 60);
//!
//! // Zeros, ones and an explicit fill value
//! let zeros = Tensor::<f64>::zeros(&[2, 2]);
//! let ones = Tensor::<f64>::ones(&[2, 2]);
//! let sevens = Tensor::from_elem(&[2, 2], 7i32);
//! assert_eq!(zeros.as_slice()[2], 0.0);
//! assert_eq!(ones.as_slice()[3], 1.0);
//! assert_eq!(sevens.as_slice(), &[7, 7, 7, 7]);
//! ```
//!
//! ## Memory Layout
//!
//! The buffer is C-contiguous (row-major) and its length is always the
//! product of the shape extents. The empty shape is a scalar with one
//! element; any zero extent gives an empty buffer while keeping the shape.
//!
//! ```
//! use densa_core::Tensor;
//!
//! let scalar = Tensor::<i32>::new(&[]);
//! assert_eq!(scalar.len(), 1);
//!
//! let empty = Tensor::<i32>::new(&[0, 5]);
//! assert_eq!(empty.len(), 0);
//! assert_eq!(empty.shape(), &[0, 5]);
//! ```
//!
//! ## Error Handling
//!
//! The `try_*` constructors and [`Tensor::from_vec`] return
//! [`Result`]`<Tensor<T>, TensorError>`. The infallible constructors panic
//! when the shape's element count overflows `usize`.
//!
//! ```
//! use densa_core::{Tensor, TensorError};
//!
//! let result = Tensor::<f32>::try_zeros(&[usize::MAX, 2]);
//! assert!(matches!(result, Err(TensorError::ShapeOverflow { .. })));
//!
//! let result = Tensor::from_vec(vec![1.0f32; 5], &[2, 3]);
//! assert!(matches!(result, Err(TensorError::LengthMismatch { .. })));
//! ```
//!
//! ## Logging
//!
//! Allocations and rejected shapes are reported through the `log` facade
//! at `trace` and `debug` level. Nothing is printed unless the application
//! installs a logger.

#![deny(warnings)]

pub mod dense;
pub mod error;
pub mod types;


pub use error::{Result, TensorError};
pub use types::{checked_numel, Rank, Shape, Tensor};
