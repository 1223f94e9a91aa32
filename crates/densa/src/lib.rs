//! # densa
//!
//! Fixed-shape, contiguous, row-major dense tensors.
//!
//! This is the **meta crate** that re-exports the densa components for
//! convenient access.
//!
//! ## Quick Start
//!
//! ```
//! use densa::prelude::*;
//!
//! let tensor = Tensor::<f32>::new(&[4, 4]);
//! assert_eq!(tensor.shape(), &[4, 4]);
//! assert_eq!(tensor.len(), 16);
//!
//! let zeros = Tensor::<f32>::try_zeros(&[2, 2])?;
//! assert_eq!(zeros.as_slice()[2], 0.0);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Components
//!
//! ### Core Tensor Container ([`core`])
//!
//! The [`Tensor`](core::Tensor) type, its shape descriptor and error type.
//!
//! ```
//! use densa::core::{checked_numel, Tensor};
//!
//! let tensor = Tensor::from_elem(&[1, 3, 2], 1u8);
//! assert_eq!(Some(tensor.len()), checked_numel(tensor.shape()));
//! ```

#![deny(warnings)]

// Re-export all components
pub use densa_core as core;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use densa::prelude::*;
    //!
    //! let tensor = Tensor::<f64>::zeros(&[10, 20, 30]);
    //! assert_eq!(tensor.rank(), 3);
    //! ```

    pub use crate::core::{Shape, Tensor, TensorError};
}
