//! Dense tensor implementation
//!
//! The `Tensor<T>` type is split across sub-modules by concern.

// Core type definition and accessors
pub mod types;

// Constructors
mod creation;

// Trait implementations
mod tensor_traits;

pub use types::Tensor;
