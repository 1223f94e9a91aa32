//! Dense tensor type definition and accessors
//!
//! This module defines the core `Tensor<T>` type and its read-only and raw
//! buffer accessors. Constructors live in the `creation` module.

use crate::types::Shape;

/// Fixed-shape dense tensor with contiguous row-major storage
///
/// The tensor exclusively owns a single `Vec<T>` buffer whose length always
/// equals the product of the shape extents (1 for the empty shape). The shape
/// is fixed at construction and there is no way to resize the buffer.
///
/// # Type Parameters
///
/// * `T` - The element type (any `Clone` value, typically `f32`, `f64` or an integer)
///
/// # Memory Layout
///
/// Elements are stored C-contiguous (row-major): the last dimension varies
/// fastest.
///
/// # Examples
///
/// ```
/// use densa_core::Tensor;
///
/// let tensor = Tensor::<f32>::new(&[3, 4, 5]);
/// assert_eq!(tensor.shape(), &[3, 4, 5]);
/// assert_eq!(tensor.len(), 60);
/// assert_eq!(tensor.rank(), 3);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Tensor<T> {
    /// Row-major element buffer, `data.len() == product(shape)`
    pub(crate) data: Vec<T>,
    /// Dimension extents as given at construction
    pub(crate) shape: Shape,
}

impl<T> Tensor<T> {
    /// Get the shape of this tensor
    ///
    /// Reflects exactly the extents passed at construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use densa_core::Tensor;
    ///
    /// let tensor = Tensor::<f32>::new(&[1, 3, 2]);
    /// assert_eq!(tensor.shape(), &[1, 3, 2]);
    /// ```
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the rank (number of dimensions) of this tensor
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Get the total number of elements
    ///
    /// Always equal to the product of the shape extents and to the buffer length.
    ///
    /// # Examples
    ///
    /// ```
    /// use densa_core::Tensor;
    ///
    /// let tensor = Tensor::<f32>::new(&[4, 4]);
    /// assert_eq!(tensor.len(), 16);
    ///
    /// let scalar = Tensor::<i32>::new(&[]);
    /// assert_eq!(scalar.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the tensor has zero elements (some extent is zero)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check if this is a rank-0 tensor
    pub fn is_scalar(&self) -> bool {
        self.shape.is_empty()
    }

    /// Get the contiguous buffer in row-major order
    ///
    /// # Examples
    ///
    /// ```
    /// use densa_core::Tensor;
    ///
    /// let tensor = Tensor::<f32>::zeros(&[2, 2]);
    /// assert_eq!(tensor.as_slice()[2], 0.0);
    /// ```
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the contiguous buffer mutably
    ///
    /// This is the only way to modify elements after construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use densa_core::Tensor;
    ///
    /// let mut tensor = Tensor::<i32>::zeros(&[2, 3]);
    /// tensor.as_mut_slice()[5] = 7;
    /// assert_eq!(tensor.as_slice(), &[0, 0, 0, 0, 0, 7]);
    /// ```
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Raw pointer to the first element of the buffer
    ///
    /// The pointer is valid for `len()` reads for as long as the tensor is
    /// alive and not mutably borrowed. For an empty tensor it is dangling
    /// but non-null, like [`Vec::as_ptr`].
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Raw mutable pointer to the first element of the buffer
    ///
    /// Same validity rules as [`as_ptr`](Self::as_ptr). The buffer is never
    /// reallocated while the tensor exists, so the pointer only dies with it.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    /// Get the number of bytes used by the tensor data
    ///
    /// # Examples
    ///
    /// ```
    /// use densa_core::Tensor;
    ///
    /// let tensor = Tensor::<f64>::zeros(&[100, 100]);
    /// assert_eq!(tensor.size_bytes(), 100 * 100 * std::mem::size_of::<f64>());
    /// ```
    pub fn size_bytes(&self) -> usize {
        self.len() * std::mem::size_of::<T>()
    }

    /// Check if two tensors have the same shape
    ///
    /// Element types may differ.
    pub fn same_shape<U>(&self, other: &Tensor<U>) -> bool {
        self.shape() == other.shape()
    }

    /// Consume the tensor and return its buffer in row-major order
    ///
    /// No copy is made.
    ///
    /// # Examples
    ///
    /// ```
    /// use densa_core::Tensor;
    ///
    /// let tensor = Tensor::from_vec(vec![1, 2, 3, 4], &[2, 2])?;
    /// assert_eq!(tensor.into_vec(), vec![1, 2, 3, 4]);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}
