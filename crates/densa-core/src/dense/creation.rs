//! Tensor creation and initialization methods
//!
//! Every constructor allocates exactly one buffer of `product(shape)` elements.
//! The `try_*` variants report shape overflow and allocation failure as
//! [`TensorError`]; the plain variants panic on overflow and abort on
//! allocation failure, like `Vec`.

use super::types::Tensor;
use crate::error::{Result, TensorError};
use crate::types::{checked_numel, Shape};
use scirs2_core::numeric::{One, Zero};

/// Element count for `shape`, or the overflow error.
fn numel_for(shape: &[usize]) -> Result<usize> {
    checked_numel(shape).ok_or_else(|| {
        log::debug!("rejecting shape {:?}: element count overflows usize", shape);
        TensorError::ShapeOverflow {
            shape: shape.to_vec(),
        }
    })
}

impl<T> Tensor<T>
where
    T: Clone,
{
    /// Create a tensor with every element set to `value`, reporting failures
    ///
    /// # Errors
    ///
    /// - [`TensorError::ShapeOverflow`] if the element count exceeds `usize::MAX`
    /// - [`TensorError::Allocation`] if the buffer cannot be reserved
    ///
    /// # Examples
    ///
    /// ```
    /// use densa_core::{Tensor, TensorError};
    ///
    /// let tensor = Tensor::try_from_elem(&[2, 3], 5u8)?;
    /// assert!(tensor.as_slice().iter().all(|&x| x == 5));
    ///
    /// let err = Tensor::try_from_elem(&[usize::MAX, 2], 0u8).unwrap_err();
    /// assert!(matches!(err, TensorError::ShapeOverflow { .. }));
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn try_from_elem(shape: &[usize], value: T) -> Result<Self> {
        let len = numel_for(shape)?;
        log::trace!("allocating tensor {:?} ({} elements)", shape, len);

        let mut data = Vec::new();
        data.try_reserve_exact(len)?;
        data.resize(len, value);

        Ok(Self {
            data,
            shape: Shape::from_slice(shape),
        })
    }

    /// Create a tensor with every element set to `value`
    ///
    /// # Panics
    ///
    /// Panics if the product of `shape` overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use densa_core::Tensor;
    ///
    /// let tensor = Tensor::from_elem(&[2, 3], 5.0);
    /// assert_eq!(tensor.len(), 6);
    /// assert!(tensor.as_slice().iter().all(|&x| x == 5.0));
    /// ```
    pub fn from_elem(shape: &[usize], value: T) -> Self {
        let len = match checked_numel(shape) {
            Some(len) => len,
            None => panic!("Shape {:?} overflows: element count exceeds usize::MAX", shape),
        };
        log::trace!("allocating tensor {:?} ({} elements)", shape, len);

        Self {
            data: vec![value; len],
            shape: Shape::from_slice(shape),
        }
    }

    /// Create a tensor from a vector with given shape
    ///
    /// The vector is adopted as the buffer without copying.
    ///
    /// # Arguments
    ///
    /// * `vec` - Flattened data in row-major order
    /// * `shape` - Target shape
    ///
    /// # Errors
    ///
    /// [`TensorError::LengthMismatch`] if `vec.len()` differs from the
    /// element count of `shape`, [`TensorError::ShapeOverflow`] if that
    /// count overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use densa_core::Tensor;
    ///
    /// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    /// let tensor = Tensor::from_vec(data, &[2, 3])?;
    /// assert_eq!(tensor.shape(), &[2, 3]);
    /// assert_eq!(tensor.as_slice()[4], 5.0);
    ///
    /// assert!(Tensor::from_vec(vec![1.0; 5], &[2, 3]).is_err());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn from_vec(vec: Vec<T>, shape: &[usize]) -> Result<Self> {
        let expected = numel_for(shape)?;
        if vec.len() != expected {
            log::debug!(
                "rejecting buffer of {} elements for shape {:?}",
                vec.len(),
                shape
            );
            return Err(TensorError::LengthMismatch {
                shape: shape.to_vec(),
                expected,
                actual: vec.len(),
            });
        }

        Ok(Self {
            data: vec,
            shape: Shape::from_slice(shape),
        })
    }
}

impl<T> Tensor<T>
where
    T: Clone + Default,
{
    /// Create a tensor filled with `T::default()`
    ///
    /// Accepts a slice or an inline array literal for the shape.
    ///
    /// # Panics
    ///
    /// Panics if the product of `shape` overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use densa_core::Tensor;
    ///
    /// let tensor = Tensor::<f32>::new(&[4, 4]);
    /// assert_eq!(tensor.len(), 16);
    /// assert!(tensor.as_slice().iter().all(|&x| x == 0.0));
    ///
    /// let dims = vec![3, 4, 5];
    /// let from_vec_shape = Tensor::<i32>::new(&dims);
    /// assert_eq!(from_vec_shape.shape(), dims.as_slice());
    /// ```
    pub fn new(shape: &[usize]) -> Self {
        Self::from_elem(shape, T::default())
    }

    /// Fallible form of [`new`](Self::new)
    pub fn try_new(shape: &[usize]) -> Result<Self> {
        Self::try_from_elem(shape, T::default())
    }
}

impl<T> Tensor<T>
where
    T: Clone + Zero,
{
    /// Create a tensor of zeros
    ///
    /// Equivalent to `Tensor::from_elem(shape, T::zero())`.
    ///
    /// # Panics
    ///
    /// Panics if the product of `shape` overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use densa_core::Tensor;
    ///
    /// let tensor = Tensor::<f32>::zeros(&[2, 2]);
    /// assert_eq!(tensor.len(), 4);
    /// assert_eq!(tensor.as_slice()[2], 0.0);
    /// ```
    pub fn zeros(shape: &[usize]) -> Self {
        Self::from_elem(shape, T::zero())
    }

    /// Fallible form of [`zeros`](Self::zeros)
    pub fn try_zeros(shape: &[usize]) -> Result<Self> {
        Self::try_from_elem(shape, T::zero())
    }
}

impl<T> Tensor<T>
where
    T: Clone + One,
{
    /// Create a tensor of ones
    ///
    /// # Panics
    ///
    /// Panics if the product of `shape` overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use densa_core::Tensor;
    ///
    /// let tensor = Tensor::<f64>::ones(&[2, 3]);
    /// assert!(tensor.as_slice().iter().all(|&x| x == 1.0));
    /// ```
    pub fn ones(shape: &[usize]) -> Self {
        Self::from_elem(shape, T::one())
    }

    /// Fallible form of [`ones`](Self::ones)
    pub fn try_ones(shape: &[usize]) -> Result<Self> {
        Self::try_from_elem(shape, T::one())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default() {
        let tensor = Tensor::<f32>::new(&[4, 4]);
        assert_eq!(tensor.shape(), &[4, 4]);
        assert_eq!(tensor.len(), 16);
        assert!(tensor.as_slice().iter().all(|&x| x == 0.0));

        let strings = Tensor::<String>::new(&[2]);
        assert_eq!(strings.as_slice(), &[String::new(), String::new()]);
    }

    #[test]
    fn test_from_elem_fills_every_slot() {
        let tensor = Tensor::from_elem(&[3, 4, 5], -2i16);
        assert_eq!(tensor.len(), 60);
        assert!(tensor.as_slice().iter().all(|&x| x == -2));
    }

    #[test]
    fn test_from_elem_clones_non_copy_values() {
        let tensor = Tensor::from_elem(&[2, 2], vec![1u8, 2]);
        assert_eq!(tensor.len(), 4);
        assert!(tensor.as_slice().iter().all(|v| v == &[1, 2]));
    }

    #[test]
    fn test_zeros_matches_from_elem_zero() {
        assert_eq!(Tensor::<f64>::zeros(&[2, 5]), Tensor::from_elem(&[2, 5], 0.0));
        assert_eq!(Tensor::<i32>::zeros(&[3]), Tensor::from_elem(&[3], 0));
    }

    #[test]
    fn test_ones() {
        let tensor = Tensor::<u32>::ones(&[2, 2]);
        assert_eq!(tensor.as_slice(), &[1, 1, 1, 1]);
    }

    #[test]
    fn test_zero_extent_keeps_shape() {
        let tensor = Tensor::<i32>::new(&[0, 5]);
        assert_eq!(tensor.len(), 0);
        assert!(tensor.is_empty());
        assert!(tensor.as_slice().is_empty());
        assert_eq!(tensor.shape(), &[0, 5]);
    }

    #[test]
    fn test_zero_extent_with_huge_dims_is_not_overflow() {
        let tensor = Tensor::<u8>::try_new(&[0, usize::MAX, 2]).unwrap();
        assert_eq!(tensor.len(), 0);
        assert_eq!(tensor.shape(), &[0, usize::MAX, 2]);
    }

    #[test]
    fn test_empty_shape_is_scalar() {
        let tensor = Tensor::<i32>::new(&[]);
        assert_eq!(tensor.len(), 1);
        assert_eq!(tensor.shape(), &[] as &[usize]);
        assert_eq!(tensor.as_slice(), &[0]);
    }

    #[test]
    fn test_try_constructors_report_overflow() {
        let err = Tensor::<f32>::try_new(&[usize::MAX, 2]).unwrap_err();
        match err {
            TensorError::ShapeOverflow { shape } => assert_eq!(shape, vec![usize::MAX, 2]),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(Tensor::<f32>::try_zeros(&[usize::MAX, 3]).is_err());
        assert!(Tensor::<f32>::try_ones(&[usize::MAX / 2, 3]).is_err());
    }

    #[test]
    fn test_try_constructors_report_allocation_failure() {
        // Fits in usize but not in any address space
        let err = Tensor::<u64>::try_zeros(&[usize::MAX / 4]).unwrap_err();
        assert!(matches!(err, TensorError::Allocation(_)));
    }

    #[test]
    fn test_try_matches_infallible() {
        let a = Tensor::<f64>::try_zeros(&[3, 2]).unwrap();
        let b = Tensor::<f64>::zeros(&[3, 2]);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "overflows")]
    fn test_new_panics_on_overflow() {
        let _ = Tensor::<u8>::new(&[usize::MAX, 2]);
    }

    #[test]
    fn test_from_vec_adopts_buffer() {
        let data = vec![1, 2, 3, 4, 5, 6];
        let ptr = data.as_ptr();
        let tensor = Tensor::from_vec(data, &[2, 3]).unwrap();
        assert_eq!(tensor.as_ptr(), ptr);
        assert_eq!(tensor.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        let err = Tensor::from_vec(vec![0.0f32; 5], &[2, 3]).unwrap_err();
        match err {
            TensorError::LengthMismatch {
                shape,
                expected,
                actual,
            } => {
                assert_eq!(shape, vec![2, 3]);
                assert_eq!(expected, 6);
                assert_eq!(actual, 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_vec_scalar_and_empty() {
        let scalar = Tensor::from_vec(vec![42], &[]).unwrap();
        assert!(scalar.is_scalar());
        assert_eq!(scalar.as_slice(), &[42]);

        let empty = Tensor::<i32>::from_vec(Vec::new(), &[3, 0]).unwrap();
        assert!(empty.is_empty());
        assert!(Tensor::<i32>::from_vec(Vec::new(), &[]).is_err());
    }
}
