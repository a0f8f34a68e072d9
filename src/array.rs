//! Dense N-dimensional array with row-major storage
//!
//! [`DenseArray`] implements every capability in [`crate::mutate`]. The
//! linear-index and range paths go straight to the backing slice; the results
//! are the same as the trait defaults.
//!
//! # Example
//!
//! ```
//! use celda::{Access, DenseArray, Fillable, Mutate};
//!
//! let mut a = DenseArray::<f64>::zeros(vec![2, 3]);
//! a.fill_range(0, 3, 1.0).unwrap();
//! a.add_at(&[1, 2], 5.0).unwrap();
//!
//! assert_eq!(a.get_at(&[0, 2]).unwrap(), 1.0);
//! assert_eq!(a.get(5).unwrap(), 5.0);
//! ```

use crate::access::Access;
use crate::blas;
use crate::mutate::{check_range, BiModifiable, Fillable, Modifiable, Mutate, Receiver};
use crate::scalar::Scalar;
use crate::structure::{self, Structure};
use crate::{CeldaError, Result};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// An N-dimensional array with row-major storage
///
/// For a `[2, 3]` array:
/// ```text
/// [[a, b, c],
///  [d, e, f]]
/// ```
/// Data is stored as: `[a, b, c, d, e, f]`
#[derive(Debug, Clone, PartialEq)]
pub struct DenseArray<N> {
    shape: Vec<usize>,
    data: Vec<N>,
}

impl<N: Scalar> DenseArray<N> {
    /// Creates an array of the given shape filled with zeros
    ///
    /// # Example
    ///
    /// ```
    /// use celda::{DenseArray, Structure};
    ///
    /// let a = DenseArray::<f32>::zeros(vec![3, 4]);
    /// assert_eq!(a.count(), 12);
    /// assert!(a.as_slice().iter().all(|&x| x == 0.0));
    /// ```
    pub fn zeros(shape: Vec<usize>) -> Self {
        Self::filled(shape, N::zero())
    }

    /// Creates an array of the given shape with every element set to `value`
    pub fn filled(shape: Vec<usize>, value: N) -> Self {
        let count = structure::count(&shape);
        Self {
            shape,
            data: vec![value; count],
        }
    }

    /// Creates an array from row-major data
    ///
    /// # Errors
    ///
    /// Returns [`CeldaError::SizeMismatch`] if `data.len()` differs from the
    /// shape's element count.
    ///
    /// # Example
    ///
    /// ```
    /// use celda::{Access, DenseArray};
    ///
    /// let a = DenseArray::from_vec(vec![2, 2], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(a.get_at(&[1, 0]).unwrap(), 3.0);
    ///
    /// assert!(DenseArray::from_vec(vec![2, 2], vec![1.0]).is_err());
    /// ```
    pub fn from_vec(shape: Vec<usize>, data: Vec<N>) -> Result<Self> {
        let expected = structure::count(&shape);
        if data.len() != expected {
            return Err(CeldaError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Creates an array from a slice by copying the data
    ///
    /// # Errors
    ///
    /// Returns [`CeldaError::SizeMismatch`] if `data.len()` differs from the
    /// shape's element count.
    pub fn from_slice(shape: &[usize], data: &[N]) -> Result<Self> {
        Self::from_vec(shape.to_vec(), data.to_vec())
    }

    /// Returns the elements in row-major order
    pub fn as_slice(&self) -> &[N] {
        &self.data
    }

    /// Consumes the array, returning its row-major data
    pub fn into_vec(self) -> Vec<N> {
        self.data
    }

    /// Linear index of the element with the smallest magnitude
    ///
    /// See [`blas::amin`]. Returns 0 for an empty array.
    ///
    /// # Example
    ///
    /// ```
    /// use celda::DenseArray;
    ///
    /// let a = DenseArray::from_vec(vec![2, 2], vec![4.0, -0.5, 0.5, 2.0]).unwrap();
    /// assert_eq!(a.amin(), 1);
    /// ```
    pub fn amin(&self) -> usize {
        blas::amin(&self.data)
    }

    fn offset(&self, reference: &[usize]) -> Result<usize> {
        structure::index(reference, &self.shape)
    }

    fn checked(&self, index: usize) -> Result<usize> {
        if index < self.data.len() {
            Ok(index)
        } else {
            Err(CeldaError::IndexOutOfRange {
                index,
                count: self.data.len(),
            })
        }
    }
}

impl<N> Structure for DenseArray<N> {
    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn count(&self) -> usize {
        self.data.len()
    }
}

impl<N: Scalar> Access<N> for DenseArray<N> {
    fn get_at(&self, reference: &[usize]) -> Result<N> {
        Ok(self.data[self.offset(reference)?])
    }

    fn get(&self, index: usize) -> Result<N> {
        Ok(self.data[self.checked(index)?])
    }
}

impl<N: Scalar> Mutate<N> for DenseArray<N> {
    fn set_at(&mut self, reference: &[usize], value: N) -> Result<()> {
        let offset = self.offset(reference)?;
        self.data[offset] = value;
        Ok(())
    }

    fn add_at(&mut self, reference: &[usize], addend: N) -> Result<()> {
        let offset = self.offset(reference)?;
        self.data[offset] = self.data[offset] + addend;
        Ok(())
    }

    fn set(&mut self, index: usize, value: N) -> Result<()> {
        let index = self.checked(index)?;
        self.data[index] = value;
        Ok(())
    }

    fn add(&mut self, index: usize, addend: N) -> Result<()> {
        let index = self.checked(index)?;
        self.data[index] = self.data[index] + addend;
        Ok(())
    }
}

impl<N: Scalar> Fillable<N> for DenseArray<N> {
    fn fill_at(&mut self, reference: &[usize], value: N) -> Result<()> {
        self.set_at(reference, value)
    }

    fn fill_at_with<F>(&mut self, reference: &[usize], mut supplier: F) -> Result<()>
    where
        F: FnMut() -> N,
    {
        let offset = self.offset(reference)?;
        self.data[offset] = supplier();
        Ok(())
    }

    fn fill_one(&mut self, index: usize, value: N) -> Result<()> {
        self.set(index, value)
    }

    #[cfg_attr(feature = "tracing", instrument(skip(self, value)))]
    fn fill_range(&mut self, first: usize, limit: usize, value: N) -> Result<()> {
        check_range(first, limit, self.data.len())?;
        if first < limit {
            self.data[first..limit].fill(value);
        }
        Ok(())
    }

    #[cfg_attr(feature = "tracing", instrument(skip(self, supplier)))]
    fn fill_range_with<F>(&mut self, first: usize, limit: usize, mut supplier: F) -> Result<()>
    where
        F: FnMut() -> N,
    {
        check_range(first, limit, self.data.len())?;
        if first < limit {
            for slot in &mut self.data[first..limit] {
                *slot = supplier();
            }
        }
        Ok(())
    }
}

impl<N: Scalar> Modifiable<N> for DenseArray<N> {
    fn modify_at<F>(&mut self, reference: &[usize], mut modifier: F) -> Result<()>
    where
        F: FnMut(N) -> N,
    {
        let offset = self.offset(reference)?;
        self.data[offset] = modifier(self.data[offset]);
        Ok(())
    }

    fn modify_one<F>(&mut self, index: usize, mut modifier: F) -> Result<()>
    where
        F: FnMut(N) -> N,
    {
        let index = self.checked(index)?;
        self.data[index] = modifier(self.data[index]);
        Ok(())
    }

    #[cfg_attr(feature = "tracing", instrument(skip(self, modifier)))]
    fn modify_range<F>(&mut self, first: usize, limit: usize, mut modifier: F) -> Result<()>
    where
        F: FnMut(N) -> N,
    {
        check_range(first, limit, self.data.len())?;
        if first < limit {
            for slot in &mut self.data[first..limit] {
                *slot = modifier(*slot);
            }
        }
        Ok(())
    }
}

impl<N: Scalar> BiModifiable<N> for DenseArray<N> {}

impl<N: Scalar> Receiver<N> for DenseArray<N> {}
