//! Structure and index model
//!
//! A shape is a slice of per-dimension extents; a reference is a coordinate
//! tuple with one entry per dimension. The conversions between a flat linear
//! index and a reference are pure functions of the shape so they can be used
//! (and tested) without any container.
//!
//! # Layout
//!
//! Linear indices are row-major: the last dimension varies fastest. For shape
//! `[2, 3]`:
//!
//! ```text
//! index:      0      1      2      3      4      5
//! reference: [0,0]  [0,1]  [0,2]  [1,0]  [1,1]  [1,2]
//! ```
//!
//! A rank-0 shape (`[]`) describes a scalar and has count 1.
//!
//! # Example
//!
//! ```
//! use celda::structure;
//!
//! let shape = [2, 3, 4];
//! let reference = structure::reference(23, &shape).unwrap();
//! assert_eq!(reference, vec![1, 2, 3]);
//! assert_eq!(structure::index(&reference, &shape).unwrap(), 23);
//! ```

use crate::{CeldaError, Result};

/// Shape information shared by every container
pub trait Structure {
    /// Extent of each dimension
    fn shape(&self) -> &[usize];

    /// Number of dimensions
    fn rank(&self) -> usize {
        self.shape().len()
    }

    /// Total number of elements (product of the extents)
    fn count(&self) -> usize {
        count(self.shape())
    }

    /// Extent of one dimension
    ///
    /// Returns 0 for a dimension at or beyond the rank.
    fn count_dim(&self, dimension: usize) -> usize {
        count_dim(self.shape(), dimension)
    }
}

/// Total number of elements described by `shape`
pub fn count(shape: &[usize]) -> usize {
    shape.iter().product()
}

/// Extent of `dimension` in `shape`, or 0 if `dimension >= shape.len()`
pub fn count_dim(shape: &[usize], dimension: usize) -> usize {
    shape.get(dimension).copied().unwrap_or(0)
}

/// Row-major strides for `shape`
///
/// # Example
///
/// ```
/// use celda::structure;
///
/// assert_eq!(structure::strides(&[2, 3, 4]), vec![12, 4, 1]);
/// assert!(structure::strides(&[]).is_empty());
/// ```
pub fn strides(shape: &[usize]) -> Vec<usize> {
    let rank = shape.len();
    let mut strides = vec![1usize; rank];
    for d in (0..rank.saturating_sub(1)).rev() {
        strides[d] = strides[d + 1] * shape[d + 1];
    }
    strides
}

/// Convert a linear index to a reference
///
/// # Errors
///
/// Returns [`CeldaError::IndexOutOfRange`] if `index >= count(shape)`.
pub fn reference(index: usize, shape: &[usize]) -> Result<Vec<usize>> {
    let count = count(shape);
    if index >= count {
        return Err(CeldaError::IndexOutOfRange { index, count });
    }

    // every extent is >= 1 here since index < count
    let mut reference = vec![0usize; shape.len()];
    let mut remainder = index;
    for (coordinate, &extent) in reference.iter_mut().zip(shape).rev() {
        *coordinate = remainder % extent;
        remainder /= extent;
    }
    Ok(reference)
}

/// Convert a reference to a linear index
///
/// # Errors
///
/// Returns [`CeldaError::CoordinateOutOfRange`] for the first coordinate that
/// is not below its extent.
///
/// # Panics
///
/// Panics if `reference.len() != shape.len()`. A reference of the wrong rank
/// is a caller bug, not a runtime condition.
pub fn index(reference: &[usize], shape: &[usize]) -> Result<usize> {
    assert_eq!(
        reference.len(),
        shape.len(),
        "reference rank {} does not match shape rank {}",
        reference.len(),
        shape.len()
    );

    let mut index = 0usize;
    for (dimension, (&coordinate, &extent)) in reference.iter().zip(shape).enumerate() {
        if coordinate >= extent {
            return Err(CeldaError::CoordinateOutOfRange {
                dimension,
                coordinate,
                extent,
            });
        }
        index = index * extent + coordinate;
    }
    Ok(index)
}

/// Iterate every reference of `shape` in linear-index order
///
/// # Example
///
/// ```
/// use celda::structure;
///
/// let all: Vec<Vec<usize>> = structure::references(&[2, 2]).collect();
/// assert_eq!(all, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
/// ```
pub fn references(shape: &[usize]) -> References {
    let remaining = count(shape);
    References {
        shape: shape.to_vec(),
        next: (remaining > 0).then(|| vec![0usize; shape.len()]),
        remaining,
    }
}

/// Iterator returned by [`references`]
#[derive(Debug, Clone)]
pub struct References {
    shape: Vec<usize>,
    next: Option<Vec<usize>>,
    remaining: usize,
}

impl Iterator for References {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.next.take()?;
        self.remaining -= 1;

        let mut successor = current.clone();
        for d in (0..successor.len()).rev() {
            successor[d] += 1;
            if successor[d] < self.shape[d] {
                self.next = Some(successor);
                break;
            }
            successor[d] = 0;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for References {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<usize>);

    impl Structure for Fixed {
        fn shape(&self) -> &[usize] {
            &self.0
        }
    }

    #[test]
    fn test_count() {
        assert_eq!(count(&[2, 3, 4]), 24);
        assert_eq!(count(&[5]), 5);
        assert_eq!(count(&[3, 0, 2]), 0);
        assert_eq!(count(&[]), 1); // scalar
    }

    #[test]
    fn test_count_dim_out_of_range_is_zero() {
        assert_eq!(count_dim(&[2, 3], 0), 2);
        assert_eq!(count_dim(&[2, 3], 1), 3);
        assert_eq!(count_dim(&[2, 3], 2), 0);
        assert_eq!(count_dim(&[], 0), 0);
    }

    #[test]
    fn test_structure_defaults() {
        let s = Fixed(vec![4, 5]);
        assert_eq!(s.rank(), 2);
        assert_eq!(s.count(), 20);
        assert_eq!(s.count_dim(1), 5);
        assert_eq!(s.count_dim(7), 0);
    }

    #[test]
    fn test_strides() {
        assert_eq!(strides(&[2, 3, 4]), vec![12, 4, 1]);
        assert_eq!(strides(&[3, 4]), vec![4, 1]);
        assert_eq!(strides(&[7]), vec![1]);
    }

    #[test]
    fn test_reference_row_major() {
        let shape = [2, 3];
        assert_eq!(reference(0, &shape).unwrap(), vec![0, 0]);
        assert_eq!(reference(1, &shape).unwrap(), vec![0, 1]);
        assert_eq!(reference(2, &shape).unwrap(), vec![0, 2]);
        assert_eq!(reference(3, &shape).unwrap(), vec![1, 0]);
        assert_eq!(reference(5, &shape).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_reference_out_of_range() {
        assert_eq!(
            reference(6, &[2, 3]),
            Err(CeldaError::IndexOutOfRange { index: 6, count: 6 })
        );
        assert_eq!(
            reference(0, &[4, 0]),
            Err(CeldaError::IndexOutOfRange { index: 0, count: 0 })
        );
    }

    #[test]
    fn test_reference_scalar_shape() {
        assert_eq!(reference(0, &[]).unwrap(), Vec::<usize>::new());
        assert!(reference(1, &[]).is_err());
        assert_eq!(index(&[], &[]).unwrap(), 0);
    }

    #[test]
    fn test_index_matches_strides() {
        let shape = [2, 3, 4];
        let s = strides(&shape);
        let r = [1, 1, 2];
        let expected: usize = r.iter().zip(&s).map(|(c, st)| c * st).sum();
        assert_eq!(index(&r, &shape).unwrap(), expected);
        assert_eq!(expected, 18);
    }

    #[test]
    fn test_index_coordinate_out_of_range() {
        assert_eq!(
            index(&[1, 3], &[2, 3]),
            Err(CeldaError::CoordinateOutOfRange {
                dimension: 1,
                coordinate: 3,
                extent: 3
            })
        );
    }

    #[test]
    #[should_panic(expected = "does not match shape rank")]
    fn test_index_wrong_rank_panics() {
        let _ = index(&[0, 0, 0], &[2, 3]);
    }

    #[test]
    fn test_references_order() {
        let shape = [2, 3];
        let all: Vec<Vec<usize>> = references(&shape).collect();
        assert_eq!(all.len(), 6);
        for (i, r) in all.iter().enumerate() {
            assert_eq!(&reference(i, &shape).unwrap(), r);
        }
    }

    #[test]
    fn test_references_empty_and_scalar() {
        assert_eq!(references(&[3, 0]).count(), 0);
        let scalar: Vec<Vec<usize>> = references(&[]).collect();
        assert_eq!(scalar, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_references_exact_size() {
        let mut it = references(&[2, 2, 2]);
        assert_eq!(it.len(), 8);
        it.next();
        assert_eq!(it.len(), 7);
    }
}
