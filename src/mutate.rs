//! Mutation capabilities for N-dimensional containers
//!
//! Each capability is a separate trait with a small set of required
//! reference-based primitives. Everything else (linear-index variants, ranges,
//! whole-container operations, bulk copy) is a default method written only in
//! terms of those primitives and [`structure::reference`]. A container
//! implements the subset it supports:
//!
//! | Trait | Required | Derived |
//! |-------|----------|---------|
//! | [`Mutate`] | `set_at`, `add_at` | `set`, `add`, `*_f64` variants |
//! | [`Fillable`] | `fill_at`, `fill_at_with` | `fill_one`, `fill_range`, `fill_all` (+ `_with`) |
//! | [`Modifiable`] | `modify_at` | `modify_one`, `modify_range`, `modify_all` |
//! | [`BiModifiable`] | nothing | `modify_matching_left`, `modify_matching_right` |
//! | [`Receiver`] | nothing | `accept`, `is_acceptable`, `check_acceptable` |
//!
//! # Ranges
//!
//! Range operations cover linear indices `first..limit`. A range with
//! `first >= limit` is empty and does nothing. A non-empty range that reaches
//! past `count()` fails with [`CeldaError::IndexOutOfRange`] before any element
//! is touched.
//!
//! # Concurrency
//!
//! All mutators take `&mut self`. `add` and `modify_*` are read-modify-write
//! per element and are not atomic; sharing a container across threads needs an
//! external lock.

use crate::access::Access;
use crate::config::AcceptConfig;
use crate::scalar::Scalar;
use crate::structure::{self, Structure};
use crate::{CeldaError, Result};

#[cfg(feature = "tracing")]
use tracing::debug;

/// Validate `first..limit` against `count` (empty ranges always pass)
pub(crate) fn check_range(first: usize, limit: usize, count: usize) -> Result<()> {
    if first < limit && limit > count {
        return Err(CeldaError::IndexOutOfRange {
            index: first.max(count),
            count,
        });
    }
    Ok(())
}

/// Validate that an element-wise operand covers `count` elements
pub(crate) fn check_operand(count: usize, operand: usize) -> Result<()> {
    if operand < count {
        return Err(CeldaError::SizeMismatch {
            expected: count,
            actual: operand,
        });
    }
    Ok(())
}

/// Single-element writes
pub trait Mutate<N: Scalar>: Structure {
    /// Overwrite the element at `reference`
    fn set_at(&mut self, reference: &[usize], value: N) -> Result<()>;

    /// Accumulate into the element at `reference`: `current + addend`
    fn add_at(&mut self, reference: &[usize], addend: N) -> Result<()>;

    /// [`set_at`](Mutate::set_at) with a native float
    ///
    /// An override must store the same value as `set_at(reference, N::from_f64(value))`.
    fn set_at_f64(&mut self, reference: &[usize], value: f64) -> Result<()> {
        self.set_at(reference, N::from_f64(value))
    }

    /// [`add_at`](Mutate::add_at) with a native float
    ///
    /// An override must store the same value as `add_at(reference, N::from_f64(addend))`.
    fn add_at_f64(&mut self, reference: &[usize], addend: f64) -> Result<()> {
        self.add_at(reference, N::from_f64(addend))
    }

    /// Overwrite the element at linear `index`
    fn set(&mut self, index: usize, value: N) -> Result<()> {
        let reference = structure::reference(index, self.shape())?;
        self.set_at(&reference, value)
    }

    /// Accumulate into the element at linear `index`
    fn add(&mut self, index: usize, addend: N) -> Result<()> {
        let reference = structure::reference(index, self.shape())?;
        self.add_at(&reference, addend)
    }

    /// Overwrite the element at linear `index` with a native float
    fn set_f64(&mut self, index: usize, value: f64) -> Result<()> {
        let reference = structure::reference(index, self.shape())?;
        self.set_at_f64(&reference, value)
    }

    /// Accumulate a native float into the element at linear `index`
    fn add_f64(&mut self, index: usize, addend: f64) -> Result<()> {
        let reference = structure::reference(index, self.shape())?;
        self.add_at_f64(&reference, addend)
    }
}

/// Writes that do not read the current value
pub trait Fillable<N: Scalar>: Structure {
    /// Write `value` at `reference`
    fn fill_at(&mut self, reference: &[usize], value: N) -> Result<()>;

    /// Write one value produced by `supplier` at `reference`
    ///
    /// Implementations call `supplier` exactly once.
    fn fill_at_with<F>(&mut self, reference: &[usize], supplier: F) -> Result<()>
    where
        F: FnMut() -> N;

    /// Write `value` at linear `index`
    fn fill_one(&mut self, index: usize, value: N) -> Result<()> {
        let reference = structure::reference(index, self.shape())?;
        self.fill_at(&reference, value)
    }

    /// Write a supplied value at linear `index`
    fn fill_one_with<F>(&mut self, index: usize, supplier: F) -> Result<()>
    where
        F: FnMut() -> N,
    {
        let reference = structure::reference(index, self.shape())?;
        self.fill_at_with(&reference, supplier)
    }

    /// Write `value` at every linear index in `first..limit`
    fn fill_range(&mut self, first: usize, limit: usize, value: N) -> Result<()> {
        check_range(first, limit, self.count())?;
        for index in first..limit {
            self.fill_one(index, value)?;
        }
        Ok(())
    }

    /// Write a fresh supplied value at every linear index in `first..limit`
    ///
    /// The supplier is invoked once per element, in index order.
    fn fill_range_with<F>(&mut self, first: usize, limit: usize, mut supplier: F) -> Result<()>
    where
        F: FnMut() -> N,
    {
        check_range(first, limit, self.count())?;
        for index in first..limit {
            self.fill_one_with(index, &mut supplier)?;
        }
        Ok(())
    }

    /// Write `value` everywhere
    fn fill_all(&mut self, value: N) -> Result<()> {
        let count = self.count();
        self.fill_range(0, count, value)
    }

    /// Write a fresh supplied value everywhere
    fn fill_all_with<F>(&mut self, supplier: F) -> Result<()>
    where
        F: FnMut() -> N,
    {
        let count = self.count();
        self.fill_range_with(0, count, supplier)
    }
}

/// In-place transformation of existing values
pub trait Modifiable<N: Scalar>: Structure {
    /// Replace the element at `reference` with `modifier(current)`
    fn modify_at<F>(&mut self, reference: &[usize], modifier: F) -> Result<()>
    where
        F: FnMut(N) -> N;

    /// Replace the element at linear `index` with `modifier(current)`
    fn modify_one<F>(&mut self, index: usize, modifier: F) -> Result<()>
    where
        F: FnMut(N) -> N,
    {
        let reference = structure::reference(index, self.shape())?;
        self.modify_at(&reference, modifier)
    }

    /// Apply `modifier` to every element in `first..limit`
    fn modify_range<F>(&mut self, first: usize, limit: usize, mut modifier: F) -> Result<()>
    where
        F: FnMut(N) -> N,
    {
        check_range(first, limit, self.count())?;
        for index in first..limit {
            self.modify_one(index, &mut modifier)?;
        }
        Ok(())
    }

    /// Apply `modifier` to every element
    fn modify_all<F>(&mut self, modifier: F) -> Result<()>
    where
        F: FnMut(N) -> N,
    {
        let count = self.count();
        self.modify_range(0, count, modifier)
    }
}

/// Element-wise combination with a second operand at matching linear indices
///
/// The operand must hold at least `self.count()` elements; otherwise the call
/// fails with [`CeldaError::SizeMismatch`] and nothing is modified.
pub trait BiModifiable<N: Scalar>: Modifiable<N> {
    /// `self[i] = function(left[i], self[i])`
    fn modify_matching_left<A, F>(&mut self, left: &A, mut function: F) -> Result<()>
    where
        A: Access<N> + ?Sized,
        F: FnMut(N, N) -> N,
    {
        let count = self.count();
        check_operand(count, left.count())?;
        for index in 0..count {
            let operand = left.get(index)?;
            self.modify_one(index, |current| function(operand, current))?;
        }
        Ok(())
    }

    /// `self[i] = function(self[i], right[i])`
    fn modify_matching_right<A, F>(&mut self, mut function: F, right: &A) -> Result<()>
    where
        A: Access<N> + ?Sized,
        F: FnMut(N, N) -> N,
    {
        let count = self.count();
        check_operand(count, right.count())?;
        for index in 0..count {
            let operand = right.get(index)?;
            self.modify_one(index, |current| function(current, operand))?;
        }
        Ok(())
    }
}

/// Bulk, shape-checked ingestion of another container's elements
///
/// A supplier is acceptable when, for every compared dimension `i`,
/// `self.count_dim(i) >= supplier.count_dim(i)` and the receiver holds at least
/// as many elements in total. Dimensions past a rank count as extent 0 (see
/// [`Structure::count_dim`]). Which dimensions are compared is set by
/// [`AcceptConfig`]; the default compares `0..max(self.rank(), supplier.rank())`.
///
/// # Example
///
/// ```
/// use celda::{DenseArray, Receiver};
///
/// let source = DenseArray::from_vec(vec![3], vec![1.0, 2.0, 3.0]).unwrap();
/// let mut target = DenseArray::<f64>::zeros(vec![5]);
///
/// target.accept(&source).unwrap();
/// assert_eq!(target.as_slice(), &[1.0, 2.0, 3.0, 0.0, 0.0]);
///
/// // The other way round does not fit and leaves `small` untouched
/// let mut small = DenseArray::<f64>::zeros(vec![3]);
/// assert!(small.accept(&target).is_err());
/// assert_eq!(small.as_slice(), &[0.0, 0.0, 0.0]);
/// ```
pub trait Receiver<N: Scalar>: Mutate<N> + Fillable<N> + Modifiable<N> + BiModifiable<N> {
    /// Acceptance check under `config`, naming the first failing dimension
    ///
    /// # Errors
    ///
    /// Returns [`CeldaError::NotAcceptable`] if the supplier does not fit.
    fn check_acceptable_with<S>(&self, config: &AcceptConfig, supplier: &S) -> Result<()>
    where
        S: Structure + ?Sized,
    {
        let rank = config.compared_rank(self.rank(), supplier.rank());
        for dimension in 0..rank {
            let receiver = self.count_dim(dimension);
            let supplied = supplier.count_dim(dimension);
            if receiver < supplied {
                return Err(CeldaError::NotAcceptable {
                    dimension: Some(dimension),
                    receiver,
                    supplier: supplied,
                });
            }
        }

        let (receiver, supplied) = (self.count(), supplier.count());
        if receiver < supplied {
            return Err(CeldaError::NotAcceptable {
                dimension: None,
                receiver,
                supplier: supplied,
            });
        }
        Ok(())
    }

    /// Acceptance check under the default (symmetric) policy
    fn check_acceptable<S>(&self, supplier: &S) -> Result<()>
    where
        S: Structure + ?Sized,
    {
        self.check_acceptable_with(&AcceptConfig::default(), supplier)
    }

    /// Whether `supplier` fits under `config`
    fn is_acceptable_with<S>(&self, config: &AcceptConfig, supplier: &S) -> bool
    where
        S: Structure + ?Sized,
    {
        self.check_acceptable_with(config, supplier).is_ok()
    }

    /// Whether `supplier` fits under the default (symmetric) policy
    fn is_acceptable<S>(&self, supplier: &S) -> bool
    where
        S: Structure + ?Sized,
    {
        self.check_acceptable(supplier).is_ok()
    }

    /// Copy every element of `supplied` to the same linear index in `self`
    ///
    /// The whole acceptance check runs before the first write, so on error the
    /// receiver is unchanged.
    fn accept<S>(&mut self, supplied: &S) -> Result<()>
    where
        S: Access<N> + ?Sized,
    {
        self.accept_with(&AcceptConfig::default(), supplied)
    }

    /// [`accept`](Receiver::accept) under an explicit policy
    fn accept_with<S>(&mut self, config: &AcceptConfig, supplied: &S) -> Result<()>
    where
        S: Access<N> + ?Sized,
    {
        if let Err(err) = self.check_acceptable_with(config, supplied) {
            #[cfg(feature = "tracing")]
            debug!(
                receiver = ?self.shape(),
                supplier = ?supplied.shape(),
                "rejected bulk copy: {}",
                err
            );
            return Err(err);
        }

        for index in 0..supplied.count() {
            self.set(index, supplied.get(index)?)?;
        }
        Ok(())
    }
}
