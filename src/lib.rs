//! Celda: element access for N-dimensional numeric containers
//!
//! **Celda** (Spanish: "cell") fixes how every higher-level matrix or tensor
//! operation touches individual elements:
//!
//! 1. **Structure** - shape, element count, and the row-major mapping between a
//!    linear index and a coordinate reference
//! 2. **Mutation capabilities** - `Mutate`, `Fillable`, `Modifiable`,
//!    `BiModifiable` and `Receiver`, each a small set of primitives plus
//!    default range and bulk operations built on them
//! 3. **BLAS level 1** - `amin`, the position of the smallest-magnitude element
//!
//! # Design Principles
//!
//! - **Primitives in, bulk operations out**: a container implements the
//!   reference-based primitives and gets linear-index, range and bulk-copy
//!   operations for free
//! - **Pure index translation**: [`structure::reference`] and
//!   [`structure::index`] depend on the shape only
//! - **Check, then act**: range and bulk operations validate before the first
//!   write, so a failed call leaves the container unchanged
//! - **BLAS magnitudes**: `|x|` for reals, `|re| + |im|` for complex
//!
//! # Quick Start
//!
//! ```rust
//! use celda::{Access, DenseArray, Fillable, Mutate, Receiver};
//!
//! let mut a = DenseArray::<f64>::zeros(vec![5]);
//! a.fill_range(0, 2, 1.0).unwrap();
//! a.add(1, 4.0).unwrap();
//! assert_eq!(a.as_slice(), &[1.0, 5.0, 0.0, 0.0, 0.0]);
//!
//! let b = DenseArray::from_vec(vec![3], vec![-3.0, 0.5, 2.0]).unwrap();
//! a.accept(&b).unwrap();
//! assert_eq!(a.get(1).unwrap(), 0.5);
//!
//! assert_eq!(celda::blas::amin(a.as_slice()), 3);
//! ```
//!
//! # Errors
//!
//! Recoverable conditions (index out of range, supplier not acceptable, operand
//! too short) are returned as [`CeldaError`]. A reference whose length differs
//! from the rank is a caller bug and panics.
//!
//! # Features
//!
//! - **tracing**: spans on bulk operations and `amin`, and a debug event when a
//!   receiver rejects a supplier

pub mod access;
pub mod array;
pub mod blas;
pub mod config;
pub mod error;
pub mod mutate;
pub mod scalar;
pub mod structure;

pub use access::Access;
pub use array::DenseArray;
pub use config::{AcceptConfig, RankComparison};
pub use error::{CeldaError, Result};
pub use mutate::{BiModifiable, Fillable, Modifiable, Mutate, Receiver};
pub use num_complex::{Complex32, Complex64};
pub use scalar::Scalar;
pub use structure::Structure;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports() {
        let data = vec![Complex64::new(3.0, 4.0), Complex64::new(0.0, 6.0)];
        let a = DenseArray::from_vec(vec![2], data).unwrap();
        assert_eq!(a.rank(), 1);
        assert_eq!(a.amin(), 1);
        assert_eq!(Complex32::new(3.0, 4.0).magnitude(), 7.0);
    }
}
