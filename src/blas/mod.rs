//! BLAS level 1 kernels
//!
//! Vector primitives over plain slices of any [`Scalar`](crate::Scalar).
//! Magnitudes follow the BLAS convention described in [`crate::scalar`].
//!
//! # Kernels
//!
//! - [`amin`]: index of the element with the smallest magnitude (`i?amin`)
//! - [`amin_strided`]: the same over `n` elements `incx` apart

mod amin;

pub use amin::{amin, amin_strided};
