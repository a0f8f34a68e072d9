//! Numeric scalar abstraction
//!
//! Containers are generic over [`Scalar`], which fixes the two things this crate
//! needs from a number: addition (via [`num_traits::Zero`]) and a magnitude.
//!
//! # Magnitude convention
//!
//! Magnitude follows BLAS level 1:
//!
//! | Scalar | Magnitude |
//! |--------|-----------|
//! | `f32`, `f64` | `|x|` |
//! | `Complex<f32>`, `Complex<f64>` | `|re| + |im|` |
//!
//! The complex case is the L1 sum, not the Euclidean modulus, so `3 + 4i`
//! has magnitude `7` and not `5`.

use num_complex::Complex;
use num_traits::Zero;
use std::fmt::Debug;

/// Element type storable in a Celda container
pub trait Scalar: Copy + Debug + PartialEq + Zero + Send + Sync + 'static {
    /// Real type the magnitude is expressed in
    type Real: Copy + PartialOrd + Debug;

    /// BLAS magnitude: `|x|` for reals, `|re| + |im|` for complex
    fn magnitude(self) -> Self::Real;

    /// Convert a native `f64`
    ///
    /// Every `*_f64` mutator goes through this conversion, so the native-float
    /// and scalar-typed paths produce the same stored value.
    fn from_f64(value: f64) -> Self;
}

impl Scalar for f64 {
    type Real = f64;

    #[inline]
    fn magnitude(self) -> f64 {
        self.abs()
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

impl Scalar for f32 {
    type Real = f32;

    #[inline]
    fn magnitude(self) -> f32 {
        self.abs()
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Scalar for Complex<f64> {
    type Real = f64;

    #[inline]
    fn magnitude(self) -> f64 {
        self.l1_norm()
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        Complex::new(value, 0.0)
    }
}

impl Scalar for Complex<f32> {
    type Real = f32;

    #[inline]
    fn magnitude(self) -> f32 {
        self.l1_norm()
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        Complex::new(value as f32, 0.0)
    }
}
