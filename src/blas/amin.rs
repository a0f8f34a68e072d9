//! AMIN: position of the smallest-magnitude element
//!
//! Returns the position of the element of `x` with the smallest absolute value
//! for real scalars, or the smallest `|re| + |im|` for complex scalars. An empty
//! input yields 0. When several elements share the smallest magnitude, the
//! first one wins.
//!
//! Positions are 0-based.

use crate::scalar::Scalar;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Single pass over `values`, strict `<` so ties keep the earlier position
#[inline]
fn scan<T, I>(mut values: I) -> usize
where
    T: Scalar,
    I: Iterator<Item = T>,
{
    let Some(first) = values.next() else {
        return 0;
    };

    let mut min_value = first.magnitude();
    let mut min_index = 0;
    for (i, value) in values.enumerate() {
        let magnitude = value.magnitude();
        if magnitude < min_value {
            min_value = magnitude;
            min_index = i + 1;
        }
    }
    min_index
}

/// Index of the element of `x` with the smallest magnitude
///
/// Every element is visited once; no allocation. NaN magnitudes never compare
/// less than anything, so a NaN is only returned when it sits at position 0 and
/// no later element compares less than it.
///
/// # Examples
///
/// ```
/// use celda::blas::amin;
/// use celda::Complex64;
///
/// assert_eq!(amin(&[-5.0, 2.0, -1.0, 1.0, 9.0]), 2);
/// assert_eq!(amin::<f64>(&[]), 0);
///
/// // |1| + |-1| = 2 beats |0| + |3| = 3
/// let z = [Complex64::new(0.0, 3.0), Complex64::new(1.0, -1.0)];
/// assert_eq!(amin(&z), 1);
/// ```
#[cfg_attr(feature = "tracing", instrument(skip(x), fields(n = x.len())))]
pub fn amin<T: Scalar>(x: &[T]) -> usize {
    scan(x.iter().copied())
}

/// BLAS-style AMIN over `n` elements of `x` spaced `incx` apart
///
/// Looks at `x[0], x[incx], ..., x[(n - 1) * incx]` and returns the logical
/// position (0..n) of the winner, not its slice offset. Returns 0 when `n` or
/// `incx` is 0.
///
/// # Panics
///
/// Panics if `x` is too short to hold `n` elements at stride `incx`.
///
/// # Examples
///
/// ```
/// use celda::blas::amin_strided;
///
/// // Every other element: 4.0, -3.0, 0.5
/// let x = [4.0, 0.0, -3.0, 0.0, 0.5, 0.0];
/// assert_eq!(amin_strided(3, &x, 2), 2);
/// ```
#[cfg_attr(feature = "tracing", instrument(skip(x), fields(len = x.len())))]
pub fn amin_strided<T: Scalar>(n: usize, x: &[T], incx: usize) -> usize {
    if n == 0 || incx == 0 {
        return 0;
    }
    assert!(
        (n - 1) * incx < x.len(),
        "slice of length {} too short for n = {} at incx = {}",
        x.len(),
        n,
        incx
    );
    scan(x.iter().step_by(incx).take(n).copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::{Complex32, Complex64};

    #[test]
    fn test_amin_first_of_tied_minimum() {
        // magnitudes 5, 2, 1, 1, 9
        assert_eq!(amin(&[-5.0, 2.0, -1.0, 1.0, 9.0]), 2);
    }

    #[test]
    fn test_amin_empty() {
        assert_eq!(amin::<f64>(&[]), 0);
        assert_eq!(amin::<Complex64>(&[]), 0);
    }

    #[test]
    fn test_amin_single() {
        assert_eq!(amin(&[0.0]), 0);
        assert_eq!(amin(&[-42.0f32]), 0);
    }

    #[test]
    fn test_amin_uses_absolute_value() {
        // -10 is the smallest value but not the smallest magnitude
        assert_eq!(amin(&[-10.0, 3.0, -0.5, 7.0]), 2);
    }

    #[test]
    fn test_amin_last_element() {
        assert_eq!(amin(&[4.0f32, 3.0, 2.0, 1.0]), 3);
    }

    #[test]
    fn test_amin_all_equal() {
        assert_eq!(amin(&[2.0, -2.0, 2.0, -2.0]), 0);
    }

    #[test]
    fn test_amin_complex_l1_magnitude() {
        // 3+4i: L1 7, modulus 5. 0+6i: L1 6, modulus 6.
        // The modulus would pick index 0.
        let x = [Complex64::new(3.0, 4.0), Complex64::new(0.0, 6.0)];
        assert_eq!(amin(&x), 1);
    }

    #[test]
    fn test_amin_complex_ties() {
        let x = [
            Complex32::new(2.0, 2.0),
            Complex32::new(-1.0, 1.0),
            Complex32::new(0.0, -2.0),
        ];
        assert_eq!(amin(&x), 1);
    }

    #[test]
    fn test_amin_ignores_nan_after_first() {
        assert_eq!(amin(&[3.0, f64::NAN, 1.0]), 2);
        assert_eq!(amin(&[f64::NAN, 1.0]), 0);
    }

    #[test]
    fn test_amin_negative_zero() {
        // -0.0 and 0.0 have equal magnitude: first wins
        assert_eq!(amin(&[1.0, -0.0, 0.0]), 1);
    }

    #[test]
    fn test_amin_strided() {
        let x = [9.0, -1.0, 8.0, -1.0, 0.25, 5.0];
        assert_eq!(amin_strided(3, &x, 2), 2); // 9, 8, 0.25
        assert_eq!(amin_strided(6, &x, 1), 4);
        assert_eq!(amin_strided(2, &x, 3), 1); // 9, -1
    }

    #[test]
    fn test_amin_strided_degenerate() {
        let x = [1.0, 2.0];
        assert_eq!(amin_strided(0, &x, 1), 0);
        assert_eq!(amin_strided(2, &x, 0), 0);
        assert_eq!(amin_strided::<f64>(0, &[], 4), 0);
    }

    #[test]
    #[should_panic(expected = "too short")]
    fn test_amin_strided_short_slice_panics() {
        amin_strided(3, &[1.0, 2.0, 3.0, 4.0], 2);
    }
}
