//! Tolerance-window comparisons.
//!
//! Two values are treated as equal when their difference lies strictly
//! inside `(-bound, bound)`. The window is open on both sides, so a
//! difference of exactly `bound` is *not* equal.
//!
//! # Caveat
//!
//! Tolerance equality is symmetric but **not transitive**: with the default
//! bound, `0.0 ≈ 6e-7` and `6e-7 ≈ 1.2e-6`, yet `0.0` and `1.2e-6` differ by
//! more than `1e-6`. Do not use [`equal`] as an equivalence relation (for
//! hashing, deduplication, or sorting keys).
//!
//! # Bounds
//!
//! Every bound must be non-negative. Negative bounds are a caller error and
//! trip a debug assertion; release builds return an unspecified result.

use std::ops::{Neg, Sub};

use num_traits::{Float, Zero};

/// Default half-width of the tolerance window.
pub const DEFAULT_EPSILON: f64 = 1e-6;

fn default_bound<T: Float>() -> T {
    num_traits::cast(DEFAULT_EPSILON).unwrap_or_else(T::epsilon)
}

/// Snaps `orig` to `val` when `|orig - val| < bound`, otherwise returns
/// `orig` unchanged.
///
/// # Examples
/// ```
/// use u_numkit::tolerance::to_val_within;
/// assert_eq!(to_val_within(0.99, 1.0, 0.05), 1.0);
/// assert_eq!(to_val_within(0.90, 1.0, 0.05), 0.90);
/// // The window is open: an exact `bound` difference is not snapped.
/// assert_eq!(to_val_within(3, 1, 2), 3);
/// ```
#[inline]
pub fn to_val_within<T>(orig: T, val: T, bound: T) -> T
where
    T: Copy + PartialOrd + Sub<Output = T> + Neg<Output = T> + Zero,
{
    debug_assert!(bound >= T::zero(), "tolerance bound must be non-negative");
    let delta = orig - val;
    if delta < bound && delta > -bound {
        val
    } else {
        orig
    }
}

/// Snaps `orig` to zero when `|orig| < bound`.
#[inline]
pub fn to_zero_within<T>(orig: T, bound: T) -> T
where
    T: Copy + PartialOrd + Sub<Output = T> + Neg<Output = T> + Zero,
{
    to_val_within(orig, T::zero(), bound)
}

/// Returns `true` when `|rhs - lhs| < bound`.
///
/// With a zero bound this reduces to exact equality.
///
/// # Examples
/// ```
/// use u_numkit::tolerance::equal_within;
/// assert!(equal_within(1.0, 1.04, 0.05));
/// assert!(!equal_within(1.0, 1.05, 0.05));
/// ```
#[inline]
pub fn equal_within<T>(lhs: T, rhs: T, bound: T) -> bool
where
    T: Copy + PartialOrd + Sub<Output = T> + Neg<Output = T> + Zero,
{
    to_zero_within(rhs - lhs, bound) == T::zero()
}

/// Returns `true` when `|orig| < bound`.
#[inline]
pub fn is_zero_within<T>(orig: T, bound: T) -> bool
where
    T: Copy + PartialOrd + Sub<Output = T> + Neg<Output = T> + Zero,
{
    equal_within(orig, T::zero(), bound)
}

/// [`to_val_within`] with [`DEFAULT_EPSILON`].
#[inline]
pub fn to_val<T: Float>(orig: T, val: T) -> T {
    to_val_within(orig, val, default_bound())
}

/// [`to_zero_within`] with [`DEFAULT_EPSILON`].
///
/// # Examples
/// ```
/// use u_numkit::tolerance::to_zero;
/// assert_eq!(to_zero(1e-9_f64), 0.0);
/// assert_eq!(to_zero(1e-3_f64), 1e-3);
/// ```
#[inline]
pub fn to_zero<T: Float>(orig: T) -> T {
    to_zero_within(orig, default_bound())
}

/// [`equal_within`] with [`DEFAULT_EPSILON`].
///
/// # Examples
/// ```
/// use u_numkit::tolerance::equal;
/// assert!(equal(0.1 + 0.2, 0.3));
/// assert!(!equal(0.1, 0.2));
/// ```
#[inline]
pub fn equal<T: Float>(lhs: T, rhs: T) -> bool {
    equal_within(lhs, rhs, default_bound())
}

/// [`is_zero_within`] with [`DEFAULT_EPSILON`].
#[inline]
pub fn is_zero<T: Float>(orig: T) -> bool {
    is_zero_within(orig, default_bound())
}

/// A reusable tolerance window.
///
/// Configure the bound once and pass the value around instead of threading
/// a raw epsilon through every call.
///
/// # Examples
/// ```
/// use u_numkit::tolerance::Tolerance;
/// let tol = Tolerance::new(1e-3).unwrap();
/// assert!(tol.equal(2.0, 2.0005));
/// assert!(!tol.is_zero(0.01));
/// assert!(Tolerance::new(-1.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<T> {
    bound: T,
}

impl<T> Tolerance<T>
where
    T: Copy + PartialOrd + Sub<Output = T> + Neg<Output = T> + Zero,
{
    /// Creates a tolerance with the given half-width.
    ///
    /// # Returns
    /// - `None` if `bound` is negative or NaN.
    pub fn new(bound: T) -> Option<Self> {
        if bound >= T::zero() {
            Some(Self { bound })
        } else {
            None
        }
    }

    /// Returns the half-width of the window.
    pub fn bound(&self) -> T {
        self.bound
    }

    /// See [`to_val_within`].
    pub fn to_val(&self, orig: T, val: T) -> T {
        to_val_within(orig, val, self.bound)
    }

    /// See [`to_zero_within`].
    pub fn to_zero(&self, orig: T) -> T {
        to_zero_within(orig, self.bound)
    }

    /// See [`equal_within`].
    pub fn equal(&self, lhs: T, rhs: T) -> bool {
        equal_within(lhs, rhs, self.bound)
    }

    /// See [`is_zero_within`].
    pub fn is_zero(&self, orig: T) -> bool {
        is_zero_within(orig, self.bound)
    }
}

impl<T: Float> Default for Tolerance<T> {
    fn default() -> Self {
        Self {
            bound: default_bound(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_val_inside_window() {
        assert_eq!(to_val(1.0000001_f64, 1.0), 1.0);
        assert_eq!(to_val(0.9999999_f64, 1.0), 1.0);
    }

    #[test]
    fn test_to_val_outside_window() {
        assert_eq!(to_val(1.01_f64, 1.0), 1.01);
    }

    #[test]
    fn test_to_val_boundary_is_open() {
        // Integers keep the arithmetic exact at the edge.
        assert_eq!(to_val_within(5, 3, 2), 5);
        assert_eq!(to_val_within(1, 3, 2), 1);
        assert_eq!(to_val_within(4, 3, 2), 3);
    }

    #[test]
    fn test_to_zero() {
        assert_eq!(to_zero(5e-7_f64), 0.0);
        assert_eq!(to_zero(-5e-7_f64), 0.0);
        assert_eq!(to_zero(2e-6_f64), 2e-6);
        assert_eq!(to_zero_within(0.4_f32, 0.5), 0.0);
    }

    #[test]
    fn test_equal_default_bound() {
        assert!(equal(1.0_f64, 1.0 + 5e-7));
        assert!(!equal(1.0_f64, 1.0 + 5e-6));
        assert!(equal(0.1_f32 + 0.2, 0.3));
    }

    #[test]
    fn test_equal_zero_bound_is_exact() {
        assert!(equal_within(2.5_f64, 2.5, 0.0));
        assert!(!equal_within(2.5_f64, 2.5000001, 0.0));
    }

    #[test]
    fn test_equal_not_transitive() {
        let a = 0.0_f64;
        let b = 6e-7_f64;
        let c = 1.2e-6_f64;
        assert!(equal(a, b));
        assert!(equal(b, c));
        assert!(!equal(a, c));
    }

    #[test]
    fn test_is_zero_honours_bound() {
        assert!(is_zero(1e-7_f64));
        assert!(!is_zero(1e-5_f64));
        assert!(is_zero_within(1e-5_f64, 1e-4));
        assert!(!is_zero_within(1e-7_f64, 1e-8));
    }

    #[test]
    fn test_tolerance_default() {
        let tol: Tolerance<f64> = Tolerance::default();
        assert_eq!(tol.bound(), DEFAULT_EPSILON);
        assert!(tol.equal(3.0, 3.0 + 1e-7));
        assert_eq!(tol.to_zero(-1e-8), 0.0);
        assert_eq!(tol.to_val(2.0000001, 2.0), 2.0);
    }

    #[test]
    fn test_tolerance_rejects_invalid_bound() {
        assert!(Tolerance::new(-0.1_f64).is_none());
        assert!(Tolerance::new(f64::NAN).is_none());
        assert!(Tolerance::new(0.0_f64).is_some());
    }

    #[test]
    fn test_tolerance_integer_bound() {
        let tol = Tolerance::new(3_i64).unwrap();
        assert!(tol.equal(10, 12));
        assert!(!tol.equal(10, 13));
        assert!(tol.is_zero(-2));
    }
}
