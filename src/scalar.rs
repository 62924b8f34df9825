//! Scalar helpers: interpolation, angle conversion, sign, clamping and the
//! normalized sinc function.
//!
//! Mixed-type parameters are converted with [`AsPrimitive`], i.e. with the
//! semantics of an `as` cast, so `clamp(7_i32, 0.0_f64, 5.9_f64)` truncates
//! the bounds to `0..=5` before comparing.

use std::ops::Sub;

use num_traits::{AsPrimitive, Float, One, Zero};

/// π (3.14159265358979323…).
pub const PI: f64 = std::f64::consts::PI;

/// 1/π (0.318309886183790672…).
pub const INV_PI: f64 = std::f64::consts::FRAC_1_PI;

/// Below this magnitude [`sinc`] returns exactly one.
const SINC_CUTOFF: f64 = 1e-5;

/// Linear interpolation `(1 − t)·v0 + t·v1`.
///
/// `t` may be a different numeric type than the endpoints; it is converted
/// to `T` first. `t` is not clamped, so values outside `[0, 1]` extrapolate.
/// The endpoints are reproduced exactly at `t = 0` and `t = 1`.
///
/// # Examples
/// ```
/// use u_numkit::scalar::lerp;
/// assert_eq!(lerp(2.0_f64, 4.0, 0.5_f32), 3.0);
/// assert_eq!(lerp(2.0_f64, 4.0, 2.0_f64), 6.0);
/// ```
#[inline]
pub fn lerp<T, U>(v0: T, v1: T, t: U) -> T
where
    T: Float + 'static,
    U: AsPrimitive<T>,
{
    let t: T = t.as_();
    (T::one() - t) * v0 + t * v1
}

/// Converts degrees to radians.
#[inline]
pub fn radians<T>(degree: T) -> T
where
    T: Float + 'static,
    f64: AsPrimitive<T>,
{
    let factor: T = (PI / 180.0).as_();
    factor * degree
}

/// Converts radians to degrees.
#[inline]
pub fn degrees<T>(radians: T) -> T
where
    T: Float + 'static,
    f64: AsPrimitive<T>,
{
    let factor: T = (180.0 / PI).as_();
    factor * radians
}

/// Sign of `val` as `1`, `-1` or `0` in the input's own type.
///
/// Values that compare neither above nor below zero (zero itself, NaN)
/// map to `0`. Unsigned types are supported and yield `0` or `1`.
///
/// # Examples
/// ```
/// use u_numkit::scalar::sgn;
/// assert_eq!(sgn(5), 1);
/// assert_eq!(sgn(-3.5), -1.0);
/// assert_eq!(sgn(0_i8), 0);
/// assert_eq!(sgn(9_u32), 1);
/// ```
#[inline]
pub fn sgn<T>(val: T) -> T
where
    T: Zero + One + PartialOrd + Sub<Output = T>,
{
    let zero = T::zero();
    if zero < val {
        T::one()
    } else if val < zero {
        T::zero() - T::one()
    } else {
        zero
    }
}

/// Clamps `v` into `[min_v, max_v]`.
///
/// The bounds are converted to `T` before comparison.
///
/// # Panics
/// If `min_v > max_v` after conversion (or either bound is NaN). Inverted
/// bounds are a programming error, not a recoverable condition.
///
/// # Examples
/// ```
/// use u_numkit::scalar::clamp;
/// assert_eq!(clamp(1.5_f64, 0, 1), 1.0);
/// assert_eq!(clamp(-4_i32, -2.0_f32, 2.0_f32), -2);
/// assert_eq!(clamp(0.25_f32, 0.0_f64, 1.0_f64), 0.25);
/// ```
#[inline]
pub fn clamp<T, U, V>(v: T, min_v: U, max_v: V) -> T
where
    T: PartialOrd + Copy + 'static,
    U: AsPrimitive<T>,
    V: AsPrimitive<T>,
{
    let lo: T = min_v.as_();
    let hi: T = max_v.as_();
    assert!(lo <= hi, "clamp called with min > max");
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Normalized sinc, `sin(πx) / (πx)`.
///
/// The function is even; the input is folded to `|x|` first. Near the
/// removable singularity (`|x| < 1e-5`) the result is exactly `1`.
///
/// # Examples
/// ```
/// use u_numkit::scalar::sinc;
/// assert_eq!(sinc(0.0_f64), 1.0);
/// assert!(sinc(1.0_f64).abs() < 1e-12);
/// assert_eq!(sinc(0.3_f32), sinc(-0.3_f32));
/// ```
#[inline]
pub fn sinc<T>(x: T) -> T
where
    T: Float + 'static,
    f64: AsPrimitive<T>,
{
    let x = x.abs();
    let cutoff: T = SINC_CUTOFF.as_();
    if x < cutoff {
        return T::one();
    }
    let pi: T = PI.as_();
    let px = pi * x;
    px.sin() / px
}

// ============================================================================
// Tests
// ============================================================================
