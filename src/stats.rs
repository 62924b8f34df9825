//! Descriptive statistics with numerical stability guarantees.
//!
//! All aggregates fail fast on empty input with [`StatsError::Empty`]
//! instead of producing NaN, and reject non-finite samples where they
//! would poison the result.
//!
//! # Algorithms
//!
//! - **Mean**: Neumaier compensated summation for O(ε) error independent of n.
//! - **Variance**: Welford's online algorithm, **population** form
//!   (denominator `n`).
//!   Reference: Welford (1962), "Note on a Method for Calculating
//!   Corrected Sums of Squares and Products", *Technometrics* 4(3).
//! - **Permutation**: Fisher-Yates, see [`crate::random::shuffle`].

use num_traits::Float;
use rand::Rng;

use crate::error::StatsError;
use crate::random::{shuffle, with_shared};

/// `n` as a floating value. Every `usize` is representable in `f32`/`f64`
/// up to rounding.
fn count_as<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::infinity)
}

fn check_finite<T: Float>(data: &[T]) -> Result<(), StatsError> {
    if data.is_empty() {
        return Err(StatsError::Empty);
    }
    if !data.iter().all(|x| x.is_finite()) {
        return Err(StatsError::NonFinite);
    }
    Ok(())
}

/// Computes the arithmetic mean using compensated summation.
///
/// If the running sum overflows (e.g. `[f64::MAX, f64::MAX]`), the terms are
/// pre-scaled by `1/n` and summed again, so finite input always yields a
/// finite mean.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Errors
/// - [`StatsError::Empty`] if `data` is empty.
/// - [`StatsError::NonFinite`] if `data` contains NaN or an infinity.
///
/// # Examples
/// ```
/// use u_numkit::stats::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), Ok(2.0));
/// assert!(mean::<f64>(&[]).is_err());
/// ```
pub fn mean<T: Float>(data: &[T]) -> Result<T, StatsError> {
    check_finite(data)?;
    let n: T = count_as(data.len());
    let sum = kahan_sum(data);
    if sum.is_finite() {
        return Ok(sum / n);
    }
    let scaled = neumaier(data.iter().map(|&x| x / n));
    if scaled.is_finite() {
        Ok(scaled)
    } else {
        Err(StatsError::NonFinite)
    }
}

/// Computes the population variance using Welford's online algorithm.
///
/// Returns the mean of squared deviations from the mean (denominator `n`,
/// no Bessel correction). A single sample has variance zero.
///
/// # Algorithm
/// Welford's method maintains a running mean and sum of squared deviations,
/// avoiding catastrophic cancellation inherent in the naive formula
/// `Var = E[X²] − (E[X])²`.
///
/// # Errors
/// Same as [`mean`]; additionally [`StatsError::NonFinite`] when the
/// variance itself exceeds the range of `T`.
///
/// # Examples
/// ```
/// use u_numkit::stats::variance;
/// assert_eq!(variance(&[1.0, 2.0, 3.0]), Ok(2.0 / 3.0));
/// let v: [f64; 8] = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((variance(&v).unwrap() - 4.0).abs() < 1e-12);
/// ```
pub fn variance<T: Float>(data: &[T]) -> Result<T, StatsError> {
    check_finite(data)?;
    let var = data
        .iter()
        .copied()
        .collect::<WelfordAccumulator<T>>()
        .population_variance()
        .ok_or(StatsError::Empty)?;
    if var.is_finite() {
        Ok(var)
    } else {
        Err(StatsError::NonFinite)
    }
}

/// Population standard deviation, `sqrt(variance(data))`.
///
/// # Errors
/// Same as [`mean`].
pub fn std_dev<T: Float>(data: &[T]) -> Result<T, StatsError> {
    variance(data).map(T::sqrt)
}

/// Rejects values that do not compare equal to themselves (NaN).
fn check_ordered<T: PartialOrd>(x: &T) -> Result<(), StatsError> {
    match x.partial_cmp(x) {
        Some(_) => Ok(()),
        None => Err(StatsError::Unordered),
    }
}

/// Returns the smallest element. On ties the first occurrence wins.
///
/// Works for any partially ordered type, integers included.
///
/// # Errors
/// - [`StatsError::Empty`] if `data` is empty.
/// - [`StatsError::Unordered`] if an element is incomparable (NaN).
///
/// # Examples
/// ```
/// use u_numkit::stats::min;
/// assert_eq!(min(&[3.0, 1.0, 4.0, 1.0, 5.0]), Ok(1.0));
/// assert_eq!(min(&[7_u8, 2, 9]), Ok(2));
/// ```
pub fn min<T: PartialOrd + Copy>(data: &[T]) -> Result<T, StatsError> {
    let (&first, rest) = data.split_first().ok_or(StatsError::Empty)?;
    check_ordered(&first)?;
    rest.iter().try_fold(first, |best, &x| {
        check_ordered(&x)?;
        Ok(if x < best { x } else { best })
    })
}

/// Returns the largest element. On ties the first occurrence wins.
///
/// # Errors
/// Same as [`min`].
///
/// # Examples
/// ```
/// use u_numkit::stats::max;
/// assert_eq!(max(&[3.0, 1.0, 4.0, 1.0, 5.0]), Ok(5.0));
/// ```
pub fn max<T: PartialOrd + Copy>(data: &[T]) -> Result<T, StatsError> {
    let (&first, rest) = data.split_first().ok_or(StatsError::Empty)?;
    check_ordered(&first)?;
    rest.iter().try_fold(first, |best, &x| {
        check_ordered(&x)?;
        Ok(if x > best { x } else { best })
    })
}

/// Returns a uniformly random reordering of `data`.
///
/// Takes the sequence by value and hands back the permuted sequence; every
/// one of the n! orderings is equally likely. Empty and single-element
/// inputs are returned unchanged without consuming any draws.
///
/// # Examples
/// ```
/// use u_numkit::random::Generator;
/// use u_numkit::stats::permute;
/// let mut rng = Generator::with_seed(1);
/// let mut p = permute(vec!['a', 'b', 'c', 'd'], &mut rng);
/// p.sort();
/// assert_eq!(p, vec!['a', 'b', 'c', 'd']);
/// ```
pub fn permute<T, R: Rng + ?Sized>(mut data: Vec<T>, rng: &mut R) -> Vec<T> {
    shuffle(&mut data, rng);
    data
}

/// [`permute`] drawing from the process-wide generator.
pub fn permute_default<T>(data: Vec<T>) -> Vec<T> {
    with_shared(|rng| permute(data, rng))
}

// ---------------------------------------------------------------------------
// Compensated summation
// ---------------------------------------------------------------------------

/// Neumaier compensated summation for O(ε) error independent of `n`.
///
/// This is an improved variant of Kahan summation that also handles the
/// case where the addend is larger in magnitude than the running sum.
///
/// Reference: Neumaier (1974), "Rundungsfehleranalyse einiger Verfahren
/// zur Summation endlicher Summen", *ZAMM* 54(1), pp. 39–51.
///
/// # Complexity
/// Time: O(n), Space: O(1)
pub fn kahan_sum<T: Float>(data: &[T]) -> T {
    neumaier(data.iter().copied())
}

fn neumaier<T: Float>(terms: impl Iterator<Item = T>) -> T {
    let mut sum = T::zero();
    let mut c = T::zero();
    for x in terms {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c = c + ((sum - t) + x);
        } else {
            c = c + ((x - t) + sum);
        }
        sum = t;
    }
    sum + c
}

// ---------------------------------------------------------------------------
// Welford online accumulator
// ---------------------------------------------------------------------------

/// Streaming accumulator for mean and population variance.
///
/// Single pass, O(1) memory. Accumulators built over disjoint chunks can
/// be combined with [`merge`](Self::merge).
///
/// # Examples
/// ```
/// use u_numkit::stats::WelfordAccumulator;
/// let mut acc = WelfordAccumulator::<f64>::new();
/// for &x in &[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     acc.update(x);
/// }
/// assert_eq!(acc.count(), 8);
/// assert!((acc.mean().unwrap() - 5.0).abs() < 1e-15);
/// assert!((acc.population_variance().unwrap() - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WelfordAccumulator<T = f64> {
    count: u64,
    n: T,
    mean_acc: T,
    m2: T,
}

impl<T: Float> WelfordAccumulator<T> {
    /// Creates a new empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            n: T::zero(),
            mean_acc: T::zero(),
            m2: T::zero(),
        }
    }

    /// Feeds a new sample into the accumulator.
    pub fn update(&mut self, value: T) {
        let n1 = self.n;
        self.count += 1;
        self.n = self.n + T::one();

        if self.count == 1 {
            self.mean_acc = value;
            return;
        }

        let delta = value - self.mean_acc;
        let delta_n = delta / self.n;
        self.m2 = self.m2 + delta * delta_n * n1;
        self.mean_acc = self.mean_acc + delta_n;
    }

    /// Returns the number of samples seen so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the running mean, or `None` if no samples have been added.
    pub fn mean(&self) -> Option<T> {
        if self.count == 0 {
            None
        } else {
            Some(self.mean_acc)
        }
    }

    /// Returns the population variance (n denominator), or `None` if no
    /// samples have been added.
    pub fn population_variance(&self) -> Option<T> {
        if self.count == 0 {
            None
        } else {
            Some(self.m2 / self.n)
        }
    }

    /// Returns the population standard deviation, or `None` if no samples
    /// have been added.
    pub fn population_std_dev(&self) -> Option<T> {
        self.population_variance().map(T::sqrt)
    }

    /// Merges another accumulator into this one.
    ///
    /// Reference: Chan, Golub & LeVeque (1979), "Updating Formulae and a
    /// Pairwise Algorithm for Computing Sample Variances".
    pub fn merge(&mut self, other: &WelfordAccumulator<T>) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = other.clone();
            return;
        }
        let na = self.n;
        let nb = other.n;
        let n = na + nb;
        let delta = other.mean_acc - self.mean_acc;

        self.count += other.count;
        self.n = n;
        self.mean_acc = self.mean_acc + delta * (nb / n);
        self.m2 = self.m2 + other.m2 + delta * delta * na * nb / n;
    }
}

impl<T: Float> Default for WelfordAccumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Extend<T> for WelfordAccumulator<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.update(x);
        }
    }
}

impl<T: Float> FromIterator<T> for WelfordAccumulator<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
