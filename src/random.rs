//! Seedable pseudo-random number source and shuffling.
//!
//! [`Generator`] is an owned, explicitly seeded generator with draw methods
//! for the fixed ranges used throughout the toolkit. A process-wide default
//! instance backs the free functions [`rand_i`], [`rand_ui`], [`rand_f`],
//! [`rand_f_exclude1`] and [`rand_d`].
//!
//! # Reproducibility
//!
//! Every generator starts from [`DEFAULT_SEED`] unless told otherwise, so an
//! unseeded program draws the same sequence on every run. Call
//! [`rand_set_seed_by_cur_time`] (or [`Generator::reseed_from_time`]) to get
//! run-to-run variation. The underlying algorithm (SmallRng) is deterministic
//! for a given seed on the same platform.
//!
//! # Concurrency
//!
//! A [`Generator`] is a plain value; give each thread its own. The shared
//! instance sits behind a mutex, so each free-function call is atomic, but
//! a reseed on one thread is not ordered against draws on another. Use
//! [`with_shared`] to run several draws under one lock.
//!
//! Not suitable for cryptographic use.

use std::sync::LazyLock;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::{debug, trace, warn};

/// Seed used by [`Generator::new`] and the shared generator.
pub const DEFAULT_SEED: u64 = 5489;

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
/// The sequence is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use u_numkit::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Nanoseconds in `elapsed`, wrapping modulo 2^64 past the year 2554.
fn seed_from_elapsed(elapsed: Duration) -> u64 {
    elapsed
        .as_secs()
        .wrapping_mul(1_000_000_000)
        .wrapping_add(u64::from(elapsed.subsec_nanos()))
}

/// Reads the wall clock as nanoseconds since the Unix epoch.
fn clock_seed() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => seed_from_elapsed(elapsed),
        Err(err) => {
            warn!(%err, "system clock is before the Unix epoch, seeding with 0");
            0
        }
    }
}

/// An explicitly seeded pseudo-random generator.
///
/// Implements [`RngCore`], so it also works with every `rand` API
/// (including [`shuffle`]).
///
/// # Examples
/// ```
/// use u_numkit::random::Generator;
/// let mut a = Generator::with_seed(7);
/// let mut b = Generator::with_seed(7);
/// assert_eq!(a.rand_ui(), b.rand_ui());
///
/// let x = a.rand_f_exclude1();
/// assert!((0.0..1.0).contains(&x));
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    rng: SmallRng,
    seed: u64,
}

impl Generator {
    /// Creates a generator seeded with [`DEFAULT_SEED`].
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Creates a generator with the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: create_rng(seed),
            seed,
        }
    }

    /// Returns the seed of the current sequence.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restarts the sequence from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        debug!(seed, "reseeding generator");
        self.rng = create_rng(seed);
        self.seed = seed;
    }

    /// Restarts the sequence from the current wall-clock time and returns
    /// the seed that was used.
    pub fn reseed_from_time(&mut self) -> u64 {
        let seed = clock_seed();
        self.reseed(seed);
        seed
    }

    /// Signed draw in `[-0x7FFFFFFF, 0x7FFFFFFF]`; never `i32::MIN`.
    pub fn rand_i(&mut self) -> i32 {
        self.rng.random_range(-i32::MAX..=i32::MAX)
    }

    /// Unsigned draw in `[0, 0xFFFFFFFF]`.
    pub fn rand_ui(&mut self) -> u32 {
        self.rng.next_u32()
    }

    /// `f32` draw in `[0.0, 1.0]`, both ends included.
    pub fn rand_f(&mut self) -> f32 {
        self.rng.random_range(0.0..=1.0)
    }

    /// `f32` draw in `[0.0, 1.0)`.
    pub fn rand_f_exclude1(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// `f64` draw in `[0.0, 1.0]`, both ends included.
    pub fn rand_d(&mut self) -> f64 {
        self.rng.random_range(0.0..=1.0)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for Generator {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.fill_bytes(dst)
    }
}

// ============================================================================
// Shared generator
// ============================================================================

static SHARED: LazyLock<Mutex<Generator>> = LazyLock::new(|| {
    trace!(seed = DEFAULT_SEED, "creating shared generator");
    Mutex::new(Generator::new())
});

/// Runs `f` with exclusive access to the shared generator.
///
/// Draws inside `f` are not interleaved with draws from other threads.
///
/// # Examples
/// ```
/// use u_numkit::random::with_shared;
/// let (a, b) = with_shared(|g| {
///     g.reseed(11);
///     let a = g.rand_ui();
///     g.reseed(11);
///     (a, g.rand_ui())
/// });
/// assert_eq!(a, b);
/// ```
pub fn with_shared<R>(f: impl FnOnce(&mut Generator) -> R) -> R {
    let mut guard = SHARED.lock();
    f(&mut guard)
}

/// Signed draw from the shared generator, see [`Generator::rand_i`].
pub fn rand_i() -> i32 {
    SHARED.lock().rand_i()
}

/// Unsigned draw from the shared generator, see [`Generator::rand_ui`].
pub fn rand_ui() -> u32 {
    SHARED.lock().rand_ui()
}

/// `[0, 1]` draw from the shared generator, see [`Generator::rand_f`].
pub fn rand_f() -> f32 {
    SHARED.lock().rand_f()
}

/// `[0, 1)` draw from the shared generator, see
/// [`Generator::rand_f_exclude1`].
pub fn rand_f_exclude1() -> f32 {
    SHARED.lock().rand_f_exclude1()
}

/// `[0, 1]` draw from the shared generator, see [`Generator::rand_d`].
pub fn rand_d() -> f64 {
    SHARED.lock().rand_d()
}

/// Reseeds the shared generator from the wall clock and returns the seed.
pub fn rand_set_seed_by_cur_time() -> u64 {
    SHARED.lock().reseed_from_time()
}

/// Reseeds the shared generator with an explicit seed.
pub fn rand_set_seed(seed: u64) {
    SHARED.lock().reseed(seed);
}

// ============================================================================
// Shuffling
// ============================================================================

/// Fisher-Yates (Durstenfeld) in-place shuffle.
///
/// Produces a uniformly random permutation: each of the n! permutations
/// is equally likely.
///
/// # Algorithm
/// Modern variant due to Durstenfeld (1964), popularized by Knuth as
/// "Algorithm P". Iterates backwards, swapping each element with a
/// uniformly chosen earlier (or same) position.
///
/// Reference: Knuth (1997), *TAOCP* Vol. 2, §3.4.2, Algorithm P.
///
/// # Complexity
/// Time: O(n), Space: O(1) (in-place)
///
/// # Examples
/// ```
/// use u_numkit::random::{shuffle, Generator};
/// let mut v = vec![1, 2, 3, 4, 5];
/// let mut rng = Generator::with_seed(42);
/// shuffle(&mut v, &mut rng);
/// v.sort();
/// assert_eq!(v, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T, R: Rng + ?Sized>(slice: &mut [T], rng: &mut R) {
    let n = slice.len();
    if n <= 1 {
        return;
    }
    for i in (1..n).rev() {
        let j = rng.random_range(0..=i);
        slice.swap(i, j);
    }
}

/// Returns a shuffled index permutation of `[0, n)`.
///
/// # Complexity
/// Time: O(n), Space: O(n)
pub fn shuffled_indices<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    shuffle(&mut indices, rng);
    indices
}

// ============================================================================
// Tests
// ============================================================================
