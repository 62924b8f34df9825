//! # u-numkit
//!
//! Small numeric primitives for the U-Engine ecosystem.
//!
//! This crate is a flat toolbox consumed by graphics and geometry code. It
//! knows nothing about vectors, meshes, or any consumer domain.
//!
//! ## Modules
//!
//! - [`tolerance`] — Epsilon-window equality and snapping
//! - [`scalar`] — Interpolation, angle conversion, sign, clamp, sinc
//! - [`random`] — Seedable generator with fixed-range draws and shuffling
//! - [`stats`] — Mean, population variance, min/max, random permutation
//! - [`parse`] — Lenient and strict string-to-number conversion
//! - [`error`] — Error types
//!
//! ## Design Philosophy
//!
//! - **Deterministic by default**: generators start from a fixed seed;
//!   wall-clock seeding is opt-in
//! - **Fail fast**: aggregates over empty input return an error, never NaN
//! - **Numerical stability first**: Welford's algorithm for variance,
//!   compensated summation for the mean
//! - **Property-based testing**: invariants verified via proptest
//!
//! ## Example
//!
//! ```
//! use u_numkit::random::Generator;
//! use u_numkit::{scalar, stats, tolerance};
//!
//! let mut rng = Generator::new();
//! let samples: Vec<f64> = (0..1000).map(|_| rng.rand_d()).collect();
//!
//! let m = stats::mean(&samples).unwrap();
//! assert!(tolerance::equal_within(m, 0.5, 0.05));
//! assert_eq!(scalar::clamp(m, 0.0, 0.25), 0.25);
//! ```

pub mod error;
pub mod parse;
pub mod random;
pub mod scalar;
pub mod stats;
pub mod tolerance;

pub use error::{ParseError, StatsError};
pub use random::Generator;
pub use stats::WelfordAccumulator;
pub use tolerance::Tolerance;
