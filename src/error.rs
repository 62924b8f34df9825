//! Error types.
//!
//! Statistics and strict parsing report failures through these enums.
//! Contract violations (`clamp` with inverted bounds) panic instead.

use thiserror::Error;

/// Error returned by the aggregates in [`crate::stats`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// The input sequence has no elements.
    #[error("statistic is undefined for an empty sequence")]
    Empty,

    /// The input contains NaN or an infinity.
    #[error("input contains a non-finite value")]
    NonFinite,

    /// Two elements could not be ordered (e.g. NaN).
    #[error("input contains values that cannot be ordered")]
    Unordered,
}

/// Error returned by [`crate::parse::parse`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input is empty or whitespace only.
    #[error("cannot parse a number from an empty string")]
    Empty,

    /// The trimmed input is not a complete literal of the target type.
    #[error("invalid {target} literal: {input:?}")]
    Invalid {
        /// The offending input, trimmed.
        input: String,
        /// Name of the requested type.
        target: &'static str,
    },
}
