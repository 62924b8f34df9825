//! String-to-number conversion.
//!
//! Two flavours are offered:
//!
//! - [`cast_to`] is lenient in the manner of stream extraction: it reads the
//!   longest numeric prefix of the first token and falls back to the type's
//!   default (zero) when nothing parses. It never fails.
//! - [`parse`] is strict: the whole trimmed input must be a literal of the
//!   requested type, otherwise a [`ParseError`] is returned.
//!
//! Prefer [`parse`] whenever malformed input should be noticed.

use std::any::type_name;
use std::str::FromStr;

use tracing::trace;

use crate::error::ParseError;

/// Leniently parses a value of type `T` from `s`.
///
/// Leading whitespace is skipped and only the first whitespace-delimited
/// token is considered. The longest prefix of that token that contains a
/// digit and is accepted by `T::from_str` is returned; trailing garbage is
/// ignored. Otherwise the result is `T::default()` (zero):
///
/// - no numeric prefix at all (`"abc"`, `"-1"` for unsigned targets);
/// - word literals such as `"nan"` or `"inf"`, which contain no digit;
/// - an integer whose digit run overflows `T` (`"999"` as `u8`). Digits are
///   never dropped to make the value fit.
///
/// # Examples
/// ```
/// use u_numkit::parse::cast_to;
/// assert_eq!(cast_to::<i32>("42"), 42);
/// assert_eq!(cast_to::<i32>("  -17 apples"), -17);
/// assert_eq!(cast_to::<i32>("12abc"), 12);
/// assert_eq!(cast_to::<i32>("abc"), 0);
/// assert_eq!(cast_to::<f64>("2.5e3x"), 2500.0);
/// assert_eq!(cast_to::<u8>("999"), 0);
/// ```
pub fn cast_to<T: FromStr + Default>(s: &str) -> T {
    let token = s.trim_start().split(char::is_whitespace).next().unwrap_or("");
    let prefix_ends = token.char_indices().rev().map(|(i, c)| i + c.len_utf8());
    for end in prefix_ends {
        let prefix = &token[..end];
        if !prefix.bytes().any(|b| b.is_ascii_digit()) {
            break;
        }
        if let Ok(value) = prefix.parse::<T>() {
            if token[end..].starts_with(|c: char| c.is_ascii_digit()) {
                trace!(input = s, requested = type_name::<T>(), "numeric literal out of range, using default");
                return T::default();
            }
            return value;
        }
    }
    trace!(input = s, requested = type_name::<T>(), "no numeric prefix, using default");
    T::default()
}

/// Strictly parses a value of type `T` from `s`.
///
/// Surrounding whitespace is ignored; everything else must form a single
/// valid literal.
///
/// # Errors
/// - [`ParseError::Empty`] if `s` is empty or whitespace only.
/// - [`ParseError::Invalid`] if the trimmed input is not a valid `T`.
///
/// # Examples
/// ```
/// use u_numkit::parse::parse;
/// use u_numkit::ParseError;
/// assert_eq!(parse::<u16>(" 8080 "), Ok(8080));
/// assert!(matches!(parse::<u16>("80x"), Err(ParseError::Invalid { .. })));
/// assert_eq!(parse::<f32>(""), Err(ParseError::Empty));
/// ```
pub fn parse<T: FromStr>(s: &str) -> Result<T, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    trimmed.parse().map_err(|_| ParseError::Invalid {
        input: trimmed.to_owned(),
        target: type_name::<T>(),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- cast_to ---

    #[test]
    fn test_cast_to_int() {
        assert_eq!(cast_to::<i32>("42"), 42);
        assert_eq!(cast_to::<i64>("-9000000000"), -9_000_000_000);
        assert_eq!(cast_to::<u8>("+7"), 7);
    }

    #[test]
    fn test_cast_to_malformed_yields_zero() {
        assert_eq!(cast_to::<i32>("abc"), 0);
        assert_eq!(cast_to::<i32>(""), 0);
        assert_eq!(cast_to::<i32>("   "), 0);
        assert_eq!(cast_to::<f64>("x1.5"), 0.0);
    }

    #[test]
    fn test_cast_to_reads_prefix() {
        assert_eq!(cast_to::<i32>("12abc"), 12);
        assert_eq!(cast_to::<f64>("3.75kg"), 3.75);
        assert_eq!(cast_to::<f32>("1e"), 1.0);
    }

    #[test]
    fn test_cast_to_first_token_only() {
        assert_eq!(cast_to::<i32>("\t 5 6 7"), 5);
        assert_eq!(cast_to::<i32>("x 6"), 0);
    }

    #[test]
    fn test_cast_to_unsigned_rejects_sign() {
        assert_eq!(cast_to::<u32>("-1"), 0);
    }

    #[test]
    fn test_cast_to_overflow_yields_zero() {
        assert_eq!(cast_to::<u8>("999"), 0);
        assert_eq!(cast_to::<u8>("256x"), 0);
        assert_eq!(cast_to::<i32>("99999999999"), 0);
        assert_eq!(cast_to::<i32>("-99999999999abc"), 0);
    }

    #[test]
    fn test_cast_to_type_limits() {
        assert_eq!(cast_to::<u8>("255"), 255);
        assert_eq!(cast_to::<i32>("-2147483648"), i32::MIN);
        assert_eq!(cast_to::<i32>("12.5"), 12);
    }

    #[test]
    fn test_cast_to_rejects_word_literals() {
        assert_eq!(cast_to::<f64>("nan"), 0.0);
        assert_eq!(cast_to::<f64>("NaN"), 0.0);
        assert_eq!(cast_to::<f64>("inf"), 0.0);
        assert_eq!(cast_to::<f32>("-infinity"), 0.0);
        assert_eq!(cast_to::<f64>("1e400"), f64::INFINITY);
    }

    #[test]
    fn test_cast_to_multibyte_input() {
        assert_eq!(cast_to::<i32>("7€"), 7);
        assert_eq!(cast_to::<i32>("€7"), 0);
    }

    // --- parse ---

    #[test]
    fn test_parse_ok() {
        assert_eq!(parse::<i32>("42"), Ok(42));
        assert_eq!(parse::<f64>("  -0.5\n"), Ok(-0.5));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse::<i32>(""), Err(ParseError::Empty));
        assert_eq!(parse::<i32>(" \t"), Err(ParseError::Empty));
    }

    #[test]
    fn test_parse_invalid() {
        let err = parse::<i32>(" 12abc ").unwrap_err();
        assert_eq!(
            err,
            ParseError::Invalid {
                input: "12abc".to_owned(),
                target: "i32",
            }
        );
        assert_eq!(err.to_string(), "invalid i32 literal: \"12abc\"");
    }

    #[test]
    fn test_parse_overflow_is_invalid() {
        assert!(matches!(parse::<u8>("256"), Err(ParseError::Invalid { .. })));
    }
}
