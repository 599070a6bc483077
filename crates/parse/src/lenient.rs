//! `FromStr`-based helpers.
//!
//! Surrounding whitespace is ignored. Everything else is up to the target
//! type's `FromStr` impl.

use std::any::type_name;
use std::str::FromStr;

use tracing::trace;

use crate::ParseError;

/// Parses `value`, returning `fallback` when it is not a valid `T`.
///
/// ```rust,ignore
/// assert_eq!(parse_or("42", 0), 42);
/// assert_eq!(parse_or("x", 7), 7);
/// ```
pub fn parse_or<T: FromStr>(value: &str, fallback: T) -> T {
    parse_opt(value).unwrap_or(fallback)
}

/// Parses `value`, failing with [`ParseError::Invalid`] that names the
/// rejected text and the target type.
pub fn parse_strict<T: FromStr>(value: &str) -> Result<T, ParseError> {
    parse_opt(value).ok_or_else(|| ParseError::invalid::<T>(value))
}

/// Parses `value`, returning `None` when it is not a valid `T`.
pub fn parse_opt<T: FromStr>(value: &str) -> Option<T> {
    let parsed = value.trim().parse().ok();
    if parsed.is_none() {
        trace!(value, target = type_name::<T>(), "parse failed");
    }
    parsed
}
