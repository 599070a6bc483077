//! Parser registry keyed by target type.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use tracing::trace;

use crate::ParseError;
use crate::span::parse_time_span;

type Parser<T> = Arc<dyn Fn(&str) -> Option<T> + Send + Sync>;

static GLOBAL: LazyLock<ParserRegistry> = LazyLock::new(ParserRegistry::with_defaults);

/// Table of parse functions keyed by the type they produce.
///
/// # Examples
///
/// ```rust,ignore
/// let mut parsers = ParserRegistry::with_defaults();
/// parsers.register::<Color, _>(|s| Color::from_name(s));
///
/// assert_eq!(parsers.parse::<u8>("42")?, 42);
/// assert!(parsers.can_be::<chrono::NaiveDate>("2024-02-29"));
/// ```
#[derive(Default)]
pub struct ParserRegistry {
    parsers: HashMap<TypeId, (&'static str, Box<dyn Any + Send + Sync>)>,
}

impl ParserRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with parsers for the primitive numeric types,
    /// `bool`, `char`, [`BigDecimal`], the naive chrono date/time types and
    /// [`TimeDelta`].
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry
            .register_from_str::<i8>()
            .register_from_str::<i16>()
            .register_from_str::<i32>()
            .register_from_str::<i64>()
            .register_from_str::<i128>()
            .register_from_str::<isize>()
            .register_from_str::<u8>()
            .register_from_str::<u16>()
            .register_from_str::<u32>()
            .register_from_str::<u64>()
            .register_from_str::<u128>()
            .register_from_str::<usize>()
            .register_from_str::<f32>()
            .register_from_str::<f64>()
            .register_from_str::<char>()
            .register_from_str::<BigDecimal>()
            .register_from_str::<NaiveDate>()
            .register::<bool, _>(parse_bool)
            .register::<NaiveDateTime, _>(parse_date_time)
            .register::<NaiveTime, _>(parse_time)
            .register::<TimeDelta, _>(parse_time_span);
        registry
    }

    /// The process-wide registry, built with [`with_defaults`](Self::with_defaults).
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Registers `parser` for `T`, replacing any previous parser.
    pub fn register<T, F>(&mut self, parser: F) -> &mut Self
    where
        T: 'static,
        F: Fn(&str) -> Option<T> + Send + Sync + 'static,
    {
        let parser: Parser<T> = Arc::new(parser);
        self.parsers
            .insert(TypeId::of::<T>(), (type_name::<T>(), Box::new(parser)));
        self
    }

    /// Registers `T`'s `FromStr` impl, ignoring surrounding whitespace.
    pub fn register_from_str<T>(&mut self) -> &mut Self
    where
        T: FromStr + 'static,
    {
        self.register::<T, _>(|s| s.trim().parse().ok())
    }

    /// Parses `value` as `T`.
    pub fn parse<T: 'static>(&self, value: &str) -> Result<T, ParseError> {
        let parser = self.parser::<T>().ok_or(ParseError::Unsupported {
            target: type_name::<T>(),
        })?;

        parser(value).ok_or_else(|| {
            trace!(value, target = type_name::<T>(), "parse failed");
            ParseError::invalid::<T>(value)
        })
    }

    /// Parses `value` as `T`, falling back when it is invalid or `T` has
    /// no parser.
    pub fn parse_or<T: 'static>(&self, value: &str, fallback: T) -> T {
        self.parse(value).unwrap_or(fallback)
    }

    /// Parses `value` as `T`, or `None`.
    pub fn parse_opt<T: 'static>(&self, value: &str) -> Option<T> {
        self.parse(value).ok()
    }

    /// Returns true if `value` parses as `T`.
    pub fn can_be<T: 'static>(&self, value: &str) -> bool {
        self.parser::<T>().is_some_and(|parser| parser(value).is_some())
    }

    /// Returns true if a parser is registered for `T`.
    pub fn supports<T: 'static>(&self) -> bool {
        self.parsers.contains_key(&TypeId::of::<T>())
    }

    /// Number of registered target types.
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    /// Returns true if no parser is registered.
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    fn parser<T: 'static>(&self) -> Option<&Parser<T>> {
        self.parsers
            .get(&TypeId::of::<T>())
            .and_then(|(_, parser)| parser.downcast_ref::<Parser<T>>())
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut targets: Vec<_> = self.parsers.values().map(|(name, _)| *name).collect();
        targets.sort_unstable();
        f.debug_struct("ParserRegistry")
            .field("targets", &targets)
            .finish()
    }
}

/// Returns true if `value` parses as `T` with the global registry.
pub fn can_be<T: 'static>(value: &str) -> bool {
    ParserRegistry::global().can_be::<T>(value)
}

fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    value
        .parse()
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f").ok())
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M").ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}
