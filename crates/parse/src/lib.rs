//! # fieldguard-parse
//!
//! Parsing helpers for untrusted text input.
//!
//! - [`parse_or`], [`parse_strict`] and [`parse_opt`] cover any
//!   [`FromStr`](std::str::FromStr) type
//! - [`ParserRegistry`] parses by target type, including types without a
//!   `FromStr` impl such as [`chrono::TimeDelta`]
//!
//! ```rust,ignore
//! use fieldguard_parse::{ParserRegistry, parse_or};
//!
//! let port: u16 = parse_or(" 8080 ", 80);
//! let timeout = ParserRegistry::global().parse::<chrono::TimeDelta>("00:00:30")?;
//! ```

mod error;
mod lenient;
mod registry;
pub mod span;

pub use error::ParseError;
pub use lenient::{parse_opt, parse_or, parse_strict};
pub use registry::{ParserRegistry, can_be};
