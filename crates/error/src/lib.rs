//! # fieldguard-error
//!
//! Error values that carry key/value context, and a renderer for whole
//! `source()` chains.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fieldguard_error::prelude::*;
//!
//! let err = ErrorContext::new("could not load customer")
//!     .with_data("id", 42)
//!     .with_source(io_error);
//!
//! eprintln!("{}", render_chain(&err));
//! // #1: could not load customer
//! //     Data:
//! //     	id: 42
//! //
//! // #2: file not found
//! ```

pub mod chain;
pub mod context;

pub use chain::{chain, render_chain, render_report};
pub use context::{ErrorContext, ResultExt};

/// Convenient prelude
pub mod prelude {
    pub use super::{ErrorContext, ResultExt, chain, render_chain, render_report};
}
