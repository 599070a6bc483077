//! Core validation types and traits
//!
//! - **Trait**: [`Validate`], the contract every validator implements
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//!
//! Validators receive `Option<&Input>` so that absent field values reach the
//! validator and are reported instead of being skipped:
//!
//! ```rust,ignore
//! use fieldguard_validator::foundation::Validate;
//! use fieldguard_validator::validators::Email;
//!
//! assert!(Email.is_valid(Some("user@example.com")));
//! assert!(!Email.is_valid(None));
//! ```

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use traits::Validate;

/// A validation result that can contain multiple errors.
pub type ValidationResult = Result<(), ValidationErrors>;
