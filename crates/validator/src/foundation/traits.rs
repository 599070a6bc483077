//! The validator capability contract.

use crate::foundation::ValidationErrors;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The contract every validator implements.
///
/// Validators receive the current value of a field, or `None` when the field
/// is absent, and either accept it or return the ordered list of errors that
/// explain the rejection. Absent values must be classified, never panicked on.
///
/// Validators are shared between threads once bound to a model field, so the
/// trait requires `Send + Sync` and only hands out `&self`. Everything a call
/// produces goes into its return value; nothing is left on the instance.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldguard_validator::foundation::{Validate, ValidationError, ValidationErrors};
///
/// #[derive(Default)]
/// struct Positive;
///
/// impl Validate for Positive {
///     type Input = i64;
///
///     fn validate(&self, input: Option<&i64>) -> Result<(), ValidationErrors> {
///         match input {
///             Some(n) if *n > 0 => Ok(()),
///             Some(_) => Err(ValidationError::new("positive", "Must be positive").into()),
///             None => Err(ValidationError::required().into()),
///         }
///     }
/// }
///
/// assert!(Positive.is_valid(Some(&3)));
/// assert!(!Positive.is_valid(None));
/// ```
pub trait Validate: Send + Sync {
    /// The field value type this validator understands.
    ///
    /// Use `?Sized` types such as `str` so that `String` and `&str` fields can
    /// share one validator.
    type Input: ?Sized;

    /// Validates the value and reports why it was rejected.
    ///
    /// Returns `Ok(())` for accepted values and `Err` with at least one error
    /// otherwise.
    fn validate(&self, input: Option<&Self::Input>) -> Result<(), ValidationErrors>;

    /// Returns whether the value is accepted.
    ///
    /// Always agrees with [`validate`](Validate::validate). Override only to
    /// skip building the error list, never to change the outcome.
    fn is_valid(&self, input: Option<&Self::Input>) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V> Validate for Box<V>
where
    V: Validate + ?Sized,
{
    type Input = V::Input;

    fn validate(&self, input: Option<&Self::Input>) -> Result<(), ValidationErrors> {
        (**self).validate(input)
    }

    fn is_valid(&self, input: Option<&Self::Input>) -> bool {
        (**self).is_valid(input)
    }
}

impl<V> Validate for std::sync::Arc<V>
where
    V: Validate + ?Sized,
{
    type Input = V::Input;

    fn validate(&self, input: Option<&Self::Input>) -> Result<(), ValidationErrors> {
        (**self).validate(input)
    }

    fn is_valid(&self, input: Option<&Self::Input>) -> bool {
        (**self).is_valid(input)
    }
}

// ============================================================================
// TESTS
// ============================================================================
