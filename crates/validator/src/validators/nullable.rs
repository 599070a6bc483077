//! Presence validators
//!
//! - [`Required`] / [`NotNull`] - accepts any present value, rejects absent ones

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError, ValidationErrors};

/// Validates that a field has a value.
///
/// # Type Parameters
///
/// * `T` - The field value type
///
/// # Examples
///
/// ```rust,ignore
/// use fieldguard_validator::validators::Required;
/// use fieldguard_validator::foundation::Validate;
///
/// let validator = Required::<i32>::default();
/// assert!(validator.is_valid(Some(&42)));
/// assert!(!validator.is_valid(None));
/// ```
pub struct Required<T: ?Sized> {
    _phantom: PhantomData<fn(&T)>,
}

impl<T: ?Sized> Default for Required<T> {
    fn default() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T: ?Sized> Clone for Required<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Required<T> {}

impl<T: ?Sized> fmt::Debug for Required<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Required<{}>", std::any::type_name::<T>())
    }
}

impl<T: ?Sized> Validate for Required<T> {
    type Input = T;

    fn validate(&self, input: Option<&T>) -> Result<(), ValidationErrors> {
        match input {
            Some(_) => Ok(()),
            None => Err(ValidationError::required().into()),
        }
    }
}

/// Creates a `Required` validator.
#[must_use]
pub fn required<T: ?Sized>() -> Required<T> {
    Required::default()
}

/// Alias for [`Required`].
pub type NotNull<T> = Required<T>;
