//! One-off validation without a registry.
//!
//! These helpers validate a single value directly. The type-driven helpers
//! construct a fresh validator for every call instead of reusing a cached
//! instance.
//!
//! ```rust,ignore
//! use fieldguard_validator::dispatch;
//! use fieldguard_validator::validators::Cpf;
//!
//! assert!(dispatch::is_valid::<Cpf>(Some("11144477735")));
//! assert!(dispatch::is_valid_with(&7, |n| n % 7 == 0));
//! ```

use crate::foundation::{Validate, ValidationErrors};

/// Runs a predicate on `value`.
pub fn is_valid_with<T, F>(value: &T, predicate: F) -> bool
where
    T: ?Sized,
    F: FnOnce(&T) -> bool,
{
    predicate(value)
}

/// Runs a reporting predicate on `value`.
pub fn validate_with<T, F>(value: &T, predicate: F) -> Result<(), ValidationErrors>
where
    T: ?Sized,
    F: FnOnce(&T) -> Result<(), ValidationErrors>,
{
    predicate(value)
}

/// Validates `value` with a freshly constructed `V`.
pub fn is_valid<V>(value: Option<&V::Input>) -> bool
where
    V: Validate + Default,
{
    V::default().is_valid(value)
}

/// Validates `value` with a freshly constructed `V` and reports errors.
pub fn validate<V>(value: Option<&V::Input>) -> Result<(), ValidationErrors>
where
    V: Validate + Default,
{
    V::default().validate(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidationError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static CONSTRUCTED: AtomicUsize = AtomicUsize::new(0);

    struct Counting;

    impl Default for Counting {
        fn default() -> Self {
            CONSTRUCTED.fetch_add(1, Ordering::SeqCst);
            Self
        }
    }

    impl Validate for Counting {
        type Input = i32;

        fn validate(&self, input: Option<&i32>) -> Result<(), ValidationErrors> {
            match input {
                Some(n) if *n >= 0 => Ok(()),
                _ => Err(ValidationError::code("negative").into()),
            }
        }
    }

    #[test]
    fn test_predicate_dispatch() {
        assert!(is_valid_with("abc", |s: &str| s.len() == 3));
        assert!(!is_valid_with(&4, |n: &i32| *n > 10));
    }

    #[test]
    fn test_reporting_predicate_dispatch() {
        let result = validate_with(&-1, |n: &i32| {
            if *n < 0 {
                Err(ValidationError::code("negative").into())
            } else {
                Ok(())
            }
        });
        assert_eq!(result.unwrap_err().codes(), vec!["negative"]);
    }

    #[test]
    fn test_type_dispatch_builds_fresh_instances() {
        let before = CONSTRUCTED.load(Ordering::SeqCst);

        assert!(is_valid::<Counting>(Some(&1)));
        assert!(validate::<Counting>(Some(&-1)).is_err());
        assert!(!is_valid::<Counting>(None));

        assert_eq!(CONSTRUCTED.load(Ordering::SeqCst) - before, 3);
    }
}
