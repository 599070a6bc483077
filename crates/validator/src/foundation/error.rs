//! Error types for validation failures
//!
//! A validator reports failure as a [`ValidationErrors`] list. Each entry is a
//! [`ValidationError`] carrying a machine-readable code, an English message and
//! optional parameters.
//!
//! All string fields use `Cow<'static, str>` so that static codes and messages
//! never allocate.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single reason why a value was rejected.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldguard_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "String is too short")
///     .with_param("min", "5")
///     .with_param("actual", "3");
/// assert_eq!(error.param("min"), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "required", "email_invalid", "CPF_INVALIDO"
    pub code: Cow<'static, str>,

    /// Human-readable error message in English.
    pub message: Cow<'static, str>,

    /// Ordered key-value parameters describing the failure.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: Vec::new(),
        }
    }

    /// Creates an error whose message is the code itself.
    ///
    /// Useful for validators that only emit codes meant for lookup tables.
    pub fn code(code: &'static str) -> Self {
        Self::new(code, code)
    }

    /// Creates a "required" error for absent values.
    pub fn required() -> Self {
        Self::new("required", "A value is required")
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// The ordered list of errors a validator returns on failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Appends every error of `other`, keeping order.
    pub fn append(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the error codes in order.
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.code.as_ref()).collect()
    }

    /// Consumes the collection and returns the errors.
    #[must_use]
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }

    /// `Ok(())` when empty, `Err(self)` otherwise.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
        assert_eq!(error.to_string(), "test: Test error");
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::new("min", "Too small")
            .with_param("min", "5")
            .with_param("actual", "3");

        assert_eq!(error.param("min"), Some("5"));
        assert_eq!(error.param("missing"), None);
        assert_eq!(error.to_string(), "min: Too small (min=5, actual=3)");
    }

    #[test]
    fn test_code_only() {
        let error = ValidationError::code("CPF_INVALIDO");
        assert_eq!(error.message, "CPF_INVALIDO");
    }

    #[test]
    fn test_append_keeps_order() {
        let mut first = ValidationErrors::from(ValidationError::code("a"));
        first.append(vec![ValidationError::code("b"), ValidationError::code("c")].into());

        assert_eq!(first.codes(), vec!["a", "b", "c"]);
        assert_eq!(first.len(), 3);

        first.add(ValidationError::code("d"));
        let codes: Vec<_> = first.into_vec().into_iter().map(|e| e.code).collect();
        assert_eq!(codes, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationErrors::new().into_result().is_ok());
        assert!(ValidationErrors::from(ValidationError::required()).into_result().is_err());
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::new("required", "This field is required");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn test_serialize_skips_empty_params() {
        let json = serde_json::to_value(ValidationError::new("x", "y")).unwrap();
        assert_eq!(json, serde_json::json!({ "code": "x", "message": "y" }));
    }
}
