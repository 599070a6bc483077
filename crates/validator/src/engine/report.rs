//! The field → errors report produced by a validation run.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::foundation::{ValidationError, ValidationErrors};

/// Errors of one validation run, keyed by field name.
///
/// Fields appear in the order they were first declared on the model. A field
/// that passed, or has no bindings, has no entry. An empty report means the
/// instance is valid.
///
/// Serializes as a JSON object:
///
/// ```json
/// { "email": [ { "code": "email_invalid", "message": "..." } ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorReport {
    fields: IndexMap<Cow<'static, str>, Vec<ValidationError>>,
}

impl ErrorReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `errors` to the field's entry, creating it if needed.
    ///
    /// Errors from several failing bindings on one field are concatenated in
    /// the order they are merged. An empty list leaves the report unchanged.
    pub fn merge(&mut self, field: impl Into<Cow<'static, str>>, errors: ValidationErrors) {
        if errors.is_empty() {
            return;
        }
        self.fields
            .entry(field.into())
            .or_default()
            .extend(errors);
    }

    /// Returns true if no field failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns true if no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the number of failed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if `field` failed.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns the errors of `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[ValidationError]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Returns the error codes of `field`; empty if it passed.
    #[must_use]
    pub fn codes(&self, field: &str) -> Vec<&str> {
        self.get(field)
            .unwrap_or_default()
            .iter()
            .map(|e| e.code.as_ref())
            .collect()
    }

    /// Returns the failed field names in order.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        self.fields.keys().map(AsRef::as_ref).collect()
    }

    /// Iterates over `(field, errors)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ValidationError])> {
        self.fields.iter().map(|(k, v)| (k.as_ref(), v.as_slice()))
    }

    /// Returns the total number of errors across all fields.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    /// `Ok(())` for an empty report, `Err(self)` otherwise.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), ErrorReport> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl IntoIterator for ErrorReport {
    type Item = (Cow<'static, str>, Vec<ValidationError>);
    type IntoIter = indexmap::map::IntoIter<Cow<'static, str>, Vec<ValidationError>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "valid");
        }

        writeln!(f, "{} field(s) failed validation:", self.fields.len())?;
        for (field, errors) in &self.fields {
            for error in errors {
                writeln!(f, "  [{field}] {error}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ErrorReport {}
