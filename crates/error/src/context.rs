//! Error context for providing additional information

use std::error::Error;
use std::fmt;

use indexmap::IndexMap;

type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// An error with a description, ordered key/value data and an optional
/// underlying cause.
///
/// The data is rendered by [`render_chain`](crate::render_chain); the
/// `Display` output is the description alone.
#[derive(Debug)]
pub struct ErrorContext {
    description: String,
    data: IndexMap<String, String>,
    source: Option<BoxError>,
}

impl ErrorContext {
    /// Create a new error context
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            data: IndexMap::new(),
            source: None,
        }
    }

    /// Wraps `source` in a new error with `description`.
    pub fn wrap(description: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::new(description).with_source(source)
    }

    /// Add a data entry. A repeated key overwrites the value in place.
    pub fn with_data(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.data.insert(key.into(), value.to_string());
        self
    }

    /// Set the underlying cause
    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Human-readable description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get data value by key
    pub fn data(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// All data entries in insertion order
    pub fn data_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Check if context has any data
    pub fn has_data(&self) -> bool {
        !self.data.is_empty()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl Error for ErrorContext {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn Error + 'static))
    }
}

/// Extension trait for wrapping a `Result`'s error in an [`ErrorContext`].
pub trait ResultExt<T> {
    /// Wraps the error with a description.
    fn context(self, description: impl Into<String>) -> Result<T, ErrorContext>;

    /// Wraps the error with a lazily built context.
    fn with_context<F>(self, f: F) -> Result<T, ErrorContext>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    fn context(self, description: impl Into<String>) -> Result<T, ErrorContext> {
        self.map_err(|e| ErrorContext::wrap(description, e))
    }

    fn with_context<F>(self, f: F) -> Result<T, ErrorContext>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| f().with_source(e))
    }
}
