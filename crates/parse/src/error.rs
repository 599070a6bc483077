use fieldguard_error::ErrorContext;
use thiserror::Error;

/// Failure to turn text into a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text is not a valid representation of the target type.
    #[error("'{value}' is not a valid `{target}`")]
    Invalid {
        /// The rejected text.
        value: String,
        /// Type name of the target.
        target: &'static str,
    },

    /// No parser is registered for the target type.
    #[error("no parser is registered for `{target}`")]
    Unsupported {
        /// Type name of the target.
        target: &'static str,
    },
}

impl ParseError {
    pub(crate) fn invalid<T: ?Sized>(value: &str) -> Self {
        Self::Invalid {
            value: value.to_owned(),
            target: std::any::type_name::<T>(),
        }
    }
}

impl From<ParseError> for ErrorContext {
    fn from(err: ParseError) -> Self {
        let context = Self::new(err.to_string());
        match err {
            ParseError::Invalid { value, target } => context
                .with_data("value", value)
                .with_data("target", target),
            ParseError::Unsupported { target } => context.with_data("target", target),
        }
    }
}
