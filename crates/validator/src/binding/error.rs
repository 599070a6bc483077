//! Configuration errors raised while declaring bindings.

use thiserror::Error;

/// A binding or model registration that can never work.
///
/// These surface at registration time, usually during startup, and point at
/// a programming error. They are never produced by [`validate`](crate::validate)
/// for ordinary invalid data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// No validator is registered in the catalog under this name.
    #[error("validator `{name}` is not registered in the catalog")]
    UnknownValidator {
        /// The name that was looked up.
        name: String,
    },

    /// The registered type does not validate values of the field's type.
    #[error("type `{validator}` does not implement the validator contract for `{input}` values")]
    NotAValidator {
        /// Type name of the offending validator.
        validator: &'static str,
        /// Type name of the field value it was bound to.
        input: &'static str,
    },

    /// The registered type cannot be constructed without arguments.
    #[error("validator `{validator}` has no parameterless constructor")]
    MissingConstructor {
        /// Type name of the offending validator.
        validator: &'static str,
    },

    /// The model type already has bindings in the registry.
    #[error("model `{model}` is already registered")]
    DuplicateModel {
        /// Type name of the model.
        model: &'static str,
    },

    /// The catalog already has an entry with this name.
    #[error("validator name `{name}` is already taken by `{existing}`")]
    DuplicateCatalogEntry {
        /// The contested name.
        name: String,
        /// Type name of the validator already registered under it.
        existing: &'static str,
    },
}
