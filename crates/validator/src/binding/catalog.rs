//! Validator catalog for resolving validators by name
//!
//! Bindings normally name their validator type at compile time. When the
//! validator is only known at runtime, for example from a configuration file,
//! the catalog maps a name to the validator type and its constructor so the
//! binding can still be checked and resolved once, at registration time.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::binding::ConfigurationError;
use crate::foundation::Validate;

type Factory = Arc<dyn Fn() -> Box<dyn Any + Send + Sync> + Send + Sync>;

struct CatalogEntry {
    validator: &'static str,
    input: TypeId,
    input_name: &'static str,
    factory: Option<Factory>,
}

/// Name → validator type table.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldguard_validator::binding::ValidatorCatalog;
///
/// let catalog = ValidatorCatalog::with_builtins();
/// let email = catalog.resolve::<str>("email")?;
/// assert!(email.is_valid(Some("user@example.com")));
/// ```
#[derive(Default)]
pub struct ValidatorCatalog {
    entries: HashMap<String, CatalogEntry>,
}

impl ValidatorCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding the bundled validators:
    /// `cpf`, `email` and `not_blank`.
    #[must_use]
    pub fn with_builtins() -> Self {
        use crate::validators::{Cpf, Email, NotBlank};

        let mut catalog = Self::new();
        catalog.entries.insert("cpf".to_owned(), Self::constructible::<Cpf>());
        catalog.entries.insert("email".to_owned(), Self::constructible::<Email>());
        catalog.entries.insert("not_blank".to_owned(), Self::constructible::<NotBlank>());
        catalog
    }

    /// Registers a constructible validator type under `name`.
    pub fn register<V>(&mut self, name: impl Into<String>) -> Result<(), ConfigurationError>
    where
        V: Validate + Default + 'static,
        V::Input: 'static,
    {
        self.insert(name.into(), Self::constructible::<V>())
    }

    /// Declares a validator type that has no parameterless constructor.
    ///
    /// The name is reserved and shows up in [`names`](Self::names), but any
    /// attempt to bind it fails with
    /// [`ConfigurationError::MissingConstructor`].
    pub fn declare<V>(&mut self, name: impl Into<String>) -> Result<(), ConfigurationError>
    where
        V: Validate + 'static,
        V::Input: 'static,
    {
        self.insert(name.into(), Self::describe::<V>())
    }

    /// Resolves `name` into a fresh validator instance for `I` values.
    ///
    /// Checks, in order, that the name is registered, that the type validates
    /// `I`, and that it can be constructed without arguments.
    pub fn resolve<I>(&self, name: &str) -> Result<Arc<dyn Validate<Input = I>>, ConfigurationError>
    where
        I: ?Sized + 'static,
    {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| ConfigurationError::UnknownValidator {
                name: name.to_owned(),
            })?;

        let mismatch = || ConfigurationError::NotAValidator {
            validator: entry.validator,
            input: type_name::<I>(),
        };

        if entry.input != TypeId::of::<I>() {
            return Err(mismatch());
        }

        let factory = entry
            .factory
            .as_ref()
            .ok_or(ConfigurationError::MissingConstructor {
                validator: entry.validator,
            })?;

        factory()
            .downcast::<Arc<dyn Validate<Input = I>>>()
            .map(|validator| *validator)
            .map_err(|_| mismatch())
    }

    /// Returns true if `name` is registered or declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the registered names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn describe<V>() -> CatalogEntry
    where
        V: Validate + 'static,
        V::Input: 'static,
    {
        CatalogEntry {
            validator: type_name::<V>(),
            input: TypeId::of::<V::Input>(),
            input_name: type_name::<V::Input>(),
            factory: None,
        }
    }

    fn constructible<V>() -> CatalogEntry
    where
        V: Validate + Default + 'static,
        V::Input: 'static,
    {
        let factory: Factory = Arc::new(|| {
            let validator: Arc<dyn Validate<Input = V::Input>> = Arc::new(V::default());
            Box::new(validator) as Box<dyn Any + Send + Sync>
        });

        CatalogEntry {
            factory: Some(factory),
            ..Self::describe::<V>()
        }
    }

    fn insert(&mut self, name: String, entry: CatalogEntry) -> Result<(), ConfigurationError> {
        if let Some(existing) = self.entries.get(&name) {
            return Err(ConfigurationError::DuplicateCatalogEntry {
                name,
                existing: existing.validator,
            });
        }

        debug!(validator = entry.validator, name = %name, "Registered catalog validator");
        self.entries.insert(name, entry);
        Ok(())
    }
}

impl fmt::Debug for ValidatorCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for name in self.names() {
            let entry = &self.entries[name];
            map.entry(&name, &format_args!("{} ({})", entry.validator, entry.input_name));
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ValidationError, ValidationErrors};

    #[derive(Default)]
    struct Even;

    impl Validate for Even {
        type Input = u32;

        fn validate(&self, input: Option<&u32>) -> Result<(), ValidationErrors> {
            match input {
                Some(n) if n % 2 == 0 => Ok(()),
                Some(_) => Err(ValidationError::new("even", "Must be even").into()),
                None => Err(ValidationError::required().into()),
            }
        }
    }

    #[test]
    fn test_register_and_resolve() {
        let mut catalog = ValidatorCatalog::new();
        catalog.register::<Even>("even").unwrap();

        let even = catalog.resolve::<u32>("even").unwrap();
        assert!(even.is_valid(Some(&4)));
        assert!(!even.is_valid(Some(&3)));
    }

    #[test]
    fn test_unknown_name() {
        let catalog = ValidatorCatalog::new();
        let err = catalog.resolve::<u32>("even").err().unwrap();
        assert_eq!(
            err,
            ConfigurationError::UnknownValidator {
                name: "even".into()
            }
        );
    }

    #[test]
    fn test_wrong_input_type() {
        let mut catalog = ValidatorCatalog::new();
        catalog.register::<Even>("even").unwrap();

        let err = catalog.resolve::<str>("even").err().unwrap();
        assert!(matches!(
            err,
            ConfigurationError::NotAValidator { input: "str", .. }
        ));
    }

    #[test]
    fn test_duplicate_name() {
        let mut catalog = ValidatorCatalog::with_builtins();
        let err = catalog.register::<Even>("email").unwrap_err();
        assert!(matches!(err, ConfigurationError::DuplicateCatalogEntry { .. }));
    }

    #[test]
    fn test_builtin_names() {
        let catalog = ValidatorCatalog::with_builtins();
        assert_eq!(catalog.names(), vec!["cpf", "email", "not_blank"]);
        assert!(!catalog.is_empty());
    }
}
