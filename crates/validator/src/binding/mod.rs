//! Declarative bindings between model fields and validators
//!
//! A [`Binding`] ties one field of a model type to one validator. The
//! validator type is resolved to an instance exactly once, when the binding is
//! built, and that instance is reused for every later validation.
//!
//! [`ModelBindings`] is the ordered set of bindings of one model type, built
//! with a declarative builder at model-definition time:
//!
//! ```rust,ignore
//! use fieldguard_validator::prelude::*;
//!
//! struct Customer {
//!     name: String,
//!     cpf: Option<String>,
//!     email: Option<String>,
//! }
//!
//! let bindings = ModelBindings::<Customer>::builder()
//!     .field::<NotBlank>("name", |c| Some(c.name.as_str()))
//!     .field::<Cpf>("cpf", |c| c.cpf.as_deref())
//!     .field::<Email>("email", |c| c.email.as_deref())
//!     .build()?;
//! ```

mod catalog;
mod error;

pub use catalog::ValidatorCatalog;
pub use error::ConfigurationError;

use std::any::type_name;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{trace, warn};

use crate::engine::{Aggregation, ErrorReport};
use crate::foundation::{Validate, ValidationErrors};

type Check<M> = Box<dyn Fn(&M) -> Result<(), ValidationErrors> + Send + Sync>;

// ============================================================================
// BINDING
// ============================================================================

/// One validator bound to one field of `M`.
pub struct Binding<M> {
    field: Cow<'static, str>,
    validator: Cow<'static, str>,
    check: Check<M>,
}

impl<M: 'static> Binding<M> {
    /// Binds a validator type to a field.
    ///
    /// The type must implement [`Validate`] for the field's value type and
    /// have a parameterless constructor (`Default`); both are checked by the
    /// compiler. One instance is constructed now and cached.
    pub fn of<V>(
        field: impl Into<Cow<'static, str>>,
        accessor: impl Fn(&M) -> Option<&V::Input> + Send + Sync + 'static,
    ) -> Self
    where
        V: Validate + Default + 'static,
    {
        let validator = Cow::Borrowed(type_name::<V>());
        Self::with_instance(field, validator, Arc::new(V::default()), accessor)
    }

    /// Binds a validator looked up by name in `catalog`.
    ///
    /// Fails with a [`ConfigurationError`] if the name is unknown, if the
    /// registered type does not validate `I` values, or if it has no
    /// parameterless constructor.
    pub fn resolve<I>(
        catalog: &ValidatorCatalog,
        validator: &str,
        field: impl Into<Cow<'static, str>>,
        accessor: impl Fn(&M) -> Option<&I> + Send + Sync + 'static,
    ) -> Result<Self, ConfigurationError>
    where
        I: ?Sized + 'static,
    {
        let instance = catalog.resolve::<I>(validator)?;
        let label = Cow::Owned(format!("catalog:{validator}"));
        Ok(Self::with_instance(field, label, instance, accessor))
    }

    fn with_instance<I, V>(
        field: impl Into<Cow<'static, str>>,
        validator: Cow<'static, str>,
        instance: Arc<V>,
        accessor: impl Fn(&M) -> Option<&I> + Send + Sync + 'static,
    ) -> Self
    where
        I: ?Sized,
        V: Validate<Input = I> + ?Sized + 'static,
    {
        Self {
            field: field.into(),
            validator,
            check: Box::new(move |model: &M| instance.validate(accessor(model))),
        }
    }
}

impl<M> Binding<M> {
    /// Returns the bound field name.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the validator type name, or the catalog name for bindings
    /// resolved through a [`ValidatorCatalog`].
    #[must_use]
    pub fn validator(&self) -> &str {
        &self.validator
    }

    /// Runs the cached validator on the field's current value.
    pub fn check(&self, model: &M) -> Result<(), ValidationErrors> {
        (self.check)(model)
    }
}

impl<M> fmt::Debug for Binding<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("field", &self.field)
            .field("validator", &self.validator)
            .field("check", &"<function>")
            .finish()
    }
}

// ============================================================================
// MODEL BINDINGS
// ============================================================================

/// The bindings of one model type, grouped by field.
///
/// Fields are evaluated in the order they were first declared. A field may
/// carry several bindings; they run in declaration order even when the
/// declarations are interleaved with other fields.
pub struct ModelBindings<M> {
    model: &'static str,
    fields: IndexMap<Cow<'static, str>, Vec<Binding<M>>>,
}

impl<M: 'static> ModelBindings<M> {
    /// Starts a declarative builder.
    #[must_use]
    pub fn builder() -> ModelBindingsBuilder<M> {
        ModelBindingsBuilder::new()
    }

    /// Creates bindings from an already built list.
    #[must_use]
    pub fn from_bindings(bindings: Vec<Binding<M>>) -> Self {
        let mut fields: IndexMap<Cow<'static, str>, Vec<Binding<M>>> = IndexMap::new();
        for binding in bindings {
            fields.entry(binding.field.clone()).or_default().push(binding);
        }

        Self {
            model: type_name::<M>(),
            fields,
        }
    }

    /// Returns the model type name.
    #[must_use]
    pub fn model(&self) -> &'static str {
        self.model
    }

    /// Returns all bindings in evaluation order.
    pub fn bindings(&self) -> impl Iterator<Item = &Binding<M>> {
        self.fields.values().flatten()
    }

    /// Returns the distinct bound field names in declaration order.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        self.fields.keys().map(|field| &**field).collect()
    }

    /// Returns the bindings of one field in evaluation order.
    pub fn bindings_for(&self, field: &str) -> impl Iterator<Item = &Binding<M>> {
        self.fields.get(field).into_iter().flatten()
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    /// Returns true if no field is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validates `instance`, accumulating every failure.
    pub fn validate(&self, instance: &M) -> ErrorReport {
        self.validate_with(instance, Aggregation::AccumulateAll)
    }

    /// Validates `instance` with an explicit aggregation policy.
    ///
    /// Every binding runs unless the policy is [`Aggregation::FirstFailure`]
    /// and the field already failed. A validator that rejects a value without
    /// reporting any error breaks the [`Validate`] contract; the rejection is
    /// logged and the field is treated as passing.
    pub fn validate_with(&self, instance: &M, aggregation: Aggregation) -> ErrorReport {
        let mut report = ErrorReport::new();

        for (field, bindings) in &self.fields {
            for binding in bindings {
                let outcome = binding.check(instance);
                trace!(
                    model = self.model,
                    field = field.as_ref(),
                    validator = binding.validator(),
                    valid = outcome.is_ok(),
                    "Evaluated binding"
                );

                let Err(errors) = outcome else { continue };
                if errors.is_empty() {
                    warn!(
                        model = self.model,
                        field = field.as_ref(),
                        validator = binding.validator(),
                        "Validator rejected a value without reporting an error"
                    );
                    continue;
                }

                report.merge(field.clone(), errors);
                if aggregation == Aggregation::FirstFailure {
                    break;
                }
            }
        }

        report
    }
}

impl<M> fmt::Debug for ModelBindings<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelBindings")
            .field("model", &self.model)
            .field("fields", &self.fields)
            .finish()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Declarative builder for [`ModelBindings`].
///
/// Catalog lookups can fail; the first failure is kept and returned by
/// [`build`](Self::build) so registration stays one chained expression.
pub struct ModelBindingsBuilder<M> {
    bindings: Vec<Binding<M>>,
    error: Option<ConfigurationError>,
}

impl<M: 'static> ModelBindingsBuilder<M> {
    fn new() -> Self {
        Self {
            bindings: Vec::new(),
            error: None,
        }
    }

    /// Binds validator type `V` to a field.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<V>(
        mut self,
        name: impl Into<Cow<'static, str>>,
        accessor: impl Fn(&M) -> Option<&V::Input> + Send + Sync + 'static,
    ) -> Self
    where
        V: Validate + Default + 'static,
    {
        self.bindings.push(Binding::of::<V>(name, accessor));
        self
    }

    /// Binds the catalog validator named `validator` to a field.
    #[must_use = "builder methods must be chained or built"]
    pub fn resolve<I>(
        mut self,
        catalog: &ValidatorCatalog,
        validator: &str,
        name: impl Into<Cow<'static, str>>,
        accessor: impl Fn(&M) -> Option<&I> + Send + Sync + 'static,
    ) -> Self
    where
        I: ?Sized + 'static,
    {
        if self.error.is_none() {
            match Binding::resolve(catalog, validator, name, accessor) {
                Ok(binding) => self.bindings.push(binding),
                Err(err) => self.error = Some(err),
            }
        }
        self
    }

    /// Adds a prebuilt binding.
    #[must_use = "builder methods must be chained or built"]
    pub fn binding(mut self, binding: Binding<M>) -> Self {
        self.bindings.push(binding);
        self
    }

    /// Finishes the builder.
    pub fn build(self) -> Result<ModelBindings<M>, ConfigurationError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(ModelBindings::from_bindings(self.bindings)),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
