//! Validation engine: model registry and report aggregation.
//!
//! The [`Registry`] maps model types to their [`ModelBindings`]. Models are
//! registered once, usually at startup; afterwards the registry is only read.
//! [`Registry::validate`] runs every binding of the instance's type and
//! returns an [`ErrorReport`].
//!
//! A process-wide registry backs the free functions [`register`] and
//! [`validate`].

mod config;
mod report;

pub use config::{Aggregation, DuplicatePolicy, RegistryConfig};
pub use report::ErrorReport;

use std::any::{Any, TypeId, type_name};
use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::{debug, warn};

use crate::binding::{ConfigurationError, ModelBindings};

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Model type → bindings registry.
pub struct Registry {
    /// Bindings indexed by TypeId of the model; each value is an
    /// `Arc<ModelBindings<M>>`.
    models: DashMap<TypeId, Arc<dyn Any + Send + Sync>>,
    config: RegistryConfig,
}

impl Registry {
    /// Creates an empty registry with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates an empty registry.
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            models: DashMap::new(),
            config,
        }
    }

    /// Returns the registry configuration.
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Registers the bindings of model `M`.
    ///
    /// Registering the same model twice fails with
    /// [`ConfigurationError::DuplicateModel`] unless the registry is
    /// configured with [`DuplicatePolicy::Replace`].
    pub fn register<M>(&self, bindings: ModelBindings<M>) -> Result<(), ConfigurationError>
    where
        M: 'static,
    {
        let model = type_name::<M>();
        let count = bindings.len();
        let bindings: Arc<dyn Any + Send + Sync> = Arc::new(bindings);

        match self.models.entry(TypeId::of::<M>()) {
            Entry::Occupied(mut occupied) => match self.config.on_duplicate_model {
                DuplicatePolicy::Reject => {
                    return Err(ConfigurationError::DuplicateModel { model });
                }
                DuplicatePolicy::Replace => {
                    warn!(model, bindings = count, "Replacing registered model bindings");
                    occupied.insert(bindings);
                }
            },
            Entry::Vacant(vacant) => {
                vacant.insert(bindings);
            }
        }

        debug!(model, bindings = count, "Registered model");
        Ok(())
    }

    /// Returns the bindings registered for `M`.
    #[must_use]
    pub fn bindings<M>(&self) -> Option<Arc<ModelBindings<M>>>
    where
        M: 'static,
    {
        // Clone the Arc out so validation never runs under a shard lock.
        let entry = Arc::clone(self.models.get(&TypeId::of::<M>())?.value());
        entry.downcast::<ModelBindings<M>>().ok()
    }

    /// Returns true if `M` has been registered.
    #[must_use]
    pub fn is_registered<M>(&self) -> bool
    where
        M: 'static,
    {
        self.models.contains_key(&TypeId::of::<M>())
    }

    /// Returns the number of registered models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Returns true if no model is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Validates `instance` against the bindings registered for its type.
    ///
    /// Unregistered types have no bindings and always produce an empty
    /// report. Invalid data never panics; a panicking validator propagates.
    pub fn validate<M>(&self, instance: &M) -> ErrorReport
    where
        M: 'static,
    {
        let Some(bindings) = self.bindings::<M>() else {
            debug!(model = type_name::<M>(), "No bindings registered, nothing to validate");
            return ErrorReport::new();
        };

        let report = bindings.validate_with(instance, self.config.aggregation);
        debug!(
            model = bindings.model(),
            failed_fields = report.len(),
            "Validated model"
        );
        report
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("models", &self.models.len())
            .field("config", &self.config)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Process-wide registry
// ---------------------------------------------------------------------------

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Returns the process-wide registry.
pub fn global() -> &'static Registry {
    &GLOBAL
}

/// Registers model bindings in the process-wide registry.
pub fn register<M>(bindings: ModelBindings<M>) -> Result<(), ConfigurationError>
where
    M: 'static,
{
    GLOBAL.register(bindings)
}

/// Validates `instance` against the process-wide registry.
pub fn validate<M>(instance: &M) -> ErrorReport
where
    M: 'static,
{
    GLOBAL.validate(instance)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
