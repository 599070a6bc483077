//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use fieldguard_validator::prelude::*;
//! ```

pub use crate::binding::{
    Binding, ConfigurationError, ModelBindings, ModelBindingsBuilder, ValidatorCatalog,
};
pub use crate::dispatch;
pub use crate::engine::{Aggregation, DuplicatePolicy, ErrorReport, Registry, RegistryConfig};
pub use crate::foundation::{Validate, ValidationError, ValidationErrors, ValidationResult};
pub use crate::validators::{Cpf, Email, NotBlank, NotNull, Required};
