//! # fieldguard-validator
//!
//! Declarative per-field validation for plain Rust data models.
//!
//! ## Quick Start
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
//! // Once, at startup.
//! fieldguard_validator::register(
//!     ModelBindings::<Customer>::builder()
//!         .field::<NotBlank>("name", |c| Some(c.name.as_str()))
//!         .field::<Cpf>("cpf", |c| c.cpf.as_deref())
//!         .field::<Email>("email", |c| c.email.as_deref())
//!         .build()?,
//! )?;
//!
//! // Per request.
//! let report = fieldguard_validator::validate(&customer);
//! for (field, errors) in report.iter() {
//!     // ...
//! }
//! ```
//!
//! ## Layers
//!
//! - [`foundation`]: the [`Validate`](foundation::Validate) contract and error types
//! - [`binding`]: field bindings, the declarative builder, the validator catalog
//! - [`engine`]: the model registry and the [`ErrorReport`](engine::ErrorReport)
//! - [`dispatch`]: one-off validation without a registry
//! - [`validators`]: bundled validators ([`Cpf`](validators::Cpf), [`Email`](validators::Email), ...)
//! - [`model_bindings!`] and [`validator!`]: declarative front-ends for the above

mod macros;

pub mod binding;
pub mod dispatch;
pub mod engine;
pub mod foundation;
pub mod prelude;
pub mod validators;

pub use engine::{global, register, validate};
