//! Built-in validators
//!
//! - **Identity documents**: [`Cpf`]
//! - **Content**: [`Email`], [`NotBlank`]
//! - **Presence**: [`Required`]
//!
//! Every built-in validator has a parameterless constructor, so each one can
//! be bound to a model field directly or registered in a
//! [`ValidatorCatalog`](crate::binding::ValidatorCatalog).

pub mod content;
pub mod cpf;
pub mod nullable;

pub use content::{Email, NotBlank, email, not_blank};
pub use cpf::{
    CPF_COM_LETRAS, CPF_COMPRIMENTO_INCORRETO, CPF_E_NULO, CPF_INVALIDO, CPF_LENGTH, Cpf, cpf,
};
pub use nullable::{NotNull, Required, required};
