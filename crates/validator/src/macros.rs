//! Macros for creating validators with minimal boilerplate.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldguard_validator::validator;
//! use fieldguard_validator::foundation::ValidationError;
//!
//! validator! {
//!     /// Rejects strings with surrounding whitespace.
//!     pub Trimmed for str;
//!     absent { ValidationError::required() }
//!     rule(input) { input.trim() == input }
//!     error(input) { ValidationError::new("trimmed", "must not start or end with whitespace") }
//!     fn trimmed();
//! }
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a unit validator: struct definition, `Validate` implementation,
/// and optionally a factory function.
///
/// The struct derives `Debug, Clone, Copy, Default, PartialEq, Eq, Hash`, so
/// it satisfies the parameterless-constructor requirement of bindings.
///
/// - `absent` builds the error reported when the field has no value.
/// - `rule` decides whether a present value is accepted.
/// - `error` builds the error for a rejected present value.
#[macro_export]
macro_rules! validator {
    // ── Unit validator + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        absent $absent:block
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            absent $absent
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator, no factory ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        absent $absent:block
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(
                &self,
                input: ::core::option::Option<&Self::Input>,
            ) -> ::core::result::Result<(), $crate::foundation::ValidationErrors> {
                let ::core::option::Option::Some($inp) = input else {
                    return ::core::result::Result::Err(
                        $crate::foundation::ValidationErrors::from($absent),
                    );
                };
                if $rule {
                    ::core::result::Result::Ok(())
                } else {
                    let $einp = $inp;
                    ::core::result::Result::Err($crate::foundation::ValidationErrors::from($err))
                }
            }
        }
    };
}

// ============================================================================
// MODEL BINDINGS MACRO
// ============================================================================

/// Declares the field bindings of a model in one block.
///
/// Expands to a [`ModelBindings`](crate::binding::ModelBindings) builder
/// chain and evaluates to the result of `build()`. Each line binds one
/// validator type to one field; repeat a field to bind several validators.
///
/// ```rust,ignore
/// let bindings = model_bindings! {
///     Customer {
///         name: NotBlank => |c| Some(c.name.as_str()),
///         cpf: Cpf => |c| c.cpf.as_deref(),
///         email: Required<str> => |c| c.email.as_deref(),
///         email: Email => |c| c.email.as_deref(),
///     }
/// };
/// fieldguard_validator::register(bindings?)?;
/// ```
#[macro_export]
macro_rules! model_bindings {
    (
        $model:ty {
            $( $field:ident : $validator:ty => $accessor:expr ),* $(,)?
        }
    ) => {
        $crate::binding::ModelBindings::<$model>::builder()
            $( .field::<$validator>(::core::stringify!($field), $accessor) )*
            .build()
    };
}
