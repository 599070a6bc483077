//! Brazilian individual taxpayer ID (CPF) validator
//!
//! A CPF is eleven digits: nine base digits followed by two check digits.
//! Each check digit is derived from the digits before it with a weighted
//! modulo-11 sum.

use crate::foundation::{Validate, ValidationError, ValidationErrors};

/// Number of digits in a CPF.
pub const CPF_LENGTH: usize = 11;

/// Error code for an absent value.
pub const CPF_E_NULO: &str = "CPF_E_NULO";
/// Error code for a value that is not exactly eleven characters long.
pub const CPF_COMPRIMENTO_INCORRETO: &str = "CPF_COMPRIMENTO_INCORRETO";
/// Error code for a value containing anything other than ASCII digits.
pub const CPF_COM_LETRAS: &str = "CPF_COM_LETRAS";
/// Error code for a value whose check digits do not match.
pub const CPF_INVALIDO: &str = "CPF_INVALIDO";

/// Validates an unformatted CPF such as `"11144477735"`.
///
/// Reports exactly one code per failure, checking in order: absence, length,
/// non-digit characters, check digits.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldguard_validator::validators::Cpf;
/// use fieldguard_validator::foundation::Validate;
///
/// assert!(Cpf.is_valid(Some("11144477735")));
/// assert_eq!(Cpf.validate(Some("123")).unwrap_err().codes(), vec!["CPF_COMPRIMENTO_INCORRETO"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cpf;

impl Cpf {
    /// Computes the check digit that follows `digits`.
    ///
    /// Weights run from `digits.len() + 1` down to 2. A remainder below 2
    /// yields 0, anything else `11 - remainder`.
    #[must_use]
    pub fn check_digit(digits: &[u8]) -> u8 {
        let top = digits.len() as u32 + 1;
        let sum: u32 = digits
            .iter()
            .zip((2..=top).rev())
            .map(|(&d, weight)| u32::from(d) * weight)
            .sum();

        match sum % 11 {
            r if r < 2 => 0,
            r => (11 - r) as u8,
        }
    }

    fn classify(input: &str) -> Option<&'static str> {
        if input.chars().count() != CPF_LENGTH {
            return Some(CPF_COMPRIMENTO_INCORRETO);
        }
        if !input.bytes().all(|b| b.is_ascii_digit()) {
            return Some(CPF_COM_LETRAS);
        }

        let digits: Vec<u8> = input.bytes().map(|b| b - b'0').collect();
        let first_ok = Self::check_digit(&digits[..9]) == digits[9];
        let second_ok = first_ok && Self::check_digit(&digits[..10]) == digits[10];

        (!second_ok).then_some(CPF_INVALIDO)
    }
}

impl Validate for Cpf {
    type Input = str;

    fn validate(&self, input: Option<&str>) -> Result<(), ValidationErrors> {
        let code = match input {
            None => CPF_E_NULO,
            Some(value) => match Self::classify(value) {
                None => return Ok(()),
                Some(code) => code,
            },
        };

        Err(ValidationError::code(code).into())
    }
}

/// Creates a `Cpf` validator.
#[must_use]
pub const fn cpf() -> Cpf {
    Cpf
}
