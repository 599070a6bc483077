//! Behavior of the bundled validators through the public API.

use fieldguard_validator::dispatch;
use fieldguard_validator::prelude::*;
use fieldguard_validator::validators::{
    CPF_COM_LETRAS, CPF_COMPRIMENTO_INCORRETO, CPF_E_NULO, CPF_INVALIDO,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn cpf_codes(input: Option<&str>) -> Vec<String> {
    match dispatch::validate::<Cpf>(input) {
        Ok(()) => Vec::new(),
        Err(errors) => errors.codes().into_iter().map(str::to_owned).collect(),
    }
}

#[rstest]
#[case::valid(Some("11144477735"), &[])]
#[case::short(Some("123"), &[CPF_COMPRIMENTO_INCORRETO])]
#[case::long(Some("111444777350"), &[CPF_COMPRIMENTO_INCORRETO])]
#[case::letters(Some("1234567890A"), &[CPF_COM_LETRAS])]
#[case::check_digits(Some("12345678900"), &[CPF_INVALIDO])]
#[case::absent(None, &[CPF_E_NULO])]
fn cpf_reports_one_code_per_failure(#[case] input: Option<&str>, #[case] expected: &[&str]) {
    assert_eq!(cpf_codes(input), expected);
}

#[test]
fn cpf_length_counts_characters() {
    // Eleven characters, twelve bytes.
    assert_eq!(cpf_codes(Some("1114447773é")), vec![CPF_COM_LETRAS]);
}

#[test]
fn email_accepts_well_formed_address() {
    assert!(dispatch::is_valid::<Email>(Some("user@example.com")));
}

#[test]
fn email_rejection_echoes_value() {
    let errors = dispatch::validate::<Email>(Some("not-an-email")).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors.errors()[0].message.contains("not-an-email"));
}

#[test]
fn email_rejects_null() {
    let errors = dispatch::validate::<Email>(None).unwrap_err();
    assert!(errors.errors()[0].message.contains("null"));
}

#[rstest]
#[case(Some("x"), true)]
#[case(Some(""), true)]
#[case(None, false)]
fn required_only_checks_presence(#[case] input: Option<&str>, #[case] valid: bool) {
    assert_eq!(dispatch::is_valid::<Required<str>>(input), valid);
}

#[test]
fn not_null_alias_validates_sized_values() {
    assert!(dispatch::is_valid::<NotNull<i64>>(Some(&0)));
    assert_eq!(
        dispatch::validate::<NotNull<i64>>(None).unwrap_err().codes(),
        vec!["required"]
    );
}

#[test]
fn ad_hoc_predicates_dispatch_directly() {
    assert!(dispatch::is_valid_with(&"abc", |s| s.len() == 3));
    assert!(
        dispatch::validate_with(&5_u8, |n| {
            if *n < 3 {
                Ok(())
            } else {
                Err(ValidationError::code("too_big").into())
            }
        })
        .is_err()
    );
}
