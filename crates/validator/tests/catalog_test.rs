//! Resolving validators by name and the configuration errors it can raise.

use fieldguard_validator::prelude::*;
use pretty_assertions::assert_eq;

struct Order {
    reference: String,
    quantity: u32,
}

struct AtMost {
    limit: u32,
}

impl Validate for AtMost {
    type Input = u32;

    fn validate(&self, input: Option<&u32>) -> Result<(), ValidationErrors> {
        match input {
            Some(n) if *n > self.limit => Err(ValidationError::new("at_most", "Too many")
                .with_param("limit", self.limit.to_string())
                .into()),
            _ => Ok(()),
        }
    }
}

#[test]
fn builtins_resolve_by_name() {
    let catalog = ValidatorCatalog::with_builtins();
    assert_eq!(catalog.names(), vec!["cpf", "email", "not_blank"]);

    let cpf = catalog.resolve::<str>("cpf").unwrap();
    assert!(cpf.is_valid(Some("52998224725")));
    assert!(!cpf.is_valid(Some("52998224724")));
}

#[test]
fn unknown_name_is_rejected() {
    let catalog = ValidatorCatalog::with_builtins();
    let err = ModelBindings::<Order>::builder()
        .resolve::<str>(&catalog, "iban", "reference", |o| Some(o.reference.as_str()))
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        ConfigurationError::UnknownValidator {
            name: "iban".to_owned()
        }
    );
}

#[test]
fn validator_for_another_value_type_is_not_a_validator() {
    let catalog = ValidatorCatalog::with_builtins();
    let err = ModelBindings::<Order>::builder()
        .resolve::<u32>(&catalog, "email", "quantity", |o| Some(&o.quantity))
        .build()
        .unwrap_err();

    assert!(matches!(err, ConfigurationError::NotAValidator { input: "u32", .. }));
    assert!(err.to_string().contains("does not implement the validator contract"));
}

#[test]
fn declared_type_without_constructor_cannot_be_bound() {
    let mut catalog = ValidatorCatalog::new();
    catalog.declare::<AtMost>("at_most").unwrap();
    assert!(catalog.contains("at_most"));

    let err = Binding::<Order>::resolve::<u32>(&catalog, "at_most", "quantity", |o| {
        Some(&o.quantity)
    })
    .unwrap_err();

    assert!(matches!(err, ConfigurationError::MissingConstructor { .. }));

    // Still usable when constructed by hand.
    assert!(!AtMost { limit: 3 }.is_valid(Some(&4)));
}

#[test]
fn first_configuration_error_wins() {
    let catalog = ValidatorCatalog::with_builtins();
    let err = ModelBindings::<Order>::builder()
        .resolve::<str>(&catalog, "missing", "reference", |o| Some(o.reference.as_str()))
        .resolve::<u32>(&catalog, "cpf", "quantity", |o| Some(&o.quantity))
        .build()
        .unwrap_err();

    assert!(matches!(err, ConfigurationError::UnknownValidator { .. }));
}

#[test]
fn resolved_bindings_validate_like_static_ones() {
    let catalog = ValidatorCatalog::with_builtins();
    let bindings = ModelBindings::<Order>::builder()
        .resolve::<str>(&catalog, "not_blank", "reference", |o| {
            Some(o.reference.as_str())
        })
        .binding(Binding::of::<NotBlank>("reference", |o: &Order| {
            Some(o.reference.as_str())
        }))
        .build()
        .unwrap();

    assert_eq!(bindings.bindings().next().unwrap().validator(), "catalog:not_blank");

    let report = bindings.validate(&Order {
        reference: "   ".into(),
        quantity: 1,
    });
    assert_eq!(report.codes("reference"), vec!["not_blank", "not_blank"]);
}

#[test]
fn duplicate_model_registration_is_rejected_by_default() {
    let registry = Registry::new();
    registry
        .register(ModelBindings::<Order>::builder().build().unwrap())
        .unwrap();

    let err = registry
        .register(ModelBindings::<Order>::builder().build().unwrap())
        .unwrap_err();
    assert!(matches!(err, ConfigurationError::DuplicateModel { .. }));
}

#[test]
fn replace_policy_swaps_bindings() {
    let registry = Registry::with_config(
        RegistryConfig::default().with_duplicate_policy(DuplicatePolicy::Replace),
    );
    registry
        .register(ModelBindings::<Order>::builder().build().unwrap())
        .unwrap();
    registry
        .register(
            ModelBindings::<Order>::builder()
                .field::<NotBlank>("reference", |o| Some(o.reference.as_str()))
                .build()
                .unwrap(),
        )
        .unwrap();

    let report = registry.validate(&Order {
        reference: String::new(),
        quantity: 0,
    });
    assert_eq!(report.codes("reference"), vec!["not_blank"]);
}

#[test]
fn registry_config_reads_from_json() {
    let config: RegistryConfig =
        serde_json::from_str(r#"{ "aggregation": "first_failure" }"#).unwrap();
    assert_eq!(config.aggregation, Aggregation::FirstFailure);
    assert_eq!(config.on_duplicate_model, DuplicatePolicy::Reject);
}
