//! Registers a customer model and validates a few submissions.
//!
//! Run with `RUST_LOG=fieldguard_validator=trace` to see per-binding events.

use fieldguard_validator::prelude::*;
use tracing_subscriber::EnvFilter;

struct Customer {
    name: String,
    cpf: Option<String>,
    email: Option<String>,
}

fn main() -> Result<(), ConfigurationError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let bindings = fieldguard_validator::model_bindings! {
        Customer {
            name: NotBlank => |c| Some(c.name.as_str()),
            cpf: Cpf => |c| c.cpf.as_deref(),
            email: Email => |c| c.email.as_deref(),
        }
    };
    fieldguard_validator::register(bindings?)?;

    let submissions = [
        Customer {
            name: "Maria Souza".into(),
            cpf: Some("11144477735".into()),
            email: Some("maria@example.com".into()),
        },
        Customer {
            name: "  ".into(),
            cpf: Some("1234567890A".into()),
            email: Some("not-an-email".into()),
        },
        Customer {
            name: "João".into(),
            cpf: None,
            email: None,
        },
    ];

    for customer in &submissions {
        let report = fieldguard_validator::validate(customer);
        if report.is_valid() {
            println!("✓ {} accepted", customer.name);
        } else {
            println!("✗ {:?} rejected, {report}", customer.name);
        }
    }

    Ok(())
}
