//! String content validators
//!
//! Validators for checking string content and patterns.

use std::sync::LazyLock;

use crate::foundation::ValidationError;

static EMAIL_PATTERN: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"(?i)^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,4}$")
        .expect("email pattern is a valid regex")
});

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates e-mail address format.
    ///
    /// Accepts `local@domain.tld` where the TLD has two to four letters,
    /// case-insensitively. The rejected value is echoed in the message.
    pub Email for str;
    absent {
        ValidationError::new("email_required", "'null' is not a valid e-mail address")
    }
    rule(input) { EMAIL_PATTERN.is_match(input) }
    error(input) {
        ValidationError::new("email_invalid", format!("'{input}' is not a valid e-mail address"))
            .with_param("value", input.to_owned())
    }
    fn email();
}

// ============================================================================
// NOT BLANK VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that a string has at least one non-whitespace character.
    pub NotBlank for str;
    absent { ValidationError::required() }
    rule(input) { !input.trim().is_empty() }
    error(_input) { ValidationError::new("not_blank", "Must not be blank") }
    fn not_blank();
}

// ============================================================================
// TESTS
// ============================================================================
