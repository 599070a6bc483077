//! Registry configuration.

use serde::{Deserialize, Serialize};

/// How failures of several bindings on the same field are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    /// Run every binding and concatenate all errors in binding order.
    #[default]
    AccumulateAll,
    /// Keep the first failing binding's errors and skip the rest of the
    /// field's bindings.
    FirstFailure,
}

/// What registering an already registered model does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail with [`ConfigurationError::DuplicateModel`](crate::binding::ConfigurationError::DuplicateModel).
    #[default]
    Reject,
    /// Replace the previous bindings.
    Replace,
}

/// Configuration for a [`Registry`](crate::engine::Registry).
///
/// # Examples
///
/// ```rust,ignore
/// let config: RegistryConfig = serde_json::from_str(r#"{ "aggregation": "first_failure" }"#)?;
/// let registry = Registry::with_config(config);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Aggregation policy for fields with several failing bindings.
    pub aggregation: Aggregation,
    /// Behavior when a model is registered twice.
    pub on_duplicate_model: DuplicatePolicy,
}

impl RegistryConfig {
    /// Sets the aggregation policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_aggregation(mut self, aggregation: Aggregation) -> Self {
        self.aggregation = aggregation;
        self
    }

    /// Sets the duplicate registration policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.on_duplicate_model = policy;
        self
    }
}
