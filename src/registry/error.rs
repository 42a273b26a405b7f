//! Build errors for the state registry.

use crate::validation::RegistryViolation;
use thiserror::Error;

/// Errors that can occur when building a registry.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("No states registered. Call .state(key, factory) before .build()")]
    NoStates,

    #[error("Registry failed validation with {} violation(s): {}", .0.len(), summary(.0))]
    Invalid(Vec<RegistryViolation>),
}

fn summary(violations: &[RegistryViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
