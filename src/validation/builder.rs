//! Builder API for creating validation rules.

use crate::validation::context::RegistryLayout;
use crate::validation::rules::{LayoutCheck, ValidationRules};
use crate::validation::violations::RegistryViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for creating validation rules.
///
/// All built-in checks are on by default.
pub struct ValidationBuilder {
    unique_keys: bool,
    non_empty_keys: bool,
    exits_registered: bool,
    required_checks: Vec<LayoutCheck>,
}

impl ValidationBuilder {
    pub fn new() -> Self {
        Self {
            unique_keys: true,
            non_empty_keys: true,
            exits_registered: true,
            required_checks: Vec::new(),
        }
    }

    /// Accept states whose declared exits are not registered.
    pub fn allow_unknown_exits(mut self) -> Self {
        self.exits_registered = false;
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&RegistryLayout) -> Validation<(), NonEmptyVec<RegistryViolation>> + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&RegistryLayout) -> bool + 'static,
    {
        let check = move |layout: &RegistryLayout| {
            if predicate(layout) {
                Validation::success(())
            } else {
                Validation::fail(RegistryViolation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    pub fn build(self) -> ValidationRules {
        ValidationRules {
            unique_keys: self.unique_keys,
            non_empty_keys: self.non_empty_keys,
            exits_registered: self.exits_registered,
            required_checks: self.required_checks,
        }
    }
}

impl Default for ValidationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
