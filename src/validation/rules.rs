//! Validation rules for registry layouts.

use crate::validation::context::RegistryLayout;
use crate::validation::violations::RegistryViolation;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for validation check functions
pub type LayoutCheck =
    Box<dyn Fn(&RegistryLayout) -> Validation<(), NonEmptyVec<RegistryViolation>>>;

/// Rules a registry must satisfy before it can drive an application.
/// Uses Validation to accumulate ALL violations.
pub struct ValidationRules {
    pub(crate) unique_keys: bool,
    pub(crate) non_empty_keys: bool,
    pub(crate) exits_registered: bool,
    pub(crate) required_checks: Vec<LayoutCheck>,
}

impl ValidationRules {
    /// Enforce all rules, accumulating ALL violations.
    pub fn enforce(&self, layout: &RegistryLayout) -> Validation<(), NonEmptyVec<RegistryViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<RegistryViolation>>> = Vec::new();

        if self.unique_keys {
            let mut seen = HashSet::new();
            let mut reported = HashSet::new();
            for key in layout.keys() {
                if !seen.insert(key) && reported.insert(key) {
                    checks.push(Validation::fail(RegistryViolation::DuplicateKey {
                        key: key.clone(),
                    }));
                }
            }
        }

        if self.non_empty_keys {
            for entry in layout.entries.iter().filter(|e| e.key.is_empty()) {
                checks.push(Validation::fail(RegistryViolation::EmptyKey {
                    state: entry.state.clone(),
                }));
            }
        }

        if self.exits_registered {
            for entry in &layout.entries {
                for exit in &entry.exits {
                    let check = if layout.contains(exit) {
                        Validation::success(())
                    } else {
                        Validation::fail(RegistryViolation::UnknownExit {
                            from: entry.key.clone(),
                            to: exit.clone(),
                        })
                    };
                    checks.push(check);
                }
            }
        }

        for check_fn in &self.required_checks {
            checks.push(check_fn(layout));
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

impl Default for ValidationRules {
    fn default() -> Self {
        crate::validation::ValidationBuilder::new().build()
    }
}
