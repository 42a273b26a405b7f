//! Builder for constructing state registries.

use crate::core::{State, StateKey};
use crate::registry::error::BuildError;
use crate::registry::{StateFactory, StateRegistry};
use crate::validation::{LayoutEntry, RegistryLayout, ValidationRules};
use std::collections::HashMap;
use stillwater::validation::Validation;

/// Builder for constructing registries with a fluent API.
pub struct RegistryBuilder {
    entries: Vec<(StateKey, StateFactory)>,
    rules: ValidationRules,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            rules: ValidationRules::default(),
        }
    }

    /// Register a state under `key`.
    pub fn state<S, F>(mut self, key: impl Into<StateKey>, factory: F) -> Self
    where
        S: State + 'static,
        F: Fn() -> S + 'static,
    {
        let factory: StateFactory = Box::new(move || Box::new(factory()) as Box<dyn State>);
        self.entries.push((key.into(), factory));
        self
    }

    /// Register a factory that already returns a boxed state.
    pub fn boxed_state<F>(mut self, key: impl Into<StateKey>, factory: F) -> Self
    where
        F: Fn() -> Box<dyn State> + 'static,
    {
        self.entries.push((key.into(), Box::new(factory)));
        self
    }

    /// Replace the default validation rules.
    pub fn rules(mut self, rules: ValidationRules) -> Self {
        self.rules = rules;
        self
    }

    /// Build the registry.
    ///
    /// Each factory is invoked once here to read the state's `name()` and
    /// `exits()` for validation. Those instances are dropped without `setup`
    /// being called, so any side effect in a factory or in a state's
    /// constructor also happens at build time.
    pub fn build(self) -> Result<StateRegistry, BuildError> {
        if self.entries.is_empty() {
            return Err(BuildError::NoStates);
        }

        let layout = RegistryLayout {
            entries: self
                .entries
                .iter()
                .map(|(key, factory)| {
                    let sample = factory();
                    LayoutEntry {
                        key: key.clone(),
                        state: sample.name().to_string(),
                        exits: sample.exits(),
                    }
                })
                .collect(),
        };

        if let Validation::Failure(errors) = self.rules.enforce(&layout) {
            let violations: Vec<_> = errors.iter().cloned().collect();
            for violation in &violations {
                log::error!("{violation}");
            }
            return Err(BuildError::Invalid(violations));
        }

        let factories: HashMap<_, _> = self.entries.into_iter().collect();
        log::debug!("Registry built with {} state(s)", factories.len());
        Ok(StateRegistry { factories })
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
