//! The name-to-constructor mapping of every reachable state.
//!
//! Registries are assembled with [`RegistryBuilder`] (or the [`registry!`]
//! macro) and are immutable once built.
//!
//! [`registry!`]: crate::registry!

pub mod builder;
pub mod error;
pub mod macros;

pub use builder::RegistryBuilder;
pub use error::BuildError;

use crate::core::{State, StateKey};
use std::collections::HashMap;
use std::fmt;

/// Zero-argument constructor producing a fresh state.
pub type StateFactory = Box<dyn Fn() -> Box<dyn State>>;

/// Immutable mapping from [`StateKey`] to [`StateFactory`].
///
/// Factories should be cheap and free of side effects: [`RegistryBuilder::build`]
/// calls each one once to read the state's name and exits, and every
/// transition calls the target's factory again for a fresh instance.
///
/// # Example
///
/// ```rust
/// use screenflip::registry::StateRegistry;
/// use screenflip::screens::{MainMenu, Scene};
///
/// let registry = StateRegistry::builder()
///     .state("MAIN", MainMenu::default)
///     .state("SCENE", Scene::default)
///     .build()
///     .unwrap();
///
/// assert!(registry.contains("MAIN"));
/// assert_eq!(registry.create("SCENE").unwrap().name(), "Scene");
/// assert!(registry.create("CREDITS").is_none());
/// ```
pub struct StateRegistry {
    pub(crate) factories: HashMap<StateKey, StateFactory>,
}

impl StateRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Construct a fresh instance of the state registered under `key`.
    pub fn create(&self, key: &str) -> Option<Box<dyn State>> {
        self.factories.get(key).map(|factory| factory())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.factories.contains_key(key)
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<&StateKey> {
        let mut keys: Vec<_> = self.factories.keys().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl fmt::Debug for StateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}
