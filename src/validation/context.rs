//! The view of a registry that validation checks inspect.

use crate::core::StateKey;

/// One registered state as seen by validation.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutEntry {
    pub key: StateKey,
    /// `State::name` of a freshly built instance
    pub state: String,
    /// `State::exits` of a freshly built instance
    pub exits: Vec<StateKey>,
}

/// Every entry of a registry under construction, in registration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistryLayout {
    pub entries: Vec<LayoutEntry>,
}

impl RegistryLayout {
    pub fn contains(&self, key: &StateKey) -> bool {
        self.entries.iter().any(|e| &e.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &StateKey> {
        self.entries.iter().map(|e| &e.key)
    }
}
