//! Keys and state identifiers.
//!
//! The host translates its native key events into [`Key`] and [`Modifiers`]
//! before handing them to the driver.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Name of a registered state variant.
///
/// Keys are plain strings so that registries can be assembled from
/// configuration as easily as from code.
///
/// # Example
///
/// ```rust
/// use screenflip::core::StateKey;
///
/// let key = StateKey::from("MAIN");
/// assert_eq!(key.as_str(), "MAIN");
/// assert_eq!(key, "MAIN");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateKey(String);

impl StateKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StateKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for StateKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&StateKey> for StateKey {
    fn from(key: &StateKey) -> Self {
        key.clone()
    }
}

impl Borrow<str> for StateKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for StateKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StateKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Symbolic key code delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Escape,
    Enter,
    Tab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    /// A printable character key.
    Char(char),
    /// Any key the host has no symbolic name for, by its raw code.
    Other(u32),
}

bitflags! {
    /// Modifier keys held while a key event was generated.
    #[derive(Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0000_0001;
        const CTRL = 0b0000_0010;
        const ALT = 0b0000_0100;
        const LOGO = 0b0000_1000;
    }
}
