//! The key/value bag carried across transitions.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Errors from typed access to a [`PersistBag`].
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Value for '{key}' could not be encoded: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Value for '{key}' has an unexpected shape: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Data shared between states across transitions.
///
/// The active state owns the bag. When it finishes, the driver takes the bag
/// out of it and moves it into the successor's `setup`, so entries written by
/// one state are visible to the next.
///
/// # Example
///
/// ```rust
/// use screenflip::core::PersistBag;
/// use serde_json::json;
///
/// let mut bag = PersistBag::new();
/// bag.set("text_position", json!([10, 310]));
///
/// let position: [i32; 2] = bag.get_or("text_position", [0, 300]);
/// assert_eq!(position, [10, 310]);
///
/// let missing: [i32; 2] = bag.get_or("cursor", [0, 0]);
/// assert_eq!(missing, [0, 0]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersistBag {
    entries: HashMap<String, Value>,
}

impl PersistBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw value, replacing any previous entry.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Store any serializable value.
    pub fn insert<T: Serialize>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<Option<Value>, PersistError> {
        let key = key.into();
        let value = serde_json::to_value(value).map_err(|source| PersistError::Encode {
            key: key.clone(),
            source,
        })?;
        Ok(self.entries.insert(key, value))
    }

    /// Raw access to an entry.
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Decode an entry into `T`.
    ///
    /// Returns `Ok(None)` when the key is absent and an error when the stored
    /// value does not have the shape of `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, PersistError> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(value) => T::deserialize(value)
                .map(Some)
                .map_err(|source| PersistError::Decode {
                    key: key.to_string(),
                    source,
                }),
        }
    }

    /// Decode an entry, falling back to `default` when it is absent or
    /// malformed.
    ///
    /// The fallback is lossy: a malformed entry only produces a warning and
    /// the caller can't tell it apart from a missing one. Use [`PersistBag::get`]
    /// when a bad entry needs handling of its own.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.get(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(err) => {
                log::warn!("{err}; using default");
                default
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Score {
        points: u32,
        player: String,
    }

    #[test]
    fn new_bag_is_empty() {
        let bag = PersistBag::new();
        assert!(bag.is_empty());
        assert_eq!(bag.len(), 0);
        assert!(bag.raw("anything").is_none());
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut bag = PersistBag::new();
        assert!(bag.set("level", 1).is_none());
        assert_eq!(bag.set("level", 2), Some(json!(1)));
        assert_eq!(bag.raw("level"), Some(&json!(2)));
    }

    #[test]
    fn typed_insert_and_get() {
        let mut bag = PersistBag::new();
        let score = Score {
            points: 40,
            player: "ada".to_string(),
        };
        bag.insert("score", &score).unwrap();

        let back: Option<Score> = bag.get("score").unwrap();
        assert_eq!(back, Some(score));
    }

    #[test]
    fn insert_unencodable_value_is_encode_error() {
        let mut bag = PersistBag::new();
        bag.set("grid", json!({"0,0": 1}));
        // JSON object keys must be strings
        let grid: HashMap<(i32, i32), u8> = HashMap::from([((0, 0), 1)]);

        let result = bag.insert("grid", &grid);

        match result {
            Err(PersistError::Encode { key, .. }) => assert_eq!(key, "grid"),
            other => panic!("Expected encode error, got {other:?}"),
        }
        assert_eq!(bag.raw("grid"), Some(&json!({"0,0": 1})));
    }

    #[test]
    fn get_missing_key_is_none() {
        let bag = PersistBag::new();
        let value: Option<u32> = bag.get("missing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn get_wrong_shape_is_decode_error() {
        let mut bag = PersistBag::new();
        bag.set("text_position", "not a pair");

        let result: Result<Option<[i32; 2]>, _> = bag.get("text_position");
        assert!(matches!(result, Err(PersistError::Decode { .. })));
    }

    #[test]
    fn get_or_falls_back_on_malformed_value() {
        let mut bag = PersistBag::new();
        bag.set("text_position", json!({"x": 1}));
        assert_eq!(bag.get_or("text_position", [0, 300]), [0, 300]);
    }

    #[test]
    fn remove_and_contains() {
        let mut bag = PersistBag::new();
        bag.set("a", true);
        assert!(bag.contains("a"));
        assert_eq!(bag.remove("a"), Some(json!(true)));
        assert!(!bag.contains("a"));
    }

    #[test]
    fn bag_serializes_as_object() {
        let mut bag = PersistBag::new();
        bag.set("text_position", json!([10, 310]));
        let json = serde_json::to_value(&bag).unwrap();
        assert_eq!(json, json!({"text_position": [10, 310]}));
    }
}
