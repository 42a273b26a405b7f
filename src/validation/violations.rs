//! Problems found while validating a registry layout.

use crate::core::StateKey;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistryViolation {
    #[error("State key '{key}' is registered more than once")]
    DuplicateKey { key: StateKey },

    #[error("State '{state}' is registered under an empty key")]
    EmptyKey { state: String },

    #[error("State '{from}' declares exit '{to}', which is not registered")]
    UnknownExit { from: StateKey, to: StateKey },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}
