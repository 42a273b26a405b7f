//! Errors raised while driving states.

use crate::core::StateKey;
use thiserror::Error;

/// Errors that can occur while the driver runs.
///
/// Both kinds are fatal: the driver returns them immediately instead of
/// skipping the offending transition.
#[derive(Debug, Error, PartialEq)]
pub enum DriverError {
    /// The initial key or a requested next key is not registered.
    #[error("No state registered under '{key}'")]
    UnknownState { key: StateKey },

    /// A state set `done` without naming where to go.
    #[error("State '{state}' requested a transition without a next state")]
    MissingNextState { state: String },

    /// A state named a next state without setting `done`.
    #[error("State '{state}' set next state '{next}' without requesting a transition")]
    NextStateWithoutDone { state: String, next: StateKey },
}

impl DriverError {
    /// Whether the error stems from registry configuration rather than from a
    /// state's own bookkeeping.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::UnknownState { .. })
    }

    pub fn is_usage_error(&self) -> bool {
        !self.is_config_error()
    }
}
