//! Record of the transitions a driver has performed.

use super::key::StateKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Number of transitions a driver keeps unless told otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

/// One completed transition.
///
/// # Example
///
/// ```rust
/// use screenflip::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: "MAIN".into(),
///     to: "SCENE".into(),
///     timestamp: Utc::now(),
///     frame: 12,
/// };
/// assert_eq!(transition.to, "SCENE");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state being left
    pub from: StateKey,
    /// The state being entered
    pub to: StateKey,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Update tick on which the driver performed it
    pub frame: u64,
}

/// Ordered history of transitions.
///
/// `record` is the immutable form and returns a new history with the
/// transition appended; `push` appends in place. A history with a limit keeps
/// only the most recent `limit` transitions.
///
/// # Example
///
/// ```rust
/// use screenflip::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: "MAIN".into(),
///         to: "SCENE".into(),
///         timestamp: Utc::now(),
///         frame: 1,
///     })
///     .record(StateTransition {
///         from: "SCENE".into(),
///         to: "MAIN".into(),
///         timestamp: Utc::now(),
///         frame: 2,
///     });
///
/// let path: Vec<&str> = history.get_path().iter().map(|k| k.as_str()).collect();
/// assert_eq!(path, ["MAIN", "SCENE", "MAIN"]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: VecDeque<StateTransition>,
    #[serde(default)]
    limit: Option<usize>,
    #[serde(default)]
    recorded: u64,
}

impl StateHistory {
    /// An unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: None,
            recorded: 0,
        }
    }

    /// A history that keeps the most recent `limit` transitions.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            limit: Some(limit),
            recorded: 0,
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition) -> Self {
        let mut history = self.clone();
        history.push(transition);
        history
    }

    /// Append a transition in place, dropping the oldest ones past the limit.
    pub fn push(&mut self, transition: StateTransition) {
        self.transitions.push_back(transition);
        self.recorded += 1;
        self.trim();
    }

    /// Change the limit, trimming immediately if needed.
    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit;
        self.trim();
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    fn trim(&mut self) {
        if let Some(limit) = self.limit {
            while self.transitions.len() > limit {
                self.transitions.pop_front();
            }
        }
    }

    /// Keys visited, in order: the first retained `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&StateKey> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Wall-clock time between the first and last retained transition.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Retained transitions, oldest first.
    pub fn transitions(&self) -> &VecDeque<StateTransition> {
        &self.transitions
    }

    pub fn last(&self) -> Option<&StateTransition> {
        self.transitions.back()
    }

    /// Transitions ever recorded, including those trimmed away.
    pub fn total_recorded(&self) -> u64 {
        self.recorded
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
