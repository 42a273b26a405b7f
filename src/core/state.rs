//! The State trait implemented by every screen.
//!
//! A state is one screen or mode of the application. The driver forwards
//! frame and input callbacks to the active state and watches its transition
//! flags to decide when to replace it.

use super::key::{Key, Modifiers, StateKey};
use super::persist::PersistBag;
use crate::host::Canvas;
use std::time::Duration;

/// Transition metadata every state carries.
///
/// `done` and `next_state` form a pair: a state that wants to leave sets both
/// at once (see [`StateBase::request_transition`]). The driver treats one
/// without the other as a bug in the state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Flow {
    pub done: bool,
    pub quit: bool,
    pub next_state: Option<StateKey>,
}

/// Fields shared by all states: the carried bag and the transition flags.
///
/// Concrete states embed one of these and hand it out through
/// [`State::base`] and [`State::base_mut`].
///
/// # Example
///
/// ```rust
/// use screenflip::core::StateBase;
///
/// let mut base = StateBase::default();
/// base.persist.set("visited", true);
/// base.request_transition("SCENE");
///
/// assert!(base.flow.done);
/// assert_eq!(base.flow.next_state.as_ref().unwrap(), "SCENE");
/// ```
#[derive(Clone, Debug, Default)]
pub struct StateBase {
    pub persist: PersistBag,
    pub flow: Flow,
}

impl StateBase {
    /// Ask the driver to switch to `next` on its next update tick.
    pub fn request_transition(&mut self, next: impl Into<StateKey>) {
        self.flow.done = true;
        self.flow.next_state = Some(next.into());
    }

    /// Ask the driver to stop.
    pub fn request_quit(&mut self) {
        self.flow.quit = true;
    }
}

/// Capability set of a screen.
///
/// Only `name`, `base` and `base_mut` are required. Every hook defaults to a
/// no-op except `setup`, whose default stores the incoming bag so that later
/// writes are visible when the driver captures it.
///
/// # Example
///
/// ```rust
/// use screenflip::core::{Key, Modifiers, State, StateBase};
///
/// #[derive(Default)]
/// struct Pause {
///     base: StateBase,
/// }
///
/// impl State for Pause {
///     fn name(&self) -> &str {
///         "Pause"
///     }
///
///     fn base(&self) -> &StateBase {
///         &self.base
///     }
///
///     fn base_mut(&mut self) -> &mut StateBase {
///         &mut self.base
///     }
///
///     fn on_key_down(&mut self, key: Key, _mods: Modifiers) {
///         if key == Key::Escape {
///             self.base.request_transition("GAME");
///         }
///     }
/// }
///
/// let mut pause = Pause::default();
/// pause.on_key_down(Key::Escape, Modifiers::empty());
/// assert!(pause.flow().done);
/// ```
pub trait State {
    /// Name used in logs and diagnostics.
    fn name(&self) -> &str;

    fn base(&self) -> &StateBase;

    fn base_mut(&mut self) -> &mut StateBase;

    /// Called once, right after construction, with the bag carried over from
    /// the previous state (empty for the first one).
    fn setup(&mut self, persist: PersistBag) {
        self.base_mut().persist = persist;
    }

    fn on_key_down(&mut self, _key: Key, _mods: Modifiers) {}

    fn on_key_up(&mut self, _key: Key, _mods: Modifiers) {}

    fn update(&mut self, _delta: Duration) {}

    fn draw(&self, _canvas: &mut dyn Canvas) {}

    /// Keys this state may transition to. Checked against the registry when
    /// it is built; an empty list opts out of the check.
    fn exits(&self) -> Vec<StateKey> {
        Vec::new()
    }

    fn flow(&self) -> &Flow {
        &self.base().flow
    }

    fn persist(&self) -> &PersistBag {
        &self.base().persist
    }

    /// Hand the bag over to the driver, leaving an empty one behind.
    fn take_persist(&mut self) -> PersistBag {
        std::mem::take(&mut self.base_mut().persist)
    }
}
