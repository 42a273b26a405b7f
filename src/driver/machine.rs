//! Driver that dispatches host callbacks to the active state.

use crate::core::{
    Key, Modifiers, PersistBag, State, StateHistory, StateKey, StateTransition,
    DEFAULT_HISTORY_LIMIT,
};
use crate::driver::error::DriverError;
use crate::host::Canvas;
use crate::registry::StateRegistry;
use chrono::Utc;
use log::{debug, error, info, warn};
use std::time::Duration;

/// Outcome of one [`Driver::on_frame_update`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum Tick {
    /// No transition; the active state was updated
    Updated,

    /// The active state was replaced, then the new one was updated
    Transitioned { from: StateKey, to: StateKey },

    /// The active state asked to quit. Reported exactly once; the host should
    /// shut down.
    Quit,

    /// The driver already quit; nothing was dispatched
    Halted,
}

/// Owns the active state and performs transitions between registered states.
///
/// # Example
///
/// ```rust
/// use screenflip::core::{Key, Modifiers};
/// use screenflip::driver::{Driver, Tick};
/// use screenflip::registry;
/// use screenflip::screens::{MainMenu, Scene};
/// use std::time::Duration;
///
/// let registry = registry! {
///     "MAIN" => MainMenu::default,
///     "SCENE" => Scene::default,
/// }
/// .unwrap();
///
/// let mut driver = Driver::new(registry, "MAIN").unwrap();
/// driver.on_key_down(Key::Space, Modifiers::empty());
///
/// let tick = driver.on_frame_update(Duration::from_millis(16)).unwrap();
/// assert_eq!(tick, Tick::Transitioned { from: "MAIN".into(), to: "SCENE".into() });
/// assert_eq!(driver.active_key(), "SCENE");
/// ```
pub struct Driver {
    registry: StateRegistry,
    active: Box<dyn State>,
    active_key: StateKey,
    history: StateHistory,
    frame: u64,
    terminated: bool,
}

impl Driver {
    /// Build the state registered under `initial` and set it up with an
    /// empty bag.
    pub fn new(registry: StateRegistry, initial: impl Into<StateKey>) -> Result<Self, DriverError> {
        let key = initial.into();
        let Some(mut active) = registry.create(key.as_str()) else {
            error!("Initial state '{key}' is not registered");
            return Err(DriverError::UnknownState { key });
        };

        active.setup(PersistBag::new());
        info!("Starting in state '{}' ({})", key, active.name());

        Ok(Self {
            registry,
            active,
            active_key: key,
            history: StateHistory::with_limit(DEFAULT_HISTORY_LIMIT),
            frame: 0,
            terminated: false,
        })
    }

    /// Keep only the most recent `limit` transitions in [`Driver::history`].
    /// The default is [`DEFAULT_HISTORY_LIMIT`].
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history.set_limit(Some(limit));
        self
    }

    pub fn active_key(&self) -> &StateKey {
        &self.active_key
    }

    pub fn active_state(&self) -> &dyn State {
        &*self.active
    }

    pub fn registry(&self) -> &StateRegistry {
        &self.registry
    }

    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Number of update ticks processed, not counting those after quitting.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Per-frame entry point: run the transition policy, then update the
    /// active state with the time elapsed since the previous frame.
    pub fn on_frame_update(&mut self, delta: Duration) -> Result<Tick, DriverError> {
        if self.terminated {
            return Ok(Tick::Halted);
        }

        self.frame += 1;
        let tick = self.check_state()?;
        if tick == Tick::Quit {
            return Ok(tick);
        }

        self.active.update(delta);
        Ok(tick)
    }

    /// Clear the canvas and let the active state draw onto it.
    pub fn on_draw(&self, canvas: &mut dyn Canvas) {
        if self.terminated {
            warn!("Draw requested after quit; ignoring");
            return;
        }
        canvas.clear();
        self.active.draw(canvas);
    }

    pub fn on_key_down(&mut self, key: Key, mods: Modifiers) {
        if self.terminated {
            warn!("Key down {key:?} after quit; ignoring");
            return;
        }
        debug!("Key down {key:?} ({mods:?}) -> {}", self.active_key);
        self.active.on_key_down(key, mods);
    }

    pub fn on_key_up(&mut self, key: Key, mods: Modifiers) {
        if self.terminated {
            warn!("Key up {key:?} after quit; ignoring");
            return;
        }
        debug!("Key up {key:?} ({mods:?}) -> {}", self.active_key);
        self.active.on_key_up(key, mods);
    }

    /// Inspect the active state's flags. At most one transition happens here;
    /// the successor's flags wait for the next tick.
    fn check_state(&mut self) -> Result<Tick, DriverError> {
        let flow = self.active.flow().clone();

        if flow.quit {
            debug!("State '{}' requested quit", self.active_key);
            self.terminated = true;
            return Ok(Tick::Quit);
        }

        match (flow.done, flow.next_state) {
            (false, None) => Ok(Tick::Updated),
            (true, Some(next)) => self.flip_state(next),
            (true, None) => {
                let state = self.active.name().to_string();
                error!("State '{state}' is done but has no next state");
                Err(DriverError::MissingNextState { state })
            }
            (false, Some(next)) => {
                let state = self.active.name().to_string();
                error!("State '{state}' set next state '{next}' without being done");
                Err(DriverError::NextStateWithoutDone { state, next })
            }
        }
    }

    /// Replace the active state with a fresh instance of `next`, moving the
    /// bag across.
    fn flip_state(&mut self, next: StateKey) -> Result<Tick, DriverError> {
        let Some(mut successor) = self.registry.create(next.as_str()) else {
            error!(
                "State '{}' requested unregistered state '{next}'",
                self.active_key
            );
            return Err(DriverError::UnknownState { key: next });
        };

        let persist = self.active.take_persist();
        successor.setup(persist);
        self.active = successor;

        let from = std::mem::replace(&mut self.active_key, next.clone());
        self.history.push(StateTransition {
            from: from.clone(),
            to: next.clone(),
            timestamp: Utc::now(),
            frame: self.frame,
        });
        info!("Transition '{from}' -> '{next}' on frame {}", self.frame);

        Ok(Tick::Transitioned { from, to: next })
    }
}
