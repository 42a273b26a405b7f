//! Core types shared by the driver and every state.
//!
//! - [`State`]: the capability set each screen implements
//! - [`PersistBag`]: data carried from one state to the next
//! - [`StateKey`], [`Key`], [`Modifiers`]: identifiers and input codes
//! - [`StateHistory`]: the transitions a driver has performed

mod history;
mod key;
mod persist;
mod state;

pub use history::{StateHistory, StateTransition, DEFAULT_HISTORY_LIMIT};
pub use key::{Key, Modifiers, StateKey};
pub use persist::{PersistBag, PersistError};
pub use state::{Flow, State, StateBase};
