//! The driver: the imperative shell between the host's event loop and the
//! active state.
//!
//! # Key Concepts
//!
//! - **Dispatch**: draw and key callbacks go straight to the active state
//! - **Transition policy**: evaluated once per update tick, before the
//!   state's own update; at most one transition per tick
//! - **Termination**: a state's quit request surfaces as [`Tick::Quit`] for
//!   the host to act on; the driver never exits the process itself

mod error;
mod machine;

pub use error::DriverError;
pub use machine::{Driver, Tick};
