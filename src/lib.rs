//! Screenflip: screens of a windowed application as a state machine
//!
//! A [`Driver`] owns the active screen and forwards the host's per-frame
//! update, draw and input callbacks to it. Screens ask to be replaced by
//! naming a registered successor, and hand a [`PersistBag`] of shared data
//! to it on the way out.
//!
//! # Core Concepts
//!
//! - **State**: one screen, implementing the [`State`] hooks
//! - **Registry**: name-to-constructor mapping of every reachable state
//! - **Driver**: dispatches callbacks and performs at most one transition per
//!   update tick
//! - **Host**: the windowing layer; supplies a [`host::Canvas`] and observes
//!   [`Tick::Quit`] to shut down
//!
//! # Example
//!
//! ```rust
//! use screenflip::core::{Key, Modifiers};
//! use screenflip::driver::{Driver, Tick};
//! use screenflip::screens;
//! use std::time::Duration;
//!
//! let mut driver = Driver::new(screens::registry().unwrap(), screens::MAIN).unwrap();
//! let frame = Duration::from_millis(16);
//!
//! driver.on_key_down(Key::Space, Modifiers::empty());
//! driver.on_frame_update(frame).unwrap();
//! assert_eq!(driver.active_key(), "SCENE");
//!
//! let position: [i32; 2] = driver.active_state().persist().get_or("text_position", [0, 0]);
//! assert_eq!(position, [10, 310]);
//!
//! driver.on_key_down(Key::Escape, Modifiers::empty());
//! assert_eq!(driver.on_frame_update(frame).unwrap(), Tick::Quit);
//! ```

pub mod core;
pub mod driver;
pub mod host;
pub mod registry;
pub mod screens;
pub mod validation;

// Re-export commonly used types
pub use self::core::{Key, Modifiers, PersistBag, State, StateBase, StateKey};
pub use driver::{Driver, DriverError, Tick};
pub use registry::{RegistryBuilder, StateRegistry};
