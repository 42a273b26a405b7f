//! Two example screens that flip between each other.
//!
//! [`MainMenu`] and [`Scene`] each show a short text over a flickering
//! background. Space moves the text by [`TEXT_STEP`] and switches to the other
//! screen; the position travels along in the bag under `"text_position"`.
//! Escape quits.

mod main_menu;
mod panel;
mod scene;

pub use main_menu::MainMenu;
pub use scene::Scene;

use crate::core::Key;
use crate::registry::{BuildError, RegistryBuilder, StateRegistry};

pub const MAIN: &str = "MAIN";
pub const SCENE: &str = "SCENE";

pub const ADVANCE_KEY: Key = Key::Space;
pub const EXIT_KEY: Key = Key::Escape;

pub const DEFAULT_TEXT_POSITION: [i32; 2] = [0, 300];
pub const TEXT_STEP: [i32; 2] = [10, 10];

/// Registry of both screens under [`MAIN`] and [`SCENE`].
pub fn registry() -> Result<StateRegistry, BuildError> {
    RegistryBuilder::new()
        .state(MAIN, MainMenu::default)
        .state(SCENE, Scene::default)
        .build()
}
