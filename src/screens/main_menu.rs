//! The first screen: red backdrop, Space moves on to the scene.

use super::panel::{shade, Panel};
use super::{ADVANCE_KEY, EXIT_KEY, SCENE};
use crate::core::{Key, Modifiers, PersistBag, State, StateBase, StateKey};
use crate::host::{Canvas, Color};
use std::time::Duration;

pub struct MainMenu {
    base: StateBase,
    panel: Panel,
}

impl MainMenu {
    pub const TEXT: &'static str =
        "Scene One.\nPress Space to Change Scenes,\nPress Esc. to Exit.";

    pub fn text_position(&self) -> [i32; 2] {
        self.panel.position()
    }

    pub fn background(&self) -> Color {
        self.panel.background()
    }

    pub fn text(&self) -> &'static str {
        self.panel.text()
    }
}

impl Default for MainMenu {
    fn default() -> Self {
        Self {
            base: StateBase::default(),
            panel: Panel::new(Self::TEXT),
        }
    }
}

impl State for MainMenu {
    fn name(&self) -> &str {
        "MainMenu"
    }

    fn base(&self) -> &StateBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut StateBase {
        &mut self.base
    }

    fn setup(&mut self, persist: PersistBag) {
        self.panel.load(&persist);
        self.base.persist = persist;
    }

    fn on_key_down(&mut self, key: Key, _mods: Modifiers) {
        if key == EXIT_KEY {
            self.base.request_quit();
        } else if key == ADVANCE_KEY {
            self.panel.advance(&mut self.base.persist);
            self.base.request_transition(SCENE);
        }
    }

    fn update(&mut self, _delta: Duration) {
        let x = shade();
        self.panel.set_background(Color::rgb(255, x, x));
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        self.panel.draw(canvas);
    }

    fn exits(&self) -> Vec<StateKey> {
        vec![SCENE.into()]
    }
}
