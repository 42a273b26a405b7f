//! The second screen: green backdrop, Space returns to the menu.

use super::panel::{shade, Panel};
use super::{ADVANCE_KEY, EXIT_KEY, MAIN};
use crate::core::{Key, Modifiers, PersistBag, State, StateBase, StateKey};
use crate::host::{Canvas, Color};
use std::time::Duration;

pub struct Scene {
    base: StateBase,
    panel: Panel,
}

impl Scene {
    pub const TEXT: &'static str =
        "Scene Two.\nPress Space to Change Scenes,\nPress Esc. to Exit.";

    pub fn text_position(&self) -> [i32; 2] {
        self.panel.position()
    }

    pub fn background(&self) -> Color {
        self.panel.background()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            base: StateBase::default(),
            panel: Panel::new(Self::TEXT),
        }
    }
}

impl State for Scene {
    fn name(&self) -> &str {
        "Scene"
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
            self.base.request_transition(MAIN);
        }
    }

    fn update(&mut self, _delta: Duration) {
        let x = shade();
        self.panel.set_background(Color::rgb(x, 255, x));
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        self.panel.draw(canvas);
    }

    fn exits(&self) -> Vec<StateKey> {
        vec![MAIN.into()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn space_returns_to_main() {
        let mut bag = PersistBag::new();
        bag.set("text_position", json!([10, 310]));
        let mut scene = Scene::default();
        scene.setup(bag);

        scene.on_key_down(Key::Space, Modifiers::empty());

        assert_eq!(scene.text_position(), [20, 320]);
        assert_eq!(scene.flow().next_state.as_ref().unwrap(), "MAIN");
        assert!(scene.flow().done);
    }

    #[test]
    fn update_picks_green_shade() {
        let mut scene = Scene::default();
        scene.setup(PersistBag::new());
        scene.update(Duration::ZERO);

        let color = scene.background();
        assert_eq!(color.g, 255);
        assert_eq!(color.r, color.b);
        assert!((150..=200).contains(&color.r));
    }

    #[test]
    fn escape_requests_quit() {
        let mut scene = Scene::default();
        scene.setup(PersistBag::new());
        scene.on_key_down(Key::Escape, Modifiers::CTRL);
        assert!(scene.flow().quit);
    }
}
