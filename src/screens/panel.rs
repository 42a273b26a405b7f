//! Text panel shared by the example screens.

use crate::core::PersistBag;
use crate::host::{AnchorY, Canvas, Color, TextStyle};
use rand::Rng;
use serde_json::json;

pub(crate) const TEXT_POSITION: &str = "text_position";

pub(crate) struct Panel {
    text: &'static str,
    position: [i32; 2],
    background: Color,
}

impl Panel {
    pub(crate) fn new(text: &'static str) -> Self {
        Self {
            text,
            position: super::DEFAULT_TEXT_POSITION,
            background: Color::WHITE,
        }
    }

    /// Pick up the position left behind by the previous screen. A malformed
    /// entry is reported and the panel starts from the default position.
    pub(crate) fn load(&mut self, persist: &PersistBag) {
        self.position = match persist.get(TEXT_POSITION) {
            Ok(Some(position)) => position,
            Ok(None) => super::DEFAULT_TEXT_POSITION,
            Err(err) => {
                log::error!(
                    "Discarding '{TEXT_POSITION}' entry {:?}: {err}",
                    persist.raw(TEXT_POSITION)
                );
                super::DEFAULT_TEXT_POSITION
            }
        };
    }

    /// Nudge the text and record where it ended up.
    pub(crate) fn advance(&mut self, persist: &mut PersistBag) {
        self.position[0] += super::TEXT_STEP[0];
        self.position[1] += super::TEXT_STEP[1];
        persist.set(TEXT_POSITION, json!(self.position));
    }

    pub(crate) fn set_background(&mut self, background: Color) {
        self.background = background;
    }

    pub(crate) fn position(&self) -> [i32; 2] {
        self.position
    }

    pub(crate) fn background(&self) -> Color {
        self.background
    }

    pub(crate) fn text(&self) -> &'static str {
        self.text
    }

    pub(crate) fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.set_background(self.background);
        canvas.draw_text(
            self.text,
            self.position[0] as f32,
            self.position[1] as f32,
            TextStyle {
                color: Color::BLACK,
                size: 14.0,
                anchor_y: AnchorY::Top,
            },
        );
    }
}

/// Random channel value for the flickering backgrounds.
pub(crate) fn shade() -> u8 {
    rand::thread_rng().gen_range(150..=200)
}
