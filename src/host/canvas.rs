//! Drawing primitives consumed from the host.

use serde::{Deserialize, Serialize};

/// An opaque RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Which edge of the text the y coordinate refers to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnchorY {
    Top,
    Center,
    #[default]
    Baseline,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub size: f32,
    pub anchor_y: AnchorY,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 12.0,
            anchor_y: AnchorY::Baseline,
        }
    }
}

/// The surface states draw onto.
///
/// Implemented by the host's windowing or graphics layer. The driver calls
/// [`Canvas::clear`] once per draw cycle before handing the canvas to the
/// active state.
pub trait Canvas {
    fn clear(&mut self);

    fn set_background(&mut self, color: Color);

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: TextStyle);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
}

/// A primitive call captured by [`RecordingCanvas`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Background(Color),
    Text {
        text: String,
        x: f32,
        y: f32,
        style: TextStyle,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
}

/// Canvas that remembers every call instead of drawing.
///
/// Used by headless hosts and in tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands issued since the most recent clear.
    pub fn current_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| *c == DrawCommand::Clear)
            .map_or(0, |i| i + 1);
        &self.commands[start..]
    }

    pub fn clear_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| **c == DrawCommand::Clear)
            .count()
    }

    /// Forget everything recorded so far.
    pub fn drain(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn set_background(&mut self, color: Color) {
        self.commands.push(DrawCommand::Background(color));
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            style,
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }
}
