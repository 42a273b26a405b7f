//! The boundary with the windowing/graphics host.
//!
//! The host opens a window from a [`WindowConfig`], implements [`Canvas`] on
//! top of its renderer and calls the driver's four entry points. [`run`] is a
//! small loop that does the calling for hosts that can express their input as
//! an iterator of [`HostEvent`]s.

mod canvas;
mod config;
mod event_loop;

pub use canvas::{AnchorY, Canvas, Color, DrawCommand, RecordingCanvas, TextStyle};
pub use config::{ConfigError, WindowConfig};
pub use event_loop::{run, HostEvent, LoopExit, RunSummary};
