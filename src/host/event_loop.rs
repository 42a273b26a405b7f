//! A minimal host loop that feeds events into a driver.

use crate::core::{Key, Modifiers};
use crate::driver::{Driver, DriverError, Tick};
use crate::host::Canvas;
use std::time::Duration;

/// An event delivered by the host's windowing layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    KeyDown(Key, Modifiers),
    KeyUp(Key, Modifiers),
    /// A new frame; carries the time since the previous one
    Frame(Duration),
}

impl HostEvent {
    /// Press and release of `key` with no modifiers.
    pub fn tap(key: Key) -> [HostEvent; 2] {
        [
            HostEvent::KeyDown(key, Modifiers::empty()),
            HostEvent::KeyUp(key, Modifiers::empty()),
        ]
    }
}

/// Why [`run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopExit {
    /// A state asked to quit
    Quit,
    /// The event source ran dry first
    EventsExhausted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub transitions: usize,
    pub exit: LoopExit,
}

/// Dispatch `events` to `driver` until a state quits or the events run out.
///
/// Every frame event is an update tick followed by a draw. Stops on the first
/// driver error.
///
/// # Example
///
/// ```rust
/// use screenflip::core::Key;
/// use screenflip::driver::Driver;
/// use screenflip::host::{run, HostEvent, LoopExit, RecordingCanvas};
/// use screenflip::registry;
/// use screenflip::screens::{MainMenu, Scene};
/// use std::time::Duration;
///
/// let registry = registry! {
///     "MAIN" => MainMenu::default,
///     "SCENE" => Scene::default,
/// }
/// .unwrap();
/// let mut driver = Driver::new(registry, "MAIN").unwrap();
/// let mut canvas = RecordingCanvas::new();
///
/// let frame = HostEvent::Frame(Duration::from_millis(16));
/// let mut events = vec![frame];
/// events.extend(HostEvent::tap(Key::Escape));
/// events.push(frame);
/// events.push(frame);
///
/// let summary = run(&mut driver, &mut canvas, events).unwrap();
/// assert_eq!(summary.exit, LoopExit::Quit);
/// assert_eq!(summary.frames, 2);
/// ```
pub fn run<I>(
    driver: &mut Driver,
    canvas: &mut dyn Canvas,
    events: I,
) -> Result<RunSummary, DriverError>
where
    I: IntoIterator<Item = HostEvent>,
{
    let mut frames = 0;
    let mut transitions = 0;

    for event in events {
        match event {
            HostEvent::KeyDown(key, mods) => driver.on_key_down(key, mods),
            HostEvent::KeyUp(key, mods) => driver.on_key_up(key, mods),
            HostEvent::Frame(delta) => {
                frames += 1;
                match driver.on_frame_update(delta)? {
                    Tick::Quit | Tick::Halted => {
                        return Ok(RunSummary {
                            frames,
                            transitions,
                            exit: LoopExit::Quit,
                        });
                    }
                    Tick::Transitioned { .. } => transitions += 1,
                    Tick::Updated => {}
                }
                driver.on_draw(canvas);
            }
        }
    }

    Ok(RunSummary {
        frames,
        transitions,
        exit: LoopExit::EventsExhausted,
    })
}
