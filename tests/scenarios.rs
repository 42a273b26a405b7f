//! End-to-end runs of the example screens.

use screenflip::core::{Key, Modifiers};
use screenflip::driver::{Driver, Tick};
use screenflip::host::{run, DrawCommand, HostEvent, LoopExit, RecordingCanvas};
use screenflip::registry;
use screenflip::screens::{self, MainMenu, Scene};
use std::time::Duration;

const FRAME: HostEvent = HostEvent::Frame(Duration::from_millis(16));

fn driver() -> Driver {
    let registry = registry! {
        "MAIN" => MainMenu::default,
        "SCENE" => Scene::default,
    }
    .unwrap();
    Driver::new(registry, "MAIN").unwrap()
}

fn text_position(driver: &Driver) -> Option<[i32; 2]> {
    driver
        .active_state()
        .persist()
        .get("text_position")
        .unwrap()
}

#[test]
fn space_moves_to_scene_with_shifted_text() {
    let mut driver = driver();
    assert_eq!(driver.active_state().name(), "MainMenu");
    assert_eq!(text_position(&driver), None);

    driver.on_key_down(Key::Space, Modifiers::empty());
    assert_eq!(driver.active_key(), "MAIN");

    let tick = driver.on_frame_update(Duration::from_millis(16)).unwrap();

    assert_eq!(
        tick,
        Tick::Transitioned {
            from: "MAIN".into(),
            to: "SCENE".into()
        }
    );
    assert_eq!(driver.active_state().name(), "Scene");
    assert_eq!(text_position(&driver), Some([10, 310]));
}

#[test]
fn text_position_accumulates_across_round_trips() {
    let mut driver = driver();
    let mut canvas = RecordingCanvas::new();
    let mut events = vec![FRAME];
    for _ in 0..4 {
        events.extend(HostEvent::tap(Key::Space));
        events.push(FRAME);
    }

    let summary = run(&mut driver, &mut canvas, events).unwrap();

    assert_eq!(summary.exit, LoopExit::EventsExhausted);
    assert_eq!(summary.transitions, 4);
    assert_eq!(driver.active_key(), "MAIN");
    assert_eq!(text_position(&driver), Some([40, 340]));

    let frame = canvas.current_frame();
    assert_eq!(frame.len(), 2);
    match &frame[1] {
        DrawCommand::Text { text, x, y, .. } => {
            assert_eq!(text, MainMenu::TEXT);
            assert_eq!((*x, *y), (40.0, 340.0));
        }
        other => panic!("Expected text, got {other:?}"),
    }
}

#[test]
fn escape_from_either_screen_quits_once() {
    for start in [screens::MAIN, screens::SCENE] {
        let mut driver = Driver::new(screens::registry().unwrap(), start).unwrap();
        let mut canvas = RecordingCanvas::new();

        driver.on_frame_update(Duration::from_millis(16)).unwrap();
        driver.on_key_down(Key::Escape, Modifiers::empty());

        assert_eq!(
            driver.on_frame_update(Duration::from_millis(16)).unwrap(),
            Tick::Quit
        );
        for _ in 0..3 {
            assert_eq!(
                driver.on_frame_update(Duration::from_millis(16)).unwrap(),
                Tick::Halted
            );
        }
        driver.on_draw(&mut canvas);
        assert!(canvas.commands().is_empty());
        assert_eq!(driver.active_key().as_str(), start);
    }
}

#[test]
fn scene_draws_green_background() {
    let mut driver = driver();
    let mut canvas = RecordingCanvas::new();
    let mut events = HostEvent::tap(Key::Space).to_vec();
    events.push(FRAME);

    run(&mut driver, &mut canvas, events).unwrap();

    match canvas.current_frame().first() {
        Some(DrawCommand::Background(color)) => {
            assert_eq!(color.g, 255);
            assert!((150..=200).contains(&color.r));
        }
        other => panic!("Expected background, got {other:?}"),
    }
}

#[test]
fn history_tracks_visited_screens() {
    let mut driver = driver();
    let mut canvas = RecordingCanvas::new();
    let mut events = Vec::new();
    for _ in 0..3 {
        events.extend(HostEvent::tap(Key::Space));
        events.push(FRAME);
    }
    events.extend(HostEvent::tap(Key::Escape));
    events.push(FRAME);

    let summary = run(&mut driver, &mut canvas, events).unwrap();

    assert_eq!(summary.exit, LoopExit::Quit);
    let path: Vec<&str> = driver
        .history()
        .get_path()
        .iter()
        .map(|k| k.as_str())
        .collect();
    assert_eq!(path, ["MAIN", "SCENE", "MAIN", "SCENE"]);
}
