//! Property-based tests for the driver's transition policy.
//!
//! These tests use proptest to drive the driver with random event
//! sequences and check the invariants that must hold for all of them.

use proptest::prelude::*;
use screenflip::core::{Key, Modifiers, PersistBag, State, StateBase, StateKey};
use screenflip::driver::{Driver, Tick};
use screenflip::host::{Canvas, RecordingCanvas};
use screenflip::registry::{RegistryBuilder, StateRegistry};
use serde_json::json;
use std::time::Duration;

const KEYS: [&str; 3] = ["RED", "GREEN", "BLUE"];

/// Keys '0'..'2' request a transition to the matching entry of `KEYS`,
/// 'w' bumps a counter in the bag, Escape quits. `eager` states request a
/// transition to `KEYS[0]` as soon as they are set up.
struct Beacon {
    base: StateBase,
    name: &'static str,
    eager: bool,
}

impl State for Beacon {
    fn name(&self) -> &str {
        self.name
    }

    fn base(&self) -> &StateBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut StateBase {
        &mut self.base
    }

    fn setup(&mut self, persist: PersistBag) {
        self.base.persist = persist;
        if self.eager {
            self.base.request_transition(KEYS[0]);
        }
    }

    fn on_key_down(&mut self, key: Key, _mods: Modifiers) {
        match key {
            Key::Char(c @ '0'..='2') => {
                let index = c as usize - '0' as usize;
                self.base.request_transition(KEYS[index]);
            }
            Key::Char('w') => {
                let count: u64 = self.base.persist.get_or("writes", 0);
                self.base.persist.set("writes", json!(count + 1));
            }
            Key::Escape => self.base.request_quit(),
            _ => {}
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.set_background(screenflip::host::Color::BLACK);
    }

    fn exits(&self) -> Vec<StateKey> {
        KEYS.iter().map(|k| StateKey::from(*k)).collect()
    }
}

fn registry(eager: bool) -> StateRegistry {
    let mut builder = RegistryBuilder::new();
    for (i, key) in KEYS.iter().enumerate() {
        let name = *key;
        let eager = eager && i > 0;
        builder = builder.state(name, move || Beacon {
            base: StateBase::default(),
            name,
            eager,
        });
    }
    builder.build().unwrap()
}

#[derive(Clone, Debug)]
enum Event {
    Jump(usize),
    Write,
    Frame,
    Draw,
    KeyUp,
}

prop_compose! {
    fn arbitrary_event()(variant in 0..5u8, target in 0..3usize) -> Event {
        match variant {
            0 => Event::Jump(target),
            1 => Event::Write,
            2 => Event::Frame,
            3 => Event::Draw,
            _ => Event::KeyUp,
        }
    }
}

fn jump_key(target: usize) -> Key {
    Key::Char(char::from(b'0' + target as u8))
}

const DT: Duration = Duration::from_millis(16);

proptest! {
    #[test]
    fn initial_key_selects_matching_state(index in 0..3usize) {
        let driver = Driver::new(registry(false), KEYS[index]).unwrap();
        prop_assert_eq!(driver.active_key().as_str(), KEYS[index]);
        prop_assert_eq!(driver.active_state().name(), KEYS[index]);
    }

    #[test]
    fn only_frame_updates_change_active_state(
        events in prop::collection::vec(arbitrary_event(), 1..60)
    ) {
        let mut driver = Driver::new(registry(false), KEYS[0]).unwrap();
        let mut canvas = RecordingCanvas::new();

        for event in events {
            let before = driver.active_key().clone();
            match event {
                Event::Frame => {
                    driver.on_frame_update(DT).unwrap();
                    continue;
                }
                Event::Jump(target) => driver.on_key_down(jump_key(target), Modifiers::empty()),
                Event::Write => driver.on_key_down(Key::Char('w'), Modifiers::empty()),
                Event::Draw => driver.on_draw(&mut canvas),
                Event::KeyUp => driver.on_key_up(Key::Space, Modifiers::empty()),
            }
            prop_assert_eq!(driver.active_key(), &before);
        }
    }

    #[test]
    fn at_most_one_transition_per_tick(
        events in prop::collection::vec(arbitrary_event(), 1..60)
    ) {
        // Every state but the first leaves again as soon as it is set up
        let mut driver = Driver::new(registry(true), KEYS[0]).unwrap();

        for event in events {
            match event {
                Event::Jump(target) => driver.on_key_down(jump_key(target), Modifiers::empty()),
                Event::Frame => {
                    let before = driver.history().total_recorded();
                    let tick = driver.on_frame_update(DT).unwrap();
                    let after = driver.history().total_recorded();
                    prop_assert!(after - before <= 1);
                    prop_assert_eq!(matches!(tick, Tick::Transitioned { .. }), after == before + 1);
                }
                _ => {}
            }
        }
    }

    #[test]
    fn bag_survives_any_number_of_transitions(
        hops in prop::collection::vec(0..3usize, 0..20),
        writes in 0..10u64,
    ) {
        let mut driver = Driver::new(registry(false), KEYS[0]).unwrap();
        for _ in 0..writes {
            driver.on_key_down(Key::Char('w'), Modifiers::empty());
        }

        for hop in &hops {
            driver.on_key_down(jump_key(*hop), Modifiers::empty());
            driver.on_frame_update(DT).unwrap();
            prop_assert_eq!(driver.active_key().as_str(), KEYS[*hop]);
        }

        let count: u64 = driver.active_state().persist().get_or("writes", 0);
        prop_assert_eq!(count, writes);
        prop_assert_eq!(driver.history().total_recorded(), hops.len() as u64);
    }

    #[test]
    fn quit_is_signalled_exactly_once(
        before in 0..5usize,
        after in 1..10usize,
    ) {
        let mut driver = Driver::new(registry(false), KEYS[0]).unwrap();
        for _ in 0..before {
            prop_assert_eq!(driver.on_frame_update(DT).unwrap(), Tick::Updated);
        }

        driver.on_key_down(Key::Escape, Modifiers::empty());
        let ticks: Vec<Tick> = (0..after)
            .map(|_| driver.on_frame_update(DT).unwrap())
            .collect();

        prop_assert_eq!(ticks.iter().filter(|t| **t == Tick::Quit).count(), 1);
        prop_assert_eq!(&ticks[0], &Tick::Quit);
        prop_assert!(ticks[1..].iter().all(|t| *t == Tick::Halted));
        prop_assert_eq!(driver.frame_count(), before as u64 + 1);
    }
}
