//! Tests for the Engram keymap
//!
//! These drive the keymap manager with scripted key events, the way the
//! scanning loop would, and check each report that comes out the other side.

use std::collections::VecDeque;

use kyria_keymap::{
    keys::*, layout::engram, tap_dance::TAPPING_TERM, Event, EventQueue, KeyAction, KeyEvent,
    KeymapManager, Keyboard, Layer, Variant,
};

/// Our Actor steps are each one of these.
enum ActorStep {
    /// Cause this much time to pass for the keymap (in its ticks).
    Tick(u32),
    /// Send a key event.
    Event(KeyEvent),
    /// Expect a key set report.
    Keys(&'static [Keyboard]),
    /// Expect some other event.
    Expect(Event),
}

use ActorStep::*;

/// Collects everything the keymap sends.
struct TestQueue {
    events: VecDeque<Event>,
}

impl EventQueue for TestQueue {
    fn push(&mut self, val: Event) {
        self.events.push_back(val);
    }
}

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn run(variant: &'static Variant, steps: &[ActorStep]) {
    init();
    let mut km = KeymapManager::new(variant);
    let mut queue = TestQueue {
        events: VecDeque::new(),
    };

    for (i, step) in steps.iter().enumerate() {
        match step {
            Tick(t) => {
                for _ in 0..*t {
                    km.tick();
                }
            }
            ActorStep::Event(e) => km.handle_event(*e, &mut queue),
            Keys(keys) => match queue.events.pop_front() {
                Some(Event::Key(KeyAction::KeySet(got))) => {
                    assert_eq!(&got, keys, "step {}", i);
                }
                other => panic!("step {}: expected key set {:?}, got {:?}", i, keys, other),
            },
            Expect(want) => {
                let got = queue.events.pop_front();
                assert_eq!(got.as_ref(), Some(want), "step {}", i);
            }
        }
    }

    assert!(queue.events.is_empty(), "left over: {:?}", queue.events);
}

const fn press(scan: u8) -> ActorStep {
    ActorStep::Event(KeyEvent::Press(scan))
}

const fn release(scan: u8) -> ActorStep {
    ActorStep::Event(KeyEvent::Release(scan))
}

#[test]
fn type_words() {
    // "hi, sea."
    run(
        &engram::VARIANT,
        &[
            press(KEY_J),
            Keys(&[Keyboard::H]),
            release(KEY_J),
            Keys(&[]),
            press(KEY_S),
            Keys(&[Keyboard::I]),
            release(KEY_S),
            Keys(&[]),
            press(KEY_Y),
            Keys(&[Keyboard::Comma]),
            release(KEY_Y),
            Keys(&[]),
            press(KEY_THUMB_R2),
            Keys(&[Keyboard::Space]),
            release(KEY_THUMB_R2),
            Keys(&[]),
            press(KEY_L),
            Keys(&[Keyboard::S]),
            press(KEY_D),
            Keys(&[Keyboard::E, Keyboard::S]),
            release(KEY_L),
            Keys(&[Keyboard::E]),
            press(KEY_F),
            Keys(&[Keyboard::A, Keyboard::E]),
            release(KEY_D),
            Keys(&[Keyboard::A]),
            release(KEY_F),
            Keys(&[]),
            press(KEY_T),
            Keys(&[Keyboard::Dot]),
            release(KEY_T),
            Keys(&[]),
        ],
    );
}

#[test]
fn shifted_punctuation_stays_put() {
    run(
        &engram::VARIANT,
        &[
            press(KEY_THUMB_L4),
            Keys(&[Keyboard::LeftShift]),
            // Shift + ',' is still ','
            press(KEY_Y),
            Keys(&[Keyboard::Comma]),
            release(KEY_Y),
            Keys(&[Keyboard::LeftShift]),
            // Shift + '.' is still '.'
            press(KEY_T),
            Keys(&[Keyboard::Dot]),
            release(KEY_T),
            Keys(&[Keyboard::LeftShift]),
            // Shift + ''' is still '''
            press(KEY_B),
            Keys(&[Keyboard::Apostrophe]),
            release(KEY_B),
            Keys(&[Keyboard::LeftShift]),
            // Shift + 'v' is 'V'
            press(KEY_G),
            Keys(&[Keyboard::V, Keyboard::LeftShift]),
            release(KEY_G),
            Keys(&[Keyboard::LeftShift]),
            release(KEY_THUMB_L4),
            Keys(&[]),
        ],
    );
}

#[test]
fn ctrl_alt_dance() {
    run(
        &engram::VARIANT,
        &[
            // One tap: ctrl.
            press(KEY_THUMB_R1),
            Expect(Event::Register(Keyboard::LeftControl)),
            Keys(&[Keyboard::LeftControl]),
            release(KEY_THUMB_R1),
            Expect(Event::Unregister(Keyboard::LeftControl)),
            Keys(&[]),
            // Two taps: alt.
            press(KEY_THUMB_R1),
            Expect(Event::Register(Keyboard::LeftAlt)),
            Keys(&[Keyboard::LeftAlt]),
            release(KEY_THUMB_R1),
            Expect(Event::Unregister(Keyboard::LeftAlt)),
            Keys(&[]),
            // Three taps, held: both, then let go of alt first.
            press(KEY_THUMB_R1),
            Expect(Event::Register(Keyboard::LeftControl)),
            Expect(Event::Register(Keyboard::LeftAlt)),
            Keys(&[Keyboard::LeftControl, Keyboard::LeftAlt]),
            press(KEY_E),
            Keys(&[Keyboard::O, Keyboard::LeftControl, Keyboard::LeftAlt]),
            release(KEY_E),
            Keys(&[Keyboard::LeftControl, Keyboard::LeftAlt]),
            release(KEY_THUMB_R1),
            Expect(Event::Unregister(Keyboard::LeftAlt)),
            Expect(Event::Unregister(Keyboard::LeftControl)),
            Keys(&[]),
            // Using the triple tap with another key ended the dance, so
            // the next press starts from one again.
            press(KEY_THUMB_R1),
            Expect(Event::Register(Keyboard::LeftControl)),
            Keys(&[Keyboard::LeftControl]),
            release(KEY_THUMB_R1),
            Expect(Event::Unregister(Keyboard::LeftControl)),
            Keys(&[]),
            Tick(TAPPING_TERM),
            // Four quick taps: the fourth does nothing.
            press(KEY_THUMB_R1),
            Expect(Event::Register(Keyboard::LeftControl)),
            Keys(&[Keyboard::LeftControl]),
            release(KEY_THUMB_R1),
            Expect(Event::Unregister(Keyboard::LeftControl)),
            Keys(&[]),
            press(KEY_THUMB_R1),
            Expect(Event::Register(Keyboard::LeftAlt)),
            Keys(&[Keyboard::LeftAlt]),
            release(KEY_THUMB_R1),
            Expect(Event::Unregister(Keyboard::LeftAlt)),
            Keys(&[]),
            press(KEY_THUMB_R1),
            Expect(Event::Register(Keyboard::LeftControl)),
            Expect(Event::Register(Keyboard::LeftAlt)),
            Keys(&[Keyboard::LeftControl, Keyboard::LeftAlt]),
            release(KEY_THUMB_R1),
            Expect(Event::Unregister(Keyboard::LeftAlt)),
            Expect(Event::Unregister(Keyboard::LeftControl)),
            Keys(&[]),
            press(KEY_THUMB_R1),
            release(KEY_THUMB_R1),
        ],
    );
}

#[test]
fn layer_dances() {
    run(
        &engram::VARIANT,
        &[
            // Num/Misc once: numbers.
            press(KEY_THUMB_L3),
            Expect(Event::LayerOn(Layer::Num)),
            press(KEY_S),
            Keys(&[Keyboard::Keyboard2]),
            release(KEY_S),
            Keys(&[]),
            release(KEY_THUMB_L3),
            Expect(Event::LayerOff(Layer::Num)),
            // Held again after use: still numbers.
            press(KEY_THUMB_L3),
            Expect(Event::LayerOn(Layer::Num)),
            release(KEY_THUMB_L3),
            Expect(Event::LayerOff(Layer::Num)),
            // Then straight back, held: clipboard.
            press(KEY_THUMB_L3),
            Expect(Event::LayerOn(Layer::Misc)),
            press(KEY_D),
            Keys(&[Keyboard::C, Keyboard::LeftControl]),
            release(KEY_D),
            Keys(&[]),
            release(KEY_THUMB_L3),
            Expect(Event::LayerOff(Layer::Misc)),
            // Nav/Os once: arrows and symbols.
            press(KEY_THUMB_R3),
            Expect(Event::LayerOn(Layer::Nav)),
            press(KEY_I),
            Keys(&[Keyboard::UpArrow]),
            release(KEY_I),
            Keys(&[]),
            press(KEY_T),
            Keys(&[Keyboard::Grave]),
            release(KEY_T),
            Keys(&[]),
            release(KEY_THUMB_R3),
            Expect(Event::LayerOff(Layer::Nav)),
            // Twice: window management and function keys.
            press(KEY_THUMB_R3),
            Expect(Event::LayerOn(Layer::Nav)),
            release(KEY_THUMB_R3),
            Expect(Event::LayerOff(Layer::Nav)),
            press(KEY_THUMB_R3),
            Expect(Event::LayerOn(Layer::Os)),
            press(KEY_Y),
            Keys(&[Keyboard::UpArrow, Keyboard::LeftShift, Keyboard::LeftGUI]),
            release(KEY_Y),
            Keys(&[]),
            press(KEY_LSHIFT),
            Keys(&[Keyboard::F1]),
            release(KEY_LSHIFT),
            Keys(&[]),
            release(KEY_THUMB_R3),
            Expect(Event::LayerOff(Layer::Os)),
        ],
    );
}

#[test]
fn held_dances_start_over() {
    run(
        &engram::VARIANT,
        &[
            // Ctrl+e, a short pause, then ctrl again.
            press(KEY_THUMB_R1),
            Expect(Event::Register(Keyboard::LeftControl)),
            Keys(&[Keyboard::LeftControl]),
            press(KEY_D),
            Keys(&[Keyboard::E, Keyboard::LeftControl]),
            release(KEY_D),
            Keys(&[Keyboard::LeftControl]),
            release(KEY_THUMB_R1),
            Expect(Event::Unregister(Keyboard::LeftControl)),
            Keys(&[]),
            Tick(50),
            press(KEY_THUMB_R1),
            Expect(Event::Register(Keyboard::LeftControl)),
            Keys(&[Keyboard::LeftControl]),
            // Holding ctrl while using the nav layer.
            press(KEY_THUMB_R3),
            Expect(Event::LayerOn(Layer::Nav)),
            release(KEY_THUMB_R3),
            Expect(Event::LayerOff(Layer::Nav)),
            release(KEY_THUMB_R1),
            Expect(Event::Unregister(Keyboard::LeftControl)),
            Keys(&[]),
            press(KEY_THUMB_R1),
            Expect(Event::Register(Keyboard::LeftControl)),
            Keys(&[Keyboard::LeftControl]),
            release(KEY_THUMB_R1),
            Expect(Event::Unregister(Keyboard::LeftControl)),
            Keys(&[]),
            Tick(TAPPING_TERM),
            // A long hold on the num layer, then back to it.
            press(KEY_THUMB_L3),
            Expect(Event::LayerOn(Layer::Num)),
            Tick(1000),
            release(KEY_THUMB_L3),
            Expect(Event::LayerOff(Layer::Num)),
            Tick(50),
            press(KEY_THUMB_L3),
            Expect(Event::LayerOn(Layer::Num)),
            release(KEY_THUMB_L3),
            Expect(Event::LayerOff(Layer::Num)),
        ],
    );
}

#[test]
fn base_transparent_keys_are_dead() {
    run(
        &engram::VARIANT,
        &[
            press(KEY_TAB),
            release(KEY_TAB),
            press(KEY_THUMB_R5),
            release(KEY_THUMB_R5),
            press(KEY_ESC),
            Keys(&[Keyboard::Escape]),
            release(KEY_ESC),
            Keys(&[]),
        ],
    );
}

#[test]
fn every_variant_types_space() {
    for variant in Variant::all() {
        run(
            variant,
            &[
                press(KEY_THUMB_R2),
                Keys(&[Keyboard::Space]),
                release(KEY_THUMB_R2),
                Keys(&[]),
            ],
        );
    }
}
