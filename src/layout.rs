//! Handle layout related concerns, such as:
//!
//! - Which layout variant is in use.
//! - Walking the layer tables as keys go up and down.
//! - Tap dances, key overrides and one-shot modifiers.
//!
//! The [`KeymapManager`] is deliberately small.  It keeps the set of HID codes
//! that are down and reports that whole set every time it changes, the same
//! way the qwerty mode of the bbq boards reports key sets.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use arrayvec::ArrayVec;

use usbd_human_interface_device::page::Keyboard;

use crate::keys::NKEYS;
use crate::layer::{LayerStack, Layers};
use crate::log::{debug, info, warn};
use crate::overrides::{self, KeyOverrides};
use crate::tap_dance::{TapDanceManager, TapDances};
use crate::{Action, Event, EventQueue, KeyAction, KeyEvent, Mods};

pub mod colemak_dh;
pub mod dvorak;
pub mod engram;
pub mod qwerty;
pub mod shared;
pub mod workman;

/// Room for what a single tap dance handler can ask for.
type DanceEvents = ArrayVec<Event, 4>;

/// One complete layout: the layer tables, and the tap dance and key override
/// registrations that go with them.
pub struct Variant {
    pub name: &'static str,
    pub layers: &'static Layers,
    pub tap_dances: &'static TapDances,
    pub key_overrides: &'static KeyOverrides,
}

/// All of the variants.
pub static VARIANTS: [&Variant; 5] = [
    &engram::VARIANT,
    &qwerty::VARIANT,
    &colemak_dh::VARIANT,
    &dvorak::VARIANT,
    &workman::VARIANT,
];

impl Variant {
    pub fn all() -> &'static [&'static Variant] {
        &VARIANTS
    }

    pub fn by_name(name: &str) -> Option<&'static Variant> {
        VARIANTS.iter().copied().find(|v| v.name == name)
    }

    /// The variant selected at build time.
    pub fn active() -> &'static Variant {
        cfg_if::cfg_if! {
            if #[cfg(feature = "engram")] {
                &engram::VARIANT
            } else if #[cfg(feature = "qwerty")] {
                &qwerty::VARIANT
            } else if #[cfg(feature = "colemak-dh")] {
                &colemak_dh::VARIANT
            } else if #[cfg(feature = "dvorak")] {
                &dvorak::VARIANT
            } else if #[cfg(feature = "workman")] {
                &workman::VARIANT
            } else {
                &engram::VARIANT
            }
        }
    }
}

/// What a key did when it went down, so the release can undo exactly that.
#[derive(Clone, Copy, Debug)]
struct Held {
    action: Action,
    /// Modifiers hidden from the host while this key is down.
    suppress: Mods,
}

/// The keymap manager.
pub struct KeymapManager {
    variant: &'static Variant,
    layers: LayerStack,
    dances: TapDanceManager,

    /// Per scan code, what the key resolved to when pressed.
    held: [Option<Held>; NKEYS],

    /// HID codes that are registered, with how many things registered them.
    down: BTreeMap<Keyboard, u8>,

    /// One-shot keys are enabled.
    oneshot_enabled: bool,
    /// A one-shot key that is down, and hasn't been followed by another key.
    oneshot_tap: Option<u8>,
    /// Modifiers latched by a one-shot tap, waiting for the next key.
    oneshot: Mods,

    /// The last key set sent.
    last: Vec<Keyboard>,
}

impl KeymapManager {
    pub fn new(variant: &'static Variant) -> Self {
        info!("keymap: {}", variant.name);
        KeymapManager {
            variant,
            layers: LayerStack::new(),
            dances: TapDanceManager::new(variant.tap_dances),
            held: [None; NKEYS],
            down: BTreeMap::new(),
            oneshot_enabled: true,
            oneshot_tap: None,
            oneshot: Mods::empty(),
            last: Vec::new(),
        }
    }

    pub fn variant(&self) -> &'static Variant {
        self.variant
    }

    pub fn layers(&self) -> &LayerStack {
        &self.layers
    }

    /// Modifiers currently registered.  Latched one-shot modifiers aren't
    /// included until the key they apply to is pressed.
    pub fn mods(&self) -> Mods {
        Mods::from_keys(self.down.keys())
    }

    /// Modifiers latched by a one-shot tap.
    pub fn oneshot_mods(&self) -> Mods {
        self.oneshot
    }

    pub fn oneshot_enabled(&self) -> bool {
        self.oneshot_enabled
    }

    /// The key set most recently reported.
    pub fn keys(&self) -> &[Keyboard] {
        &self.last
    }

    /// Tick is needed to track time.
    pub fn tick(&mut self) {
        self.dances.tick();
    }

    /// Handle a single key event.
    pub fn handle_event(&mut self, event: KeyEvent, events: &mut dyn EventQueue) {
        let scan = event.key();
        if scan as usize >= NKEYS {
            warn!("keymap: scan code {} out of range", scan);
            return;
        }

        match event {
            KeyEvent::Press(_) => {
                if self.held[scan as usize].is_some() {
                    debug!("keymap: repeated press {}", scan);
                    return;
                }
                let action = self.layers.resolve(self.variant.layers, scan);
                debug!("keymap: press {} on {:?}", scan, self.layers.highest());
                match action {
                    Action::TapDance(dance) => self.dances.interrupt(Some(dance)),
                    _ => self.dances.interrupt(None),
                }
                if !matches!(action, Action::OneShot(_)) {
                    self.oneshot_tap = None;
                }
                let held = self.press(scan, action, events);
                self.held[scan as usize] = Some(held);
            }
            KeyEvent::Release(_) => {
                let Some(held) = self.held[scan as usize].take() else {
                    return;
                };
                self.release(scan, held.action, events);
            }
        }

        self.report(events);
    }

    fn press(&mut self, scan: u8, action: Action, events: &mut dyn EventQueue) -> Held {
        let mut held = Held {
            action,
            suppress: Mods::empty(),
        };
        match action {
            Action::Key(key) => {
                let latched = self.take_oneshot();
                let mods = self.mods() | latched;
                let key = match overrides::find(self.variant.key_overrides, mods, key) {
                    Some(o) => {
                        held.suppress = o.suppressed_mods;
                        o.replacement
                    }
                    None => key,
                };
                held.action = Action::Key(key).with(latched);
                self.register_action(held.action);
            }
            Action::Modified(..) => {
                held.action = action.with(self.take_oneshot());
                self.register_action(held.action);
            }
            Action::TapDance(dance) => {
                let mut dance_events = DanceEvents::new();
                self.dances.press(dance, &mut dance_events);
                self.apply(dance_events, events);
            }
            Action::LayerToggle(layer) => self.layers.toggle(layer),
            Action::OneShot(mods) => {
                if self.oneshot_enabled {
                    self.oneshot_tap = Some(scan);
                }
                self.register_mods(mods);
            }
            Action::OneShotToggle => {
                self.oneshot_enabled = !self.oneshot_enabled;
                self.oneshot = Mods::empty();
                info!("one-shot keys enabled: {}", self.oneshot_enabled);
            }
            Action::Transparent | Action::NoOp => (),
        }
        held
    }

    fn release(&mut self, scan: u8, action: Action, events: &mut dyn EventQueue) {
        match action {
            Action::Key(_) | Action::Modified(..) => self.unregister_action(action),
            Action::TapDance(dance) => {
                let mut dance_events = DanceEvents::new();
                self.dances.release(dance, &mut dance_events);
                self.apply(dance_events, events);
            }
            Action::OneShot(mods) => {
                self.unregister_mods(mods);
                if self.oneshot_tap == Some(scan) {
                    self.oneshot_tap = None;
                    self.oneshot |= mods;
                    debug!("one-shot latched: {:x}", self.oneshot.bits());
                }
            }
            Action::LayerToggle(_)
            | Action::OneShotToggle
            | Action::Transparent
            | Action::NoOp => (),
        }
    }

    /// Apply what a tap dance handler asked for, and pass it along.
    fn apply(&mut self, dance_events: DanceEvents, events: &mut dyn EventQueue) {
        for event in dance_events {
            match &event {
                Event::Register(key) => self.register(*key),
                Event::Unregister(key) => self.unregister(*key),
                Event::LayerOn(layer) => self.layers.on(*layer),
                Event::LayerOff(layer) => self.layers.off(*layer),
                Event::Key(_) => (),
            }
            events.push(event);
        }
    }

    fn take_oneshot(&mut self) -> Mods {
        core::mem::take(&mut self.oneshot)
    }

    fn register_action(&mut self, action: Action) {
        match action {
            Action::Key(key) => self.register(key),
            Action::Modified(mods, key) => {
                self.register_mods(mods);
                self.register(key);
            }
            _ => (),
        }
    }

    fn unregister_action(&mut self, action: Action) {
        match action {
            Action::Key(key) => self.unregister(key),
            Action::Modified(mods, key) => {
                self.unregister(key);
                self.unregister_mods(mods);
            }
            _ => (),
        }
    }

    fn register_mods(&mut self, mods: Mods) {
        for key in mods.keys() {
            self.register(key);
        }
    }

    fn unregister_mods(&mut self, mods: Mods) {
        for key in mods.keys() {
            self.unregister(key);
        }
    }

    fn register(&mut self, key: Keyboard) {
        *self.down.entry(key).or_insert(0) += 1;
    }

    /// Unregistering something that isn't down is harmless.
    fn unregister(&mut self, key: Keyboard) {
        if let Some(count) = self.down.get_mut(&key) {
            *count -= 1;
            if *count == 0 {
                self.down.remove(&key);
            }
        }
    }

    /// Send the key set if it has changed.
    fn report(&mut self, events: &mut dyn EventQueue) {
        let suppress = self
            .held
            .iter()
            .flatten()
            .fold(Mods::empty(), |acc, h| acc | h.suppress);
        let keys: Vec<Keyboard> = self
            .down
            .keys()
            .copied()
            .filter(|k| !suppress.intersects(Mods::from_key(*k)))
            .collect();
        if keys != self.last {
            self.last = keys.clone();
            events.push(Event::Key(KeyAction::KeySet(keys)));
        }
    }
}
