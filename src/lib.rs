//! Kyria keymap
//!
//! Key tables, tap dances and key overrides for a 50 key split Kyria.  The
//! tables themselves are plain constant data.  [`layout::KeymapManager`] is a
//! small single-threaded model of the firmware side that walks those tables,
//! so that they can be exercised and tested without hardware.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
// #![deny(missing_docs)]

#[cfg(not(any(feature = "std", test)))]
extern crate core as std;

extern crate alloc;

use alloc::vec::Vec;

use arrayvec::ArrayVec;
use bitflags::bitflags;

pub use usbd_human_interface_device::page::Keyboard;

pub use action::Action;
pub use layer::{Layer, LayerStack};
pub use layout::{KeymapManager, Variant};
pub use tap_dance::{TapCount, TapDance};

pub mod action;
pub mod boot;
pub mod keys;
pub mod layer;
pub mod layout;
pub mod overrides;
pub mod tap_dance;

cfg_if::cfg_if! {
    if #[cfg(any(test, all(feature = "log", not(feature = "defmt"))))] {
        mod log {
            pub use ::log::{debug, info, warn};
        }
    } else if #[cfg(feature = "defmt")] {
        mod log {
            pub use defmt::{debug, info, warn};
        }
    } else {
        // No logging backend, drop the messages.
        mod log {
            macro_rules! debug { ($($arg:tt)*) => {{}}; }
            macro_rules! info { ($($arg:tt)*) => {{}}; }
            macro_rules! warn { ($($arg:tt)*) => {{}}; }
            pub(crate) use {debug, info, warn};
        }
    }
}

/// Which side of the keyboard are we.
#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn is_left(&self) -> bool {
        match *self {
            Side::Left => true,
            Side::Right => false,
        }
    }
}

/// Key events indicate keys going up or down.  The value is the scan code,
/// see [`keys`].
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyEvent {
    Press(u8),
    Release(u8),
}

impl KeyEvent {
    pub fn key(&self) -> u8 {
        match self {
            KeyEvent::Press(k) => *k,
            KeyEvent::Release(k) => *k,
        }
    }
}

/// Indicates keypress that should be sent to the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// The complete set of HID codes that are down, modifiers included.
    KeySet(Vec<Keyboard>),
}

bitflags! {
    /// A modifier map, laid out the same as the modifier byte of a HID
    /// keyboard report.
    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
    pub struct Mods: u8 {
        const LEFT_CONTROL = 0b0000_0001;
        const LEFT_SHIFT = 0b0000_0010;
        const LEFT_ALT = 0b0000_0100;
        const LEFT_GUI = 0b0000_1000;
        const RIGHT_CONTROL = 0b0001_0000;
        const RIGHT_SHIFT = 0b0010_0000;
        const RIGHT_ALT = 0b0100_0000;
        const RIGHT_GUI = 0b1000_0000;
    }
}

/// The modifier keys, in bit order.
const MOD_KEYS: [Keyboard; 8] = [
    Keyboard::LeftControl,
    Keyboard::LeftShift,
    Keyboard::LeftAlt,
    Keyboard::LeftGUI,
    Keyboard::RightControl,
    Keyboard::RightShift,
    Keyboard::RightAlt,
    Keyboard::RightGUI,
];

impl Mods {
    /// The modifier bit for a single key.  Non-modifier keys give no bits.
    pub fn from_key(key: Keyboard) -> Mods {
        match MOD_KEYS.iter().position(|k| *k == key) {
            Some(bit) => Mods::from_bits_truncate(1 << bit),
            None => Mods::empty(),
        }
    }

    /// Collect the modifiers present in a set of keys.
    pub fn from_keys<'a, I: IntoIterator<Item = &'a Keyboard>>(keys: I) -> Mods {
        keys.into_iter()
            .fold(Mods::empty(), |acc, k| acc | Mods::from_key(*k))
    }

    /// The modifier keys that make up this set, in bit order.
    pub fn keys(self) -> impl Iterator<Item = Keyboard> {
        MOD_KEYS
            .into_iter()
            .enumerate()
            .filter(move |(bit, _)| self.bits() & (1 << bit) != 0)
            .map(|(_, k)| k)
    }
}

/// An event is something that happens in a handler to indicate some action
/// likely needs to be performed on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Register (press) a single key code.
    Register(Keyboard),

    /// Unregister (release) a single key code.
    Unregister(Keyboard),

    /// Turn a layer on.
    LayerOn(Layer),

    /// Turn a layer off.
    LayerOff(Layer),

    /// A change in the set of keys sent to the host.
    Key(KeyAction),
}

/// A generalized event queue.
pub trait EventQueue {
    // Attempt to push to the queue.  Events will be discarded if the queue is full.
    fn push(&mut self, val: Event);
}

impl EventQueue for Vec<Event> {
    fn push(&mut self, val: Event) {
        Vec::push(self, val);
    }
}

impl<const N: usize> EventQueue for ArrayVec<Event, N> {
    fn push(&mut self, val: Event) {
        if self.try_push(val).is_err() {
            crate::log::warn!("event queue full");
        }
    }
}
