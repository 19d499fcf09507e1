//! Key overrides
//!
//! An override replaces what a key sends while a modifier is held.  The
//! overrides here keep a few punctuation keys the same when shifted, since
//! the shifted symbols all live on their own layers.
//!
//! The registered list ends with a `None`, and lookups stop there.

use usbd_human_interface_device::page::Keyboard;

use crate::log::debug;
use crate::Mods;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct KeyOverride {
    /// Modifiers that have to be held.  When more than one is given, any of
    /// them is enough, but nothing outside of them may be held.
    pub trigger_mods: Mods,
    /// The key being replaced.
    pub trigger: Keyboard,
    /// What to send instead.
    pub replacement: Keyboard,
    /// Modifiers hidden from the host while the override is active.
    pub suppressed_mods: Mods,
}

impl KeyOverride {
    /// The basic override: replace the key, and hide the trigger modifiers.
    pub const fn basic(trigger_mods: Mods, trigger: Keyboard, replacement: Keyboard) -> Self {
        KeyOverride {
            trigger_mods,
            trigger,
            replacement,
            suppressed_mods: trigger_mods,
        }
    }

    pub fn matches(&self, held: Mods, key: Keyboard) -> bool {
        key == self.trigger && held.intersects(self.trigger_mods) && self.trigger_mods.contains(held)
    }
}

/// A registered list of overrides, terminated by `None`.
pub type KeyOverrides = [Option<&'static KeyOverride>];

pub static COMMA_COMMA: KeyOverride =
    KeyOverride::basic(Mods::LEFT_SHIFT, Keyboard::Comma, Keyboard::Comma);
pub static DOT_DOT: KeyOverride = KeyOverride::basic(Mods::LEFT_SHIFT, Keyboard::Dot, Keyboard::Dot);
pub static QUOTE_QUOTE: KeyOverride =
    KeyOverride::basic(Mods::LEFT_SHIFT, Keyboard::Apostrophe, Keyboard::Apostrophe);
pub static MINUS_MINUS: KeyOverride =
    KeyOverride::basic(Mods::LEFT_SHIFT, Keyboard::Minus, Keyboard::Minus);
pub static SLASH_SLASH: KeyOverride =
    KeyOverride::basic(Mods::LEFT_SHIFT, Keyboard::ForwardSlash, Keyboard::ForwardSlash);

/// All of the overrides in use.
pub static KEY_OVERRIDES: [Option<&'static KeyOverride>; 6] = [
    Some(&COMMA_COMMA),
    Some(&DOT_DOT),
    Some(&QUOTE_QUOTE),
    Some(&MINUS_MINUS),
    Some(&SLASH_SLASH),
    None,
];

/// Walk a registered list, up to the terminator.
pub fn iter(list: &'static KeyOverrides) -> impl Iterator<Item = &'static KeyOverride> {
    list.iter().map_while(|o| *o)
}

/// The first override in the list that applies to this key with these
/// modifiers held.
pub fn find(list: &'static KeyOverrides, held: Mods, key: Keyboard) -> Option<&'static KeyOverride> {
    let found = iter(list).find(|o| o.matches(held, key));
    if let Some(o) = found {
        debug!("key override: {:?} -> {:?}", o.trigger, o.replacement);
    }
    found
}
