//! Key actions
//!
//! Each slot of a layer table holds one of these.  The short const
//! constructors let the layer tables read close to the way keymaps are
//! usually written: `g(s(k(Keyboard::UpArrow)))` is Gui+Shift+Up.

use usbd_human_interface_device::page::Keyboard;

use crate::{Layer, Mods, TapDance};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    /// A plain key.
    Key(Keyboard),
    /// A key sent with a set of modifiers held.
    Modified(Mods, Keyboard),
    /// Use whatever the next lower active layer has here.
    Transparent,
    /// Nothing.
    NoOp,
    /// Dispatch through a tap dance.
    TapDance(TapDance),
    /// Toggle a layer.
    LayerToggle(Layer),
    /// A modifier that applies to the next key pressed.
    OneShot(Mods),
    /// Enable or disable one-shot keys.
    OneShotToggle,
}

impl Action {
    /// Add modifiers to a key action.  Actions that aren't keys are left
    /// alone.
    pub const fn with(self, mods: Mods) -> Action {
        if mods.is_empty() {
            return self;
        }
        match self {
            Action::Key(key) => Action::Modified(mods, key),
            Action::Modified(m, key) => Action::Modified(m.union(mods), key),
            other => other,
        }
    }
}

/// Transparent.
pub const ___: Action = Action::Transparent;

/// Nothing.
pub const XXX: Action = Action::NoOp;

pub const fn k(key: Keyboard) -> Action {
    Action::Key(key)
}

/// Left shift.
pub const fn s(action: Action) -> Action {
    action.with(Mods::LEFT_SHIFT)
}

/// Left control.
pub const fn c(action: Action) -> Action {
    action.with(Mods::LEFT_CONTROL)
}

/// Left alt.
pub const fn a(action: Action) -> Action {
    action.with(Mods::LEFT_ALT)
}

/// Left gui.
pub const fn g(action: Action) -> Action {
    action.with(Mods::LEFT_GUI)
}

pub const fn td(dance: TapDance) -> Action {
    Action::TapDance(dance)
}

pub const fn tg(layer: Layer) -> Action {
    Action::LayerToggle(layer)
}

pub const fn osm(mods: Mods) -> Action {
    Action::OneShot(mods)
}
