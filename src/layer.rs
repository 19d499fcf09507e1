//! Layers
//!
//! Each layer is a full matrix of actions.  Layers are stacked by priority:
//! the highest active layer that has something other than
//! [`Action::Transparent`] at a position decides what that key does.  The
//! base layer is always active.

use enumset::{EnumSet, EnumSetType};

use crate::keys::{COLS, NKEYS, ROWS};
use crate::log::debug;
use crate::Action;

/// The layers, lowest priority first.
#[derive(EnumSetType, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    /// Letters.
    Base = 0,
    /// Navigation and the left-hand symbols.
    Nav,
    /// Numbers and the right-hand symbols.
    Num,
    /// Window management and function keys.
    Os,
    /// Clipboard and other odds and ends.
    Misc,
}

pub const NLAYERS: usize = 5;

impl Layer {
    pub const ALL: [Layer; NLAYERS] = [Layer::Base, Layer::Nav, Layer::Num, Layer::Os, Layer::Misc];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// A single layer table.
pub type Keymap = [[Action; COLS]; ROWS];

/// The tables for every layer, indexed by [`Layer::index`].
pub type Layers = [Keymap; NLAYERS];

/// Look up a single slot of a layer table.
pub fn lookup(map: &Keymap, scan: u8) -> Option<Action> {
    let scan = scan as usize;
    if scan >= NKEYS {
        return None;
    }
    Some(map[scan / COLS][scan % COLS])
}

/// The set of layers currently turned on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerStack {
    active: EnumSet<Layer>,
}

impl Default for LayerStack {
    fn default() -> Self {
        LayerStack {
            active: EnumSet::only(Layer::Base),
        }
    }
}

impl LayerStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&mut self, layer: Layer) {
        if self.active.insert(layer) {
            debug!("layer on: {:?}", layer);
        }
    }

    /// Turn a layer off.  The base layer stays on.
    pub fn off(&mut self, layer: Layer) {
        if layer == Layer::Base {
            return;
        }
        if self.active.remove(layer) {
            debug!("layer off: {:?}", layer);
        }
    }

    pub fn toggle(&mut self, layer: Layer) {
        if self.is_on(layer) {
            self.off(layer);
        } else {
            self.on(layer);
        }
    }

    pub fn is_on(&self, layer: Layer) -> bool {
        self.active.contains(layer)
    }

    /// The highest priority layer that is on.
    pub fn highest(&self) -> Layer {
        Layer::ALL
            .iter()
            .rev()
            .copied()
            .find(|l| self.is_on(*l))
            .unwrap_or(Layer::Base)
    }

    /// The active layers, highest priority first.
    pub fn iter(&self) -> impl Iterator<Item = Layer> + '_ {
        Layer::ALL.iter().rev().copied().filter(move |l| self.is_on(*l))
    }

    /// Find the action for a scan code, falling through transparent entries
    /// to lower active layers.  Transparent all the way down is a no-op, as
    /// is a scan code outside of the matrix.
    pub fn resolve(&self, layers: &Layers, scan: u8) -> Action {
        for layer in self.iter() {
            match lookup(&layers[layer.index()], scan) {
                Some(Action::Transparent) => continue,
                Some(action) => return action,
                None => return Action::NoOp,
            }
        }
        Action::NoOp
    }
}
