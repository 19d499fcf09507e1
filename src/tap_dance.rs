//! Tap dances
//!
//! A tap dance key does something different depending on how many times it
//! has been tapped in quick succession.  The handlers here fire on every tap
//! and on every release, with the number of taps seen so far.  Holding the
//! key down after the second tap, for instance, keeps whatever the second tap
//! engaged until the key is let go.
//!
//! Handlers only ever see a [`TapCount`].  The raw counter is converted at
//! the edge, and anything outside of one to three taps does nothing.

use usbd_human_interface_device::page::Keyboard;

use crate::log::debug;
use crate::{Event, EventQueue, Layer};

/// How long, in ticks, after a release before the tap count starts over.
pub const TAPPING_TERM: u32 = 200;

/// The tap dances.  The value is the index into the registration table.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapDance {
    /// Ctrl, Alt, or both.
    CtrlAlt = 0,
    /// Nav layer, or the Os layer.
    NavOs,
    /// Num layer, or the Misc layer.
    NumMisc,
}

impl TapDance {
    pub const COUNT: usize = 3;
    pub const ALL: [TapDance; TapDance::COUNT] =
        [TapDance::CtrlAlt, TapDance::NavOs, TapDance::NumMisc];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// The number of taps a handler acts on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapCount {
    Single,
    Double,
    Triple,
}

impl TapCount {
    pub fn from_count(count: u8) -> Option<TapCount> {
        match count {
            1 => Some(TapCount::Single),
            2 => Some(TapCount::Double),
            3 => Some(TapCount::Triple),
            _ => None,
        }
    }

    pub fn count(self) -> u8 {
        match self {
            TapCount::Single => 1,
            TapCount::Double => 2,
            TapCount::Triple => 3,
        }
    }
}

pub type Handler = fn(TapCount, &mut dyn EventQueue);

/// A registered tap dance: what to do on each tap, and what to do on each
/// release.
#[derive(Clone, Copy)]
pub struct TapDanceAction {
    pub on_press: Handler,
    pub on_release: Handler,
}

impl TapDanceAction {
    pub const fn new(on_press: Handler, on_release: Handler) -> Self {
        TapDanceAction { on_press, on_release }
    }

    pub fn press(&self, count: u8, events: &mut dyn EventQueue) {
        match TapCount::from_count(count) {
            Some(count) => (self.on_press)(count, events),
            None => debug!("tap dance: ignoring press at count {}", count),
        }
    }

    pub fn release(&self, count: u8, events: &mut dyn EventQueue) {
        match TapCount::from_count(count) {
            Some(count) => (self.on_release)(count, events),
            None => debug!("tap dance: ignoring release at count {}", count),
        }
    }
}

/// One registration table, indexed by [`TapDance::index`].
pub type TapDances = [TapDanceAction; TapDance::COUNT];

// Ctrl/Alt.

pub fn ctrl_alt_press(count: TapCount, events: &mut dyn EventQueue) {
    match count {
        TapCount::Single => events.push(Event::Register(Keyboard::LeftControl)),
        TapCount::Double => events.push(Event::Register(Keyboard::LeftAlt)),
        TapCount::Triple => {
            events.push(Event::Register(Keyboard::LeftControl));
            events.push(Event::Register(Keyboard::LeftAlt));
        }
    }
}

/// Release for Ctrl/Alt, letting go of the pair in the opposite order they
/// went down.
pub fn ctrl_alt_release(count: TapCount, events: &mut dyn EventQueue) {
    match count {
        TapCount::Single => events.push(Event::Unregister(Keyboard::LeftControl)),
        TapCount::Double => events.push(Event::Unregister(Keyboard::LeftAlt)),
        TapCount::Triple => {
            events.push(Event::Unregister(Keyboard::LeftAlt));
            events.push(Event::Unregister(Keyboard::LeftControl));
        }
    }
}

/// Release for Ctrl/Alt, letting go of the pair in the same order they went
/// down.
pub fn ctrl_alt_release_in_order(count: TapCount, events: &mut dyn EventQueue) {
    match count {
        TapCount::Single => events.push(Event::Unregister(Keyboard::LeftControl)),
        TapCount::Double => events.push(Event::Unregister(Keyboard::LeftAlt)),
        TapCount::Triple => {
            events.push(Event::Unregister(Keyboard::LeftControl));
            events.push(Event::Unregister(Keyboard::LeftAlt));
        }
    }
}

// Nav/Os.

pub fn nav_os_press(count: TapCount, events: &mut dyn EventQueue) {
    match count {
        TapCount::Single => events.push(Event::LayerOn(Layer::Nav)),
        TapCount::Double => events.push(Event::LayerOn(Layer::Os)),
        TapCount::Triple => (),
    }
}

pub fn nav_os_release(count: TapCount, events: &mut dyn EventQueue) {
    match count {
        TapCount::Single => events.push(Event::LayerOff(Layer::Nav)),
        TapCount::Double => events.push(Event::LayerOff(Layer::Os)),
        TapCount::Triple => (),
    }
}

// Num/Misc.

pub fn num_misc_press(count: TapCount, events: &mut dyn EventQueue) {
    match count {
        TapCount::Single => events.push(Event::LayerOn(Layer::Num)),
        TapCount::Double => events.push(Event::LayerOn(Layer::Misc)),
        TapCount::Triple => (),
    }
}

pub fn num_misc_release(count: TapCount, events: &mut dyn EventQueue) {
    match count {
        TapCount::Single => events.push(Event::LayerOff(Layer::Num)),
        TapCount::Double => events.push(Event::LayerOff(Layer::Misc)),
        TapCount::Triple => (),
    }
}

/// The registration table where Ctrl/Alt lets go in reverse order.
pub static TAP_DANCES: TapDances = [
    TapDanceAction::new(ctrl_alt_press, ctrl_alt_release),
    TapDanceAction::new(nav_os_press, nav_os_release),
    TapDanceAction::new(num_misc_press, num_misc_release),
];

/// The registration table where Ctrl/Alt lets go in the order it pressed.
pub static TAP_DANCES_IN_ORDER: TapDances = [
    TapDanceAction::new(ctrl_alt_press, ctrl_alt_release_in_order),
    TapDanceAction::new(nav_os_press, nav_os_release),
    TapDanceAction::new(num_misc_press, num_misc_release),
];

/// The count state of a single tap dance key.
#[derive(Clone, Copy, Default, Debug)]
struct DanceState {
    /// Taps seen so far in this sequence.
    count: u8,
    /// Is the key currently down.
    pressed: bool,
    /// Ticks since the key last went down or up.
    age: u32,
    /// The sequence ended while the key was held, by another key or by
    /// holding past the tapping term.  The count starts over on release.
    finished: bool,
}

/// Tracks the tap counts of all of the tap dance keys, and calls the
/// registered handlers.
pub struct TapDanceManager {
    table: &'static TapDances,
    states: [DanceState; TapDance::COUNT],
}

impl TapDanceManager {
    pub fn new(table: &'static TapDances) -> Self {
        TapDanceManager {
            table,
            states: [DanceState::default(); TapDance::COUNT],
        }
    }

    /// The tap dance key went down.
    pub fn press(&mut self, dance: TapDance, events: &mut dyn EventQueue) {
        let state = &mut self.states[dance.index()];
        state.count = state.count.saturating_add(1);
        state.pressed = true;
        state.finished = false;
        state.age = 0;
        debug!("tap dance {:?}: tap {}", dance, state.count);
        self.table[dance.index()].press(state.count, events);
    }

    /// The tap dance key was released.  The release handler sees the same
    /// count as the press that preceded it.
    pub fn release(&mut self, dance: TapDance, events: &mut dyn EventQueue) {
        let state = &mut self.states[dance.index()];
        if !state.pressed {
            return;
        }
        state.pressed = false;
        state.age = 0;
        self.table[dance.index()].release(state.count, events);
        if state.finished {
            debug!("tap dance {:?}: finished", dance);
            state.count = 0;
            state.finished = false;
        }
    }

    /// Some other key was pressed, possibly another tap dance key (`by`).
    /// Released dances are over, and held ones start over once let go.
    pub fn interrupt(&mut self, by: Option<TapDance>) {
        for (i, state) in self.states.iter_mut().enumerate() {
            if by.map(TapDance::index) == Some(i) {
                continue;
            }
            if state.pressed {
                state.finished = true;
            } else {
                state.count = 0;
            }
        }
    }

    /// Advance time by a single tick.
    pub fn tick(&mut self) {
        for state in self.states.iter_mut() {
            if state.count == 0 || state.finished {
                continue;
            }
            state.age = state.age.saturating_add(1);
            if state.age >= TAPPING_TERM {
                if state.pressed {
                    state.finished = true;
                } else {
                    state.count = 0;
                }
                state.age = 0;
            }
        }
    }

    /// The number of taps seen so far for a dance.
    pub fn count(&self, dance: TapDance) -> u8 {
        self.states[dance.index()].count
    }
}
