//! Modified Engram.
//!
//! ,-----------------------------------------.                                    ,------------------------------------------.
//! |      |  Z  |  Y  |  O   |  U  |    .    |                                    |   ,    |  L  |  D  |  W  |  Q  |  Del  |
//! |------+-----+-----+------+-----+---------|                                    |--------+-----+-----+-----+-----+-------|
//! | Esc  |  C  |  I  |  E   |  A  |    V    |                                    |   B    |  H  |  T  |  S  |  N  |  Tab  |
//! |------+-----+-----+------+-----+---------+-------------------.  ,-------------+--------+-----+-----+-----+-----+-------|
//! |      |  G  |  X  |  J   |  K  |    '    | Enter |    Gui    |  |  Gui | Bksp |   _    |  R  |  M  |  F  |  P  |       |
//! `------------------+------+-----+---------+-------+-----------|  |------+------+--------+-----+-----+-----------------'
//!                    | OS   |     | Num/Mis | Shift | Ctrl/Alt  |  | C/A  | Spc  | Nav/Os |     |     |
//!                    | TOGG |     |         |       |           |  |      |      |        |     |     |
//!                    `------------------------------------------'  `--------------------------------'
//!
//! The Ctrl/Alt dance lets go of a triple tap in the reverse of the order it
//! pressed.

use usbd_human_interface_device::page::Keyboard as K;

use crate::action::{k, s, ___};
use crate::keys::layout;
use crate::layer::Layers;
use crate::overrides::KEY_OVERRIDES;
use crate::tap_dance::TAP_DANCES;

use super::shared::{CTRL_ALT, MISC, NAV, NAV_OS, NUM, NUM_MISC, OS, OS_TOGG};
use super::Variant;

#[rustfmt::skip]
pub static LAYERS: Layers = [
    layout([
        ___, k(K::Z), k(K::Y), k(K::O), k(K::U), k(K::Dot),
        k(K::Comma), k(K::L), k(K::D), k(K::W), k(K::Q), k(K::DeleteForward),

        k(K::Escape), k(K::C), k(K::I), k(K::E), k(K::A), k(K::V),
        k(K::B), k(K::H), k(K::T), k(K::S), k(K::N), k(K::Tab),

        ___, k(K::G), k(K::X), k(K::J), k(K::K), k(K::Apostrophe), k(K::ReturnEnter), k(K::LeftGUI),
        k(K::LeftGUI), k(K::DeleteBackspace), s(k(K::Minus)), k(K::R), k(K::M), k(K::F), k(K::P), ___,

        OS_TOGG, ___, NUM_MISC, k(K::LeftShift), CTRL_ALT,
        CTRL_ALT, k(K::Space), NAV_OS, ___, ___,
    ]),
    NAV,
    NUM,
    OS,
    MISC,
];

pub static VARIANT: Variant = Variant {
    name: "engram",
    layers: &LAYERS,
    tap_dances: &TAP_DANCES,
    key_overrides: &KEY_OVERRIDES,
};
