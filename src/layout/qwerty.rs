//! Qwerty.
//!
//! ,-----------------------------------.                                ,-----------------------------------.
//! |     |  Q  |  W  |  E  |  R  |  T  |                                |  Y  |  U  |  I  |  O  |  P  | Del |
//! |-----+-----+-----+-----+-----+-----|                                |-----+-----+-----+-----+-----+-----|
//! | Esc |  A  |  S  |  D  |  F  |  G  |                                |  H  |  J  |  K  |  L  |  ;  | Tab |
//! |-----+-----+-----+-----+-----+-----+-------------.  ,-------------+-----+-----+-----+-----+-----+-----|
//! |     |  Z  |  X  |  C  |  V  |  B  | Enter | Gui |  | Gui  | Bksp |  N  |  M  |  ,  |  .  |  /  |  '  |
//! `-----------------+-----+-----+-----+-------+-----|  |------+------+-----+-----+-----------------------'
//!                   | OS  | One | Num | Shift | C/A |  | C/A  | Spc  | Nav |     |     |
//!                   | TOG | Sft | Mis |       |     |  |      |      | Os  |     |     |
//!                   `---------------------------------'  `-------------------------------'

use usbd_human_interface_device::page::Keyboard as K;

use crate::action::{k, ___};
use crate::keys::layout;
use crate::layer::Layers;
use crate::overrides::KEY_OVERRIDES;
use crate::tap_dance::TAP_DANCES_IN_ORDER;

use super::shared::{CTRL_ALT, MISC, NAV, NAV_OS, NUM, NUM_MISC, OS, OSM_LSFT, OS_TOGG};
use super::Variant;

#[rustfmt::skip]
pub static LAYERS: Layers = [
    layout([
        ___, k(K::Q), k(K::W), k(K::E), k(K::R), k(K::T),
        k(K::Y), k(K::U), k(K::I), k(K::O), k(K::P), k(K::DeleteForward),

        k(K::Escape), k(K::A), k(K::S), k(K::D), k(K::F), k(K::G),
        k(K::H), k(K::J), k(K::K), k(K::L), k(K::Semicolon), k(K::Tab),

        ___, k(K::Z), k(K::X), k(K::C), k(K::V), k(K::B), k(K::ReturnEnter), k(K::LeftGUI),
        k(K::LeftGUI), k(K::DeleteBackspace), k(K::N), k(K::M), k(K::Comma), k(K::Dot), k(K::ForwardSlash), k(K::Apostrophe),

        OS_TOGG, OSM_LSFT, NUM_MISC, k(K::LeftShift), CTRL_ALT,
        CTRL_ALT, k(K::Space), NAV_OS, ___, ___,
    ]),
    NAV,
    NUM,
    OS,
    MISC,
];

pub static VARIANT: Variant = Variant {
    name: "qwerty",
    layers: &LAYERS,
    tap_dances: &TAP_DANCES_IN_ORDER,
    key_overrides: &KEY_OVERRIDES,
};
