//! Dvorak.
//!
//! ,-----------------------------------.                                ,-----------------------------------.
//! |     |  '  |  ,  |  .  |  P  |  Y  |                                |  F  |  G  |  C  |  R  |  L  | Del |
//! |-----+-----+-----+-----+-----+-----|                                |-----+-----+-----+-----+-----+-----|
//! | Esc |  A  |  O  |  E  |  U  |  I  |                                |  D  |  H  |  T  |  N  |  S  | Tab |
//! |-----+-----+-----+-----+-----+-----+-------------.  ,-------------+-----+-----+-----+-----+-----+-----|
//! |     |  ;  |  Q  |  J  |  K  |  X  | Enter | Gui |  | Gui  | Bksp |  B  |  M  |  W  |  V  |  Z  |  _  |
//! `-----------------+-----+-----+-----+-------+-----|  |------+------+-----+-----+-----------------------'
//!                   | OS  | One | Num | Shift | C/A |  | C/A  | Spc  | Nav |     |     |
//!                   | TOG | Sft | Mis |       |     |  |      |      | Os  |     |     |
//!                   `---------------------------------'  `-------------------------------'

use usbd_human_interface_device::page::Keyboard as K;

use crate::action::{k, s, ___};
use crate::keys::layout;
use crate::layer::Layers;
use crate::overrides::KEY_OVERRIDES;
use crate::tap_dance::TAP_DANCES_IN_ORDER;

use super::shared::{CTRL_ALT, MISC, NAV, NAV_OS, NUM, NUM_MISC, OS, OSM_LSFT, OS_TOGG};
use super::Variant;

#[rustfmt::skip]
pub static LAYERS: Layers = [
    layout([
        ___, k(K::Apostrophe), k(K::Comma), k(K::Dot), k(K::P), k(K::Y),
        k(K::F), k(K::G), k(K::C), k(K::R), k(K::L), k(K::DeleteForward),

        k(K::Escape), k(K::A), k(K::O), k(K::E), k(K::U), k(K::I),
        k(K::D), k(K::H), k(K::T), k(K::N), k(K::S), k(K::Tab),

        ___, k(K::Semicolon), k(K::Q), k(K::J), k(K::K), k(K::X), k(K::ReturnEnter), k(K::LeftGUI),
        k(K::LeftGUI), k(K::DeleteBackspace), k(K::B), k(K::M), k(K::W), k(K::V), k(K::Z), s(k(K::Minus)),

        OS_TOGG, OSM_LSFT, NUM_MISC, k(K::LeftShift), CTRL_ALT,
        CTRL_ALT, k(K::Space), NAV_OS, ___, ___,
    ]),
    NAV,
    NUM,
    OS,
    MISC,
];

pub static VARIANT: Variant = Variant {
    name: "dvorak",
    layers: &LAYERS,
    tap_dances: &TAP_DANCES_IN_ORDER,
    key_overrides: &KEY_OVERRIDES,
};
