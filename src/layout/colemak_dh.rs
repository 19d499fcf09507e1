//! Colemak Mod-DH.
//!
//! ,-----------------------------------.                                ,-----------------------------------.
//! |     |  Q  |  W  |  F  |  P  |  B  |                                |  J  |  L  |  U  |  Y  |  '  | Del |
//! |-----+-----+-----+-----+-----+-----|                                |-----+-----+-----+-----+-----+-----|
//! | Esc |  A  |  R  |  S  |  T  |  G  |                                |  M  |  N  |  E  |  I  |  O  | Tab |
//! |-----+-----+-----+-----+-----+-----+-------------.  ,-------------+-----+-----+-----+-----+-----+-----|
//! |     |  Z  |  X  |  C  |  D  |  V  | Enter | Gui |  | Gui  | Bksp |  K  |  H  |  ,  |  .  |  /  |  _  |
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
        ___, k(K::Q), k(K::W), k(K::F), k(K::P), k(K::B),
        k(K::J), k(K::L), k(K::U), k(K::Y), k(K::Apostrophe), k(K::DeleteForward),

        k(K::Escape), k(K::A), k(K::R), k(K::S), k(K::T), k(K::G),
        k(K::M), k(K::N), k(K::E), k(K::I), k(K::O), k(K::Tab),

        ___, k(K::Z), k(K::X), k(K::C), k(K::D), k(K::V), k(K::ReturnEnter), k(K::LeftGUI),
        k(K::LeftGUI), k(K::DeleteBackspace), k(K::K), k(K::H), k(K::Comma), k(K::Dot), k(K::ForwardSlash), s(k(K::Minus)),

        OS_TOGG, OSM_LSFT, NUM_MISC, k(K::LeftShift), CTRL_ALT,
        CTRL_ALT, k(K::Space), NAV_OS, ___, ___,
    ]),
    NAV,
    NUM,
    OS,
    MISC,
];

pub static VARIANT: Variant = Variant {
    name: "colemak_dh",
    layers: &LAYERS,
    tap_dances: &TAP_DANCES_IN_ORDER,
    key_overrides: &KEY_OVERRIDES,
};
