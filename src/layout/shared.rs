//! The layers every variant has in common.
//!
//! Only the base layer changes between the layout variants.  Navigation,
//! numbers, window management and the clipboard layer stay put, so that
//! switching variants doesn't mean relearning where the symbols are.

use usbd_human_interface_device::page::Keyboard as K;

use crate::action::{a, c, g, k, osm, s, td, Action, XXX, ___};
use crate::keys::layout;
use crate::layer::Keymap;
use crate::{Mods, TapDance};

// Thumb key aliases.
pub const NUM_MISC: Action = td(TapDance::NumMisc);
pub const NAV_OS: Action = td(TapDance::NavOs);
pub const CTRL_ALT: Action = td(TapDance::CtrlAlt);
pub const OSM_LSFT: Action = osm(Mods::LEFT_SHIFT);
pub const OS_TOGG: Action = Action::OneShotToggle;

// Nav layer: navigation and left symbols.
//
// ,-----------------------------------------.                              ,-----------------------------------------.
// |      |      |  *   |  /   |  ^   |  `   |                              | PgUp | Home |   ↑  | End  |      |      |
// |------+------+------+------+------+------|                              |------+------+------+------+------+------|
// |      |  :   |  +   |  -   |  =   |  &   |                              | PgDn |  ←   |   ↓  |   →  |      |      |
// |------+------+------+------+------+------+-------------.  ,-------------+------+------+------+------+------+------|
// |      |  ~   |  |   |  <   |  >   |  %   |      |      |  |      |      |      |      |      |      |      |      |
// `--------------------+------+------+------+------+------|  |------+------+------+------+------+--------------------'
//                      |      |      |      |      |      |  |      |      |      |      |      |
//                      `----------------------------------'  `----------------------------------'
#[rustfmt::skip]
pub const NAV: Keymap = layout([
    XXX, XXX,              s(k(K::Keyboard8)), k(K::ForwardSlash), s(k(K::Keyboard6)), k(K::Grave),
    k(K::PageUp), k(K::Home), k(K::UpArrow), k(K::End), XXX, XXX,

    XXX, s(k(K::Semicolon)), s(k(K::Equal)), k(K::Minus), k(K::Equal), s(k(K::Keyboard7)),
    k(K::PageDown), k(K::LeftArrow), k(K::DownArrow), k(K::RightArrow), XXX, XXX,

    XXX, s(k(K::Grave)), s(k(K::Backslash)), s(k(K::Comma)), s(k(K::Dot)), s(k(K::Keyboard5)), ___, ___,
    ___, ___, XXX, XXX, XXX, XXX, XXX, XXX,

    ___, ___, ___, ___, ___,
    ___, ___, ___, ___, ___,
]);

// Num layer: numbers and right symbols.
//
// ,-----------------------------------------.                              ,-----------------------------------------.
// |      |      |  5   |  4   |  3   |      |                              |  $   |  #   |  [   |  ]   |      |      |
// |------+------+------+------+------+------|                              |------+------+------+------+------+------|
// |      |  .   |  2   |  1   |  0   |  9   |                              |  !   |  "   |  (   |  )   |  ;   |      |
// |------+------+------+------+------+------+-------------.  ,-------------+------+------+------+------+------+------|
// |      |  -   |  8   |  7   |  6   |      |      |      |  |      |      |  ?   |  @   |  {   |  }   |  \   |      |
// `--------------------+------+------+------+------+------|  |------+------+------+------+------+--------------------'
//                      |      |      |      |      |      |  |      |      |      |      |      |
//                      `----------------------------------'  `----------------------------------'
#[rustfmt::skip]
pub const NUM: Keymap = layout([
    XXX, XXX, k(K::Keyboard5), k(K::Keyboard4), k(K::Keyboard3), XXX,
    s(k(K::Keyboard4)), s(k(K::Keyboard3)), k(K::LeftBrace), k(K::RightBrace), XXX, XXX,

    XXX, k(K::Dot), k(K::Keyboard2), k(K::Keyboard1), k(K::Keyboard0), k(K::Keyboard9),
    s(k(K::Keyboard1)), s(k(K::Apostrophe)), s(k(K::Keyboard9)), s(k(K::Keyboard0)), k(K::Semicolon), XXX,

    XXX, k(K::Minus), k(K::Keyboard8), k(K::Keyboard7), k(K::Keyboard6), XXX, ___, ___,
    ___, ___, s(k(K::ForwardSlash)), s(k(K::Keyboard2)), s(k(K::LeftBrace)), s(k(K::RightBrace)), k(K::Backslash), XXX,

    ___, ___, ___, ___, ___,
    ___, ___, ___, ___, ___,
]);

// Os layer: window management and function keys.
//
// ,---------------------------------------------------------.                ,----------------------------------------------------------------.
// |         |     |     |       | Gui+Spc | Ctl+Alt+Del     |                | Gui+Sft+↑ | Gui+Sft+← | Gui+↑ | Gui+Sft+→ |    |          |
// |---------+-----+-----+-------+---------+-----------------|                |-----------+-----------+-------+-----------+----+----------|
// | Gui+Esc |     |     | Gui+E | Gui+R   | Gui+T           |                | Gui+Sft+↓ | Gui+←     | Gui+↓ | Gui+→     |    | Gui+Bspc |
// |---------+-----+-----+-------+---------+-----------------+------.  ,------+-----------+-----------+-------+-----------+----+----------|
// |   F1    | F2  | F3  |  F4   |   F5    |       F6        |  |   |  |  |   |    F12    |    F11    |  F10  |    F9     | F8 |    F7    |
// `---------------------+-------+---------+-----------------+------|  |------+-----------+-----------+-------+--------------------------'
//                       |       |         |                 |  |   |  |  |   |           |           |       |
//                       `------------------------------------------'  `-------------------------------------------'
#[rustfmt::skip]
pub const OS: Keymap = layout([
    XXX, XXX, XXX, XXX, g(k(K::Space)), c(a(k(K::DeleteForward))),
    g(s(k(K::UpArrow))), g(s(k(K::LeftArrow))), g(k(K::UpArrow)), g(s(k(K::RightArrow))), XXX, XXX,

    g(k(K::Escape)), XXX, XXX, g(k(K::E)), g(k(K::R)), g(k(K::T)),
    g(s(k(K::DownArrow))), g(k(K::LeftArrow)), g(k(K::DownArrow)), g(k(K::RightArrow)), XXX, g(k(K::DeleteBackspace)),

    k(K::F1), k(K::F2), k(K::F3), k(K::F4), k(K::F5), k(K::F6), ___, ___,
    ___, ___, k(K::F12), k(K::F11), k(K::F10), k(K::F9), k(K::F8), k(K::F7),

    ___, ___, ___, ___, ___,
    ___, ___, ___, ___, ___,
]);

// Misc layer: clipboard.
//
// ,-------------------------------------------------.                              ,-----------------------------------------.
// |      |      |      | Sft-Copy | Sft-Paste |      |                              |      |      |      |      |      |      |
// |------+------+------+----------+-----------+------|                              |------+------+------+------+------+------|
// |      |      | Cut  | Copy     | Paste     | Undo |                              |      |      |      |      |      |      |
// |------+------+------+----------+-----------+------+-------------.  ,-------------+------+------+------+------+------+------|
// |      |      |      |          |           |      |      |      |  |      |      |      |      |      |      |      |      |
// `--------------------+----------+-----------+------+------+------|  |------+------+------+------+------+--------------------'
//                      |          |           |      |      |      |  |      |      |      |      |      |
//                      `-------------------------------------------'  `----------------------------------'
#[rustfmt::skip]
pub const MISC: Keymap = layout([
    XXX, XXX, XXX, c(s(k(K::C))), c(s(k(K::V))), XXX,
    XXX, XXX, XXX, XXX, XXX, XXX,

    XXX, XXX, c(k(K::X)), c(k(K::C)), c(k(K::V)), c(k(K::Z)),
    XXX, XXX, XXX, XXX, XXX, XXX,

    XXX, XXX, XXX, XXX, XXX, XXX, ___, ___,
    ___, ___, XXX, XXX, XXX, XXX, XXX, XXX,

    ___, ___, ___, ___, ___,
    ___, ___, ___, ___, ___,
]);
