//! Keys on the Kyria
//!
//! The Kyria is scanned as an 8x8 matrix, with the left half on rows 0-3 and
//! the right half on rows 4-7.  Columns count outward from the inner edge of
//! each half, so the left half is mirrored relative to how it looks.  Only 50
//! of the 64 matrix positions are wired to a switch.
//!
//! Scan codes are `row * COLS + col`.  The named positions below use the
//! qwerty name of the key at that position, the same way across all of the
//! layout variants.

use crate::layer::Keymap;
use crate::{Action, Side};

pub const ROWS: usize = 8;
pub const COLS: usize = 8;

/// All of the scancodes fit within this.
pub const NKEYS: usize = ROWS * COLS;

/// Number of physical keys.
pub const LAYOUT_KEYS: usize = 50;

// Top row.
pub const KEY_TAB: u8 = 7;
pub const KEY_Q: u8 = 6;
pub const KEY_W: u8 = 5;
pub const KEY_E: u8 = 4;
pub const KEY_R: u8 = 3;
pub const KEY_T: u8 = 2;
pub const KEY_Y: u8 = 34;
pub const KEY_U: u8 = 35;
pub const KEY_I: u8 = 36;
pub const KEY_O: u8 = 37;
pub const KEY_P: u8 = 38;
pub const KEY_BSPC: u8 = 39;

// Home row.
pub const KEY_ESC: u8 = 15;
pub const KEY_A: u8 = 14;
pub const KEY_S: u8 = 13;
pub const KEY_D: u8 = 12;
pub const KEY_F: u8 = 11;
pub const KEY_G: u8 = 10;
pub const KEY_H: u8 = 42;
pub const KEY_J: u8 = 43;
pub const KEY_K: u8 = 44;
pub const KEY_L: u8 = 45;
pub const KEY_SEMI: u8 = 46;
pub const KEY_APOST: u8 = 47;

// Bottom row, including the two inner keys on each half.
pub const KEY_LSHIFT: u8 = 23;
pub const KEY_Z: u8 = 22;
pub const KEY_X: u8 = 21;
pub const KEY_C: u8 = 20;
pub const KEY_V: u8 = 19;
pub const KEY_B: u8 = 18;
pub const KEY_LI1: u8 = 17;
pub const KEY_LI2: u8 = 16;
pub const KEY_RI1: u8 = 48;
pub const KEY_RI2: u8 = 49;
pub const KEY_N: u8 = 50;
pub const KEY_M: u8 = 51;
pub const KEY_COMMA: u8 = 52;
pub const KEY_DOT: u8 = 53;
pub const KEY_SLASH: u8 = 54;
pub const KEY_RSHIFT: u8 = 55;

// Thumb keys, numbered left to right as seen from above.
pub const KEY_THUMB_L1: u8 = 28;
pub const KEY_THUMB_L2: u8 = 27;
pub const KEY_THUMB_L3: u8 = 26;
pub const KEY_THUMB_L4: u8 = 25;
pub const KEY_THUMB_L5: u8 = 24;
pub const KEY_THUMB_R1: u8 = 56;
pub const KEY_THUMB_R2: u8 = 57;
pub const KEY_THUMB_R3: u8 = 58;
pub const KEY_THUMB_R4: u8 = 59;
pub const KEY_THUMB_R5: u8 = 60;

/// Scan code of each physical key, in the order the keys are written in a
/// layer table: left to right, top to bottom, both halves for each row.
pub static LAYOUT_POSITIONS: [u8; LAYOUT_KEYS] = [
    KEY_TAB, KEY_Q, KEY_W, KEY_E, KEY_R, KEY_T,
    KEY_Y, KEY_U, KEY_I, KEY_O, KEY_P, KEY_BSPC,

    KEY_ESC, KEY_A, KEY_S, KEY_D, KEY_F, KEY_G,
    KEY_H, KEY_J, KEY_K, KEY_L, KEY_SEMI, KEY_APOST,

    KEY_LSHIFT, KEY_Z, KEY_X, KEY_C, KEY_V, KEY_B, KEY_LI1, KEY_LI2,
    KEY_RI1, KEY_RI2, KEY_N, KEY_M, KEY_COMMA, KEY_DOT, KEY_SLASH, KEY_RSHIFT,

    KEY_THUMB_L1, KEY_THUMB_L2, KEY_THUMB_L3, KEY_THUMB_L4, KEY_THUMB_L5,
    KEY_THUMB_R1, KEY_THUMB_R2, KEY_THUMB_R3, KEY_THUMB_R4, KEY_THUMB_R5,
];

/// Build a full matrix keymap from the 50 physical keys, given in visual
/// order.  Matrix positions without a switch get [`Action::NoOp`].
pub const fn layout(keys: [Action; LAYOUT_KEYS]) -> Keymap {
    let mut map = [[Action::NoOp; COLS]; ROWS];
    let mut i = 0;
    while i < LAYOUT_KEYS {
        let scan = LAYOUT_POSITIONS[i] as usize;
        map[scan / COLS][scan % COLS] = keys[i];
        i += 1;
    }
    map
}

/// Which half a scan code belongs to.
pub fn side(scan: u8) -> Option<Side> {
    match scan as usize {
        s if s < NKEYS / 2 => Some(Side::Left),
        s if s < NKEYS => Some(Side::Right),
        _ => None,
    }
}

/// Is there a switch at this scan code?
pub fn is_wired(scan: u8) -> bool {
    LAYOUT_POSITIONS.contains(&scan)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn positions_are_unique_and_in_range() {
        for (i, a) in LAYOUT_POSITIONS.iter().enumerate() {
            assert!((*a as usize) < NKEYS);
            for b in &LAYOUT_POSITIONS[i + 1..] {
                assert_ne!(a, b, "scan code {} used twice", a);
            }
        }
    }

    #[test]
    fn halves_are_balanced() {
        let left = LAYOUT_POSITIONS
            .iter()
            .filter(|s| side(**s) == Some(Side::Left))
            .count();
        assert_eq!(left, LAYOUT_KEYS / 2);
        assert_eq!(side(NKEYS as u8), None);
        assert!(side(KEY_THUMB_L1).unwrap().is_left());
        assert!(!side(KEY_THUMB_R1).unwrap().is_left());
    }

    #[test]
    fn layout_fills_unwired_slots() {
        let map = layout([Action::Transparent; LAYOUT_KEYS]);
        for scan in 0..NKEYS as u8 {
            let action = map[scan as usize / COLS][scan as usize % COLS];
            if is_wired(scan) {
                assert_eq!(action, Action::Transparent);
            } else {
                assert_eq!(action, Action::NoOp);
            }
        }
    }
}
