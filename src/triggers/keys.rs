// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Key codes and the symbolic key names understood by the input file.
//!
//! Codes follow the Windows virtual-key numbering that the instrument's
//! hardware buttons are reported in.

/// Exclusive upper bound of key codes held by the key trigger map.
pub const MAX_KEY: usize = 256;

pub const KEY_RETURN: u32 = 0x0D;
pub const KEY_ESCAPE: u32 = 0x1B;
pub const KEY_LEFT: u32 = 0x25;
pub const KEY_UP: u32 = 0x26;
pub const KEY_RIGHT: u32 = 0x27;
pub const KEY_DOWN: u32 = 0x28;

pub const KEY_F1: u32 = 0x70;
pub const KEY_F2: u32 = 0x71;
pub const KEY_F3: u32 = 0x72;
pub const KEY_F4: u32 = 0x73;
pub const KEY_F5: u32 = 0x74;
pub const KEY_F6: u32 = 0x75;
pub const KEY_F7: u32 = 0x76;
pub const KEY_F8: u32 = 0x77;
pub const KEY_F9: u32 = 0x78;
pub const KEY_F10: u32 = 0x79;
pub const KEY_F11: u32 = 0x7A;
pub const KEY_F12: u32 = 0x7B;

pub const KEY_APP1: u32 = 0xC1;
pub const KEY_APP2: u32 = 0xC2;
pub const KEY_APP3: u32 = 0xC3;
pub const KEY_APP4: u32 = 0xC4;
pub const KEY_APP5: u32 = 0xC5;
pub const KEY_APP6: u32 = 0xC6;

static KEY_NAMES: &[(&str, u32)] = &[
    ("APP1", KEY_APP1),
    ("APP2", KEY_APP2),
    ("APP3", KEY_APP3),
    ("APP4", KEY_APP4),
    ("APP5", KEY_APP5),
    ("APP6", KEY_APP6),
    ("F1", KEY_F1),
    ("F2", KEY_F2),
    ("F3", KEY_F3),
    ("F4", KEY_F4),
    ("F5", KEY_F5),
    ("F6", KEY_F6),
    ("F7", KEY_F7),
    ("F8", KEY_F8),
    ("F9", KEY_F9),
    ("F10", KEY_F10),
    ("F11", KEY_F11),
    ("F12", KEY_F12),
    ("LEFT", KEY_LEFT),
    ("RIGHT", KEY_RIGHT),
    ("UP", KEY_UP),
    ("DOWN", KEY_DOWN),
    ("RETURN", KEY_RETURN),
    ("ESCAPE", KEY_ESCAPE),
];

/// Resolves a key name from the input file to its code.
///
/// Named keys are matched exactly. Any other single character stands for
/// itself, upper-cased, as long as the result fits the key map.
pub fn find_key(name: &str) -> Option<u32> {
    if let Some((_, code)) = KEY_NAMES.iter().find(|(n, _)| *n == name) {
        return Some(*code);
    }

    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            let code = c.to_ascii_uppercase() as u32;
            (code > 0 && (code as usize) < MAX_KEY).then_some(code)
        }
        _ => None,
    }
}

/// Returns the symbolic name of a named key, if it has one.
pub fn key_name(code: u32) -> Option<&'static str> {
    KEY_NAMES.iter().find(|(_, c)| *c == code).map(|(n, _)| *n)
}
