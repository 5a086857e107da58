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

//! Terminal key events to instrument key codes.
//!
//! Terminals have no application buttons, so `Alt+1` to `Alt+6` stand in for
//! `APP1` to `APP6`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use glide_input::triggers::{
    MAX_KEY,
    keys::{KEY_APP1, KEY_DOWN, KEY_ESCAPE, KEY_F1, KEY_LEFT, KEY_RETURN, KEY_RIGHT, KEY_UP},
};

pub(super) fn key_code(key: &KeyEvent) -> Option<u32> {
    let code = match key.code {
        KeyCode::Char(c @ '1'..='6') if key.modifiers.contains(KeyModifiers::ALT) => {
            KEY_APP1 + (c as u32 - '1' as u32)
        }
        KeyCode::Enter => KEY_RETURN,
        KeyCode::Esc => KEY_ESCAPE,
        KeyCode::Left => KEY_LEFT,
        KeyCode::Right => KEY_RIGHT,
        KeyCode::Up => KEY_UP,
        KeyCode::Down => KEY_DOWN,
        KeyCode::F(n @ 1..=12) => KEY_F1 + u32::from(n - 1),
        KeyCode::Char(c) => c.to_ascii_uppercase() as u32,
        _ => return None,
    };

    ((code as usize) < MAX_KEY).then_some(code)
}
