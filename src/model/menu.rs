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

//! Menu model: the labelled button slots of each mode.

use std::sync::Arc;

use super::{ActionId, MAX_MODES, ModeId};

/// Number of button slots per mode. Slot 0 doubles as the mode indicator.
pub const MENU_CAPACITY: usize = 32;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItem {
    pub label: Option<Arc<str>>,
    pub action: ActionId,
}

impl MenuItem {
    pub fn defined(&self) -> bool {
        !self.action.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct Menu {
    items: [MenuItem; MENU_CAPACITY],
}

impl Default for Menu {
    fn default() -> Self {
        Self {
            items: std::array::from_fn(|_| MenuItem::default()),
        }
    }
}

impl Menu {
    /// Puts a button at `slot`, replacing whatever was there.
    pub fn add(&mut self, label: Option<Arc<str>>, slot: usize, action: ActionId) -> bool {
        match self.items.get_mut(slot) {
            Some(item) => {
                *item = MenuItem { label, action };
                true
            }
            None => false,
        }
    }

    pub fn get(&self, slot: usize) -> Option<&MenuItem> {
        self.items.get(slot)
    }

    /// First slot bound to `action`.
    pub fn find_by_action(&self, action: ActionId) -> Option<usize> {
        if action.is_none() {
            return None;
        }
        self.items.iter().position(|item| item.action == action)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.fill(MenuItem::default());
    }
}

/// One [`Menu`] per possible mode.
#[derive(Debug, Clone)]
pub struct Menus {
    menus: Vec<Menu>,
}

impl Default for Menus {
    fn default() -> Self {
        Self::new()
    }
}

impl Menus {
    pub fn new() -> Self {
        Self {
            menus: vec![Menu::default(); MAX_MODES],
        }
    }

    pub fn menu(&self, mode: ModeId) -> Option<&Menu> {
        self.menus.get(mode.index())
    }

    pub fn add(&mut self, mode: ModeId, label: Option<Arc<str>>, slot: usize, action: ActionId) -> bool {
        self.menus
            .get_mut(mode.index())
            .is_some_and(|menu| menu.add(label, slot, action))
    }

    pub fn clear(&mut self) {
        self.menus.iter_mut().for_each(Menu::clear);
    }
}

/// Expands the escape sequences allowed in label text.
///
/// `\n` becomes a line break and `\r` is dropped; any other backslash is kept
/// as is.
pub fn parse_label(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n') => {
                    chars.next();
                    out.push('\n');
                    continue;
                }
                Some('r') => {
                    chars.next();
                    continue;
                }
                _ => {}
            }
        }
        out.push(c);
    }

    out
}
