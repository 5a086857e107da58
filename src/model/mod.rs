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

//! The routing tables.
//!
//! Everything in here is plain owned data mutated on the consumer thread
//! only: the mode registry, the action arena, the three trigger maps and the
//! per-mode menus. [`InputTables`] bundles them so the loader and the router
//! can share one value.

pub mod action;
pub mod menu;
pub mod mode;
pub mod trigger;

pub use action::{Action, ActionId, ActionTable, MAX_ACTIONS};
pub use menu::{MENU_CAPACITY, Menu, MenuItem, Menus, parse_label};
pub use mode::{MAX_MODE_NAME, MAX_MODES, ModeId, ModeRegistry};
pub use trigger::{TriggerMap, TriggerMaps};

#[derive(Debug, Clone, Default)]
pub struct InputTables {
    pub modes: ModeRegistry,
    pub actions: ActionTable,
    pub triggers: TriggerMaps,
    pub menus: Menus,
}

impl InputTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets every action, binding and menu label. Modes are kept so that
    /// ids handed out earlier stay valid.
    pub fn clear_bindings(&mut self) {
        self.actions.clear();
        self.triggers.clear();
        self.menus.clear();
    }
}
