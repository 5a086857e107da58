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

//! Mode state machine, menus and pan.

use crate::model::ModeId;

use super::InputRouter;

impl InputRouter {
    pub fn mode(&self) -> ModeId {
        self.mode
    }

    pub fn mode_name(&self) -> &str {
        self.tables.modes.name(self.mode).unwrap_or_default()
    }

    /// Switches to `mode` and redraws its buttons. Switching to the current
    /// mode does nothing, not even a redraw.
    pub fn set_mode(&mut self, mode: ModeId) {
        if mode == self.mode {
            return;
        }
        if !self.tables.modes.contains(mode) {
            tracing::warn!(%mode, "no such mode");
            return;
        }

        tracing::info!(
            from = self.mode_name(),
            to = self.tables.modes.name(mode).unwrap_or_default(),
            "mode changed"
        );
        self.mode = mode;

        // Slot 0 is the mode indicator; it stays blank.
        self.labels.set_label_text(0, None);
        self.draw_buttons();
    }

    /// Switches to the mode called `name`. Unlike loading a file this never
    /// creates a mode.
    pub fn set_mode_by_name(&mut self, name: &str) -> bool {
        match self.tables.modes.lookup(name) {
            Some(mode) => {
                self.set_mode(mode);
                true
            }
            None => {
                tracing::warn!(mode = name, "unknown mode");
                false
            }
        }
    }

    pub fn show_menu(&mut self) {
        if self.pan_enabled && !self.target_pan {
            self.pan_enabled = false;
        }

        self.set_mode(ModeId::MENU);
        self.menu_timeout = 0;
        self.process_menu_timer();
    }

    pub fn hide_menu(&mut self) {
        self.menu_timeout = self.menu_timeout_max;
        self.process_menu_timer();
    }

    pub fn reset_menu_timeout(&mut self) {
        self.menu_timeout = 0;
    }

    /// Advances the menu timer by one tick.
    ///
    /// On the tick the counter reaches the threshold the router leaves
    /// whatever menu is showing, for pan mode if panning is on and the
    /// default mode otherwise. The counter stops at `u32::MAX`, so it fires
    /// once per [`show_menu`](Self::show_menu) or key press.
    pub fn process_menu_timer(&mut self) {
        if self.menu_timeout == self.menu_timeout_max {
            let mode = if self.pan_enabled && !self.target_pan {
                ModeId::PAN
            } else {
                ModeId::DEFAULT
            };
            self.set_mode(mode);
        }

        self.menu_timeout = self.menu_timeout.saturating_add(1);
    }

    pub fn pan_enabled(&self) -> bool {
        self.pan_enabled
    }

    pub fn target_pan(&self) -> bool {
        self.target_pan
    }

    /// Marks panning as driven by task target editing. Target panning
    /// survives the menu and the menu timer.
    pub fn set_target_pan(&mut self, target_pan: bool) {
        self.target_pan = target_pan;
    }

    pub fn set_pan(&mut self, enabled: bool) {
        self.pan_enabled = enabled;
        if enabled {
            self.set_mode(ModeId::PAN);
        } else if self.mode == ModeId::PAN {
            self.set_mode(ModeId::DEFAULT);
        }
    }

    /// The `Pan` action.
    pub(super) fn pan(&mut self, argument: &str) {
        match argument {
            "on" => self.set_pan(true),
            "off" => self.set_pan(false),
            "toggle" => self.set_pan(!self.pan_enabled),
            "show" => {
                if self.pan_enabled {
                    self.set_mode(ModeId::PAN);
                }
            }
            other => tracing::warn!(argument = other, "unknown pan argument"),
        }
    }
}
