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

//! Label renderer seam.
//!
//! The router does not draw anything. It tells a [`ButtonLabels`]
//! implementation which text belongs in which button slot whenever the
//! visible menu changes, and asks it whether a slot is currently enabled
//! before letting a key press through to that slot's action.

pub trait ButtonLabels {
    /// Shows `text` on button `slot`, or hides the button when `None`.
    fn set_label_text(&mut self, slot: usize, text: Option<&str>);

    /// Whether button `slot` accepts input right now.
    fn is_enabled(&self, slot: usize) -> bool;
}

/// Headless renderer: accepts every update and enables every slot.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLabels;

impl ButtonLabels for NoLabels {
    fn set_label_text(&mut self, _slot: usize, _text: Option<&str>) {}

    fn is_enabled(&self, _slot: usize) -> bool {
        true
    }
}
