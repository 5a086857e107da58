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

//! User interface rendering.
//!
//! The screen is a status line, the instrument's activity log and the button
//! bar that shows the current mode's menu labels.

mod buttons;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

pub(crate) use buttons::ButtonBar;

use crate::App;

pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .split(area);

    status::draw_status(f, outer[0], app);
    status::draw_activity(f, outer[1], app);
    app.button_hits = buttons::draw_buttons(f, outer[2], app);
}
