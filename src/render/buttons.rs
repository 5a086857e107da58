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

//! The on-screen button bar.

use std::{cell::RefCell, rc::Rc};

use glide_input::{ButtonLabels, model::MENU_CAPACITY};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use crate::App;

/// Label state shared between the router, which writes it, and the renderer.
#[derive(Clone)]
pub(crate) struct ButtonBar {
    slots: Rc<RefCell<Vec<Option<String>>>>,
}

impl Default for ButtonBar {
    fn default() -> Self {
        Self {
            slots: Rc::new(RefCell::new(vec![None; MENU_CAPACITY])),
        }
    }
}

impl ButtonBar {
    /// Labelled slots in slot order. Slot 0 is the mode indicator and is not
    /// a button.
    pub(crate) fn visible(&self) -> Vec<(usize, String)> {
        self.slots
            .borrow()
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(slot, label)| label.clone().map(|label| (slot, label)))
            .collect()
    }
}

impl ButtonLabels for ButtonBar {
    fn set_label_text(&mut self, slot: usize, text: Option<&str>) {
        if let Some(label) = self.slots.borrow_mut().get_mut(slot) {
            *label = text.map(str::to_string);
        }
    }

    fn is_enabled(&self, slot: usize) -> bool {
        slot < MENU_CAPACITY
    }
}

/// Draws the labelled buttons side by side and returns where each one landed,
/// for mouse hit testing.
pub(crate) fn draw_buttons(f: &mut Frame, area: Rect, app: &App) -> Vec<(usize, Rect)> {
    let buttons = app.buttons.visible();
    if buttons.is_empty() {
        return Vec::new();
    }

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, buttons.len() as u32); buttons.len()])
        .split(area);

    buttons
        .into_iter()
        .zip(cells.iter())
        .map(|((slot, label), cell)| {
            let style = Style::default()
                .fg(app.theme.button_fg)
                .bg(app.theme.button_bg);

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border_colour));

            f.render_widget(
                Paragraph::new(label)
                    .alignment(Alignment::Center)
                    .style(style)
                    .block(block),
                *cell,
            );

            (slot, *cell)
        })
        .collect()
}
