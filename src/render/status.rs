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

//! Status line and activity log.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
};

use crate::{App, util::format::format_mac_cready};

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let instrument = &app.instrument;
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::styled(format!(" {} ", app.router.mode_name()), bold).fg(app.theme.accent_colour),
        Span::raw(format!(" zoom {} ", instrument.zoom)).fg(app.theme.text_colour),
        Span::raw(format!(" MC {} ", format_mac_cready(instrument.mac_cready))).fg(app.theme.text_colour),
    ];
    if app.router.pan_enabled() {
        spans.push(Span::styled(" PAN ", bold).fg(app.theme.accent_colour));
    }
    if instrument.logging {
        spans.push(Span::styled(" LOG ", bold).fg(app.theme.accent_colour));
    }
    if instrument.beeps > 0 {
        spans.push(Span::raw(format!(" beeps {} ", instrument.beeps)).fg(app.theme.dim_colour));
    }

    f.render_widget(Line::from(spans), area);
}

pub(crate) fn draw_activity(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1))
        .title(" Activity ");

    let items: Vec<ListItem> = app
        .instrument
        .activity()
        .map(|entry| ListItem::new(entry.to_string()).fg(app.theme.text_colour))
        .collect();

    f.render_widget(List::new(items).block(block), area);
}
