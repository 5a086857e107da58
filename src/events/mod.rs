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

//! Application event loop.
//!
//! Key presses, mouse clicks and ticks arrive from their threads over one
//! channel. Each event is handed to the router and the screen is redrawn
//! afterwards.

mod keys;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    ExitApplication,
}

/// Runs until the user quits, an `Exit` action runs, or every sender is gone.
pub(crate) fn process_events(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::Key(key) => process_key_event(app, key),
            AppEvent::Mouse(mouse) => process_mouse_event(app, mouse),
            AppEvent::Tick => app.router.tick(&mut app.instrument),
            AppEvent::ExitApplication => break,
        }

        if app.instrument.quit {
            break;
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

fn process_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.event_tx.send(AppEvent::ExitApplication).ok();
        return;
    }

    let Some(code) = keys::key_code(&key) else {
        return;
    };

    if !app.router.process_key(&mut app.instrument, code) {
        tracing::debug!(code, "key not bound");
    }
}

fn process_mouse_event(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    let hit = app
        .button_hits
        .iter()
        .find(|(_, rect)| {
            (rect.x..rect.x + rect.width).contains(&mouse.column)
                && (rect.y..rect.y + rect.height).contains(&mouse.row)
        })
        .map(|(slot, _)| *slot);

    if let Some(slot) = hit {
        app.router.process_button(&mut app.instrument, slot);
    }
}
