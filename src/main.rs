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

//! # Glide input TUI.
//!
//! A terminal front end for the glide computer input router.
//!
//! * The **Main Thread** owns the router, the terminal and the simulated
//!   instrument. It is the only thread that dispatches actions.
//! * A **Key Thread** and a **Tick Thread** feed terminal input and the
//!   periodic tick into the event loop over a `std::sync::mpsc` channel.
//! * A **Simulator Thread** plays the part of the glide computer and NMEA
//!   sensors, pushing events straight into the router's queue.
//!
//! ## Architecture
//!
//! Setup-run-teardown: the terminal is always restored, whatever `run`
//! returns.

mod config;
mod events;
mod instrument;
mod logging;
mod render;
mod simulator;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use glide_input::InputRouter;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::{
    io,
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    config::AppConfig,
    events::{AppEvent, process_events},
    instrument::Instrument,
    render::ButtonBar,
    theme::Theme,
};

/// Interval between simulated sensor events, in ticks.
const SIMULATOR_TICKS: u32 = 12;

/// Application state.
struct App {
    pub config: AppConfig,
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub router: InputRouter,
    pub instrument: Instrument,

    pub buttons: ButtonBar,
    pub button_hits: Vec<(usize, Rect)>,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let buttons = ButtonBar::default();
        let mut router = InputRouter::new(buttons.clone())
            .context("Failed to load the built-in input configuration")?
            .with_menu_timeout(config.menu_timeout_ticks);

        let mut instrument = Instrument::default();

        if let Some(path) = &config.input_file {
            let report = router
                .load_file(path)
                .with_context(|| format!("Failed to load input file {}", path.display()))?;
            instrument.note(format!(
                "loaded {}: {} records, {} warnings",
                path.display(),
                report.records,
                report.warnings.len()
            ));
        }

        Ok(Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            router,
            instrument,
            buttons,
            button_hits: Vec::new(),
        })
    }
}

fn main() -> Result<()> {
    let config = config::load_config();

    let _log_guard = logging::init(config.log_file.clone()).context("Failed to initialise logging")?;
    tracing::info!(?config, "starting");

    let mut app = App::new(config).context("Failed to initialise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Puts the terminal into raw mode on the alternate screen with mouse
/// capture, and paints the theme background.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex);
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Best-effort reversal of [`setup_terminal`].
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Spawns the input, tick and simulator threads, then runs the event loop.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(event::Event::Key(key)) => AppEvent::Key(key),
                Ok(event::Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(_) => continue,
                Err(_) => break,
            };
            if tx_input.send(event).is_err() {
                break;
            }
        }
    });

    let tick_interval = Duration::from_millis(app.config.tick_interval_ms);
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(tick_interval);
        }
    });

    if app.config.simulate_glide_computer {
        simulator::spawn(app.router.queue_handle(), tick_interval * SIMULATOR_TICKS);
    }

    process_events(terminal, app)
}
