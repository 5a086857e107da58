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

//! The simulated instrument: performs the host side of every action.
//!
//! There is no moving map or flight logger behind this front end. Each action
//! adjusts a little display state and is appended to an activity log so the
//! effect of the input configuration can be seen on screen.

use std::collections::VecDeque;

use glide_input::{ActionHandler, ActionKind, InputRouter};

const LOG_CAPACITY: usize = 200;

const MIN_ZOOM: i32 = 1;
const MAX_ZOOM: i32 = 12;

#[derive(Debug)]
pub(crate) struct Instrument {
    pub(crate) zoom: i32,
    /// MacCready setting in tenths of a metre per second.
    pub(crate) mac_cready: u32,
    pub(crate) logging: bool,
    pub(crate) beeps: u32,
    pub(crate) quit: bool,
    activity: VecDeque<String>,
}

impl Default for Instrument {
    fn default() -> Self {
        Self {
            zoom: 6,
            mac_cready: 10,
            logging: false,
            beeps: 0,
            quit: false,
            activity: VecDeque::with_capacity(LOG_CAPACITY),
        }
    }
}

impl Instrument {
    /// Most recent entries first.
    pub(crate) fn activity(&self) -> impl Iterator<Item = &str> {
        self.activity.iter().rev().map(String::as_str)
    }

    pub(crate) fn note(&mut self, entry: String) {
        if self.activity.len() == LOG_CAPACITY {
            self.activity.pop_front();
        }
        self.activity.push_back(entry);
    }
}

impl ActionHandler for Instrument {
    fn perform(&mut self, router: &mut InputRouter, action: ActionKind, argument: &str) {
        match (action, argument) {
            (ActionKind::Zoom, "in") => self.zoom = (self.zoom - 1).max(MIN_ZOOM),
            (ActionKind::Zoom, "out") => self.zoom = (self.zoom + 1).min(MAX_ZOOM),
            (ActionKind::MacCready, "up") => self.mac_cready = (self.mac_cready + 1).min(50),
            (ActionKind::MacCready, "down") => self.mac_cready = self.mac_cready.saturating_sub(1),
            (ActionKind::Logger, "start") => self.logging = true,
            (ActionKind::Logger, "stop") => self.logging = false,
            (ActionKind::Logger, "toggle") => self.logging = !self.logging,
            (ActionKind::Beep, _) => self.beeps += 1,
            (ActionKind::Exit, _) => self.quit = true,
            _ => {}
        }

        let entry = if argument.is_empty() {
            format!("[{}] {}", router.mode_name(), action.name())
        } else {
            format!("[{}] {} {}", router.mode_name(), action.name(), argument)
        };
        tracing::info!("{entry}");
        self.note(entry);
    }
}

#[cfg(test)]
mod tests {
    use glide_input::NoLabels;

    use super::*;

    #[test]
    fn adjusts_state_and_logs() {
        let mut router = InputRouter::new(NoLabels).unwrap();
        let mut instrument = Instrument::default();

        instrument.perform(&mut router, ActionKind::Zoom, "in");
        instrument.perform(&mut router, ActionKind::MacCready, "down");
        instrument.perform(&mut router, ActionKind::Logger, "start");

        assert_eq!(instrument.zoom, 5);
        assert_eq!(instrument.mac_cready, 9);
        assert!(instrument.logging);
        assert_eq!(
            instrument.activity().next(),
            Some("[default] Logger start")
        );
    }

    #[test]
    fn activity_log_is_bounded() {
        let mut instrument = Instrument::default();
        for i in 0..LOG_CAPACITY + 5 {
            instrument.note(i.to_string());
        }
        assert_eq!(instrument.activity().count(), LOG_CAPACITY);
        assert_eq!(instrument.activity().last(), Some("5"));
    }

    #[test]
    fn zoom_is_clamped() {
        let mut router = InputRouter::new(NoLabels).unwrap();
        let mut instrument = Instrument::default();
        for _ in 0..20 {
            instrument.perform(&mut router, ActionKind::Zoom, "out");
        }
        assert_eq!(instrument.zoom, MAX_ZOOM);
    }
}
