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

//! The input router.
//!
//! [`InputRouter`] owns the routing tables and the current mode. Keys and
//! on-screen buttons are dispatched synchronously by the caller; glide
//! computer and NMEA events are queued from any thread and dispatched on the
//! next [`tick`](InputRouter::tick).

mod dispatch;
mod mode;

use std::path::Path;

use crate::{
    actions::ActionHandler,
    error::InputError,
    labels::ButtonLabels,
    loader::{self, LoadReport},
    model::{ActionTable, InputTables, Menu, ModeId, ModeRegistry},
    queue::QueueHandle,
    triggers::TriggerKind,
};

/// Menu timer threshold, in ticks, used by [`InputRouter::new`].
pub const DEFAULT_MENU_TIMEOUT: u32 = 8;

pub struct InputRouter {
    tables: InputTables,
    mode: ModeId,
    labels: Box<dyn ButtonLabels>,
    queue: QueueHandle,

    menu_timeout: u32,
    menu_timeout_max: u32,
    pan_enabled: bool,
    target_pan: bool,
}

impl InputRouter {
    /// Creates a router in the default mode with the built-in configuration
    /// loaded.
    pub fn new(labels: impl ButtonLabels + 'static) -> Result<Self, InputError> {
        let mut tables = InputTables::new();
        loader::apply_defaults(&mut tables)?;

        let mut router = Self {
            tables,
            mode: ModeId::DEFAULT,
            labels: Box::new(labels),
            queue: QueueHandle::new(),
            menu_timeout: 0,
            menu_timeout_max: DEFAULT_MENU_TIMEOUT,
            pan_enabled: false,
            target_pan: false,
        };
        router.draw_buttons();

        Ok(router)
    }

    /// Sets the number of ticks a menu stays up without input.
    pub fn with_menu_timeout(mut self, ticks: u32) -> Self {
        self.menu_timeout_max = ticks;
        self
    }

    /// Producer handle for sensor threads.
    pub fn queue_handle(&self) -> QueueHandle {
        self.queue.clone()
    }

    pub fn tables(&self) -> &InputTables {
        &self.tables
    }

    pub fn modes(&self) -> &ModeRegistry {
        &self.tables.modes
    }

    pub fn actions(&self) -> &ActionTable {
        &self.tables.actions
    }

    pub fn menu(&self, mode: ModeId) -> Option<&Menu> {
        self.tables.menus.menu(mode)
    }

    /// Overlays configuration lines on the current tables.
    pub fn load_lines<I, S>(&mut self, lines: I) -> Result<LoadReport, InputError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let report = loader::load_lines(&mut self.tables, lines)?;
        self.draw_buttons();
        Ok(report)
    }

    /// Loads a user input file. Pending queued events are discarded first
    /// since they were produced against the old bindings.
    pub fn load_file(&mut self, path: &Path) -> Result<LoadReport, InputError> {
        self.queue.queue().clear();
        let report = loader::load_file(&mut self.tables, path)?;
        self.draw_buttons();
        Ok(report)
    }

    /// Queues a glide computer event for the next tick.
    pub fn process_glide_computer(&self, code: u32) -> bool {
        self.queue.push_glide_computer(code)
    }

    /// Queues an NMEA event for the next tick.
    pub fn process_nmea(&self, code: u32) -> bool {
        self.queue.push_nmea(code)
    }

    /// Periodic work: dispatches queued events, then advances the menu timer.
    pub fn tick(&mut self, handler: &mut dyn ActionHandler) {
        let drained = self.queue.queue().take();
        for (kind, code) in drained.iter() {
            match kind {
                TriggerKind::GlideComputer => self.dispatch_glide_computer(handler, code),
                TriggerKind::Nmea => self.dispatch_nmea(handler, code),
                TriggerKind::Key => false,
            };
        }

        self.process_menu_timer();
    }

    /// Pushes every label of the current mode's menu to the renderer.
    fn draw_buttons(&mut self) {
        let Some(menu) = self.tables.menus.menu(self.mode) else {
            return;
        };

        for (slot, item) in menu.iter().enumerate() {
            self.labels.set_label_text(slot, item.label.as_deref());
        }
    }
}

impl std::fmt::Debug for InputRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputRouter")
            .field("mode", &self.mode)
            .field("menu_timeout", &self.menu_timeout)
            .field("menu_timeout_max", &self.menu_timeout_max)
            .field("pan_enabled", &self.pan_enabled)
            .field("target_pan", &self.target_pan)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::{cell::RefCell, rc::Rc};

    use crate::{
        actions::{ActionHandler, ActionKind},
        labels::ButtonLabels,
    };

    use super::InputRouter;

    /// Renderer that records every label update.
    #[derive(Clone, Default)]
    pub(crate) struct RecordingLabels {
        pub(crate) updates: Rc<RefCell<Vec<(usize, Option<String>)>>>,
        pub(crate) disabled: Rc<RefCell<Vec<usize>>>,
    }

    impl ButtonLabels for RecordingLabels {
        fn set_label_text(&mut self, slot: usize, text: Option<&str>) {
            self.updates
                .borrow_mut()
                .push((slot, text.map(str::to_string)));
        }

        fn is_enabled(&self, slot: usize) -> bool {
            !self.disabled.borrow().contains(&slot)
        }
    }

    /// Handler that records host actions.
    #[derive(Default)]
    pub(crate) struct Recorder {
        pub(crate) performed: Vec<(ActionKind, String)>,
    }

    impl ActionHandler for Recorder {
        fn perform(&mut self, _router: &mut InputRouter, action: ActionKind, argument: &str) {
            self.performed.push((action, argument.to_string()));
        }
    }
}
