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

//! # Glide computer input routing.
//!
//! Maps the inputs of a glide computer (hardware keys, on-screen buttons,
//! glide computer events and NMEA switch events) to chains of actions, under
//! a current input mode.
//!
//! * [`loader`] reads the text configuration into the routing tables.
//! * [`router::InputRouter`] owns the tables and the current mode, dispatches
//!   triggers and runs the menu timer.
//! * [`queue`] carries events from sensor threads to the thread that owns the
//!   router.
//!
//! The host supplies two seams: an [`ActionHandler`] that performs the actions
//! the router does not handle itself, and a [`ButtonLabels`] renderer for the
//! on-screen buttons.

pub mod actions;
pub mod error;
pub mod labels;
pub mod loader;
pub mod model;
pub mod queue;
pub mod router;
pub mod triggers;

pub use actions::{ActionHandler, ActionKind, IgnoreActions};
pub use error::{ConfigWarning, InputError, WarningKind};
pub use labels::{ButtonLabels, NoLabels};
pub use loader::LoadReport;
pub use model::{ActionId, ModeId};
pub use queue::QueueHandle;
pub use router::InputRouter;
pub use triggers::{Gce, Nmea, TriggerKind};
