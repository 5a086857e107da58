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

//! Error and diagnostic types.
//!
//! Hard failures are [`InputError`]s and propagate to the caller. Everything
//! the configuration loader can recover from is a [`ConfigWarning`]: it is
//! logged, collected into the load report and otherwise ignored, so that a
//! partially broken user file never stops the instrument.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::model::{ActionId, MAX_ACTIONS, MAX_MODE_NAME, MAX_MODES};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("action table is full ({MAX_ACTIONS} entries)")]
    ActionTableFull,

    #[error("mode table is full ({MAX_MODES} modes)")]
    ModeTableFull,

    #[error("invalid mode name {0:?} (must be 1 to {MAX_MODE_NAME} characters)")]
    InvalidModeName(String),

    #[error("unknown mode {0:?}")]
    UnknownMode(String),

    #[error("action {from} may only link forward, not to {to}")]
    ForwardLinkOnly { from: ActionId, to: ActionId },

    #[error("unknown action {0}")]
    UnknownAction(ActionId),

    #[error("failed to open input file {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read input")]
    Read(#[source] io::Error),
}

/// A recoverable problem found while loading a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ConfigWarning {
    pub line: usize,
    pub kind: WarningKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WarningKind {
    #[error("line is not a key=value assignment")]
    MalformedLine,

    #[error("unknown field {0:?}")]
    UnknownField(String),

    #[error("invalid location {0:?}")]
    InvalidLocation(String),

    #[error("event field is empty")]
    EmptyEvent,

    #[error("unknown action {0:?}")]
    UnknownAction(String),

    #[error("unknown key {0:?}")]
    UnknownKey(String),

    #[error("unknown glide computer event {0:?}")]
    UnknownGlideComputerEvent(String),

    #[error("unknown NMEA event {0:?}")]
    UnknownNmeaEvent(String),

    #[error("unknown record type {0:?}")]
    UnknownType(String),

    #[error("mode {name:?} skipped: {reason}")]
    ModeRejected { name: String, reason: String },
}
