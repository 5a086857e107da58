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

//! Action table.
//!
//! A dense, append-only arena of actions addressed by [`ActionId`]. Id 0 is
//! reserved for the no-op. An action may name a `next` action so that one
//! trigger fires several actions in turn. Links only ever point to a larger
//! id, which keeps every chain finite and free of cycles.

use std::fmt;

use crate::{actions::ActionKind, error::InputError};

/// Capacity of the table, including the reserved no-op slot.
pub const MAX_ACTIONS: usize = 2048;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ActionId(u16);

impl ActionId {
    pub const NONE: ActionId = ActionId(0);

    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub argument: String,
    pub next: ActionId,
}

#[derive(Debug, Clone)]
pub struct ActionTable {
    // Slot 0 is the no-op and is never read.
    actions: Vec<Action>,
}

impl Default for ActionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionTable {
    pub fn new() -> Self {
        Self {
            actions: vec![Action {
                kind: ActionKind::Null,
                argument: String::new(),
                next: ActionId::NONE,
            }],
        }
    }

    /// Number of used slots, counting the reserved no-op.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// True when nothing but the no-op is defined.
    pub fn is_empty(&self) -> bool {
        self.actions.len() == 1
    }

    /// Appends an action and returns its id.
    ///
    /// New actions end a chain; use [`link`](Self::link) to extend one.
    pub fn push(
        &mut self,
        kind: ActionKind,
        argument: impl Into<String>,
    ) -> Result<ActionId, InputError> {
        if self.actions.len() >= MAX_ACTIONS {
            return Err(InputError::ActionTableFull);
        }

        let id = ActionId(self.actions.len() as u16);
        self.actions.push(Action {
            kind,
            argument: argument.into(),
            next: ActionId::NONE,
        });

        Ok(id)
    }

    /// Makes `to` run after `from`.
    pub fn link(&mut self, from: ActionId, to: ActionId) -> Result<(), InputError> {
        if from.is_none() || from.index() >= self.actions.len() {
            return Err(InputError::UnknownAction(from));
        }
        if to.index() >= self.actions.len() {
            return Err(InputError::UnknownAction(to));
        }
        if !to.is_none() && to <= from {
            return Err(InputError::ForwardLinkOnly { from, to });
        }

        self.actions[from.index()].next = to;
        Ok(())
    }

    pub fn get(&self, id: ActionId) -> Option<&Action> {
        if id.is_none() {
            return None;
        }
        self.actions.get(id.index())
    }

    /// The ids run by a trigger bound to `id`, in execution order.
    pub fn chain(&self, id: ActionId) -> Vec<ActionId> {
        let mut chain = Vec::new();
        let mut current = id;

        while let Some(action) = self.get(current) {
            chain.push(current);
            // Forward-only links; the guard only matters for a corrupted table.
            if action.next <= current {
                break;
            }
            current = action.next;
        }

        chain
    }

    /// Drops every action, keeping only the no-op.
    pub fn clear(&mut self) {
        self.actions.truncate(1);
    }
}
