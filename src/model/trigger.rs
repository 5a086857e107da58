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

//! Trigger maps: one dense `mode × code` table per trigger kind.

use crate::triggers::TriggerKind;

use super::{ActionId, MAX_MODES, ModeId};

#[derive(Debug, Clone)]
pub struct TriggerMap {
    codes: usize,
    table: Vec<ActionId>,
}

impl TriggerMap {
    pub fn new(codes: usize) -> Self {
        Self {
            codes,
            table: vec![ActionId::NONE; MAX_MODES * codes],
        }
    }

    pub fn codes(&self) -> usize {
        self.codes
    }

    fn slot(&self, mode: ModeId, code: u32) -> Option<usize> {
        let code = code as usize;
        (mode.index() < MAX_MODES && code < self.codes).then(|| mode.index() * self.codes + code)
    }

    /// The action bound in exactly this mode, without fallback.
    pub fn get(&self, mode: ModeId, code: u32) -> ActionId {
        self.slot(mode, code)
            .map(|i| self.table[i])
            .unwrap_or(ActionId::NONE)
    }

    /// Binds `code` in `mode`, replacing any previous binding. Returns false
    /// when the code or mode is out of range.
    pub fn bind(&mut self, mode: ModeId, code: u32, action: ActionId) -> bool {
        match self.slot(mode, code) {
            Some(i) => {
                self.table[i] = action;
                true
            }
            None => false,
        }
    }

    /// Looks `code` up in `mode`, falling back to the default mode.
    pub fn resolve(&self, mode: ModeId, code: u32) -> ActionId {
        let action = self.get(mode, code);
        if action.is_none() && mode != ModeId::DEFAULT {
            return self.get(ModeId::DEFAULT, code);
        }
        action
    }

    pub fn clear(&mut self) {
        self.table.fill(ActionId::NONE);
    }
}

#[derive(Debug, Clone)]
pub struct TriggerMaps {
    keys: TriggerMap,
    glide_computer: TriggerMap,
    nmea: TriggerMap,
}

impl Default for TriggerMaps {
    fn default() -> Self {
        Self::new()
    }
}

impl TriggerMaps {
    pub fn new() -> Self {
        Self {
            keys: TriggerMap::new(TriggerKind::Key.code_count()),
            glide_computer: TriggerMap::new(TriggerKind::GlideComputer.code_count()),
            nmea: TriggerMap::new(TriggerKind::Nmea.code_count()),
        }
    }

    pub fn map(&self, kind: TriggerKind) -> &TriggerMap {
        match kind {
            TriggerKind::Key => &self.keys,
            TriggerKind::GlideComputer => &self.glide_computer,
            TriggerKind::Nmea => &self.nmea,
        }
    }

    pub fn map_mut(&mut self, kind: TriggerKind) -> &mut TriggerMap {
        match kind {
            TriggerKind::Key => &mut self.keys,
            TriggerKind::GlideComputer => &mut self.glide_computer,
            TriggerKind::Nmea => &mut self.nmea,
        }
    }

    pub fn bind(&mut self, kind: TriggerKind, mode: ModeId, code: u32, action: ActionId) -> bool {
        self.map_mut(kind).bind(mode, code, action)
    }

    pub fn resolve(&self, kind: TriggerKind, mode: ModeId, code: u32) -> ActionId {
        self.map(kind).resolve(mode, code)
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.glide_computer.clear();
        self.nmea.clear();
    }
}
