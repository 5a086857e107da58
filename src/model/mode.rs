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

//! Mode registry.
//!
//! Maps small dense mode ids to their names and back. The four standard
//! modes always exist with fixed ids; anything else is created the first time
//! an input file mentions it.

use std::fmt;

use crate::error::InputError;

pub const MAX_MODES: usize = 64;
pub const MAX_MODE_NAME: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ModeId(u8);

impl ModeId {
    pub const DEFAULT: ModeId = ModeId(0);
    pub const PAN: ModeId = ModeId(1);
    pub const INFOBOX: ModeId = ModeId(2);
    pub const MENU: ModeId = ModeId(3);

    /// Wraps a raw id. Whether it names a registered mode is up to the
    /// registry.
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ModeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

const STANDARD_MODES: [&str; 4] = ["default", "pan", "infobox", "Menu"];

#[derive(Debug, Clone)]
pub struct ModeRegistry {
    names: Vec<String>,
}

impl Default for ModeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeRegistry {
    pub fn new() -> Self {
        Self {
            names: STANDARD_MODES.iter().map(|n| n.to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, id: ModeId) -> bool {
        id.index() < self.names.len()
    }

    pub fn lookup(&self, name: &str) -> Option<ModeId> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| ModeId(i as u8))
    }

    pub fn name(&self, id: ModeId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    /// Returns the id of `name`, registering it if it is new.
    pub fn lookup_or_create(&mut self, name: &str) -> Result<ModeId, InputError> {
        if let Some(id) = self.lookup(name) {
            return Ok(id);
        }

        if name.is_empty() || name.chars().count() > MAX_MODE_NAME {
            return Err(InputError::InvalidModeName(name.to_string()));
        }
        if self.names.len() >= MAX_MODES {
            return Err(InputError::ModeTableFull);
        }

        self.names.push(name.to_string());
        let id = ModeId((self.names.len() - 1) as u8);
        tracing::debug!(mode = name, %id, "registered mode");

        Ok(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ModeId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, n)| (ModeId(i as u8), n.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_modes_have_fixed_ids() {
        let modes = ModeRegistry::new();
        assert_eq!(modes.lookup("default"), Some(ModeId::DEFAULT));
        assert_eq!(modes.lookup("pan"), Some(ModeId::PAN));
        assert_eq!(modes.lookup("infobox"), Some(ModeId::INFOBOX));
        assert_eq!(modes.lookup("Menu"), Some(ModeId::MENU));
        assert_eq!(modes.lookup("menu"), None);
    }

    #[test]
    fn new_modes_are_dense_in_first_seen_order() {
        let mut modes = ModeRegistry::new();
        let a = modes.lookup_or_create("Nav1").unwrap();
        let b = modes.lookup_or_create("Nav2").unwrap();
        assert_eq!(a.index(), 4);
        assert_eq!(b.index(), 5);
        assert_eq!(modes.lookup_or_create("Nav1").unwrap(), a);
        assert_eq!(modes.name(b), Some("Nav2"));
    }

    #[test]
    fn rejects_bad_names() {
        let mut modes = ModeRegistry::new();
        assert!(matches!(
            modes.lookup_or_create(""),
            Err(InputError::InvalidModeName(_))
        ));
        let long = "x".repeat(MAX_MODE_NAME + 1);
        assert!(matches!(
            modes.lookup_or_create(&long),
            Err(InputError::InvalidModeName(_))
        ));
        assert!(modes.lookup_or_create(&"y".repeat(MAX_MODE_NAME)).is_ok());
    }

    #[test]
    fn capacity_is_enforced() {
        let mut modes = ModeRegistry::new();
        for i in modes.len()..MAX_MODES {
            modes.lookup_or_create(&format!("m{i}")).unwrap();
        }
        assert!(matches!(
            modes.lookup_or_create("overflow"),
            Err(InputError::ModeTableFull)
        ));
        // Existing names still resolve at capacity.
        assert_eq!(modes.lookup_or_create("m10").unwrap().index(), 10);
    }
}
