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

//! Trigger sources and their symbolic names.
//!
//! A trigger is identified by its [`TriggerKind`] and a small integer code.
//! Key codes come from the hardware (see [`keys`]); glide computer and NMEA
//! codes are the discriminants of the closed enumerations [`Gce`] and
//! [`Nmea`].

/// Declares a closed event enumeration together with its name table.
macro_rules! named_events {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal,)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];
            pub const COUNT: usize = Self::ALL.len();

            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|e| e.name() == name)
            }

            pub fn from_code(code: u32) -> Option<Self> {
                Self::ALL.get(code as usize).copied()
            }

            pub const fn code(self) -> u32 {
                self as u32
            }
        }
    };
}

pub(crate) use named_events;

pub mod gce;
pub mod keys;
pub mod nmea;

pub use gce::Gce;
pub use keys::{MAX_KEY, find_key};
pub use nmea::Nmea;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    Key,
    GlideComputer,
    Nmea,
}

impl TriggerKind {
    pub const ALL: [TriggerKind; 3] = [Self::Key, Self::GlideComputer, Self::Nmea];

    /// Number of distinct codes of this kind.
    pub const fn code_count(self) -> usize {
        match self {
            Self::Key => MAX_KEY,
            Self::GlideComputer => Gce::COUNT,
            Self::Nmea => Nmea::COUNT,
        }
    }

    /// The record `type` used for this kind in the input file.
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Key => "key",
            Self::GlideComputer => "gce",
            Self::Nmea => "ne",
        }
    }
}
