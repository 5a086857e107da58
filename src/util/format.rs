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

/// Formats a MacCready setting held in tenths of a metre per second.
///
/// ```text
/// format_mac_cready(15) == "1.5 m/s"
/// ```
pub(crate) fn format_mac_cready(tenths: u32) -> String {
    format!("{}.{} m/s", tenths / 10, tenths % 10)
}
