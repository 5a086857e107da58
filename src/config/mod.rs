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

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub(crate) const CONFIG_NAME: &str = "glide-input";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,

    /// Input file overlaid on the built-in bindings at start up.
    pub input_file: Option<PathBuf>,

    /// Ticks a menu stays up without input.
    pub menu_timeout_ticks: u32,
    pub tick_interval_ms: u64,

    /// Feed a scripted flight's glide computer and NMEA events into the
    /// router.
    pub simulate_glide_computer: bool,

    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            input_file: None,
            menu_timeout_ticks: glide_input::router::DEFAULT_MENU_TIMEOUT,
            tick_interval_ms: 250,
            simulate_glide_computer: true,
            log_file: None,
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

/// Directory holding the configuration file, if the platform has one.
pub fn config_dir() -> Option<PathBuf> {
    confy::get_configuration_file_path(CONFIG_NAME, None)
        .ok()
        .and_then(|path| path.parent().map(PathBuf::from))
}
