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

//! Log file setup.
//!
//! The terminal belongs to the TUI, so log output only goes to a file,
//! written on a background thread.
//!
//! The filter comes from `GLIDE_INPUT_LOG`, then `RUST_LOG`, and defaults to
//! `info`.

use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_ENV: &str = "GLIDE_INPUT_LOG";
const LOG_FILE_NAME: &str = "glide-input.log";

/// Keeps the background writer alive; dropping it flushes the log file.
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

pub fn init(log_file: Option<PathBuf>) -> Result<LogGuard> {
    let log_file = log_file.unwrap_or_else(default_log_file);
    let log_dir = log_file
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = log_file
        .file_name()
        .context("Log file path has no file name")?;

    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_filter(create_filter()?);

    Registry::default()
        .with(file_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(LogGuard {
        _file_guard: file_guard,
        log_file,
    })
}

fn default_log_file() -> PathBuf {
    crate::config::config_dir()
        .unwrap_or_else(env::temp_dir)
        .join(LOG_FILE_NAME)
}

fn create_filter() -> Result<EnvFilter> {
    let directives = env::var(LOG_ENV)
        .or_else(|_| env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());

    EnvFilter::try_new(&directives).with_context(|| format!("Invalid log filter {directives:?}"))
}
