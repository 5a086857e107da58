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

//! Input file loader.
//!
//! Input files are line oriented. A record is a run of `key=value` lines
//! ended by a blank line:
//!
//! ```text
//! mode=default pan
//! type=key
//! data=UP
//! event=Zoom in
//! label=Zoom\nIn
//! location=2
//! ```
//!
//! `mode` may list several modes; the record is applied to each of them.
//! `type` is one of `key`, `gce`, `ne` or `label`, and `data` names the key
//! or event to bind. Every `event` line appends one action to the record's
//! chain, and the chain runs in the order the lines were written. A first
//! line of `#CLEAR` drops all existing actions, bindings and labels before
//! the file is applied.
//!
//! Loading is lenient: anything that cannot be understood is reported as a
//! [`ConfigWarning`] and skipped. Only running out of action slots aborts.

mod defaults;
mod record;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    sync::Arc,
};

use crate::{
    actions::ActionKind,
    error::{ConfigWarning, InputError, WarningKind},
    model::{InputTables, MENU_CAPACITY, parse_label},
    triggers::{Gce, Nmea, TriggerKind, find_key},
};

pub use defaults::{DEFAULT_INPUT, apply_defaults};
use record::Record;

const CLEAR_DIRECTIVE: &str = "#CLEAR";

/// Summary of one load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records applied to at least one mode.
    pub records: usize,
    /// Actions appended to the action table.
    pub actions: usize,
    /// Whether the input started with `#CLEAR`.
    pub cleared: bool,
    pub warnings: Vec<ConfigWarning>,
}

/// Applies input lines to `tables`.
pub fn load_lines<I, S>(tables: &mut InputTables, lines: I) -> Result<LoadReport, InputError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut loader = Loader::new(tables);
    for line in lines {
        loader.feed(line.as_ref())?;
    }
    loader.finish()
}

/// Applies everything `reader` yields to `tables`.
pub fn load_reader<R: BufRead>(tables: &mut InputTables, reader: R) -> Result<LoadReport, InputError> {
    let mut loader = Loader::new(tables);
    for line in reader.lines() {
        let line = line.map_err(InputError::Read)?;
        loader.feed(&line)?;
    }
    loader.finish()
}

/// Applies the input file at `path` to `tables`.
pub fn load_file(tables: &mut InputTables, path: &Path) -> Result<LoadReport, InputError> {
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "loading input file");
    load_reader(tables, BufReader::new(file))
}

struct Loader<'a> {
    tables: &'a mut InputTables,
    record: Record,
    line: usize,
    report: LoadReport,
}

impl<'a> Loader<'a> {
    fn new(tables: &'a mut InputTables) -> Self {
        Self {
            tables,
            record: Record::default(),
            line: 0,
            report: LoadReport::default(),
        }
    }

    fn warn(&mut self, kind: WarningKind) {
        let warning = ConfigWarning {
            line: self.line,
            kind,
        };
        tracing::warn!("{warning}");
        self.report.warnings.push(warning);
    }

    fn feed(&mut self, raw: &str) -> Result<(), InputError> {
        self.line += 1;
        let line = raw.trim_end();

        if self.line == 1 && line == CLEAR_DIRECTIVE {
            self.tables.clear_bindings();
            self.report.cleared = true;
            tracing::info!("cleared all actions, bindings and labels");
        } else if line.is_empty() {
            self.apply_record();
        } else if line.starts_with('#') {
            // comment
        } else {
            match line.split_once('=') {
                Some((key, value)) if !key.is_empty() => self.assign(key, value)?,
                _ => self.warn(WarningKind::MalformedLine),
            }
        }

        Ok(())
    }

    fn finish(mut self) -> Result<LoadReport, InputError> {
        self.apply_record();

        tracing::info!(
            records = self.report.records,
            actions = self.report.actions,
            warnings = self.report.warnings.len(),
            "input loaded"
        );
        Ok(self.report)
    }

    fn assign(&mut self, key: &str, value: &str) -> Result<(), InputError> {
        match key {
            "mode" => self.record.mode = value.to_string(),
            "type" => self.record.kind = value.to_string(),
            "data" => self.record.data = value.to_string(),
            "label" => self.record.label = value.to_string(),
            "location" => match value.trim().parse::<usize>() {
                Ok(location) if location < MENU_CAPACITY => self.record.location = location,
                _ => {
                    self.record.location = 0;
                    self.warn(WarningKind::InvalidLocation(value.to_string()));
                }
            },
            "event" => self.add_event(value)?,
            _ => self.warn(WarningKind::UnknownField(key.to_string())),
        }

        Ok(())
    }

    fn add_event(&mut self, value: &str) -> Result<(), InputError> {
        let Some((name, argument)) = split_event(value) else {
            self.warn(WarningKind::EmptyEvent);
            return Ok(());
        };

        let Some(kind) = ActionKind::from_name(name) else {
            self.warn(WarningKind::UnknownAction(name.to_string()));
            return Ok(());
        };

        let line = self.line;
        let id = self
            .tables
            .actions
            .push(kind, argument)
            .inspect_err(|e| tracing::error!(line, "{e}"))?;
        if self.record.last.is_none() {
            self.record.first = id;
        } else {
            self.tables.actions.link(self.record.last, id)?;
        }
        self.record.last = id;
        self.report.actions += 1;

        Ok(())
    }

    fn binding(&mut self) -> Option<(TriggerKind, u32)> {
        let data = self.record.data.clone();
        let (kind, code) = match self.record.kind.as_str() {
            "key" => (TriggerKind::Key, find_key(&data)),
            "gce" => (TriggerKind::GlideComputer, Gce::from_name(&data).map(Gce::code)),
            "ne" => (TriggerKind::Nmea, Nmea::from_name(&data).map(Nmea::code)),
            "label" => return None,
            other => {
                let other = other.to_string();
                self.warn(WarningKind::UnknownType(other));
                return None;
            }
        };

        if code.is_none() {
            self.warn(match kind {
                TriggerKind::Key => WarningKind::UnknownKey(data),
                TriggerKind::GlideComputer => WarningKind::UnknownGlideComputerEvent(data),
                TriggerKind::Nmea => WarningKind::UnknownNmeaEvent(data),
            });
        }

        code.map(|code| (kind, code))
    }

    fn apply_record(&mut self) {
        if self.record.mode.is_empty() {
            self.record = Record::default();
            return;
        }

        let binding = self.binding();
        let record = std::mem::take(&mut self.record);
        let mut label: Option<Arc<str>> = None;
        let mut applied = false;

        for name in record.mode.split(' ').filter(|n| !n.is_empty()) {
            let mode = match self.tables.modes.lookup_or_create(name) {
                Ok(mode) => mode,
                Err(e) => {
                    self.warn(WarningKind::ModeRejected {
                        name: name.to_string(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            if record.location > 0 {
                let text = label.get_or_insert_with(|| Arc::from(parse_label(&record.label)));
                let text = (!text.is_empty()).then(|| Arc::clone(text));
                self.tables
                    .menus
                    .add(mode, text, record.location, record.first);
            }

            if let Some((kind, code)) = binding {
                self.tables.triggers.bind(kind, mode, code, record.first);
            }

            applied = true;
        }

        if applied {
            self.report.records += 1;
            tracing::debug!(
                modes = %record.mode,
                action = %record.first,
                "applied record"
            );
        }
    }
}

/// Splits an `event` value into the action name and its argument.
///
/// The argument is whatever follows the first space, cut short at the first
/// character outside `[A-Za-z0-9 /().,]`.
fn split_event(value: &str) -> Option<(&str, &str)> {
    let (name, rest) = value.split_once(' ').unwrap_or((value, ""));
    if name.is_empty() {
        return None;
    }

    let rest = rest.trim_start();
    let end = rest
        .find(|c: char| !is_argument_char(c))
        .unwrap_or(rest.len());

    Some((name, &rest[..end]))
}

fn is_argument_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '/' | '(' | ')' | '.' | ',')
}

#[cfg(test)]
mod tests;
