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

use std::{io::Cursor, sync::Arc};

use super::*;
use crate::{
    model::{ActionId, MAX_ACTIONS, ModeId},
    triggers::keys::{KEY_APP1, KEY_F1, KEY_F2, KEY_UP},
};

fn load(tables: &mut InputTables, text: &str) -> LoadReport {
    load_lines(tables, text.lines()).unwrap()
}

fn key(tables: &InputTables, mode: ModeId, code: u32) -> ActionId {
    tables.triggers.resolve(TriggerKind::Key, mode, code)
}

#[test]
fn binds_a_key_record() {
    let mut tables = InputTables::new();
    let report = load(
        &mut tables,
        "mode=default\ntype=key\ndata=F1\nevent=Zoom in\n\n",
    );

    assert_eq!(report.records, 1);
    assert_eq!(report.actions, 1);
    assert!(report.warnings.is_empty());

    let id = key(&tables, ModeId::DEFAULT, KEY_F1);
    let action = tables.actions.get(id).unwrap();
    assert_eq!(action.kind, ActionKind::Zoom);
    assert_eq!(action.argument, "in");
}

#[test]
fn chain_runs_in_declaration_order() {
    let mut tables = InputTables::new();
    load(
        &mut tables,
        "mode=default\ntype=key\ndata=F1\nevent=Zoom in\nevent=Beep 1\nevent=Mode Menu\n\n",
    );

    let head = key(&tables, ModeId::DEFAULT, KEY_F1);
    let kinds: Vec<_> = tables
        .actions
        .chain(head)
        .into_iter()
        .filter_map(|id| tables.actions.get(id))
        .map(|a| a.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![ActionKind::Zoom, ActionKind::Beep, ActionKind::Mode]
    );
}

#[test]
fn record_applies_to_every_listed_mode() {
    let mut tables = InputTables::new();
    load(
        &mut tables,
        "mode=default Nav1 Nav2\ntype=key\ndata=APP1\nevent=Beep\nlabel=Beep\\nNow\nlocation=4\n\n",
    );

    let nav1 = tables.modes.lookup("Nav1").unwrap();
    let nav2 = tables.modes.lookup("Nav2").unwrap();
    let id = key(&tables, ModeId::DEFAULT, KEY_APP1);
    assert_eq!(tables.triggers.map(TriggerKind::Key).get(nav1, KEY_APP1), id);
    assert_eq!(tables.triggers.map(TriggerKind::Key).get(nav2, KEY_APP1), id);

    let first = tables.menus.menu(nav1).unwrap().get(4).unwrap();
    let second = tables.menus.menu(nav2).unwrap().get(4).unwrap();
    assert_eq!(first.label.as_deref(), Some("Beep\nNow"));
    assert_eq!(first.action, id);
    assert!(Arc::ptr_eq(
        first.label.as_ref().unwrap(),
        second.label.as_ref().unwrap()
    ));
}

#[test]
fn label_records_bind_nothing() {
    let mut tables = InputTables::new();
    let report = load(
        &mut tables,
        "mode=Menu\ntype=label\nevent=Null\nlabel=Menu\nlocation=0\n\nmode=Menu\ntype=label\nlabel=Info\nlocation=6\n\n",
    );

    assert_eq!(report.records, 2);
    assert!(report.warnings.is_empty());
    let slot = tables.menus.menu(ModeId::MENU).unwrap().get(6).unwrap();
    assert_eq!(slot.label.as_deref(), Some("Info"));
    assert!(!slot.defined());
}

#[test]
fn event_argument_stops_at_disallowed_characters() {
    assert_eq!(split_event("Zoom in"), Some(("Zoom", "in")));
    assert_eq!(split_event("Setup Basic/Wind (1.5),x"), Some(("Setup", "Basic/Wind (1.5),x")));
    assert_eq!(split_event("Beep 1;rm"), Some(("Beep", "1")));
    assert_eq!(split_event("Status"), Some(("Status", "")));
    assert_eq!(split_event(""), None);
    assert_eq!(split_event(" in"), None);
}

#[test]
fn clear_resets_bindings_labels_and_actions() {
    let mut tables = InputTables::new();
    load(
        &mut tables,
        "mode=default\ntype=key\ndata=F1\nevent=Zoom in\nlabel=Zoom\nlocation=2\n\n\
         mode=default\ntype=ne\ndata=DOWN_IN_SC\nevent=FlightMode cruise\n\n",
    );
    let nav = tables.modes.lookup_or_create("Nav1").unwrap();

    let report = load(
        &mut tables,
        "#CLEAR\nmode=default\ntype=key\ndata=F2\nevent=Beep\n\n",
    );

    assert!(report.cleared);
    assert!(key(&tables, ModeId::DEFAULT, KEY_F1).is_none());
    assert!(!key(&tables, ModeId::DEFAULT, KEY_F2).is_none());
    assert!(
        tables
            .triggers
            .resolve(TriggerKind::Nmea, ModeId::DEFAULT, Nmea::DownInSc.code())
            .is_none()
    );
    assert!(tables.menus.menu(ModeId::DEFAULT).unwrap().get(2).unwrap().label.is_none());
    assert_eq!(tables.actions.len(), 2);
    assert_eq!(tables.modes.lookup("Nav1"), Some(nav));
}

#[test]
fn clear_only_counts_on_the_first_line() {
    let mut tables = InputTables::new();
    load(&mut tables, "mode=default\ntype=key\ndata=F1\nevent=Beep\n\n");
    let report = load(&mut tables, "# comment\n#CLEAR\n");

    assert!(!report.cleared);
    assert!(!key(&tables, ModeId::DEFAULT, KEY_F1).is_none());
}

#[test]
fn final_record_without_blank_line_is_applied() {
    let mut tables = InputTables::new();
    let report = load(&mut tables, "mode=default\ntype=key\ndata=UP\nevent=Zoom in");

    assert_eq!(report.records, 1);
    assert!(!key(&tables, ModeId::DEFAULT, KEY_UP).is_none());
}

#[test]
fn crlf_input_is_accepted() {
    let mut tables = InputTables::new();
    let input = "mode=default\r\ntype=gce\r\ndata=TASK_START\r\nevent=Beep 2\r\n\r\n";
    let report = load_reader(&mut tables, Cursor::new(input)).unwrap();

    assert!(report.warnings.is_empty());
    let id = tables
        .triggers
        .resolve(TriggerKind::GlideComputer, ModeId::DEFAULT, Gce::TaskStart.code());
    assert_eq!(tables.actions.get(id).unwrap().argument, "2");
}

#[test]
fn problems_become_warnings_with_line_numbers() {
    let mut tables = InputTables::new();
    let report = load(
        &mut tables,
        "mode=default\n\
         type=key\n\
         data=NOSUCHKEY\n\
         event=Frobnicate\n\
         event=Beep\n\
         colour=red\n\
         location=99\n\
         just text\n\
         \n\
         mode=default\n\
         type=joystick\n\
         data=X\n\
         event=Beep\n\
         \n\
         mode=default\n\
         type=gce\n\
         data=NOPE\n\
         event=Beep\n",
    );

    let kinds: Vec<_> = report
        .warnings
        .iter()
        .map(|w| (w.line, w.kind.clone()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (4, WarningKind::UnknownAction("Frobnicate".into())),
            (6, WarningKind::UnknownField("colour".into())),
            (7, WarningKind::InvalidLocation("99".into())),
            (8, WarningKind::MalformedLine),
            (9, WarningKind::UnknownKey("NOSUCHKEY".into())),
            (14, WarningKind::UnknownType("joystick".into())),
            (18, WarningKind::UnknownGlideComputerEvent("NOPE".into())),
        ]
    );
    // Unknown action is skipped but the rest of the record survives.
    assert_eq!(report.actions, 3);
}

#[test]
fn record_without_mode_is_discarded() {
    let mut tables = InputTables::new();
    let report = load(&mut tables, "type=key\ndata=F1\nevent=Beep\n\nmode=default\n\n");

    assert_eq!(report.records, 1);
    assert!(key(&tables, ModeId::DEFAULT, KEY_F1).is_none());
}

#[test]
fn overlong_mode_name_is_skipped() {
    let mut tables = InputTables::new();
    let long = "x".repeat(40);
    let report = load(
        &mut tables,
        &format!("mode={long} default\ntype=key\ndata=F1\nevent=Beep\n\n"),
    );

    assert!(matches!(
        report.warnings[0].kind,
        WarningKind::ModeRejected { .. }
    ));
    assert!(!key(&tables, ModeId::DEFAULT, KEY_F1).is_none());
}

#[test]
fn running_out_of_actions_is_fatal() {
    let mut tables = InputTables::new();
    let mut text = String::from("mode=default\ntype=key\ndata=F1\n");
    for _ in 0..MAX_ACTIONS {
        text.push_str("event=Beep\n");
    }

    assert!(matches!(
        load_lines(&mut tables, text.lines()),
        Err(InputError::ActionTableFull)
    ));
}

#[test]
fn defaults_load_cleanly() {
    let mut tables = InputTables::new();
    let report = apply_defaults(&mut tables).unwrap();

    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    assert!(report.records > 0);
    assert!(key(&tables, ModeId::DEFAULT, KEY_F1).is_none());
    assert!(key(&tables, ModeId::DEFAULT, KEY_F2).is_none());
    assert!(!key(&tables, ModeId::MENU, KEY_APP1).is_none());
}

#[test]
fn missing_file_is_an_open_error() {
    let mut tables = InputTables::new();
    let err = load_file(&mut tables, Path::new("/nonexistent/glide-input.xci")).unwrap_err();
    assert!(matches!(err, InputError::Open { .. }));
}
