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

use std::{cell::RefCell, rc::Rc};

use glide_input::{
    ActionHandler, ActionId, ActionKind, ButtonLabels, InputRouter, ModeId, NoLabels,
    TriggerKind,
    triggers::keys::{KEY_F1, KEY_F2, KEY_F3, KEY_UP},
};

#[derive(Default)]
struct Recorder {
    performed: Vec<(ActionKind, String)>,
}

impl ActionHandler for Recorder {
    fn perform(&mut self, _router: &mut InputRouter, action: ActionKind, argument: &str) {
        self.performed.push((action, argument.to_string()));
    }
}

#[derive(Clone, Default)]
struct CountingLabels {
    updates: Rc<RefCell<usize>>,
}

impl ButtonLabels for CountingLabels {
    fn set_label_text(&mut self, _slot: usize, _text: Option<&str>) {
        *self.updates.borrow_mut() += 1;
    }

    fn is_enabled(&self, _slot: usize) -> bool {
        true
    }
}

fn router_with(config: &str) -> InputRouter {
    let mut router = InputRouter::new(NoLabels).unwrap();
    let report = router.load_lines(config.lines()).unwrap();
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    router
}

#[test]
fn null_event_example() {
    let mut router = router_with("mode=default\ntype=key\ndata=F1\nevent=NullEvent\n\n");
    let mut host = Recorder::default();

    let id = router.resolve(TriggerKind::Key, ModeId::DEFAULT, KEY_F1);
    assert_eq!(router.actions().get(id).unwrap().kind, ActionKind::Null);

    assert!(router.process_key(&mut host, KEY_F1));
    assert!(host.performed.is_empty());
    assert!(!router.process_key(&mut host, KEY_F2));
}

#[test]
fn resolve_after_bind_and_fallback() {
    let mut router = router_with(
        "mode=default\ntype=key\ndata=F1\nevent=Zoom in\n\n\
         mode=Nav1\ntype=key\ndata=F3\nevent=Zoom out\n\n",
    );
    let nav1 = router.modes().lookup("Nav1").unwrap();

    let f1 = router.resolve(TriggerKind::Key, ModeId::DEFAULT, KEY_F1);
    let f3 = router.resolve(TriggerKind::Key, nav1, KEY_F3);
    assert!(!f1.is_none());
    assert!(!f3.is_none());
    assert_eq!(router.resolve(TriggerKind::Key, nav1, KEY_F1), f1);
    assert!(router.resolve(TriggerKind::Key, ModeId::DEFAULT, KEY_F3).is_none());

    let mut host = Recorder::default();
    router.set_mode(nav1);
    router.process_key(&mut host, KEY_F1);
    router.process_key(&mut host, KEY_F3);
    assert_eq!(
        host.performed,
        vec![
            (ActionKind::Zoom, "in".to_string()),
            (ActionKind::Zoom, "out".to_string()),
        ]
    );
}

#[test]
fn executing_nothing_is_a_no_op() {
    let labels = CountingLabels::default();
    let updates = labels.updates.clone();
    let mut router = InputRouter::new(labels).unwrap();
    let before = *updates.borrow();
    let mut host = Recorder::default();

    router.execute(&mut host, ActionId::NONE);
    router.execute(&mut host, ActionId::NONE);

    assert!(host.performed.is_empty());
    assert_eq!(router.mode(), ModeId::DEFAULT);
    assert_eq!(*updates.borrow(), before);
}

#[test]
fn chain_runs_once_in_order() {
    let mut router = router_with(
        "mode=default\ntype=key\ndata=F1\nevent=Beep 1\nevent=Beep 2\nevent=Beep 3\nevent=Beep 4\n\n",
    );
    let mut host = Recorder::default();

    router.process_key(&mut host, KEY_F1);
    let arguments: Vec<_> = host.performed.iter().map(|(_, a)| a.as_str()).collect();
    assert_eq!(arguments, vec!["1", "2", "3", "4"]);
}

#[test]
fn clear_removes_default_bindings() {
    let mut router = InputRouter::new(NoLabels).unwrap();
    assert!(!router.resolve(TriggerKind::Key, ModeId::DEFAULT, KEY_UP).is_none());

    let report = router.load_lines(["#CLEAR", "mode=Menu", "type=label", "label=Empty", "location=1"]).unwrap();
    assert!(report.cleared);

    for kind in TriggerKind::ALL {
        for code in 0..kind.code_count() as u32 {
            assert!(router.resolve(kind, ModeId::DEFAULT, code).is_none());
        }
    }
    assert_eq!(router.actions().len(), 1);
}

#[test]
fn same_mode_causes_no_label_traffic() {
    let labels = CountingLabels::default();
    let updates = labels.updates.clone();
    let mut router = InputRouter::new(labels).unwrap();

    let before = *updates.borrow();
    router.set_mode(ModeId::DEFAULT);
    assert!(!router.set_mode_by_name("NoSuchMode"));
    assert_eq!(*updates.borrow(), before);

    router.set_mode(ModeId::PAN);
    let after_switch = *updates.borrow();
    assert!(after_switch > before);
    router.set_mode(ModeId::PAN);
    assert_eq!(*updates.borrow(), after_switch);
}

/// Host that re-enters the router from inside an action.
struct Reentrant {
    performed: Vec<(ActionKind, ModeId)>,
}

impl ActionHandler for Reentrant {
    fn perform(&mut self, router: &mut InputRouter, action: ActionKind, _argument: &str) {
        self.performed.push((action, router.mode()));
        if action == ActionKind::Setup {
            router.set_mode(ModeId::PAN);
            // Pressed in pan mode, where F3 has its own binding.
            router.process_key(self, KEY_F3);
        }
    }
}

#[test]
fn handlers_may_reenter_the_router() {
    let mut router = router_with(
        "mode=default\ntype=key\ndata=F1\nevent=Setup\nevent=Status\n\n\
         mode=default\ntype=key\ndata=F3\nevent=Wind\n\n\
         mode=pan\ntype=key\ndata=F3\nevent=Analysis\n\n",
    );
    let mut host = Reentrant { performed: Vec::new() };

    assert!(router.process_key(&mut host, KEY_F1));
    assert_eq!(
        host.performed,
        vec![
            (ActionKind::Setup, ModeId::DEFAULT),
            (ActionKind::Analysis, ModeId::PAN),
            (ActionKind::Status, ModeId::PAN),
        ]
    );
}

#[test]
fn mode_action_mid_chain_affects_later_keys() {
    let mut router = router_with(
        "mode=default\ntype=key\ndata=F1\nevent=Beep\nevent=Mode Nav1\n\n\
         mode=Nav1\ntype=key\ndata=F2\nevent=Calculator\n\n",
    );
    let mut host = Recorder::default();

    router.process_key(&mut host, KEY_F1);
    assert_eq!(router.mode_name(), "Nav1");
    assert!(router.process_key(&mut host, KEY_F2));
    assert_eq!(host.performed.last().unwrap().0, ActionKind::Calculator);
}
