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

//! Trigger resolution and action execution.

use crate::{
    actions::{ActionHandler, ActionKind},
    model::{ActionId, MENU_CAPACITY, ModeId},
    triggers::{Gce, Nmea, TriggerKind},
};

use super::InputRouter;

impl InputRouter {
    /// The action bound to `code` in `mode`, falling back to the default mode.
    pub fn resolve(&self, kind: TriggerKind, mode: ModeId, code: u32) -> ActionId {
        self.tables.triggers.resolve(kind, mode, code)
    }

    /// Runs the chain starting at `id`.
    ///
    /// The chain is read before its first step runs, so steps that reload the
    /// configuration do not change what the rest of this chain does.
    pub fn execute(&mut self, handler: &mut dyn ActionHandler, id: ActionId) {
        if id.is_none() {
            return;
        }

        let steps: Vec<(ActionKind, String)> = self
            .tables
            .actions
            .chain(id)
            .into_iter()
            .filter_map(|step| self.tables.actions.get(step))
            .map(|action| (action.kind, action.argument.clone()))
            .collect();

        for (kind, argument) in steps {
            self.menu_timeout = 0;
            tracing::debug!(action = kind.name(), argument = %argument, mode = %self.mode, "executing");

            match kind {
                ActionKind::Null => {}
                ActionKind::Mode => {
                    self.set_mode_by_name(&argument);
                }
                ActionKind::ShowMenu => self.show_menu(),
                ActionKind::HideMenu => self.hide_menu(),
                ActionKind::Pan => self.pan(&argument),
                _ => handler.perform(self, kind, &argument),
            }
        }
    }

    /// Handles a key press in the current mode. Returns whether the key was
    /// bound.
    pub fn process_key(&mut self, handler: &mut dyn ActionHandler, code: u32) -> bool {
        let mode = self.mode;
        let id = self.resolve(TriggerKind::Key, mode, code);
        if id.is_none() {
            return false;
        }

        let slot = self.menu(mode).and_then(|menu| {
            let slot = menu.find_by_action(id)?;
            menu.get(slot).map(|item| (slot, item.label.is_some()))
        });

        if let Some((slot, _)) = slot
            && !self.labels.is_enabled(slot)
        {
            tracing::debug!(code, slot, "key ignored, button disabled");
            return true;
        }

        self.execute(handler, id);

        if let Some((_, true)) = slot
            && self.mode == mode
        {
            self.draw_buttons();
        }

        true
    }

    /// Handles a press of on-screen button `slot` in the current mode.
    pub fn process_button(&mut self, handler: &mut dyn ActionHandler, slot: usize) -> bool {
        if slot >= MENU_CAPACITY {
            return false;
        }

        let mode = self.mode;
        let Some(item) = self.menu(mode).and_then(|menu| menu.get(slot)) else {
            return false;
        };
        if !item.defined() {
            return false;
        }
        let (id, labelled) = (item.action, item.label.is_some());

        self.execute(handler, id);

        if labelled && self.mode == mode {
            self.draw_buttons();
        }

        true
    }

    pub(super) fn dispatch_glide_computer(&mut self, handler: &mut dyn ActionHandler, code: u32) -> bool {
        if Gce::from_code(code).is_none() {
            return false;
        }
        self.dispatch_queued(handler, TriggerKind::GlideComputer, code)
    }

    pub(super) fn dispatch_nmea(&mut self, handler: &mut dyn ActionHandler, code: u32) -> bool {
        if Nmea::from_code(code).is_none() {
            return false;
        }
        self.dispatch_queued(handler, TriggerKind::Nmea, code)
    }

    // Queued events resolve in the mode current when they are drained, not
    // the one current when they were produced.
    fn dispatch_queued(&mut self, handler: &mut dyn ActionHandler, kind: TriggerKind, code: u32) -> bool {
        let id = self.resolve(kind, self.mode, code);
        tracing::debug!(kind = kind.type_name(), code, action = %id, "dispatching queued event");
        self.execute(handler, id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        actions::IgnoreActions,
        labels::NoLabels,
        router::testing::{Recorder, RecordingLabels},
        triggers::keys::{KEY_APP1, KEY_APP5, KEY_F1, KEY_F2, KEY_UP},
    };

    fn router(config: &str) -> InputRouter {
        let mut router = InputRouter::new(NoLabels).unwrap();
        router.load_lines(config.lines()).unwrap();
        router
    }

    #[test]
    fn bound_key_runs_its_action() {
        let mut router = router("mode=default\ntype=key\ndata=F1\nevent=Zoom in\n");
        let mut host = Recorder::default();

        assert!(router.process_key(&mut host, KEY_F1));
        assert_eq!(host.performed, vec![(ActionKind::Zoom, "in".to_string())]);
    }

    #[test]
    fn unbound_key_returns_false() {
        let mut router = router("");
        let mut host = Recorder::default();

        assert!(!router.process_key(&mut host, KEY_F2));
        assert!(host.performed.is_empty());
    }

    #[test]
    fn unbound_in_mode_falls_back_to_default() {
        let mut router = router("");
        let mut host = Recorder::default();
        router.set_mode(ModeId::MENU);

        // UP is only bound in default and pan.
        assert!(router.process_key(&mut host, KEY_UP));
        assert_eq!(host.performed, vec![(ActionKind::Zoom, "in".to_string())]);
    }

    #[test]
    fn chain_switches_mode_between_steps() {
        let mut router = router(
            "mode=default\ntype=key\ndata=F1\nevent=Beep 1\nevent=Mode Menu\nevent=Status\n",
        );

        struct ModeSpy(Vec<(ActionKind, ModeId)>);
        impl ActionHandler for ModeSpy {
            fn perform(&mut self, router: &mut InputRouter, action: ActionKind, _argument: &str) {
                self.0.push((action, router.mode()));
            }
        }

        let mut spy = ModeSpy(Vec::new());
        router.process_key(&mut spy, KEY_F1);
        assert_eq!(
            spy.0,
            vec![
                (ActionKind::Beep, ModeId::DEFAULT),
                (ActionKind::Status, ModeId::MENU),
            ]
        );
    }

    #[test]
    fn disabled_button_suppresses_its_key() {
        let labels = RecordingLabels::default();
        labels.disabled.borrow_mut().push(1);
        let mut router = InputRouter::new(labels).unwrap();
        let mut host = Recorder::default();
        router.set_mode(ModeId::MENU);

        // APP1 in Menu mode is bound to the button at slot 1.
        assert!(router.process_key(&mut host, KEY_APP1));
        assert_eq!(router.mode(), ModeId::MENU);
    }

    #[test]
    fn labelled_key_redraws_when_mode_is_unchanged() {
        let labels = RecordingLabels::default();
        let updates = labels.updates.clone();
        let mut router = InputRouter::new(labels).unwrap();
        router
            .load_lines(
                "mode=default\ntype=key\ndata=F1\nevent=Beep\nlabel=Beep\nlocation=3\n".lines(),
            )
            .unwrap();
        updates.borrow_mut().clear();

        router.process_key(&mut IgnoreActions, KEY_F1);
        let redrawn = updates.borrow();
        assert_eq!(redrawn.len(), MENU_CAPACITY);
        assert_eq!(redrawn[3], (3, Some("Beep".to_string())));
    }

    #[test]
    fn button_press_runs_slot_action() {
        let mut router = router("");
        let mut host = Recorder::default();
        router.show_menu();

        assert!(router.process_button(&mut host, 4));
        assert_eq!(router.mode_name(), "Info1");

        assert!(router.process_button(&mut host, 2));
        assert_eq!(host.performed, vec![(ActionKind::Analysis, String::new())]);

        assert!(!router.process_button(&mut host, 9));
        assert!(!router.process_button(&mut host, MENU_CAPACITY));

        assert!(router.process_button(&mut host, 5));
        assert_eq!(router.mode(), ModeId::DEFAULT);
    }

    #[test]
    fn submenu_key_chain_runs_in_order() {
        let mut router = router("");
        let mut host = Recorder::default();
        router.show_menu();
        router.process_key(&mut host, KEY_APP1);
        assert_eq!(router.mode_name(), "Nav1");

        router.process_key(&mut host, KEY_APP1);
        assert_eq!(
            host.performed,
            vec![
                (ActionKind::MarkLocation, String::new()),
                (ActionKind::Beep, "1".to_string()),
            ]
        );

        router.process_key(&mut host, KEY_APP5);
        assert_eq!(router.mode(), ModeId::DEFAULT);
    }

    #[test]
    fn out_of_range_queued_codes_are_ignored() {
        let mut router = router("");
        let mut host = Recorder::default();
        assert!(!router.dispatch_glide_computer(&mut host, Gce::COUNT as u32));
        assert!(!router.dispatch_nmea(&mut host, Nmea::COUNT as u32));
        assert!(router.dispatch_nmea(&mut host, Nmea::DownInAck.code()));
        assert_eq!(
            host.performed,
            vec![(ActionKind::ClearAirspaceWarnings, String::new())]
        );
    }
}
