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

//! The closed set of actions a trigger can fire.
//!
//! Input files refer to actions by name (`event=Zoom in`). The name is looked
//! up in [`ACTIONS`], a build-time table in the same shape as a console
//! command table. The router executes the [built-in](ActionKind::is_builtin)
//! kinds itself because they act on its own state; every other kind is
//! handed to the host's [`ActionHandler`] together with its argument.

use crate::router::InputRouter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    // Handled by the router.
    Null,
    Mode,
    ShowMenu,
    HideMenu,
    Pan,

    // Handled by the host.
    AbortTask,
    AddWaypoint,
    Analysis,
    ArmAdvance,
    AudioDeadband,
    AutoZoom,
    Ballast,
    Beep,
    Bugs,
    Calculator,
    Checklist,
    ClearAirspaceWarnings,
    ClearStatusMessages,
    DeclutterLabels,
    Exit,
    FlightMode,
    Logger,
    MacCready,
    MarkLocation,
    NearestWaypointDetails,
    PlaySound,
    RepeatStatusMessage,
    ScreenModes,
    SendNmea,
    Setup,
    SnailTrail,
    Sounds,
    Status,
    TerrainTopology,
    WaypointDetails,
    Wind,
    Zoom,
}

/// One entry of the action name table.
pub struct ActionDescriptor {
    pub name: &'static str,
    pub kind: ActionKind,
    pub brief: &'static str,
}

/// All actions that may appear in an input file.
pub static ACTIONS: &[ActionDescriptor] = &[
    ActionDescriptor { name: "Null", kind: ActionKind::Null, brief: "Do nothing" },
    ActionDescriptor { name: "NullEvent", kind: ActionKind::Null, brief: "Do nothing" },
    ActionDescriptor { name: "Mode", kind: ActionKind::Mode, brief: "Switch input mode" },
    ActionDescriptor { name: "ShowMenu", kind: ActionKind::ShowMenu, brief: "Show the button menu" },
    ActionDescriptor { name: "HideMenu", kind: ActionKind::HideMenu, brief: "Hide the button menu" },
    ActionDescriptor { name: "Pan", kind: ActionKind::Pan, brief: "Enter or leave pan mode" },
    ActionDescriptor { name: "AbortTask", kind: ActionKind::AbortTask, brief: "Abort or resume the task" },
    ActionDescriptor { name: "AddWaypoint", kind: ActionKind::AddWaypoint, brief: "Add a waypoint" },
    ActionDescriptor { name: "Analysis", kind: ActionKind::Analysis, brief: "Show flight analysis" },
    ActionDescriptor { name: "ArmAdvance", kind: ActionKind::ArmAdvance, brief: "Arm task advance" },
    ActionDescriptor { name: "AudioDeadband", kind: ActionKind::AudioDeadband, brief: "Adjust vario deadband" },
    ActionDescriptor { name: "AutoZoom", kind: ActionKind::AutoZoom, brief: "Toggle automatic zoom" },
    ActionDescriptor { name: "Ballast", kind: ActionKind::Ballast, brief: "Adjust water ballast" },
    ActionDescriptor { name: "Beep", kind: ActionKind::Beep, brief: "Sound a beep" },
    ActionDescriptor { name: "Bugs", kind: ActionKind::Bugs, brief: "Adjust bug degradation" },
    ActionDescriptor { name: "Calculator", kind: ActionKind::Calculator, brief: "Show task calculator" },
    ActionDescriptor { name: "Checklist", kind: ActionKind::Checklist, brief: "Show checklist" },
    ActionDescriptor { name: "ClearAirspaceWarnings", kind: ActionKind::ClearAirspaceWarnings, brief: "Acknowledge airspace warnings" },
    ActionDescriptor { name: "ClearStatusMessages", kind: ActionKind::ClearStatusMessages, brief: "Clear status messages" },
    ActionDescriptor { name: "DeclutterLabels", kind: ActionKind::DeclutterLabels, brief: "Cycle map label density" },
    ActionDescriptor { name: "Exit", kind: ActionKind::Exit, brief: "Shut down" },
    ActionDescriptor { name: "FlightMode", kind: ActionKind::FlightMode, brief: "Force a flight mode" },
    ActionDescriptor { name: "Logger", kind: ActionKind::Logger, brief: "Control the flight logger" },
    ActionDescriptor { name: "MacCready", kind: ActionKind::MacCready, brief: "Adjust MacCready setting" },
    ActionDescriptor { name: "MarkLocation", kind: ActionKind::MarkLocation, brief: "Mark current location" },
    ActionDescriptor { name: "NearestWaypointDetails", kind: ActionKind::NearestWaypointDetails, brief: "Show nearest waypoint" },
    ActionDescriptor { name: "PlaySound", kind: ActionKind::PlaySound, brief: "Play a sound file" },
    ActionDescriptor { name: "RepeatStatusMessage", kind: ActionKind::RepeatStatusMessage, brief: "Repeat last status message" },
    ActionDescriptor { name: "ScreenModes", kind: ActionKind::ScreenModes, brief: "Cycle screen layouts" },
    ActionDescriptor { name: "SendNMEA", kind: ActionKind::SendNmea, brief: "Send an NMEA sentence" },
    ActionDescriptor { name: "Setup", kind: ActionKind::Setup, brief: "Open a setup dialog" },
    ActionDescriptor { name: "SnailTrail", kind: ActionKind::SnailTrail, brief: "Adjust snail trail" },
    ActionDescriptor { name: "Sounds", kind: ActionKind::Sounds, brief: "Toggle sounds" },
    ActionDescriptor { name: "Status", kind: ActionKind::Status, brief: "Show status" },
    ActionDescriptor { name: "TerrainTopology", kind: ActionKind::TerrainTopology, brief: "Toggle terrain and topology" },
    ActionDescriptor { name: "WaypointDetails", kind: ActionKind::WaypointDetails, brief: "Show waypoint details" },
    ActionDescriptor { name: "Wind", kind: ActionKind::Wind, brief: "Adjust wind estimate" },
    ActionDescriptor { name: "Zoom", kind: ActionKind::Zoom, brief: "Zoom the map" },
];

impl ActionKind {
    /// Looks up an action by the name used in input files.
    pub fn from_name(name: &str) -> Option<Self> {
        ACTIONS.iter().find(|a| a.name == name).map(|a| a.kind)
    }

    pub fn name(self) -> &'static str {
        ACTIONS
            .iter()
            .find(|a| a.kind == self)
            .map(|a| a.name)
            .unwrap_or("?")
    }

    /// Whether the router executes this kind without involving the host.
    pub const fn is_builtin(self) -> bool {
        matches!(
            self,
            Self::Null | Self::Mode | Self::ShowMenu | Self::HideMenu | Self::Pan
        )
    }
}

/// Host side of action execution.
///
/// The router calls [`perform`](ActionHandler::perform) for every non
/// built-in action of a chain, on the consumer thread. The handler gets the
/// router back so that an action can switch modes or feed further triggers
/// synchronously.
pub trait ActionHandler {
    fn perform(&mut self, router: &mut InputRouter, action: ActionKind, argument: &str);
}

/// Handler for hosts that only use the built-in actions.
#[derive(Debug, Default, Clone, Copy)]
pub struct IgnoreActions;

impl ActionHandler for IgnoreActions {
    fn perform(&mut self, _router: &mut InputRouter, _action: ActionKind, _argument: &str) {}
}
