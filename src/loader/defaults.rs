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

//! Built-in input configuration, applied before any user file.

use crate::{error::InputError, model::InputTables};

use super::{LoadReport, load_lines};

pub const DEFAULT_INPUT: &str = r"# Default input configuration.

mode=default
type=key
data=APP1
event=ShowMenu
label=Menu
location=1

mode=default pan
type=key
data=UP
event=Zoom in

mode=default pan
type=key
data=DOWN
event=Zoom out

mode=default
type=key
data=RETURN
event=WaypointDetails select

mode=pan
type=key
data=ESCAPE
event=Pan off

mode=Menu
type=key
data=ESCAPE
event=HideMenu

mode=Menu
type=key
data=APP1
event=Mode Nav1
label=Nav
location=1

mode=Menu
type=key
data=APP2
event=Mode Display1
label=Display
location=2

mode=Menu
type=key
data=APP3
event=Mode Config1
label=Config
location=3

mode=Menu
type=key
data=APP4
event=Mode Info1
label=Info
location=4

mode=Menu
type=key
data=APP5
event=HideMenu
label=Cancel
location=5

mode=Nav1
type=key
data=APP1
event=MarkLocation
event=Beep 1
label=Mark\nDrop
location=1

mode=Nav1
type=key
data=APP2
event=Calculator
label=Task\nCalc
location=2

mode=Nav1
type=key
data=APP3
event=NearestWaypointDetails
label=Nearest
location=3

mode=Display1
type=key
data=APP1
event=Pan toggle
label=Pan
location=1

mode=Display1
type=key
data=APP2
event=SnailTrail toggle
label=Trail
location=2

mode=Display1
type=key
data=APP3
event=TerrainTopology toggle
label=Terrain
location=3

mode=Config1
type=key
data=APP1
event=MacCready up
label=MC\nUp
location=1

mode=Config1
type=key
data=APP2
event=MacCready down
label=MC\nDown
location=2

mode=Config1
type=key
data=APP3
event=Ballast up
label=Ballast
location=3

mode=Info1
type=key
data=APP1
event=Status all
label=Status
location=1

mode=Info1
type=key
data=APP2
event=Analysis
label=Analysis
location=2

mode=Info1
type=key
data=APP3
event=Checklist
label=Checklist
location=3

mode=Nav1 Display1 Config1 Info1
type=key
data=APP5
event=Mode default
label=Back
location=5

mode=default
type=gce
data=TASK_START
event=Beep 1

mode=default
type=gce
data=TAKEOFF
event=Logger start

mode=default
type=gce
data=LANDING
event=Logger stop

mode=default
type=gce
data=FLIGHTMODE_CLIMB
event=SnailTrail long

mode=default
type=gce
data=FLIGHTMODE_CRUISE
event=SnailTrail short

mode=default
type=gce
data=FLARM_TRAFFIC
event=Beep 2

mode=default
type=ne
data=DOWN_IN_SC
event=FlightMode cruise

mode=default
type=ne
data=UP_IN_SC
event=FlightMode climb

mode=default
type=ne
data=DOWN_IN_ACK
event=ClearAirspaceWarnings

mode=default
type=ne
data=DOWN_IN_REP
event=RepeatStatusMessage
";

/// Loads [`DEFAULT_INPUT`] into `tables`.
pub fn apply_defaults(tables: &mut InputTables) -> Result<LoadReport, InputError> {
    load_lines(tables, DEFAULT_INPUT.lines())
}
