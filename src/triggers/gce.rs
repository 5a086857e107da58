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

//! Glide computer events.
//!
//! These are raised by the flight computer itself (flight mode changes,
//! task progress, traffic, start-up) rather than by the pilot.

use super::named_events;

named_events! {
    /// Events generated internally by the glide computer.
    Gce {
        CommportRestart => "COMMPORT_RESTART",
        FlarmNoTraffic => "FLARM_NOTRAFFIC",
        FlarmTraffic => "FLARM_TRAFFIC",
        FlightModeClimb => "FLIGHTMODE_CLIMB",
        FlightModeCruise => "FLIGHTMODE_CRUISE",
        FlightModeFinalGlide => "FLIGHTMODE_FINALGLIDE",
        FlightModeFinalGlideTerrain => "FLIGHTMODE_FINALGLIDE_TERRAIN",
        FlightModeFinalGlideAbove => "FLIGHTMODE_FINALGLIDE_ABOVE",
        FlightModeFinalGlideBelow => "FLIGHTMODE_FINALGLIDE_BELOW",
        LandableUnreachable => "LANDABLE_UNREACHABLE",
        StartupReal => "STARTUP_REAL",
        StartupSimulator => "STARTUP_SIMULATOR",
        Takeoff => "TAKEOFF",
        Landing => "LANDING",
        TaskNextWaypoint => "TASK_NEXTWAYPOINT",
        TaskStart => "TASK_START",
        TaskFinish => "TASK_FINISH",
        ArmReady => "ARM_READY",
        TeamPosReached => "TEAM_POS_REACHED",
        WaypointArrival => "WAYPOINT_ARRIVAL",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_dense_and_ordered() {
        for (i, gce) in Gce::ALL.iter().enumerate() {
            assert_eq!(gce.code() as usize, i);
            assert_eq!(Gce::from_code(i as u32), Some(*gce));
        }
        assert_eq!(Gce::from_code(Gce::COUNT as u32), None);
    }

    #[test]
    fn names_resolve_exactly() {
        assert_eq!(Gce::from_name("TASK_START"), Some(Gce::TaskStart));
        assert_eq!(Gce::from_name("task_start"), None);
        assert_eq!(Gce::from_name("GCE_TASK_START"), None);
    }
}
