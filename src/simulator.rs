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

//! Scripted glide computer.
//!
//! Replays a short flight's worth of glide computer and NMEA events into the
//! router's queue from a background thread, standing in for the sensor
//! threads of a real instrument.

use std::{thread, time::Duration};

use glide_input::{Gce, Nmea, QueueHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SimEvent {
    GlideComputer(Gce),
    Nmea(Nmea),
}

pub(crate) const FLIGHT: &[SimEvent] = &[
    SimEvent::GlideComputer(Gce::StartupSimulator),
    SimEvent::GlideComputer(Gce::Takeoff),
    SimEvent::GlideComputer(Gce::FlightModeClimb),
    SimEvent::Nmea(Nmea::DownInSc),
    SimEvent::GlideComputer(Gce::FlightModeCruise),
    SimEvent::GlideComputer(Gce::TaskStart),
    SimEvent::GlideComputer(Gce::FlarmTraffic),
    SimEvent::Nmea(Nmea::DownInAck),
    SimEvent::Nmea(Nmea::UpInSc),
    SimEvent::GlideComputer(Gce::FlightModeClimb),
    SimEvent::GlideComputer(Gce::TaskFinish),
    SimEvent::GlideComputer(Gce::Landing),
];

/// Queues `event`. Returns false if the queue was full.
pub(crate) fn push(queue: &QueueHandle, event: SimEvent) -> bool {
    match event {
        SimEvent::GlideComputer(gce) => queue.push_glide_computer(gce.code()),
        SimEvent::Nmea(nmea) => queue.push_nmea(nmea.code()),
    }
}

/// Loops over [`FLIGHT`] forever, one event per `interval`.
pub(crate) fn spawn(queue: QueueHandle, interval: Duration) {
    thread::spawn(move || {
        for event in FLIGHT.iter().cycle() {
            thread::sleep(interval);
            if !push(&queue, *event) {
                tracing::warn!(?event, "simulated event dropped");
            }
        }
    });
}
