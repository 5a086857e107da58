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

//! NMEA derived events.
//!
//! The NMEA parser upstream classifies switch and status sentences from
//! external instruments (flap and speed-command switches, gear and airbrake
//! sensors) into these codes.

use super::named_events;

named_events! {
    /// Events classified from incoming NMEA sentences.
    Nmea {
        DownInFlapPos => "DOWN_IN_FLAP_POS",
        DownInFlapZero => "DOWN_IN_FLAP_ZERO",
        DownInFlapNeg => "DOWN_IN_FLAP_NEG",
        DownInSc => "DOWN_IN_SC",
        DownInGearRetracted => "DOWN_IN_GEAR_RETRACTED",
        DownInAirbrakeNotLocked => "DOWN_IN_AIRBRAKENOTLOCKED",
        DownInAux => "DOWN_IN_AUX",
        DownInAck => "DOWN_IN_ACK",
        DownInRep => "DOWN_IN_REP",
        DownInStall => "DOWN_IN_STALL",
        DownInCircling => "DOWN_IN_CIRCLING",
        UpInFlapPos => "UP_IN_FLAP_POS",
        UpInFlapZero => "UP_IN_FLAP_ZERO",
        UpInFlapNeg => "UP_IN_FLAP_NEG",
        UpInSc => "UP_IN_SC",
        UpInGearRetracted => "UP_IN_GEAR_RETRACTED",
        UpInAirbrakeNotLocked => "UP_IN_AIRBRAKENOTLOCKED",
        UpInAux => "UP_IN_AUX",
        UpInAck => "UP_IN_ACK",
        UpInRep => "UP_IN_REP",
        UpInStall => "UP_IN_STALL",
        UpInCircling => "UP_IN_CIRCLING",
    }
}
