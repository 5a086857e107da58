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

//! Cross-thread event queue.
//!
//! Glide computer and NMEA events are produced on sensor threads but must be
//! executed on the consumer thread that owns the router. Producers push codes
//! into two small fixed arrays behind one mutex; the consumer periodically
//! takes both arrays in a single critical section and dispatches what it got
//! with the lock released.
//!
//! The queue is bounded on purpose. When every slot is taken the new event is
//! dropped rather than blocking the producer.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::triggers::TriggerKind;

/// Slots per event kind.
pub const QUEUE_CAPACITY: usize = 10;

const EMPTY: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slots([i32; QUEUE_CAPACITY]);

impl Slots {
    const fn empty() -> Self {
        Self([EMPTY; QUEUE_CAPACITY])
    }

    fn push(&mut self, code: i32) -> bool {
        match self.0.iter_mut().find(|slot| **slot == EMPTY) {
            Some(slot) => {
                *slot = code;
                true
            }
            None => false,
        }
    }

    fn codes(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().filter(|c| **c != EMPTY).map(|c| *c as u32)
    }
}

#[derive(Debug)]
struct Pending {
    glide_computer: Slots,
    nmea: Slots,
}

/// Codes captured by [`EventQueue::take`], in dispatch order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drained {
    glide_computer: Slots,
    nmea: Slots,
}

impl Drained {
    /// Glide computer events first, then NMEA events, each in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (TriggerKind, u32)> + '_ {
        self.glide_computer
            .codes()
            .map(|c| (TriggerKind::GlideComputer, c))
            .chain(self.nmea.codes().map(|c| (TriggerKind::Nmea, c)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

#[derive(Debug)]
pub struct EventQueue {
    pending: Mutex<Pending>,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(Pending {
                glide_computer: Slots::empty(),
                nmea: Slots::empty(),
            }),
        }
    }

    // A producer that panicked mid-push cannot leave the arrays half written,
    // so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Pending> {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Queues `code` for the consumer. Returns false if the event was dropped.
    pub fn push(&self, kind: TriggerKind, code: u32) -> bool {
        let Ok(code) = i32::try_from(code) else {
            tracing::debug!(?kind, code, "event code out of range, dropped");
            return false;
        };

        let mut pending = self.lock();
        let slots = match kind {
            TriggerKind::GlideComputer => &mut pending.glide_computer,
            TriggerKind::Nmea => &mut pending.nmea,
            TriggerKind::Key => {
                tracing::debug!(code, "keys are not queued");
                return false;
            }
        };

        let queued = slots.push(code);
        drop(pending);

        if !queued {
            tracing::debug!(?kind, code, "event queue full, dropped");
        }
        queued
    }

    /// Empties both arrays and returns what they held.
    pub fn take(&self) -> Drained {
        let mut pending = self.lock();
        Drained {
            glide_computer: std::mem::replace(&mut pending.glide_computer, Slots::empty()),
            nmea: std::mem::replace(&mut pending.nmea, Slots::empty()),
        }
    }

    pub fn clear(&self) {
        let _ = self.take();
    }
}

/// Cloneable producer handle onto a router's [`EventQueue`].
#[derive(Debug, Clone, Default)]
pub struct QueueHandle(Arc<EventQueue>);

impl QueueHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_glide_computer(&self, code: u32) -> bool {
        self.0.push(TriggerKind::GlideComputer, code)
    }

    pub fn push_nmea(&self, code: u32) -> bool {
        self.0.push(TriggerKind::Nmea, code)
    }

    pub(crate) fn queue(&self) -> &EventQueue {
        &self.0
    }
}
