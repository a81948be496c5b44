//! In-memory event ledger.
//!
//! # Responsibility
//! - Validate proposed events and append them in call order.
//! - Hand out snapshots that later appends cannot change.
//!
//! # Invariants
//! - Validation runs before the lock is taken; a failed call never mutates.
//! - Each successful `record_event` performs exactly one push.
//! - Stored events are never edited or removed.

use crate::model::event::{Event, EventDate, EventValidationError};
use log::{info, warn};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Ordered, append-only collection of recorded events.
///
/// Share it between threads with `Arc<EventLedger>`; appends are serialized
/// by an internal mutex.
#[derive(Debug, Default)]
pub struct EventLedger {
    events: Mutex<Vec<Event>>,
}

impl EventLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends one event, returning a copy of the stored record.
    ///
    /// # Errors
    /// - `InvalidDate` when `month`/`day`/`year` do not name a real day.
    /// - `InvalidDescription` when `description` is blank after trimming.
    pub fn record_event(
        &self,
        month: i64,
        day: i64,
        year: i64,
        description: &str,
    ) -> Result<Event, EventValidationError> {
        let event = match Self::validate(month, day, year, description) {
            Ok(event) => event,
            Err(err) => {
                warn!(
                    "event=event_rejected module=ledger status=error kind={} month={} day={} year={}",
                    err.kind(),
                    month,
                    day,
                    year
                );
                return Err(err);
            }
        };

        let mut events = self.lock();
        events.push(event.clone());
        let len = events.len();
        drop(events);

        info!(
            "event=event_recorded module=ledger status=ok date={} ledger_len={}",
            event.date(),
            len
        );
        Ok(event)
    }

    /// Returns every stored event in insertion order.
    pub fn list_events(&self) -> Vec<Event> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn validate(
        month: i64,
        day: i64,
        year: i64,
        description: &str,
    ) -> Result<Event, EventValidationError> {
        let date = EventDate::from_ymd(year, month, day)?;
        Event::new(description, date)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Event>> {
        // The only mutation is a single push, so a poisoned vector is still whole.
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
