//! Event ledger ownership boundary.
//!
//! # Responsibility
//! - Own the only mutable collection of recorded events.
//! - Funnel every write through validated `record_event` calls.

pub mod event_ledger;
