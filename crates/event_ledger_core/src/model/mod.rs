//! Domain model for recorded calendar events.
//!
//! # Responsibility
//! - Define canonical data structures used by the ledger and its adapters.
//!
//! # Invariants
//! - Every stored event carries a validated date and a non-blank description.
//! - Events are immutable once constructed.

pub mod event;
