//! Tool-call adapters over the event ledger.
//!
//! # Responsibility
//! - Expose ledger operations to callers that speak JSON arguments.
//! - Keep argument decoding out of the ledger itself.

pub mod user_calendar;
