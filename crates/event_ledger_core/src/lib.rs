//! Core logic for the event ledger.
//! This crate owns event validation and the in-memory ledger of recorded events.

pub mod ledger;
pub mod logging;
pub mod model;
pub mod tool;

pub use ledger::event_ledger::EventLedger;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{
    days_in_month, DateViolation, Event, EventDate, EventId, EventValidationError, MAX_YEAR,
    MIN_YEAR,
};
pub use tool::user_calendar::{ToolError, UserCalendarTool, USER_CALENDAR_TOOL_NAME};

/// Minimal health-check API for wiring probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
