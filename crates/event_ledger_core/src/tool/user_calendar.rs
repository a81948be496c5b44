//! `user_calendar` tool-call adapter.
//!
//! # Responsibility
//! - Translate JSON tool arguments into `EventLedger::record_event` calls.
//! - Describe the accepted arguments as a JSON schema for tool registries.
//!
//! # Invariants
//! - Argument errors are reported before the ledger is touched.
//! - Responses use the `Event` wire shape (`id`, `description`, `date`).

use crate::ledger::event_ledger::EventLedger;
use crate::model::event::{Event, EventValidationError};
use log::debug;
use serde_json::{json, Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Tool name advertised to callers.
pub const USER_CALENDAR_TOOL_NAME: &str = "user_calendar";

const USER_CALENDAR_TOOL_DESCRIPTION: &str =
    "Save a calendar event for the user. Takes the month, day and year of the event \
     and a short description, and returns the stored event.";

/// Errors surfaced by tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// Arguments are not an object, or a field is missing or mistyped.
    InvalidArguments(String),
    /// Arguments were well-formed but rejected by ledger validation.
    Validation(EventValidationError),
}

impl Display for ToolError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArguments(message) => write!(f, "invalid tool arguments: {message}"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ToolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidArguments(_) => None,
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<EventValidationError> for ToolError {
    fn from(value: EventValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Callable tool that records events into a shared ledger.
#[derive(Debug, Clone)]
pub struct UserCalendarTool {
    ledger: Arc<EventLedger>,
    default_year: Option<i64>,
}

impl UserCalendarTool {
    pub fn new(ledger: Arc<EventLedger>) -> Self {
        Self {
            ledger,
            default_year: None,
        }
    }

    /// Makes `year` optional, falling back to `year` when omitted.
    pub fn with_default_year(mut self, year: i64) -> Self {
        self.default_year = Some(year);
        self
    }

    pub fn name(&self) -> &'static str {
        USER_CALENDAR_TOOL_NAME
    }

    pub fn description(&self) -> &'static str {
        USER_CALENDAR_TOOL_DESCRIPTION
    }

    /// JSON schema of the accepted arguments object.
    pub fn parameters_schema(&self) -> Value {
        let mut required = vec!["month", "day", "description"];
        if self.default_year.is_none() {
            required.push("year");
        }

        json!({
            "type": "object",
            "properties": {
                "month": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 12,
                    "description": "Month of the event (1-12)."
                },
                "day": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 31,
                    "description": "Day of the month."
                },
                "year": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 9999,
                    "description": "Four-digit year of the event."
                },
                "description": {
                    "type": "string",
                    "description": "What the event is about."
                }
            },
            "required": required
        })
    }

    /// Records one event from a JSON arguments object.
    ///
    /// # Errors
    /// - `InvalidArguments` when the payload is not an object or a field is
    ///   missing or has the wrong JSON type.
    /// - `Validation` when the ledger rejects the date or description.
    pub fn invoke(&self, args: &Value) -> Result<Value, ToolError> {
        let object = args
            .as_object()
            .ok_or_else(|| ToolError::InvalidArguments("arguments must be a JSON object".into()))?;

        let month = required_integer(object, "month")?;
        let day = required_integer(object, "day")?;
        let year = match optional_integer(object, "year")? {
            Some(year) => year,
            None => self.default_year.ok_or_else(|| {
                ToolError::InvalidArguments("missing required field `year`".into())
            })?,
        };
        let description = required_string(object, "description")?;

        debug!(
            "event=tool_invoke module=tool status=start tool={} month={} day={} year={}",
            USER_CALENDAR_TOOL_NAME, month, day, year
        );

        let event = self.ledger.record_event(month, day, year, description)?;
        Ok(event_to_value(&event))
    }

    /// Snapshot of the ledger as `{"events": [...]}`.
    pub fn list(&self) -> Value {
        let events: Vec<Value> = self
            .ledger
            .list_events()
            .iter()
            .map(event_to_value)
            .collect();
        json!({ "events": events })
    }
}

fn event_to_value(event: &Event) -> Value {
    json!({
        "id": event.id().to_string(),
        "description": event.description(),
        "date": event.date().to_string(),
    })
}

fn optional_integer(object: &Map<String, Value>, field: &str) -> Result<Option<i64>, ToolError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value.as_i64().map(Some).ok_or_else(|| {
            ToolError::InvalidArguments(format!("field `{field}` must be an integer"))
        }),
    }
}

fn required_integer(object: &Map<String, Value>, field: &str) -> Result<i64, ToolError> {
    optional_integer(object, field)?
        .ok_or_else(|| ToolError::InvalidArguments(format!("missing required field `{field}`")))
}

fn required_string<'a>(object: &'a Map<String, Value>, field: &str) -> Result<&'a str, ToolError> {
    match object.get(field) {
        None | Some(Value::Null) => Err(ToolError::InvalidArguments(format!(
            "missing required field `{field}`"
        ))),
        Some(value) => value.as_str().ok_or_else(|| {
            ToolError::InvalidArguments(format!("field `{field}` must be a string"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{UserCalendarTool, USER_CALENDAR_TOOL_NAME};
    use crate::ledger::event_ledger::EventLedger;
    use std::sync::Arc;

    #[test]
    fn schema_requires_year_without_default() {
        let tool = UserCalendarTool::new(Arc::new(EventLedger::new()));
        let schema = tool.parameters_schema();
        let required = schema["required"].as_array().unwrap();
        assert!(required.iter().any(|value| value == "year"));
        assert_eq!(tool.name(), USER_CALENDAR_TOOL_NAME);
    }

    #[test]
    fn schema_drops_year_requirement_with_default() {
        let tool = UserCalendarTool::new(Arc::new(EventLedger::new())).with_default_year(2025);
        let schema = tool.parameters_schema();
        let required = schema["required"].as_array().unwrap();
        assert!(!required.iter().any(|value| value == "year"));
    }
}
