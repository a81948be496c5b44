use event_ledger_core::{DateViolation, Event, EventDate, EventValidationError};
use uuid::Uuid;

#[test]
fn event_new_trims_description_and_assigns_id() {
    let date = EventDate::from_ymd(2025, 6, 1).unwrap();
    let event = Event::new("  Dentist  ", date).unwrap();

    assert!(!event.id().is_nil());
    assert_eq!(event.description(), "Dentist");
    assert_eq!(event.date(), date);
}

#[test]
fn event_new_rejects_blank_description() {
    let date = EventDate::from_ymd(2025, 6, 1).unwrap();
    assert_eq!(
        Event::new("", date).unwrap_err(),
        EventValidationError::InvalidDescription
    );
    assert_eq!(
        Event::new(" \t\n ", date).unwrap_err(),
        EventValidationError::InvalidDescription
    );
}

#[test]
fn event_date_rejects_day_past_month_end() {
    let err = EventDate::from_ymd(2025, 4, 31).unwrap_err();
    assert_eq!(
        err,
        EventValidationError::InvalidDate {
            year: 2025,
            month: 4,
            day: 31,
            reason: DateViolation::DayOutOfRange { max_day: 30 },
        }
    );
    assert!(err.to_string().contains("between 1 and 30"));
}

#[test]
fn event_date_exposes_components() {
    let date = EventDate::from_ymd(2024, 2, 29).unwrap();
    assert_eq!((date.year(), date.month(), date.day()), (2024, 2, 29));
    assert_eq!(date.to_string(), "2024-02-29");
}

#[test]
fn event_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let date = EventDate::from_ymd(2025, 12, 24).unwrap();
    let event = Event::with_id(id, "Christmas Eve dinner", date).unwrap();

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["description"], "Christmas Eve dinner");
    assert_eq!(json["date"], "2025-12-24");

    let decoded: Event = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, event);
}

#[test]
fn deserialize_rejects_impossible_date() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "description": "bad",
        "date": "2023-02-29"
    });

    let err = serde_json::from_value::<Event>(value).unwrap_err();
    assert!(
        err.to_string().contains("day 29 must be between 1 and 28"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_blank_description() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "description": "   ",
        "date": "2025-01-01"
    });

    let err = serde_json::from_value::<Event>(value).unwrap_err();
    assert!(err.to_string().contains("invalid description"));
}
