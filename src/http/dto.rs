//! Data Transfer Objects for the HTTP API.
//!
//! Includes the decoder for the create-event wire format: one delimited
//! text line per request, `title,date,time,duration[,priority]`. That
//! format exists only here; the rest of the backend works with `Event`
//! records exclusively.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    Allocation, AllocationPlan, AllocationSuggestion, ConflictEdge, ConflictGraph, DateAllocation,
    SlotAssignment,
};
use crate::models::{Event, NewEvent, SchedulingError, TimeOfDay};

/// Failures while decoding a create-event line.
#[derive(Debug, thiserror::Error)]
pub enum ParseEventError {
    #[error("expected 'title,date,time,duration[,priority]', got {0} field(s)")]
    FieldCount(usize),

    #[error("title must not be empty")]
    EmptyTitle,

    #[error("'{0}' is not a valid date (YYYY-MM-DD)")]
    InvalidDate(String),

    /// Malformed or out-of-range time of day.
    #[error(transparent)]
    InvalidTime(#[from] SchedulingError),

    #[error("'{0}' is not a valid duration in minutes")]
    InvalidDuration(String),

    #[error("'{0}' is not a valid priority")]
    InvalidPriority(String),
}

/// Decode one create-event line.
///
/// Fields are comma-delimited with no quoting, so titles must not contain
/// commas. The trailing priority field is optional and defaults to 0.
pub fn parse_create_event_line(line: &str) -> Result<NewEvent, ParseEventError> {
    let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    if fields.len() < 4 || fields.len() > 5 {
        return Err(ParseEventError::FieldCount(fields.len()));
    }

    let title = fields[0];
    if title.is_empty() {
        return Err(ParseEventError::EmptyTitle);
    }
    let date: NaiveDate = fields[1]
        .parse()
        .map_err(|_| ParseEventError::InvalidDate(fields[1].to_string()))?;
    let time: TimeOfDay = fields[2].parse()?;
    let duration_minutes: u32 = fields[3]
        .parse()
        .map_err(|_| ParseEventError::InvalidDuration(fields[3].to_string()))?;
    let priority: i32 = match fields.get(4) {
        Some(raw) => raw
            .parse()
            .map_err(|_| ParseEventError::InvalidPriority(raw.to_string()))?,
        None => 0,
    };

    Ok(NewEvent {
        title: title.to_string(),
        date,
        time,
        duration_minutes,
        priority,
    })
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Store reachability
    pub store: String,
}

/// Event list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventListResponse {
    pub events: Vec<Event>,
    pub total: usize,
}

/// Request body for updating an event's priority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetPriorityRequest {
    pub priority: i32,
}

/// Query parameters for the per-date allocation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationQuery {
    /// Calendar date to color, YYYY-MM-DD
    pub date: NaiveDate,
    /// Prefer earlier-created events on priority ties (default: true)
    #[serde(default = "default_true")]
    pub prefer_first_scheduled: bool,
}

/// Query parameters for the whole-store plan endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanQuery {
    #[serde(default = "default_true")]
    pub prefer_first_scheduled: bool,
}

fn default_true() -> bool {
    true
}

/// Full allocation plan plus its rendered rationale lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    pub graph: ConflictGraph,
    pub allocation: Allocation,
    pub suggestions: Vec<AllocationSuggestion>,
    pub explanation: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_line() {
        let event = parse_create_event_line("Standup,2024-05-01,09:00,30,2").unwrap();
        assert_eq!(event.title, "Standup");
        assert_eq!(event.date, "2024-05-01".parse::<NaiveDate>().unwrap());
        assert_eq!(event.time.to_string(), "09:00");
        assert_eq!(event.duration_minutes, 30);
        assert_eq!(event.priority, 2);
    }

    #[test]
    fn test_parse_defaults_priority() {
        let event = parse_create_event_line("Standup,2024-05-01,09:00,30").unwrap();
        assert_eq!(event.priority, 0);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let event = parse_create_event_line(" Standup , 2024-05-01 , 09:00 , 30 \n").unwrap();
        assert_eq!(event.title, "Standup");
        assert_eq!(event.duration_minutes, 30);
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        assert!(matches!(
            parse_create_event_line(""),
            Err(ParseEventError::FieldCount(1))
        ));
        assert!(matches!(
            parse_create_event_line("only,three,fields"),
            Err(ParseEventError::FieldCount(3))
        ));
        assert!(matches!(
            parse_create_event_line(",2024-05-01,09:00,30"),
            Err(ParseEventError::EmptyTitle)
        ));
        assert!(matches!(
            parse_create_event_line("X,not-a-date,09:00,30"),
            Err(ParseEventError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_create_event_line("X,2024-05-01,25:00,30"),
            Err(ParseEventError::InvalidTime(_))
        ));
        assert!(matches!(
            parse_create_event_line("X,2024-05-01,09:00,soon"),
            Err(ParseEventError::InvalidDuration(_))
        ));
        assert!(matches!(
            parse_create_event_line("X,2024-05-01,09:00,30,high"),
            Err(ParseEventError::InvalidPriority(_))
        ));
        assert!(matches!(
            parse_create_event_line("a,b,c,d,e,f"),
            Err(ParseEventError::FieldCount(6))
        ));
    }
}
