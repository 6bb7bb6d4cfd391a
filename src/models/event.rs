use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::time::{Interval, TimeOfDay};

/// Errors raised while validating raw event input.
///
/// All three variants belong to the ingestion boundary: once a collection
/// of [`Event`]s has been constructed and checked for unique ids, the
/// graph-building and coloring algorithms are total and never fail.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SchedulingError {
    /// Malformed or out-of-range time of day.
    #[error("invalid time: {0}")]
    InvalidTime(String),

    /// Duration that is zero, negative, or not a number.
    #[error("invalid duration: {0}")]
    InvalidDuration(String),

    /// Two input events share an id; refusing to merge their vertices.
    #[error("duplicate event id: {0}")]
    DuplicateId(EventId),
}

/// Event identifier, unique within a computation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(pub String);

impl EventId {
    pub fn new(value: impl Into<String>) -> Self {
        EventId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        EventId(value.to_string())
    }
}

/// Longest allowed event duration: one full day. Bounding the duration here
/// keeps interval minute arithmetic far from `u32` overflow.
pub const MAX_DURATION_MINUTES: u32 = 24 * 60;

/// A titled activity with a date, start time, and duration.
///
/// Events are immutable inputs to the scheduling algorithms. They are owned
/// by the event repository and passed by reference into the core for each
/// computation; the core never mutates or retains them between calls.
///
/// `priority` (lower = more important) and `created_at` default to 0 and are
/// applied once, at construction, never mid-algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    /// Calendar date, no time zone attached.
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub duration_minutes: u32,
    /// Lower value means scheduled first on ties.
    #[serde(default)]
    pub priority: i32,
    /// Monotonic creation stamp (milliseconds); ties broken by this when
    /// the allocator prefers first-scheduled events.
    #[serde(default)]
    pub created_at: i64,
}

impl Event {
    /// Construct a validated event with default priority and creation stamp.
    pub fn new(
        id: EventId,
        title: impl Into<String>,
        date: NaiveDate,
        time: TimeOfDay,
        duration_minutes: u32,
    ) -> Result<Self, SchedulingError> {
        if duration_minutes == 0 || duration_minutes > MAX_DURATION_MINUTES {
            return Err(SchedulingError::InvalidDuration(format!(
                "duration must be between 1 and {} minutes, got {}",
                MAX_DURATION_MINUTES, duration_minutes
            )));
        }
        Ok(Self {
            id,
            title: title.into(),
            date,
            time,
            duration_minutes,
            priority: 0,
            created_at: 0,
        })
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_created_at(mut self, created_at: i64) -> Self {
        self.created_at = created_at;
        self
    }

    /// The half-open minute interval this event occupies on its date.
    pub fn interval(&self) -> Interval {
        Interval::new(self.time, self.duration_minutes)
    }

    /// Whether two events conflict: same date and strictly intersecting
    /// intervals. Events on different dates never overlap.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.date == other.date && self.interval().overlaps(&other.interval())
    }
}

/// Event fields supplied by a client; the repository assigns `id` and
/// `created_at` on creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub duration_minutes: u32,
    #[serde(default)]
    pub priority: i32,
}

/// Fail fast when two input events share an id.
///
/// Without this check a later event would silently overwrite the earlier
/// adjacency binding, merging two logical vertices into one.
pub fn ensure_unique_ids(events: &[Event]) -> Result<(), SchedulingError> {
    let mut seen = HashSet::with_capacity(events.len());
    for event in events {
        if !seen.insert(&event.id) {
            return Err(SchedulingError::DuplicateId(event.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn time(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn event(id: &str, d: &str, t: &str, duration: u32) -> Event {
        Event::new(EventId::from(id), id, date(d), time(t), duration).unwrap()
    }

    #[test]
    fn test_event_defaults_applied_at_construction() {
        let e = event("a", "2024-05-01", "09:00", 60);
        assert_eq!(e.priority, 0);
        assert_eq!(e.created_at, 0);
    }

    #[test]
    fn test_event_rejects_zero_duration() {
        let result = Event::new(
            EventId::from("a"),
            "a",
            date("2024-05-01"),
            time("09:00"),
            0,
        );
        assert!(matches!(result, Err(SchedulingError::InvalidDuration(_))));
    }

    #[test]
    fn test_event_duration_bounds() {
        let build = |duration| {
            Event::new(
                EventId::from("a"),
                "a",
                date("2024-05-01"),
                time("09:00"),
                duration,
            )
        };

        assert!(build(1).is_ok());
        assert!(build(MAX_DURATION_MINUTES).is_ok());
        assert!(matches!(
            build(MAX_DURATION_MINUTES + 1),
            Err(SchedulingError::InvalidDuration(_))
        ));
        assert!(matches!(
            build(u32::MAX),
            Err(SchedulingError::InvalidDuration(_))
        ));
    }

    #[test]
    fn test_event_interval() {
        let e = event("a", "2024-05-01", "09:30", 45);
        let iv = e.interval();
        assert_eq!(iv.start, 570);
        assert_eq!(iv.end, 615);
    }

    #[test]
    fn test_overlap_same_date() {
        let a = event("a", "2024-05-01", "09:00", 60);
        let b = event("b", "2024-05-01", "09:30", 60);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_no_overlap_across_dates() {
        let a = event("a", "2024-05-01", "09:00", 60);
        let b = event("b", "2024-05-02", "09:00", 60);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_back_to_back_does_not_overlap() {
        let a = event("a", "2024-05-01", "09:00", 60);
        let b = event("b", "2024-05-01", "10:00", 60);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_ensure_unique_ids() {
        let a = event("a", "2024-05-01", "09:00", 60);
        let b = event("b", "2024-05-01", "10:00", 60);
        assert!(ensure_unique_ids(&[a.clone(), b]).is_ok());

        let dup = event("a", "2024-05-02", "11:00", 30);
        let err = ensure_unique_ids(&[a, dup]).unwrap_err();
        assert_eq!(err, SchedulingError::DuplicateId(EventId::from("a")));
    }

    #[test]
    fn test_event_serde_roundtrip() {
        let e = event("a", "2024-05-01", "09:00", 60)
            .with_priority(2)
            .with_created_at(1_700_000_000_000);
        let json = serde_json::to_string(&e).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}
