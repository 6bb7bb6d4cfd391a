//! In-memory event repository for local development and testing.

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};
use uuid::Uuid;

use crate::db::repository::{
    ErrorContext, EventRepository, RepositoryError, RepositoryResult,
};
use crate::models::{Event, EventId, NewEvent};

/// Process-local strictly increasing millisecond clock.
///
/// Stamps follow wall-clock time but never repeat or go backwards, even
/// when two events are created within the same millisecond. Creation-order
/// tie-breaking in the allocator relies on this.
#[derive(Debug, Default)]
pub struct MonotonicClock {
    last: AtomicI64,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next stamp: max(now, previous + 1).
    pub fn next_timestamp_ms(&self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        // The closure always returns Some, so fetch_update cannot fail.
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or(i64::MIN);
        now.max(previous + 1)
    }
}

/// In-memory implementation of [`EventRepository`].
///
/// Backed by a `parking_lot::RwLock` over a plain event vector; suitable
/// for unit tests and single-process deployments. Nothing is persisted.
#[derive(Default)]
pub struct LocalRepository {
    events: RwLock<Vec<Event>>,
    clock: MonotonicClock,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with pre-built events, e.g. test fixtures.
    ///
    /// Ids are trusted as-is; a duplicate is rejected the same way
    /// `create_event` would reject it.
    pub fn insert_event(&self, event: Event) -> RepositoryResult<()> {
        let mut events = self.events.write();
        if events.iter().any(|e| e.id == event.id) {
            return Err(RepositoryError::duplicate_id(
                format!("event '{}' already exists", event.id),
                ErrorContext::new("insert_event").with_entity_id(&event.id),
            ));
        }
        events.push(event);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }
}

#[async_trait]
impl EventRepository for LocalRepository {
    async fn list_events(&self) -> RepositoryResult<Vec<Event>> {
        let mut events = self.events.read().clone();
        events.sort_by_key(|e| e.created_at);
        Ok(events)
    }

    async fn events_on(&self, date: NaiveDate) -> RepositoryResult<Vec<Event>> {
        let mut events: Vec<Event> = self
            .events
            .read()
            .iter()
            .filter(|e| e.date == date)
            .cloned()
            .collect();
        events.sort_by_key(|e| e.time);
        Ok(events)
    }

    async fn get_event(&self, id: &EventId) -> RepositoryResult<Event> {
        self.events
            .read()
            .iter()
            .find(|e| &e.id == id)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found(
                    format!("event '{}' not found", id),
                    ErrorContext::new("get_event").with_entity_id(id),
                )
            })
    }

    async fn create_event(&self, new_event: NewEvent) -> RepositoryResult<Event> {
        let id = EventId::new(Uuid::new_v4().to_string());
        let event = Event::new(
            id.clone(),
            new_event.title,
            new_event.date,
            new_event.time,
            new_event.duration_minutes,
        )?
        .with_priority(new_event.priority)
        .with_created_at(self.clock.next_timestamp_ms());

        debug!("create_event id={} date={}", id, event.date);
        self.insert_event(event.clone())?;
        Ok(event)
    }

    async fn delete_event(&self, id: &EventId) -> RepositoryResult<()> {
        let mut events = self.events.write();
        let before = events.len();
        events.retain(|e| &e.id != id);
        if events.len() == before {
            return Err(RepositoryError::not_found(
                format!("event '{}' not found", id),
                ErrorContext::new("delete_event").with_entity_id(id),
            ));
        }
        debug!("delete_event id={}", id);
        Ok(())
    }

    async fn set_priority(&self, id: &EventId, priority: i32) -> RepositoryResult<Event> {
        let mut events = self.events.write();
        let event = events.iter_mut().find(|e| &e.id == id).ok_or_else(|| {
            RepositoryError::not_found(
                format!("event '{}' not found", id),
                ErrorContext::new("set_priority").with_entity_id(id),
            )
        })?;
        event.priority = priority;
        Ok(event.clone())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
