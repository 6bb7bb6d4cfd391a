//! Repository trait for event storage.
//!
//! The scheduling core never talks to a store directly: callers fetch
//! events through this trait and pass them into the pure algorithms. The
//! trait is always injected explicitly (no module-level singleton) so the
//! core stays reentrant and testable in isolation.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{Event, EventId, NewEvent};

/// Repository trait for event CRUD.
///
/// Implementations assign `id` and a strictly monotonic `created_at` stamp
/// on creation; the stamp generator must be non-decreasing per process so
/// creation-order tie-breaking stays well-defined.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// List all events, ordered by ascending creation stamp.
    async fn list_events(&self) -> RepositoryResult<Vec<Event>>;

    /// List the events on one calendar date, ordered by start time.
    async fn events_on(&self, date: NaiveDate) -> RepositoryResult<Vec<Event>>;

    /// Fetch a single event by id.
    ///
    /// # Returns
    /// * `Ok(Event)` - The stored event
    /// * `Err(RepositoryError::NotFound)` - If no event has that id
    async fn get_event(&self, id: &EventId) -> RepositoryResult<Event>;

    /// Store a new event, assigning its id and creation stamp.
    async fn create_event(&self, new_event: NewEvent) -> RepositoryResult<Event>;

    /// Delete an event by id.
    async fn delete_event(&self, id: &EventId) -> RepositoryResult<()>;

    /// Update the user-declared priority of an event.
    async fn set_priority(&self, id: &EventId, priority: i32) -> RepositoryResult<Event>;

    /// Check the store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
