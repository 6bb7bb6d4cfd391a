//! Event storage module.
//!
//! Provides the Repository pattern abstractions over event records so the
//! scheduling core stays decoupled from any particular store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, tests)                    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services::allocation) - Business Logic  │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository) - Abstract Interface     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! The repository is always passed explicitly into services and handlers.
//! There is deliberately no process-wide repository instance: the core must
//! stay reentrant, and tests construct isolated stores freely.

pub mod repositories;
pub mod repository;

pub use repositories::{LocalRepository, MonotonicClock};
pub use repository::{ErrorContext, EventRepository, RepositoryError, RepositoryResult};
