//! Repository implementations module.
//!
//! Currently a single implementation of the `EventRepository` trait:
//! - `local`: In-memory implementation for unit testing and local development
pub mod local;

pub use local::{LocalRepository, MonotonicClock};
