//! # Slotwise Rust Backend
//!
//! Scheduling-support engine for a calendar application.
//!
//! Given a set of timed events, this crate detects which ones overlap in
//! time on the same calendar day and produces a conflict-free slot
//! assignment that respects user-declared priority and, optionally,
//! creation order. The backend exposes a REST API via Axum for frontend
//! integration.
//!
//! ## Features
//!
//! - **Interval Model**: half-open minute intervals derived from time of
//!   day and duration
//! - **Conflict Graph**: per-date sweep producing adjacency and edge lists
//! - **Priority Allocation**: degree-guided Welsh-Powell coloring with
//!   priority and creation-order tie-breaking
//! - **Allocation Rationale**: human-readable per-slot explanation lines
//! - **HTTP API**: RESTful endpoints for event CRUD and allocation
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) shared across layers
//! - [`models`]: Event record, time-of-day and interval types, validation
//! - [`algorithms`]: The pure scheduling core (graph, coloring, rationale)
//! - [`db`]: Repository pattern over event storage
//! - [`services`]: High-level orchestration between store and algorithms
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod algorithms;
pub mod db;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
