//! Core scheduling algorithms: conflict graph construction, priority-aware
//! graph coloring, and allocation rationale.
//!
//! Everything here is a synchronous, pure function of its inputs: no I/O,
//! no shared state between invocations. Concurrent callers may invoke these
//! freely as long as each call gets its own event collection.

pub mod coloring;
pub mod conflict;
pub mod explain;

pub use coloring::{allocate_slots, preference_order};
pub use conflict::build_conflict_graph;
pub use explain::{build_suggestions, explain_allocation};
