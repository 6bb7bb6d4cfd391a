//! Public API surface for the scheduling backend.
//!
//! This file consolidates the DTO types exchanged with callers: the conflict
//! graph, the slot allocation, and the per-event suggestions. All types
//! derive Serialize/Deserialize for JSON serialization.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub use crate::models::{Event, EventId, Interval, NewEvent, SchedulingError, TimeOfDay};

/// One conflicting pair of same-date events.
///
/// Each unordered pair appears exactly once in an edge list; the adjacency
/// map carries both directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictEdge {
    pub from: EventId,
    pub to: EventId,
}

/// Graph whose vertices are event ids and whose edges are conflicts.
///
/// Every input event appears in `adjacency`, including isolated vertices
/// with no neighbors. Adjacency is symmetric and carries no self-loops.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConflictGraph {
    pub adjacency: HashMap<EventId, HashSet<EventId>>,
    pub edges: Vec<ConflictEdge>,
}

impl ConflictGraph {
    /// Number of neighbors of a vertex; 0 for unknown ids.
    pub fn degree(&self, id: &EventId) -> usize {
        self.adjacency.get(id).map_or(0, HashSet::len)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }
}

/// Options controlling the priority allocator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationParams {
    /// Prefer earlier-created events on priority ties; if false, ties keep
    /// input order.
    #[serde(default = "default_true")]
    pub prefer_first_scheduled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for AllocationParams {
    fn default() -> Self {
        Self {
            prefer_first_scheduled: true,
        }
    }
}

/// A proper coloring of the conflict graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Allocation {
    /// Slot index per event; same slot means no conflict between holders.
    pub coloring: HashMap<EventId, usize>,
    /// Count of distinct slot indices actually used (0 for an empty graph).
    pub chromatic_number: usize,
    /// Event ids ordered by scheduling preference.
    pub priority_order: Vec<EventId>,
}

/// Per-event slot assignment with the rationale that affected it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationSuggestion {
    pub id: EventId,
    pub slot: usize,
    pub reasons: Vec<String>,
}

/// Full output of one allocation computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationPlan {
    pub graph: ConflictGraph,
    pub allocation: Allocation,
    pub suggestions: Vec<AllocationSuggestion>,
}

/// Slot assignment for a single event on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignment {
    pub id: EventId,
    pub slot: usize,
}

/// Coloring of all events on a single date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateAllocation {
    pub colors_used: usize,
    pub assignments: Vec<SlotAssignment>,
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod api_tests;
