//! Priority-aware slot allocation via greedy graph coloring.
//!
//! The allocator runs a class-by-class Welsh–Powell coloring over the
//! conflict graph: vertices are walked in descending-degree order (ties
//! broken by scheduling preference), and each new color fills one whole
//! independent set before the next color opens. The result biases low slot
//! indices toward high-priority events wherever degree ties leave freedom.
//!
//! The class-filling scan re-checks colored neighbors per candidate, giving
//! roughly O(V²·avgDegree) in the worst case. That is fine for the
//! tens-to-low-hundreds of events a calendar holds per computation; this
//! routine does not scale to large graphs.

use std::collections::HashMap;

use crate::api::{Allocation, AllocationParams, ConflictGraph};
use crate::models::{Event, EventId};

/// Event ids sorted by scheduling preference: ascending priority, then,
/// when `prefer_first_scheduled` is set, ascending creation stamp. Ties
/// otherwise retain input order (the sort is stable).
pub fn preference_order(events: &[Event], params: &AllocationParams) -> Vec<EventId> {
    let mut ordered: Vec<&Event> = events.iter().collect();
    if params.prefer_first_scheduled {
        ordered.sort_by_key(|e| (e.priority, e.created_at));
    } else {
        ordered.sort_by_key(|e| e.priority);
    }
    ordered.into_iter().map(|e| e.id.clone()).collect()
}

/// Compute a proper coloring of the conflict graph.
///
/// Determinism: identical inputs (including priorities and creation stamps)
/// always produce the identical coloring and preference order. Vertex
/// traversal follows the input event order, never map iteration order.
pub fn allocate_slots(
    events: &[Event],
    graph: &ConflictGraph,
    params: &AllocationParams,
) -> Allocation {
    let priority_order = preference_order(events, params);
    let preference_rank: HashMap<&EventId, usize> = priority_order
        .iter()
        .enumerate()
        .map(|(rank, id)| (id, rank))
        .collect();

    // Coloring order: descending degree, ties by preference rank.
    let mut order: Vec<&EventId> = events.iter().map(|e| &e.id).collect();
    order.sort_by(|a, b| {
        graph
            .degree(*b)
            .cmp(&graph.degree(*a))
            .then_with(|| preference_rank[*a].cmp(&preference_rank[*b]))
    });

    let mut coloring: HashMap<EventId, usize> = HashMap::with_capacity(order.len());
    let mut color = 0usize;
    for &vertex in &order {
        if coloring.contains_key(vertex) {
            continue;
        }
        coloring.insert(vertex.clone(), color);

        // Fill the rest of this color class: every still-uncolored vertex
        // with no neighbor already carrying this color joins it.
        for &candidate in &order {
            if coloring.contains_key(candidate) {
                continue;
            }
            let blocked = graph
                .adjacency
                .get(candidate)
                .is_some_and(|neighbors| {
                    neighbors.iter().any(|n| coloring.get(n) == Some(&color))
                });
            if !blocked {
                coloring.insert(candidate.clone(), color);
            }
        }
        color += 1;
    }

    let chromatic_number = coloring.values().max().map_or(0, |max| max + 1);

    Allocation {
        coloring,
        chromatic_number,
        priority_order,
    }
}
