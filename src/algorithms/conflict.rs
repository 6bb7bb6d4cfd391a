//! Conflict graph construction.
//!
//! Buckets events by calendar date, then sweeps each bucket in start order
//! to find every overlapping pair. Cross-date pairs never conflict, so the
//! sweep only compares events within a bucket.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::api::{ConflictEdge, ConflictGraph};
use crate::models::Event;

/// Build the conflict graph over a collection of events with unique ids.
///
/// Every input event receives an adjacency entry, isolated vertices
/// included. Adjacency is symmetric with no self-loops; the edge list holds
/// one entry per unordered conflicting pair.
///
/// Complexity: O(n log n) per date for sorting plus O(n·k) for the sweep,
/// where k is the average active-set size; worst case O(n²) when all events
/// on a date mutually overlap.
pub fn build_conflict_graph(events: &[Event]) -> ConflictGraph {
    let mut graph = ConflictGraph::default();
    for event in events {
        graph.adjacency.entry(event.id.clone()).or_default();
    }

    // BTreeMap keeps date iteration deterministic.
    let mut by_date: BTreeMap<NaiveDate, Vec<&Event>> = BTreeMap::new();
    for event in events {
        by_date.entry(event.date).or_default().push(event);
    }

    for bucket in by_date.values_mut() {
        // Stable sort: ties keep input order.
        bucket.sort_by_key(|e| e.interval().start);
        sweep_bucket(bucket, &mut graph);
    }

    graph
}

/// Sweep one start-sorted date bucket, maintaining the set of events whose
/// intervals can still overlap anything starting at or after the cursor.
fn sweep_bucket(bucket: &[&Event], graph: &mut ConflictGraph) {
    let mut active: Vec<&Event> = Vec::new();
    for &current in bucket {
        let start = current.interval().start;
        // Evict everything that ended at or before the current start; the
        // bucket is start-sorted, so those can never overlap again.
        active.retain(|e| e.interval().end > start);

        // Everything still active overlaps the current event.
        for other in &active {
            graph
                .adjacency
                .entry(current.id.clone())
                .or_default()
                .insert(other.id.clone());
            graph
                .adjacency
                .entry(other.id.clone())
                .or_default()
                .insert(current.id.clone());
            graph.edges.push(ConflictEdge {
                from: current.id.clone(),
                to: other.id.clone(),
            });
        }
        active.push(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventId, TimeOfDay};

    fn event(id: &str, date: &str, time: &str, duration: u32) -> Event {
        Event::new(
            EventId::from(id),
            id,
            date.parse().unwrap(),
            time.parse::<TimeOfDay>().unwrap(),
            duration,
        )
        .unwrap()
    }

    fn has_edge(graph: &ConflictGraph, a: &str, b: &str) -> bool {
        graph.edges.iter().any(|e| {
            (e.from.as_str() == a && e.to.as_str() == b)
                || (e.from.as_str() == b && e.to.as_str() == a)
        })
    }

    #[test]
    fn test_two_overlapping_events_single_edge() {
        let events = vec![
            event("a", "2024-05-01", "09:00", 60),
            event("b", "2024-05-01", "09:30", 60),
        ];
        let graph = build_conflict_graph(&events);

        assert_eq!(graph.edges.len(), 1);
        assert!(has_edge(&graph, "a", "b"));
        assert_eq!(graph.degree(&EventId::from("a")), 1);
        assert_eq!(graph.degree(&EventId::from("b")), 1);
    }

    #[test]
    fn test_triangle_of_mutual_overlaps() {
        let events = vec![
            event("a", "2024-05-01", "09:00", 120),
            event("b", "2024-05-01", "09:30", 60),
            event("c", "2024-05-01", "10:00", 30),
        ];
        let graph = build_conflict_graph(&events);

        assert_eq!(graph.edges.len(), 3);
        assert!(has_edge(&graph, "a", "b"));
        assert!(has_edge(&graph, "a", "c"));
        assert!(has_edge(&graph, "b", "c"));
    }

    #[test]
    fn test_same_times_different_dates_no_edges() {
        let events = vec![
            event("a", "2024-05-01", "09:00", 60),
            event("b", "2024-05-02", "09:00", 60),
        ];
        let graph = build_conflict_graph(&events);

        assert!(graph.edges.is_empty());
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn test_back_to_back_no_edge() {
        let events = vec![
            event("a", "2024-05-01", "09:00", 60),
            event("b", "2024-05-01", "10:00", 60),
        ];
        let graph = build_conflict_graph(&events);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_isolated_vertex_gets_adjacency_entry() {
        let events = vec![
            event("a", "2024-05-01", "09:00", 60),
            event("b", "2024-05-01", "09:30", 60),
            event("lonely", "2024-05-01", "15:00", 30),
        ];
        let graph = build_conflict_graph(&events);

        assert!(graph.adjacency.contains_key(&EventId::from("lonely")));
        assert_eq!(graph.degree(&EventId::from("lonely")), 0);
    }

    #[test]
    fn test_adjacency_symmetric_no_self_loops() {
        let events = vec![
            event("a", "2024-05-01", "09:00", 180),
            event("b", "2024-05-01", "09:15", 30),
            event("c", "2024-05-01", "10:00", 90),
            event("d", "2024-05-02", "09:30", 60),
        ];
        let graph = build_conflict_graph(&events);

        for (id, neighbors) in &graph.adjacency {
            assert!(!neighbors.contains(id), "self-loop at {}", id);
            for neighbor in neighbors {
                assert!(
                    graph.adjacency[neighbor].contains(id),
                    "asymmetric edge {} -> {}",
                    id,
                    neighbor
                );
            }
        }
    }

    #[test]
    fn test_each_unordered_pair_appears_once() {
        let events = vec![
            event("a", "2024-05-01", "09:00", 120),
            event("b", "2024-05-01", "09:30", 120),
            event("c", "2024-05-01", "10:00", 120),
        ];
        let graph = build_conflict_graph(&events);

        let mut pairs: Vec<(String, String)> = graph
            .edges
            .iter()
            .map(|e| {
                let mut pair = [e.from.as_str(), e.to.as_str()];
                pair.sort();
                (pair[0].to_string(), pair[1].to_string())
            })
            .collect();
        let before = pairs.len();
        pairs.sort();
        pairs.dedup();
        assert_eq!(pairs.len(), before, "duplicated unordered pair");
    }

    #[test]
    fn test_empty_input() {
        let graph = build_conflict_graph(&[]);
        assert!(graph.adjacency.is_empty());
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_edges_deterministic() {
        let events = vec![
            event("b", "2024-05-02", "09:00", 120),
            event("a", "2024-05-01", "09:00", 120),
            event("c", "2024-05-01", "09:30", 120),
            event("d", "2024-05-02", "10:00", 60),
        ];
        let first = build_conflict_graph(&events);
        let second = build_conflict_graph(&events);
        assert_eq!(first.edges, second.edges);
    }
}
