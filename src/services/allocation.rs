//! Allocation services: orchestration between the event repository and the
//! pure scheduling algorithms.
//!
//! Each function recomputes everything from scratch on every invocation; no
//! graph or coloring state survives across calls.

use chrono::NaiveDate;
use log::debug;

use crate::algorithms::{
    allocate_slots, build_conflict_graph, build_suggestions, explain_allocation,
};
use crate::api::{AllocationParams, AllocationPlan, DateAllocation, SlotAssignment};
use crate::db::repository::{EventRepository, RepositoryResult};
use crate::models::{ensure_unique_ids, Event, SchedulingError};

/// Compute the full allocation plan for a collection of events.
///
/// Fails fast with [`SchedulingError::DuplicateId`] when two events share an
/// id; past that check the computation is total.
pub fn compute_allocation_plan(
    events: &[Event],
    params: &AllocationParams,
) -> Result<AllocationPlan, SchedulingError> {
    ensure_unique_ids(events)?;

    let graph = build_conflict_graph(events);
    let allocation = allocate_slots(events, &graph, params);
    let suggestions = build_suggestions(events, &allocation, params);
    debug!(
        "allocation plan: {} events, {} conflicts, {} slots",
        events.len(),
        graph.edges.len(),
        allocation.chromatic_number
    );

    Ok(AllocationPlan {
        graph,
        allocation,
        suggestions,
    })
}

/// Fetch every stored event and compute its allocation plan.
pub async fn compute_plan(
    repo: &dyn EventRepository,
    params: &AllocationParams,
) -> RepositoryResult<AllocationPlan> {
    let events = repo.list_events().await?;
    Ok(compute_allocation_plan(&events, params)?)
}

/// Fetch every stored event and render the allocation rationale lines.
pub async fn explain_schedule(
    repo: &dyn EventRepository,
    params: &AllocationParams,
) -> RepositoryResult<Vec<String>> {
    let events = repo.list_events().await?;
    let plan = compute_allocation_plan(&events, params)?;
    Ok(explain_allocation(&plan.suggestions, &events))
}

/// Color the events of a single date.
///
/// Assignments are returned in the date's start-time order, matching the
/// order `events_on` yields.
pub async fn allocate_date(
    repo: &dyn EventRepository,
    date: NaiveDate,
    params: &AllocationParams,
) -> RepositoryResult<DateAllocation> {
    let events = repo.events_on(date).await?;
    let plan = compute_allocation_plan(&events, params)?;

    let assignments = events
        .iter()
        .map(|e| SlotAssignment {
            id: e.id.clone(),
            slot: plan.allocation.coloring.get(&e.id).copied().unwrap_or(0),
        })
        .collect();

    Ok(DateAllocation {
        colors_used: plan.allocation.chromatic_number,
        assignments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::LocalRepository;
    use crate::models::{EventId, NewEvent};

    fn event(id: &str, date: &str, time: &str, duration: u32) -> Event {
        Event::new(
            EventId::from(id),
            id,
            date.parse().unwrap(),
            time.parse().unwrap(),
            duration,
        )
        .unwrap()
    }

    fn new_event(title: &str, date: &str, time: &str, duration: u32, priority: i32) -> NewEvent {
        NewEvent {
            title: title.to_string(),
            date: date.parse().unwrap(),
            time: time.parse().unwrap(),
            duration_minutes: duration,
            priority,
        }
    }

    #[test]
    fn test_plan_rejects_duplicate_ids() {
        let events = vec![
            event("a", "2024-05-01", "09:00", 60),
            event("a", "2024-05-01", "10:00", 60),
        ];
        let err = compute_allocation_plan(&events, &AllocationParams::default()).unwrap_err();
        assert!(matches!(err, SchedulingError::DuplicateId(_)));
    }

    #[test]
    fn test_empty_plan() {
        let plan = compute_allocation_plan(&[], &AllocationParams::default()).unwrap();
        assert!(plan.graph.adjacency.is_empty());
        assert!(plan.graph.edges.is_empty());
        assert_eq!(plan.allocation.chromatic_number, 0);
        assert!(plan.suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_compute_plan_over_repository() {
        let repo = LocalRepository::new();
        repo.create_event(new_event("Standup", "2024-05-01", "09:00", 60, 0))
            .await
            .unwrap();
        repo.create_event(new_event("Review", "2024-05-01", "09:30", 60, 1))
            .await
            .unwrap();

        let plan = compute_plan(&repo, &AllocationParams::default())
            .await
            .unwrap();
        assert_eq!(plan.graph.edges.len(), 1);
        assert_eq!(plan.allocation.chromatic_number, 2);
        assert_eq!(plan.suggestions.len(), 2);
    }

    #[tokio::test]
    async fn test_allocate_date_scopes_to_one_day() {
        let repo = LocalRepository::new();
        repo.create_event(new_event("A", "2024-05-01", "09:00", 60, 0))
            .await
            .unwrap();
        repo.create_event(new_event("B", "2024-05-01", "09:30", 60, 0))
            .await
            .unwrap();
        repo.create_event(new_event("C", "2024-05-02", "09:00", 60, 0))
            .await
            .unwrap();

        let allocation = allocate_date(
            &repo,
            "2024-05-01".parse().unwrap(),
            &AllocationParams::default(),
        )
        .await
        .unwrap();

        assert_eq!(allocation.assignments.len(), 2);
        assert_eq!(allocation.colors_used, 2);
        assert_ne!(allocation.assignments[0].slot, allocation.assignments[1].slot);
    }

    #[tokio::test]
    async fn test_allocate_empty_date() {
        let repo = LocalRepository::new();
        let allocation = allocate_date(
            &repo,
            "2024-05-01".parse().unwrap(),
            &AllocationParams::default(),
        )
        .await
        .unwrap();

        assert_eq!(allocation.colors_used, 0);
        assert!(allocation.assignments.is_empty());
    }

    #[tokio::test]
    async fn test_explain_schedule_lines() {
        let repo = LocalRepository::new();
        repo.create_event(new_event("Planning", "2024-05-01", "09:00", 60, 0))
            .await
            .unwrap();
        repo.create_event(new_event("Retro", "2024-05-01", "09:30", 60, 1))
            .await
            .unwrap();

        let lines = explain_schedule(&repo, &AllocationParams::default())
            .await
            .unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Slot 1: "));
    }
}
