//! Human-readable rationale for an allocation.
//!
//! Builds the per-event reason lists that accompany slot assignments, and
//! renders them into ordered display lines for the presentation layer.

use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

use crate::api::{Allocation, AllocationParams, AllocationSuggestion};
use crate::models::{Event, EventId};

const REASON_PRIORITY: &str = "Higher priority per user setting";
const REASON_FIRST_ON_DATE: &str = "First scheduled on this date";
const REASON_LATER_ON_DATE: &str = "Scheduled later on this date";

/// Assemble one suggestion per event, in preference order.
///
/// The priority reason is only attached when the input events actually
/// carry differing priorities; a set of equal-priority events gets no
/// priority rationale. With `prefer_first_scheduled`, each date's
/// earliest-created event is called out and the rest are marked as
/// scheduled later on that date.
pub fn build_suggestions(
    events: &[Event],
    allocation: &Allocation,
    params: &AllocationParams,
) -> Vec<AllocationSuggestion> {
    let mut reasons: HashMap<&EventId, Vec<String>> = events
        .iter()
        .map(|e| (&e.id, Vec::new()))
        .collect();

    let priorities_differ = events
        .windows(2)
        .any(|pair| pair[0].priority != pair[1].priority);
    if priorities_differ {
        for id in &allocation.priority_order {
            if let Some(list) = reasons.get_mut(id) {
                list.push(REASON_PRIORITY.to_string());
            }
        }
    }

    if params.prefer_first_scheduled {
        let mut by_date: BTreeMap<NaiveDate, Vec<&Event>> = BTreeMap::new();
        for event in events {
            by_date.entry(event.date).or_default().push(event);
        }
        for bucket in by_date.values_mut() {
            bucket.sort_by_key(|e| e.created_at);
            for (position, event) in bucket.iter().enumerate() {
                let reason = if position == 0 {
                    REASON_FIRST_ON_DATE
                } else {
                    REASON_LATER_ON_DATE
                };
                if let Some(list) = reasons.get_mut(&event.id) {
                    list.push(reason.to_string());
                }
            }
        }
    }

    allocation
        .priority_order
        .iter()
        .filter_map(|id| {
            let slot = *allocation.coloring.get(id)?;
            Some(AllocationSuggestion {
                id: id.clone(),
                slot,
                reasons: reasons.remove(id).unwrap_or_default(),
            })
        })
        .collect()
}

/// Render suggestions as display strings, ordered by ascending slot index:
/// `"Slot {slot+1}: {title} — {reasons joined by '; '}"`.
pub fn explain_allocation(suggestions: &[AllocationSuggestion], events: &[Event]) -> Vec<String> {
    let titles: HashMap<&EventId, &str> = events
        .iter()
        .map(|e| (&e.id, e.title.as_str()))
        .collect();

    let mut ordered: Vec<&AllocationSuggestion> = suggestions.iter().collect();
    ordered.sort_by_key(|s| s.slot);

    ordered
        .into_iter()
        .map(|s| {
            let title = titles.get(&s.id).copied().unwrap_or(s.id.as_str());
            format!("Slot {}: {} — {}", s.slot + 1, title, s.reasons.join("; "))
        })
        .collect()
}
