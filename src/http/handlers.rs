//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! repository or the allocation service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    parse_create_event_line, AllocationQuery, EventListResponse, HealthResponse, PlanQuery,
    PlanResponse, SetPriorityRequest,
};
use super::error::AppError;
use super::state::AppState;
use crate::algorithms::explain_allocation;
use crate::api::{AllocationParams, DateAllocation};
use crate::models::{Event, EventId};
use crate::services::allocation;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let store = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        store,
    }))
}

// =============================================================================
// Event CRUD
// =============================================================================

/// GET /v1/events
///
/// List all events, ordered by creation.
pub async fn list_events(State(state): State<AppState>) -> HandlerResult<EventListResponse> {
    let events = state.repository.list_events().await?;
    let total = events.len();
    Ok(Json(EventListResponse { events, total }))
}

/// POST /v1/events
///
/// Create an event from one delimited text line
/// (`title,date,time,duration[,priority]`). The repository assigns the id
/// and creation stamp; the wire format never leaves this layer.
pub async fn create_event(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<Event>), AppError> {
    let new_event = parse_create_event_line(&body)?;
    let event = state.repository.create_event(new_event).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// DELETE /v1/events/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.repository.delete_event(&EventId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /v1/events/{id}/priority
pub async fn set_priority(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<SetPriorityRequest>,
) -> HandlerResult<Event> {
    let event = state
        .repository
        .set_priority(&EventId::new(id), request.priority)
        .await?;
    Ok(Json(event))
}

// =============================================================================
// Allocation
// =============================================================================

/// GET /v1/allocation?date=YYYY-MM-DD&prefer_first_scheduled=bool
///
/// Color the events of a single date into non-conflicting slots.
pub async fn allocate_date(
    State(state): State<AppState>,
    Query(query): Query<AllocationQuery>,
) -> HandlerResult<DateAllocation> {
    let params = AllocationParams {
        prefer_first_scheduled: query.prefer_first_scheduled,
    };
    let allocation =
        allocation::allocate_date(state.repository.as_ref(), query.date, &params).await?;
    Ok(Json(allocation))
}

/// GET /v1/plan?prefer_first_scheduled=bool
///
/// Full allocation plan over every stored event: conflict graph, coloring,
/// suggestions, and the rendered rationale lines.
pub async fn get_plan(
    State(state): State<AppState>,
    Query(query): Query<PlanQuery>,
) -> HandlerResult<PlanResponse> {
    let params = AllocationParams {
        prefer_first_scheduled: query.prefer_first_scheduled,
    };
    let events = state.repository.list_events().await?;
    let plan = allocation::compute_allocation_plan(&events, &params)?;
    let explanation = explain_allocation(&plan.suggestions, &events);

    Ok(Json(PlanResponse {
        graph: plan.graph,
        allocation: plan.allocation,
        suggestions: plan.suggestions,
        explanation,
    }))
}
