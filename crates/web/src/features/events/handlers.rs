use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use meet::{
    dto::{
        event::{CreateEventRequest, EventParticipants, EventSummary, ParticipantDetail},
        swimmer::SwimmerInfo,
    },
    models::Event,
};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "Events with participant counts", body = Vec<EventSummary>)
    ),
    tag = "events"
)]
pub async fn list_events(State(state): State<AppState>) -> Result<Response, WebError> {
    Ok(Json(services::list_events(&state.db)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Event already exists")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::create_event(&state.db, &req)?;

    Ok((StatusCode::CREATED, Json(event)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}/participants",
    params(
        ("id" = i32, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Entrants in heat and lane order", body = EventParticipants),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_participants(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    Ok(Json(services::get_participants(&state.db, id)?).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}/eligible",
    params(
        ("id" = i32, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Swimmers of the event's age group and gender", body = Vec<SwimmerInfo>),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_eligible(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    Ok(Json(services::get_eligible(&state.db, id)?).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}/top8",
    params(
        ("id" = i32, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Fastest eight heat swimmers", body = Vec<ParticipantDetail>),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_top8(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    Ok(Json(services::get_top(&state.db, id)?).into_response())
}

#[utoipa::path(
    post,
    path = "/api/events/{id}/recalculate",
    params(
        ("id" = i32, Path, description = "Event id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Event re-seeded by time", body = EventParticipants),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn recalculate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    Ok(Json(services::recalculate(&state.db, id)?).into_response())
}
