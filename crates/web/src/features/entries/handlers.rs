use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use meet::{
    dto::entry::{
        AddIndividualEntryRequest, AddRelayEntryRequest, AssignLaneRequest,
        IndividualEntryResponse, RelayEntryResponse,
    },
    models::EntryRef,
};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/entries/individual",
    request_body = AddIndividualEntryRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Entry seated in the next free lane", body = IndividualEntryResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Swimmer or event not found"),
        (status = 409, description = "Swimmer already entered or relay event")
    ),
    tag = "entries"
)]
pub async fn add_individual_entry(
    State(state): State<AppState>,
    Json(req): Json<AddIndividualEntryRequest>,
) -> Result<Response, WebError> {
    let entry = services::add_individual_entry(&state.db, &state.scoring, &req)?;

    Ok((StatusCode::CREATED, Json(entry)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/entries/relay",
    request_body = AddRelayEntryRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Swimmer added to the club's relay team", body = RelayEntryResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Club, swimmer or event not found"),
        (status = 409, description = "Swimmer already on the team or not a relay event")
    ),
    tag = "entries"
)]
pub async fn add_relay_entry(
    State(state): State<AppState>,
    Json(req): Json<AddRelayEntryRequest>,
) -> Result<Response, WebError> {
    let entry = services::add_relay_entry(&state.db, &req)?;

    Ok((StatusCode::CREATED, Json(entry)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/entries/individual/{id}",
    params(
        ("id" = i32, Path, description = "Individual entry id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Entry removed and event re-seeded"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Entry not found")
    ),
    tag = "entries"
)]
pub async fn delete_individual_entry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    services::remove_entry(&state.db, EntryRef::Individual(id))?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    delete,
    path = "/api/entries/relay/{id}",
    params(
        ("id" = i32, Path, description = "Relay entry id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Relay team withdrawn and event re-seeded"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Entry not found")
    ),
    tag = "entries"
)]
pub async fn delete_relay_entry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    services::remove_entry(&state.db, EntryRef::Relay(id))?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    put,
    path = "/api/entries/lane",
    request_body = AssignLaneRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Entry moved; an occupant of the seat swaps with it"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Entry not found")
    ),
    tag = "entries"
)]
pub async fn assign_lane(
    State(state): State<AppState>,
    Json(req): Json<AssignLaneRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    services::assign_lane(&state.db, &req)?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
