use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use meet::dto::swimmer::{
    CreateSwimmerRequest, RegistrationResponse, SwimmerDetailResponse, SwimmerFilter, SwimmerInfo,
    UpdateSwimmerRequest,
};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/swimmers",
    params(SwimmerFilter),
    responses(
        (status = 200, description = "List swimmers successfully", body = Vec<SwimmerInfo>)
    ),
    tag = "swimmers"
)]
pub async fn list_swimmers(
    State(state): State<AppState>,
    Query(filter): Query<SwimmerFilter>,
) -> Result<Response, WebError> {
    let swimmers = services::list_swimmers(&state.db, &filter);

    Ok(Json(swimmers).into_response())
}

#[utoipa::path(
    get,
    path = "/api/swimmers/{id}",
    params(
        ("id" = i32, Path, description = "Swimmer id")
    ),
    responses(
        (status = 200, description = "Swimmer with individual and relay entries", body = SwimmerDetailResponse),
        (status = 404, description = "Swimmer not found")
    ),
    tag = "swimmers"
)]
pub async fn get_swimmer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let swimmer = services::get_swimmer(&state.db, id)?;

    Ok(Json(swimmer).into_response())
}

#[utoipa::path(
    post,
    path = "/api/swimmers",
    request_body = CreateSwimmerRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Swimmer registered, with advisory warnings", body = RegistrationResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found"),
        (status = 409, description = "Duplicate or invalid entry")
    ),
    tag = "swimmers"
)]
pub async fn create_swimmer(
    State(state): State<AppState>,
    Json(req): Json<CreateSwimmerRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let registration = services::register_swimmer(&state.db, &state.scoring, &req)?;

    Ok((StatusCode::CREATED, Json(registration)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/swimmers/{id}",
    params(
        ("id" = i32, Path, description = "Swimmer id")
    ),
    request_body = UpdateSwimmerRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Swimmer updated; a new cohort yields a new id", body = RegistrationResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Swimmer not found")
    ),
    tag = "swimmers"
)]
pub async fn update_swimmer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(update_req): Json<UpdateSwimmerRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_swimmer(&state.db, &state.scoring, id, &update_req)?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/swimmers/{id}",
    params(
        ("id" = i32, Path, description = "Swimmer id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Swimmer and entries deleted, events re-seeded"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Swimmer not found")
    ),
    tag = "swimmers"
)]
pub async fn delete_swimmer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    services::delete_swimmer(&state.db, id)?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
