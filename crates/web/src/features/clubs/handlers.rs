use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use meet::{dto::club::CreateClubRequest, models::Club};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/clubs",
    responses(
        (status = 200, description = "All clubs with their current points", body = Vec<Club>)
    ),
    tag = "clubs"
)]
pub async fn list_clubs(State(state): State<AppState>) -> Result<Response, WebError> {
    Ok(Json(services::list_clubs(&state.db)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/clubs",
    request_body = CreateClubRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Club created or already present", body = Club),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "clubs"
)]
pub async fn create_club(
    State(state): State<AppState>,
    Json(req): Json<CreateClubRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let club = services::create_club(&state.db, &req)?;

    Ok((StatusCode::CREATED, Json(club)).into_response())
}
