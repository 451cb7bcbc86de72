use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use meet::{
    dto::entry::{FinalTimeUpdate, TimeUpdate, TimesRecordedResponse},
    models::FinalEntry,
};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/times",
    request_body = Vec<TimeUpdate>,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "All times stored", body = TimesRecordedResponse),
        (status = 400, description = "A time is malformed; nothing was stored"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Entry not found")
    ),
    tag = "times"
)]
pub async fn record_times(
    State(state): State<AppState>,
    Json(updates): Json<Vec<TimeUpdate>>,
) -> Result<Response, WebError> {
    let updated = services::record_times(&state.db, &updates)?;

    Ok(Json(TimesRecordedResponse { updated }).into_response())
}

#[utoipa::path(
    post,
    path = "/api/times/final",
    request_body = Vec<FinalTimeUpdate>,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Final-round rows after the update", body = Vec<FinalEntry>),
        (status = 400, description = "A time is malformed; nothing was stored"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Entry not found"),
        (status = 409, description = "Event has no final round")
    ),
    tag = "times"
)]
pub async fn record_final_times(
    State(state): State<AppState>,
    Json(updates): Json<Vec<FinalTimeUpdate>>,
) -> Result<Response, WebError> {
    let finals = services::record_final_times(&state.db, &updates)?;

    Ok(Json(finals).into_response())
}
