use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use meet::dto::{audit::EntryAuditReport, results::ResultsResponse};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/results",
    responses(
        (status = 200, description = "Medals, championship and club standings recomputed from the recorded times", body = ResultsResponse)
    ),
    tag = "results"
)]
pub async fn get_results(State(state): State<AppState>) -> Result<Response, WebError> {
    let results = services::compute_results(&state.db, &state.scoring)?;

    Ok(Json(results).into_response())
}

#[utoipa::path(
    get,
    path = "/api/audit",
    responses(
        (status = 200, description = "Advisory entry findings", body = EntryAuditReport)
    ),
    tag = "results"
)]
pub async fn get_audit(State(state): State<AppState>) -> Result<Response, WebError> {
    Ok(Json(services::audit_entries(&state.db, &state.scoring)).into_response())
}
