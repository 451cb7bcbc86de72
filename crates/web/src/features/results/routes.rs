use axum::{Router, routing::get};

use super::handlers::{get_audit, get_results};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/results", get(get_results))
        .route("/audit", get(get_audit))
}
