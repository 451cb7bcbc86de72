use axum::{Router, middleware, routing::post};

use super::handlers::{record_final_times, record_times};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    Router::new()
        .route("/", post(record_times))
        .route("/final", post(record_final_times))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}
