use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{
    create_event, get_eligible, get_participants, get_top8, list_events, recalculate,
};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_event))
        .route("/:id/recalculate", post(recalculate))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_events))
        .route("/:id/participants", get(get_participants))
        .route("/:id/eligible", get(get_eligible))
        .route("/:id/top8", get(get_top8))
        .merge(protected)
}
