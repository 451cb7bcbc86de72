use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{create_club, list_clubs};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_club))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new().route("/", get(list_clubs)).merge(protected)
}
