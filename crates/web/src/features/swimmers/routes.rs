use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{create_swimmer, delete_swimmer, get_swimmer, list_swimmers, update_swimmer};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_swimmer))
        .route("/:id", put(update_swimmer))
        .route("/:id", delete(delete_swimmer))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_swimmers))
        .route("/:id", get(get_swimmer))
        .merge(protected)
}
