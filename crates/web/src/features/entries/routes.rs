use axum::{
    Router, middleware,
    routing::{delete, post, put},
};

use super::handlers::{
    add_individual_entry, add_relay_entry, assign_lane, delete_individual_entry,
    delete_relay_entry,
};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

/// Every entry route changes the seating, so all of them need a key.
pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    Router::new()
        .route("/individual", post(add_individual_entry))
        .route("/individual/:id", delete(delete_individual_entry))
        .route("/relay", post(add_relay_entry))
        .route("/relay/:id", delete(delete_relay_entry))
        .route("/lane", put(assign_lane))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}
