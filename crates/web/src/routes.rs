use axum::Router;

use crate::features::{clubs, entries, events, results, swimmers, times};
use crate::middleware::auth::ApiKeys;
use crate::state::AppState;

pub fn api_router(state: AppState, api_keys: ApiKeys) -> Router {
    let api = Router::new()
        .nest("/swimmers", swimmers::routes::routes(api_keys.clone()))
        .nest("/clubs", clubs::routes::routes(api_keys.clone()))
        .nest("/events", events::routes::routes(api_keys.clone()))
        .nest("/entries", entries::routes::routes(api_keys.clone()))
        .nest("/times", times::routes::routes(api_keys))
        .merge(results::routes::routes());

    Router::new().nest("/api", api).with_state(state)
}
