//! Axum router wiring.
//!
//! - `/api/users` CRUD + `/api/users/search?name=`
//! - `/healthz`, `/readyz`, `/metrics`

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{api::users, app_state::AppState, obs, ops};

pub fn build_router(state: AppState) -> Router {
    let max_body = state.cfg().server.max_body_bytes;

    let api = Router::new()
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route("/api/users/search", get(users::search_users))
        .route(
            "/api/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), obs::http::track_http));

    Router::new()
        .merge(api)
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
