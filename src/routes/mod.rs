pub mod auth;
pub mod feedback;
pub mod health;
pub mod predict;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::middleware::auth::require_bearer_auth;
use crate::AppState;

/// All endpoints with their state attached. Transport layers (CORS, tracing,
/// body limits) are added by the binary.
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/predict", post(predict::predict))
        .route("/api/analyze", post(predict::analyze_base64))
        .route_layer(from_fn_with_state(state.clone(), require_bearer_auth));

    Router::new()
        .route("/", get(health::home))
        .route("/health", get(health::home))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/feedback", post(feedback::submit_feedback))
        .merge(protected)
        .with_state(state)
}
