use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::Error;
use crate::AppState;

/// Rejects the request with 401 unless it carries a valid
/// `Authorization: Bearer <jwt>`. On success the token's
/// [`Claims`](crate::services::token_service::Claims) are put in the request
/// extensions.
pub async fn require_bearer_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(auth_header) = req.headers().get(AUTHORIZATION) else {
        return Error::Unauthenticated("missing_authorization").into_response();
    };
    let Ok(auth_str) = auth_header.to_str() else {
        return Error::Unauthenticated("bad_authorization").into_response();
    };
    let Some(token) = auth_str.strip_prefix("Bearer ") else {
        return Error::Unauthenticated("unsupported_scheme").into_response();
    };

    match state.token_service.verify(token.trim()) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(err) => err.into_response(),
    }
}
