use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest};
use crate::dto::MessageResponse;
use crate::error::{Error, Result};
use crate::AppState;

pub async fn register(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload.map_err(|e| {
        tracing::debug!(error = %e, "unreadable register body");
        Error::IncompleteData
    })?;

    state.auth_service.register(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Registrasi berhasil!")),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>> {
    let Json(payload) = payload.map_err(|e| {
        tracing::debug!(error = %e, "unreadable login body");
        Error::MissingFields
    })?;

    let response = state.auth_service.login(payload).await?;
    Ok(Json(response))
}
