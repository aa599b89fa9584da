use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection, Multipart, State},
    Extension, Json,
};
use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};
use bytes::Bytes;

use crate::dto::analyze_dto::{AnalyzeImageRequest, AnalyzeImageResponse};
use crate::error::{Error, Result};
use crate::models::prediction::PredictionResult;
use crate::services::token_service::Claims;
use crate::AppState;

const FILE_FIELD: &str = "file";

/// Standard alphabet, with or without trailing `=` padding.
const IMAGE_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub async fn predict(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<PredictionResult>> {
    let mut multipart = multipart.map_err(|e| {
        tracing::debug!(error = %e, "predict request is not multipart");
        Error::NoFileUploaded
    })?;

    let mut upload: Option<Bytes> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(FILE_FIELD) {
            upload = Some(field.bytes().await?);
            break;
        }
    }
    let upload = upload.ok_or(Error::NoFileUploaded)?;

    let result = state.analysis_service.analyze_upload(upload).await?;
    tracing::info!(
        email = %claims.sub,
        skin_type = %result.skin_type,
        confidence = %result.confidence,
        "skin analysis completed"
    );
    Ok(Json(result))
}

/// Same pipeline as [`predict`] for clients that send the photo as base64
/// JSON instead of a multipart upload.
pub async fn analyze_base64(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    payload: std::result::Result<Json<AnalyzeImageRequest>, JsonRejection>,
) -> Result<Json<AnalyzeImageResponse>> {
    let missing = || Error::BadRequest("Image data is required.".to_string());
    let Json(payload) = payload.map_err(|_| missing())?;
    let encoded = payload.base64_payload().ok_or_else(missing)?;

    let decoded = IMAGE_BASE64.decode(encoded).map_err(|e| {
        tracing::error!(error = %e, "image payload is not valid base64");
        Error::AnalysisFailed
    })?;

    let result = state
        .analysis_service
        .analyze_upload(Bytes::from(decoded))
        .await?;
    tracing::info!(
        email = %claims.sub,
        skin_type = %result.skin_type,
        "base64 skin analysis completed"
    );
    Ok(Json(AnalyzeImageResponse { data: result }))
}
