use axum::{extract::rejection::JsonRejection, Json};
use validator::Validate;

use crate::dto::feedback_dto::FeedbackRequest;
use crate::dto::MessageResponse;
use crate::error::{Error, Result};
use crate::models::feedback::FeedbackEntry;

pub async fn submit_feedback(
    payload: std::result::Result<Json<FeedbackRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(payload) = payload.map_err(|_| Error::FeedbackIncomplete)?;
    payload.validate().map_err(|_| Error::FeedbackIncomplete)?;

    let entry = FeedbackEntry::from(payload);
    tracing::info!(
        name = %entry.name,
        email = %entry.email,
        message = %entry.message,
        "feedback received"
    );

    Ok(Json(MessageResponse::new(
        "Feedback Anda telah kami terima. Terima kasih!",
    )))
}
