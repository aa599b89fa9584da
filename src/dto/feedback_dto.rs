use serde::Deserialize;
use validator::Validate;

use crate::models::feedback::FeedbackEntry;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct FeedbackRequest {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub message: String,
}

impl From<FeedbackRequest> for FeedbackEntry {
    fn from(req: FeedbackRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            message: req.message,
        }
    }
}
