use serde::{Deserialize, Serialize};

use crate::models::prediction::PredictionResult;

/// JSON variant of an upload: the photo as base64, optionally wrapped in a
/// `data:image/...;base64,` URL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeImageRequest {
    #[serde(default)]
    pub image: Option<String>,
}

impl AnalyzeImageRequest {
    /// Returns the base64 payload with any data-URL prefix removed.
    pub fn base64_payload(&self) -> Option<&str> {
        let raw = self.image.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        let payload = match raw.strip_prefix("data:image/") {
            Some(rest) => match rest.find(";base64,") {
                Some(idx) => &rest[idx + ";base64,".len()..],
                None => raw,
            },
            None => raw,
        };
        Some(payload)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeImageResponse {
    pub data: PredictionResult,
}
