use std::sync::Arc;

use bytes::Bytes;

use crate::error::{Error, Result};
use crate::inference::{preprocess_image, Classification, ClassifierError, SkinClassifier};
use crate::models::prediction::PredictionResult;
use crate::services::recommendation_service;

/// Why an analysis failed. Callers outside this module only ever see
/// [`Error::AnalysisFailed`]; the distinction is kept for the logs.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("could not decode upload as an image: {0}")]
    Decode(#[from] image::ImageError),

    #[error(transparent)]
    Model(#[from] ClassifierError),
}

#[derive(Clone)]
pub struct AnalysisService {
    classifier: Arc<dyn SkinClassifier>,
}

impl AnalysisService {
    pub fn new(classifier: Arc<dyn SkinClassifier>) -> Self {
        Self { classifier }
    }

    /// Full pipeline on the calling thread: decode, resize, predict, and
    /// attach the canned advice.
    pub fn analyze(&self, image_bytes: &[u8]) -> std::result::Result<PredictionResult, AnalysisError> {
        let tensor = preprocess_image(image_bytes)?;
        let scores = self.classifier.predict(&tensor)?;
        let classification = Classification::from_scores(&scores)?;

        let label = classification.skin_type.as_str();
        Ok(PredictionResult {
            skin_type: classification.skin_type,
            confidence: classification.confidence_label(),
            recommendations: recommendation_service::recommendations_for_label(label),
            description: recommendation_service::description_for_label(label).to_string(),
        })
    }

    /// Runs [`Self::analyze`] on the blocking pool and collapses every
    /// failure into the generic client-facing error.
    pub async fn analyze_upload(&self, image_bytes: Bytes) -> Result<PredictionResult> {
        let service = self.clone();
        let size = image_bytes.len();
        let outcome = tokio::task::spawn_blocking(move || service.analyze(&image_bytes)).await;

        match outcome {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(AnalysisError::Decode(e))) => {
                tracing::error!(error = %e, bytes = size, "upload is not a decodable image");
                Err(Error::AnalysisFailed)
            }
            Ok(Err(AnalysisError::Model(e))) => {
                tracing::error!(error = %e, bytes = size, "skin classifier failed");
                Err(Error::AnalysisFailed)
            }
            Err(e) => {
                tracing::error!(error = %e, "analysis task did not complete");
                Err(Error::AnalysisFailed)
            }
        }
    }
}
