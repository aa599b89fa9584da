//! Skin-type inference: image preprocessing and the classifier seam.
//!
//! The model is opaque to the rest of the crate. Anything implementing
//! [`SkinClassifier`] can back the HTTP layer; production uses
//! [`onnx::OnnxSkinClassifier`], tests plug in stubs.

pub mod onnx;
pub mod preprocess;

pub use preprocess::{preprocess_image, ImageTensor, INPUT_SIZE};

use crate::models::prediction::SkinType;

#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("model inference failed: {0}")]
    Inference(String),

    #[error("model returned {actual} scores, expected {expected}")]
    OutputShape { expected: usize, actual: usize },

    #[error("model returned a non-finite score")]
    NonFinite,
}

/// A pretrained model mapping a preprocessed photo to one score per
/// [`SkinType`], in [`SkinType::ALL`] order.
#[cfg_attr(test, mockall::automock)]
pub trait SkinClassifier: Send + Sync {
    fn predict(&self, input: &ImageTensor) -> Result<Vec<f32>, ClassifierError>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub skin_type: SkinType,
    /// Winning probability as a percentage in `[0, 100]`.
    pub confidence: f64,
}

impl Classification {
    /// Picks the arg-max label. Ties go to the lowest index.
    pub fn from_scores(scores: &[f32]) -> Result<Self, ClassifierError> {
        if scores.len() != SkinType::ALL.len() {
            return Err(ClassifierError::OutputShape {
                expected: SkinType::ALL.len(),
                actual: scores.len(),
            });
        }
        if scores.iter().any(|s| !s.is_finite()) {
            return Err(ClassifierError::NonFinite);
        }

        let (index, best) = scores
            .iter()
            .copied()
            .enumerate()
            .fold((0, scores[0]), |acc, (i, s)| if s > acc.1 { (i, s) } else { acc });

        let skin_type = SkinType::from_index(index).ok_or(ClassifierError::OutputShape {
            expected: SkinType::ALL.len(),
            actual: scores.len(),
        })?;

        Ok(Self {
            skin_type,
            confidence: (f64::from(best) * 100.0).clamp(0.0, 100.0),
        })
    }

    pub fn confidence_label(&self) -> String {
        format!("{:.2}", self.confidence)
    }
}
