use std::path::Path;

use tract_onnx::prelude::*;

use super::{ClassifierError, ImageTensor, SkinClassifier};

type Plan = TypedRunnableModel<TypedModel>;

/// Runs the exported skin-type network with tract. The plan is optimized once
/// at load time and is immutable afterwards, so one instance serves every
/// request.
pub struct OnnxSkinClassifier {
    plan: Plan,
}

impl OnnxSkinClassifier {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "loading skin classifier model");

        let plan = tract_onnx::onnx()
            .model_for_path(path)?
            .with_input_fact(0, f32::fact(ImageTensor::shape()).into())?
            .into_optimized()?
            .into_runnable()?;

        Ok(Self { plan })
    }
}

impl SkinClassifier for OnnxSkinClassifier {
    fn predict(&self, input: &ImageTensor) -> Result<Vec<f32>, ClassifierError> {
        let [n, h, w, c] = ImageTensor::shape();
        let array = tract_ndarray::Array4::from_shape_vec((n, h, w, c), input.as_slice().to_vec())
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;
        let tensor: Tensor = array.into();

        let outputs = self
            .plan
            .run(tvec!(tensor.into()))
            .map_err(|e| ClassifierError::Inference(format!("{e:#}")))?;

        let first = outputs
            .first()
            .ok_or_else(|| ClassifierError::Inference("model produced no outputs".to_string()))?;
        let scores = first
            .to_array_view::<f32>()
            .map_err(|e| ClassifierError::Inference(format!("{e:#}")))?;

        Ok(scores.iter().copied().collect())
    }
}

impl std::fmt::Debug for OnnxSkinClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxSkinClassifier").finish_non_exhaustive()
    }
}
