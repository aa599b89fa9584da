use image::imageops::{self, FilterType};

/// Spatial size the model was trained on.
pub const INPUT_SIZE: u32 = 224;
pub const CHANNELS: usize = 3;

/// A single-image NHWC batch: shape `[1, INPUT_SIZE, INPUT_SIZE, 3]`, values
/// in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    data: Vec<f32>,
}

impl ImageTensor {
    pub fn shape() -> [usize; 4] {
        [1, INPUT_SIZE as usize, INPUT_SIZE as usize, CHANNELS]
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

/// Decodes `bytes`, drops any alpha, stretches to `INPUT_SIZE` square without
/// preserving aspect ratio, and scales channels to `[0, 1]`.
pub fn preprocess_image(bytes: &[u8]) -> Result<ImageTensor, image::ImageError> {
    let rgb = image::load_from_memory(bytes)?.to_rgb8();
    let resized = imageops::resize(&rgb, INPUT_SIZE, INPUT_SIZE, FilterType::CatmullRom);
    let data = resized
        .into_raw()
        .into_iter()
        .map(|v| f32::from(v) / 255.0)
        .collect();
    Ok(ImageTensor { data })
}
