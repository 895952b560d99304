pub mod model;
pub mod onnx;
pub mod preprocess;
#[cfg(feature = "torch")]
pub mod torch;

pub use model::Model;

use crate::config::ModelEngine;

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("failed to load model from {path}: {reason}")]
    ModelLoad { path: String, reason: String },
    #[error("model engine {0:?} is not compiled into this build")]
    EngineUnavailable(ModelEngine),
    #[error("unsupported image format, expected PNG or JPEG")]
    UnsupportedFormat,
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("input tensor has shape {found:?}, model expects {expected:?}")]
    InputShape {
        expected: [usize; 4],
        found: Vec<usize>,
    },
    #[error("model returned {found} outputs, expected {expected}")]
    OutputShape { expected: usize, found: usize },
    #[error("model error: {0}")]
    Engine(String),
}
