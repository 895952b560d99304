use std::path::Path;

use ndarray::ArrayView4;
use tract_onnx::prelude::*;

use super::model::Classifier;
use super::preprocess::INPUT_SHAPE;
use super::InferenceError;

type Plan = TypedRunnableModel<TypedModel>;

/// ONNX export of the grading network, run with tract.
pub struct OnnxClassifier {
    plan: Plan,
}

impl OnnxClassifier {
    pub fn load(path: &Path) -> Result<Self, InferenceError> {
        let load_error = |e: TractError| InferenceError::ModelLoad {
            path: path.display().to_string(),
            reason: format!("{e:#}"),
        };

        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .map_err(load_error)?
            .with_input_fact(0, f32::fact(INPUT_SHAPE).into())
            .map_err(load_error)?
            .into_optimized()
            .map_err(load_error)?
            .into_runnable()
            .map_err(load_error)?;

        log::info!("Loaded ONNX model from {}", path.display());
        Ok(Self { plan })
    }
}

impl Classifier for OnnxClassifier {
    fn forward(&self, input: ArrayView4<'_, f32>) -> Result<Vec<f32>, InferenceError> {
        let data: Vec<f32> = input.iter().copied().collect();
        let tensor = Tensor::from_shape(input.shape(), &data)
            .map_err(|e| InferenceError::Engine(format!("{e:#}")))?;

        let outputs = self
            .plan
            .run(tvec!(tensor.into()))
            .map_err(|e| InferenceError::Engine(format!("{e:#}")))?;

        let output = outputs
            .first()
            .ok_or_else(|| InferenceError::Engine("model produced no outputs".to_string()))?;
        let view = output
            .to_array_view::<f32>()
            .map_err(|e| InferenceError::Engine(format!("{e:#}")))?;
        Ok(view.iter().copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ModelConfig, ModelEngine};
    use crate::inference::Model;
    use approx::assert_relative_eq;
    use image::{DynamicImage, GrayImage, Rgb, RgbImage};
    use ndarray::Array4;
    use shared::KoaGrade;
    use std::path::PathBuf;

    /// `koa_tiny.onnx` takes the mean of the (1, 224, 224, 1) input, multiplies
    /// it by `[-4, -2, 0, 2, 4]`, adds `[2, 1, 0, -1, -2]` and applies softmax.
    /// Black grades Healthy and white grades Severe, both at about 63.64%.
    fn fixture() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/koa_tiny.onnx")
    }

    #[test]
    fn forward_pass_returns_one_probability_per_grade() {
        let classifier = OnnxClassifier::load(&fixture()).unwrap();
        let blank = Array4::<f32>::zeros((1, 224, 224, 1));

        let output = classifier.forward(blank.view()).unwrap();
        assert_eq!(output.len(), KoaGrade::COUNT);
        assert_relative_eq!(output.iter().sum::<f32>(), 1.0, epsilon = 1e-5);
        assert!(output.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn loaded_model_grades_images_end_to_end() {
        let model = Model::load(&ModelConfig {
            path: fixture(),
            engine: ModelEngine::Onnx,
        })
        .unwrap();

        let black = DynamicImage::ImageLuma8(GrayImage::new(300, 200));
        let first = model.predict(&black).unwrap();
        assert_eq!(first.label, KoaGrade::Healthy);
        assert_relative_eq!(first.confidence, 63.64, epsilon = 0.01);
        assert_eq!(first.probabilities.len(), KoaGrade::COUNT);
        assert_eq!(first, model.predict(&black).unwrap());

        let white = DynamicImage::ImageRgb8(RgbImage::from_pixel(120, 160, Rgb([255, 255, 255])));
        let severe = model.predict(&white).unwrap();
        assert_eq!(severe.label, KoaGrade::Severe);
        assert!((0.0..=100.0).contains(&severe.confidence));
    }

    #[test]
    fn missing_artifact_is_a_load_error() {
        let err = OnnxClassifier::load(Path::new("model/does-not-exist.onnx"))
            .err()
            .unwrap();
        match err {
            InferenceError::ModelLoad { path, .. } => {
                assert_eq!(path, "model/does-not-exist.onnx");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn garbage_artifact_is_a_load_error() {
        let path = std::env::temp_dir().join(format!("koa-garbage-{}.onnx", std::process::id()));
        std::fs::write(&path, b"definitely not protobuf").unwrap();
        let result = OnnxClassifier::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(InferenceError::ModelLoad { .. })));
    }
}
