use image::DynamicImage;
use ndarray::{Array4, ArrayView4};
use shared::KoaGrade;

use super::preprocess::{INPUT_SHAPE, decode_image, preprocess};
use super::InferenceError;
use crate::config::{ModelConfig, ModelEngine};

/// One forward pass of a pretrained network over a `(1, 224, 224, 1)` tensor.
pub trait Classifier: Send + Sync {
    fn forward(&self, input: ArrayView4<'_, f32>) -> Result<Vec<f32>, InferenceError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: KoaGrade,
    pub confidence: f32,
    pub probabilities: Vec<f32>,
}

/// Loaded once at startup and shared read-only by every request.
pub struct Model {
    classifier: Box<dyn Classifier>,
}

impl Model {
    pub fn new(classifier: impl Classifier + 'static) -> Self {
        Self {
            classifier: Box::new(classifier),
        }
    }

    pub fn load(config: &ModelConfig) -> Result<Self, InferenceError> {
        let model = match config.engine {
            ModelEngine::Onnx => Self::new(super::onnx::OnnxClassifier::load(&config.path)?),
            #[cfg(feature = "torch")]
            ModelEngine::Torch => Self::new(super::torch::TorchClassifier::load(&config.path)?),
            #[cfg(not(feature = "torch"))]
            ModelEngine::Torch => return Err(InferenceError::EngineUnavailable(ModelEngine::Torch)),
        };
        model.probe()?;
        Ok(model)
    }

    /// Runs a blank tensor through the network so an artifact whose output
    /// does not line up with the label set fails at startup.
    pub fn probe(&self) -> Result<(), InferenceError> {
        let blank = Array4::<f32>::zeros((INPUT_SHAPE[0], INPUT_SHAPE[1], INPUT_SHAPE[2], INPUT_SHAPE[3]));
        let output = self.inference(blank.view())?;
        calculate_result(&output).map(|_| ())
    }

    pub fn inference(&self, tensor: ArrayView4<'_, f32>) -> Result<Vec<f32>, InferenceError> {
        if tensor.shape() != INPUT_SHAPE {
            return Err(InferenceError::InputShape {
                expected: INPUT_SHAPE,
                found: tensor.shape().to_vec(),
            });
        }
        self.classifier.forward(tensor)
    }

    pub fn predict(&self, image: &DynamicImage) -> Result<Prediction, InferenceError> {
        let tensor = preprocess(image);
        let probabilities = self.inference(tensor.view())?;
        let (label, confidence) = calculate_result(&probabilities)?;
        Ok(Prediction {
            label,
            confidence,
            probabilities,
        })
    }

    pub fn predict_bytes(&self, bytes: &[u8]) -> Result<Prediction, InferenceError> {
        let image = decode_image(bytes)?;
        self.predict(&image)
    }
}

/// Arg-max label (first index on ties) and its probability as a percentage.
pub fn calculate_result(probabilities: &[f32]) -> Result<(KoaGrade, f32), InferenceError> {
    if probabilities.len() != KoaGrade::COUNT {
        return Err(InferenceError::OutputShape {
            expected: KoaGrade::COUNT,
            found: probabilities.len(),
        });
    }
    if probabilities.iter().any(|p| !p.is_finite()) {
        return Err(InferenceError::Engine(format!(
            "non-finite model output: {probabilities:?}"
        )));
    }

    let (index, max) = probabilities
        .iter()
        .copied()
        .enumerate()
        .fold((0, probabilities[0]), |best, (i, p)| if p > best.1 { (i, p) } else { best });

    let label = KoaGrade::from_index(index).ok_or(InferenceError::OutputShape {
        expected: KoaGrade::COUNT,
        found: probabilities.len(),
    })?;
    Ok((label, (max * 100.0).clamp(0.0, 100.0)))
}
