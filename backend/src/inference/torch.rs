use std::path::Path;
use std::sync::Mutex;

use ndarray::ArrayView4;
use tch::{CModule, Device, Kind, Tensor};

use super::model::Classifier;
use super::InferenceError;

/// TorchScript export of the grading network. `CModule` is not `Sync`, so
/// forward passes are serialized.
pub struct TorchClassifier {
    module: Mutex<CModule>,
    device: Device,
}

impl TorchClassifier {
    pub fn load(path: &Path) -> Result<Self, InferenceError> {
        let device = Device::cuda_if_available();
        let module = CModule::load_on_device(path, device).map_err(|e| InferenceError::ModelLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        log::info!("Loaded TorchScript model from {} on {:?}", path.display(), device);
        Ok(Self {
            module: Mutex::new(module),
            device,
        })
    }
}

impl Classifier for TorchClassifier {
    fn forward(&self, input: ArrayView4<'_, f32>) -> Result<Vec<f32>, InferenceError> {
        let shape: Vec<i64> = input.shape().iter().map(|&d| d as i64).collect();
        let data: Vec<f32> = input.iter().copied().collect();
        let tensor = Tensor::from_slice(&data).reshape(shape.as_slice()).to_device(self.device);

        let module = self
            .module
            .lock()
            .map_err(|_| InferenceError::Engine("model lock poisoned".to_string()))?;
        let output = tch::no_grad(|| module.forward_ts(&[tensor]))
            .map_err(|e| InferenceError::Engine(e.to_string()))?;

        let output = output.to_kind(Kind::Float).to_device(Device::Cpu).view([-1]);
        Vec::<f32>::try_from(&output).map_err(|e| InferenceError::Engine(e.to_string()))
    }
}
