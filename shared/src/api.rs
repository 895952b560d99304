use serde::{Deserialize, Serialize};

use crate::grade::{CLASS_LABELS, KoaGrade};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub label: KoaGrade,
    /// Top-class probability as a percentage in `[0, 100]`.
    pub confidence: f32,
    pub probabilities: Vec<f32>,
    pub class_labels: Vec<String>,
}

impl PredictResponse {
    pub fn new(label: KoaGrade, confidence: f32, probabilities: Vec<f32>) -> Self {
        Self {
            label,
            confidence,
            probabilities,
            class_labels: CLASS_LABELS.iter().map(|l| l.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
