use serde::{Deserialize, Serialize};

/// Evaluation figures reported for the shipped model. These are fixed at
/// release time; nothing recomputes them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub accuracy: f32,
    pub precision: f32,
    pub recall: f32,
    pub f1_score: f32,
}

impl ModelMetrics {
    pub const fn reported() -> Self {
        Self {
            accuracy: 0.83,
            precision: 0.84,
            recall: 0.83,
            f1_score: 0.83,
        }
    }

    /// `(title, value)` pairs in display order.
    pub fn entries(&self) -> [(&'static str, f32); 4] {
        [
            ("Accuracy", self.accuracy),
            ("Precision", self.precision),
            ("Recall", self.recall),
            ("F1-Score", self.f1_score),
        ]
    }

    /// Formats a ratio as a percentage with two decimals, e.g. `83.00%`.
    pub fn as_percent(value: f32) -> String {
        format!("{:.2}%", value * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reported_metrics_are_fixed() {
        let first = ModelMetrics::reported();
        assert_eq!(first, ModelMetrics::reported());
        assert_eq!(first.accuracy, 0.83);
        assert_eq!(first.precision, 0.84);
        assert_eq!(first.recall, 0.83);
        assert_eq!(first.f1_score, 0.83);
    }

    #[test]
    fn formats_entries_as_percentages() {
        let rendered: Vec<String> = ModelMetrics::reported()
            .entries()
            .iter()
            .map(|(title, value)| format!("{title}: {}", ModelMetrics::as_percent(*value)))
            .collect();
        assert_eq!(
            rendered,
            vec!["Accuracy: 83.00%", "Precision: 84.00%", "Recall: 83.00%", "F1-Score: 83.00%"]
        );
    }

    #[test]
    fn uses_snake_case_field_names() {
        let json = serde_json::to_value(ModelMetrics::reported()).unwrap();
        assert!(json.get("f1_score").is_some());
        assert_eq!(json.as_object().unwrap().len(), 4);
    }
}
