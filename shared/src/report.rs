use crate::advisory::Severity;

/// A pre-rendered evaluation chart with its canned interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPanel {
    pub title: &'static str,
    /// File name under the assets directory.
    pub image: &'static str,
    pub caption: &'static str,
    pub interpretation: &'static [&'static str],
    pub tier: Severity,
}

pub const CONFUSION_MATRIX: ChartPanel = ChartPanel {
    title: "Confusion Matrix",
    image: "conf-mat.png",
    caption: "Confusion Matrix",
    interpretation: &[
        "The model accurately classifies \"Healthy\" and \"Doubtful\" KOA grades with high confidence.",
        "Severe KOA cases are mostly predicted correctly, which is crucial for medical diagnosis.",
    ],
    tier: Severity::Info,
};

pub const TRAINING_CHARTS: [ChartPanel; 4] = [
    ChartPanel {
        title: "Training & Validation Accuracy",
        image: "acc.png",
        caption: "Accuracy Curve",
        interpretation: &[
            "Both accuracies show a consistent upward trend, indicating effective learning.",
            "The validation accuracy closely follows the training accuracy, showing good generalization.",
        ],
        tier: Severity::Success,
    },
    ChartPanel {
        title: "ROC Curve",
        image: "roc.png",
        caption: "Receiver Operating Characteristic (ROC) Curve",
        interpretation: &[
            "High AUC values (>= 0.90) across all classes confirm strong classification capability.",
            "The model performs exceptionally well in detecting \"Moderate\" and \"Severe\" KOA cases (AUC = 0.98, 0.99).",
        ],
        tier: Severity::Info,
    },
    ChartPanel {
        title: "Training & Validation Loss",
        image: "loss.png",
        caption: "Loss Curve",
        interpretation: &[
            "The steady decline in loss demonstrates good model convergence.",
            "The training process is effective, leading to improved performance over epochs.",
        ],
        tier: Severity::Warning,
    },
    ChartPanel {
        title: "Precision-Recall Curve",
        image: "precall.png",
        caption: "Precision-Recall Curve",
        interpretation: &[
            "The model maintains high precision and recall for critical KOA grades like \"Healthy\" and \"Severe,\" ensuring reliable classification.",
            "The curves indicate strong performance in distinguishing relevant cases from irrelevant ones.",
        ],
        tier: Severity::Success,
    },
];

/// Page and panel headings.
pub const UPLOAD_TITLE: &str = "Upload Your X-ray for KOA Detection";
pub const FINDINGS_HEADING: &str = "Diagnostic Findings";
pub const NEXT_STEPS_HEADING: &str = "Suggested Next Steps";
pub const METRICS_TITLE: &str = "Model Performance Metrics";
pub const PERFORMANCE_OVERVIEW: &str = "Performance Overview";
pub const INSIGHTS_TITLE: &str = "Model Insights & Analytics";

/// Images shown on the landing page and sidebar.
pub const LOGO: &str = "0_LOGO.png";
pub const HOME_IMAGES: [&str; 3] = ["1_bg.png", "2_aboutus.png", "3_objective.png"];

/// Every static image the dashboard references.
pub fn asset_files() -> impl Iterator<Item = &'static str> {
    std::iter::once(LOGO)
        .chain(HOME_IMAGES)
        .chain(std::iter::once(CONFUSION_MATRIX.image))
        .chain(TRAINING_CHARTS.iter().map(|chart| chart.image))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn asset_names_are_unique() {
        let names: Vec<&str> = asset_files().collect();
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(names.len(), 9);
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn every_chart_carries_an_interpretation() {
        for chart in TRAINING_CHARTS.iter().chain(std::iter::once(&CONFUSION_MATRIX)) {
            assert!(!chart.interpretation.is_empty(), "{}", chart.title);
            assert!(chart.image.ends_with(".png"));
        }
    }

    #[test]
    fn headings_match_the_dashboard_copy() {
        assert_eq!(FINDINGS_HEADING, "Diagnostic Findings");
        assert_eq!(NEXT_STEPS_HEADING, "Suggested Next Steps");
        assert_eq!(INSIGHTS_TITLE, "Model Insights & Analytics");
        assert_eq!(METRICS_TITLE, "Model Performance Metrics");
        assert_eq!(PERFORMANCE_OVERVIEW, "Performance Overview");
        assert_eq!(UPLOAD_TITLE, "Upload Your X-ray for KOA Detection");
    }
}
