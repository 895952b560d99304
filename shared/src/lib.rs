pub mod advisory;
pub mod api;
pub mod grade;
pub mod metrics;
pub mod report;

pub use advisory::{ADVISORIES, Advisory, Severity, UnknownLabel, advisory, advisory_for_label};
pub use api::{ErrorResponse, HealthResponse, PredictResponse};
pub use grade::{CLASS_LABELS, KoaGrade};
pub use metrics::ModelMetrics;
pub use report::{CONFUSION_MATRIX, ChartPanel, TRAINING_CHARTS};
