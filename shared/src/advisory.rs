use std::str::FromStr;

use serde::Serialize;
use strum_macros::{Display, IntoStaticStr};

use crate::grade::KoaGrade;

/// Visual styling tier of an advisory panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub grade: KoaGrade,
    pub finding: &'static str,
    pub finding_tier: Severity,
    pub next_steps: [&'static str; 3],
    pub next_steps_tier: Severity,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown KOA label: {0:?}")]
pub struct UnknownLabel(pub String);

/// Canned advisory text, indexed by `KoaGrade::index()`.
pub const ADVISORIES: [Advisory; KoaGrade::COUNT] = [
    Advisory {
        grade: KoaGrade::Healthy,
        finding: "No significant abnormalities detected.",
        finding_tier: Severity::Info,
        next_steps: [
            "Maintain an active lifestyle.",
            "Follow a balanced diet for joint health.",
            "Monitor for any future symptoms.",
        ],
        next_steps_tier: Severity::Success,
    },
    Advisory {
        grade: KoaGrade::Doubtful,
        finding: "Possible early-stage KOA with minor cartilage wear.",
        finding_tier: Severity::Info,
        next_steps: [
            "Regularly monitor symptoms.",
            "Start light exercises to maintain mobility.",
            "Consult a doctor if discomfort increases.",
        ],
        next_steps_tier: Severity::Warning,
    },
    Advisory {
        grade: KoaGrade::Mild,
        finding: "Mild KOA detected, with slight joint space narrowing.",
        finding_tier: Severity::Info,
        next_steps: [
            "Consider physical therapy for joint flexibility.",
            "Use mild pain relievers if needed.",
            "Maintain a healthy weight to reduce joint stress.",
        ],
        next_steps_tier: Severity::Warning,
    },
    Advisory {
        grade: KoaGrade::Moderate,
        finding: "Moderate KOA with noticeable joint damage and osteophyte formation.",
        finding_tier: Severity::Info,
        next_steps: [
            "Consult an orthopedic specialist for treatment options.",
            "Consider lifestyle modifications and joint-support supplements.",
            "Use assistive devices if experiencing pain during movement.",
        ],
        next_steps_tier: Severity::Error,
    },
    Advisory {
        grade: KoaGrade::Severe,
        finding: "Severe KOA with significant cartilage loss and bone deformity.",
        finding_tier: Severity::Info,
        next_steps: [
            "Seek immediate medical consultation for treatment options.",
            "Surgical intervention (such as knee replacement) may be necessary.",
            "Pain management and mobility support strategies should be prioritized.",
        ],
        next_steps_tier: Severity::Error,
    },
];

// Entry i must describe grade i.
const _: () = {
    let mut i = 0;
    while i < ADVISORIES.len() {
        assert!(ADVISORIES[i].grade.index() == i);
        i += 1;
    }
};

pub fn advisory(grade: KoaGrade) -> &'static Advisory {
    &ADVISORIES[grade.index()]
}

/// Looks up the advisory for a label string. Labels outside the closed
/// grade set are rejected rather than rendered as an empty panel.
pub fn advisory_for_label(label: &str) -> Result<&'static Advisory, UnknownLabel> {
    KoaGrade::from_str(label)
        .map(advisory)
        .map_err(|_| UnknownLabel(label.to_string()))
}
