use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Kellgren-Lawrence style severity grades, in the order the classifier
/// emits them. The discriminant is the index into the model output vector.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum KoaGrade {
    Healthy = 0,
    Doubtful = 1,
    Mild = 2,
    Moderate = 3,
    Severe = 4,
}

/// Label strings in model output order.
pub const CLASS_LABELS: [&str; KoaGrade::COUNT] = ["Healthy", "Doubtful", "Mild", "Moderate", "Severe"];

impl KoaGrade {
    pub const COUNT: usize = 5;

    pub const ALL: [KoaGrade; Self::COUNT] = [
        KoaGrade::Healthy,
        KoaGrade::Doubtful,
        KoaGrade::Mild,
        KoaGrade::Moderate,
        KoaGrade::Severe,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        CLASS_LABELS[self.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn labels_follow_output_order() {
        for (i, grade) in KoaGrade::ALL.iter().enumerate() {
            assert_eq!(grade.index(), i);
            assert_eq!(KoaGrade::from_index(i), Some(*grade));
            assert_eq!(grade.label(), CLASS_LABELS[i]);
            assert_eq!(grade.to_string(), CLASS_LABELS[i]);
        }
        assert_eq!(KoaGrade::from_index(KoaGrade::COUNT), None);
    }

    #[test]
    fn parses_labels_ignoring_case() {
        assert_eq!(KoaGrade::from_str("Mild").unwrap(), KoaGrade::Mild);
        assert_eq!(KoaGrade::from_str("severe").unwrap(), KoaGrade::Severe);
        assert!(KoaGrade::from_str("Critical").is_err());
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&KoaGrade::Moderate).unwrap();
        assert_eq!(json, "\"Moderate\"");
        let back: KoaGrade = serde_json::from_str("\"Doubtful\"").unwrap();
        assert_eq!(back, KoaGrade::Doubtful);
    }
}
