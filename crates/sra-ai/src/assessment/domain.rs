use serde::{Deserialize, Serialize};
use std::fmt;

/// The three answer values the questionnaire accepts. Serialized with the
/// original wire spelling (`"Yes"` / `"No"` / `"Unsure"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerValue {
    Yes,
    No,
    Unsure,
}

impl AnswerValue {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Unsure => "Unsure",
        }
    }

    /// Share of a question's weight earned by this answer.
    pub const fn credit_factor(self) -> f64 {
        match self {
            Self::Yes => 1.0,
            Self::Unsure => 0.5,
            Self::No => 0.0,
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Security Rule safeguard families used to bucket per-category scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SafeguardCategory {
    Administrative,
    Physical,
    Technical,
    Program,
}

impl SafeguardCategory {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Administrative,
            Self::Physical,
            Self::Technical,
            Self::Program,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Administrative => "Administrative",
            Self::Physical => "Physical",
            Self::Technical => "Technical",
            Self::Program => "Program",
        }
    }
}

/// HIPAA classification of a safeguard specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequirementKind {
    Required,
    Addressable,
}

impl RequirementKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Required => "Required",
            Self::Addressable => "Addressable",
        }
    }
}

/// Risk classification derived from a finding's likelihood x impact score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Step function over the integer score in [1, 9]; boundaries closed at
    /// 3 and 6.
    pub const fn from_score(score: u8) -> Self {
        match score {
            0..=3 => Self::Low,
            4..=6 => Self::Medium,
            _ => Self::High,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Position in the High -> Medium -> Low display order.
    pub(crate) const fn display_rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

/// A single questionnaire entry. Immutable data defined at process start;
/// `trigger_answers` alone decides whether an answer produces a finding, so
/// new questions require no new code.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionDefinition {
    pub id: &'static str,
    pub category: SafeguardCategory,
    /// Relative importance within the category, 1 (low) to 3 (high).
    pub weight: u8,
    pub question: &'static str,
    pub citation: &'static str,
    pub required: RequirementKind,
    /// Answer values that cause a finding to be emitted.
    pub trigger_answers: &'static [AnswerValue],
    pub finding_title: &'static str,
    pub default_likelihood: u8,
    pub default_impact: u8,
    pub recommendation: &'static str,
}

/// Load-time validation failures for externally supplied catalogs.
#[derive(Debug)]
pub enum CatalogError {
    DuplicateId(String),
    InvalidWeight { id: String, weight: u8 },
    InvalidRating { id: String, field: &'static str, value: u8 },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DuplicateId(id) => {
                write!(f, "question id '{}' appears more than once", id)
            }
            CatalogError::InvalidWeight { id, weight } => {
                write!(f, "question '{}' has weight {} outside 1..=3", id, weight)
            }
            CatalogError::InvalidRating { id, field, value } => {
                write!(f, "question '{}' has {} {} outside 1..=3", id, field, value)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_factors_match_answer_semantics() {
        assert_eq!(AnswerValue::Yes.credit_factor(), 1.0);
        assert_eq!(AnswerValue::Unsure.credit_factor(), 0.5);
        assert_eq!(AnswerValue::No.credit_factor(), 0.0);
    }

    #[test]
    fn risk_level_boundaries_are_closed_at_three_and_six() {
        assert_eq!(RiskLevel::from_score(1), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(3), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(4), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(6), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(7), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(9), RiskLevel::High);
    }

    #[test]
    fn answer_values_serialize_with_original_spelling() {
        assert_eq!(
            serde_json::to_string(&AnswerValue::Unsure).expect("serializes"),
            "\"Unsure\""
        );
        assert_eq!(
            serde_json::to_string(&RiskLevel::Medium).expect("serializes"),
            "\"Medium\""
        );
    }
}
