use super::catalog::QuestionCatalog;
use super::domain::AnswerValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Map key for the synthetic whole-assessment bucket.
pub const OVERALL_KEY: &str = "Overall";

/// Answers keyed by question id.
///
/// Lookup semantics differ by consumer and the difference is a contract:
/// scoring treats a missing answer as Unsure ([`AnswerSet::answer_or_unsure`])
/// while findings derivation uses the strict [`AnswerSet::answer`] and emits
/// nothing for an absent id. Both call sites must change together.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: HashMap<String, AnswerValue>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, value: AnswerValue) {
        self.answers.insert(id.into(), value);
    }

    /// Strict lookup; absent ids yield `None`.
    pub fn answer(&self, id: &str) -> Option<AnswerValue> {
        self.answers.get(id).copied()
    }

    /// Defaulting lookup used by the scoring engine only.
    pub fn answer_or_unsure(&self, id: &str) -> AnswerValue {
        self.answer(id).unwrap_or(AnswerValue::Unsure)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, AnswerValue)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (S, AnswerValue)>>(iter: I) -> Self {
        Self {
            answers: iter
                .into_iter()
                .map(|(id, value)| (id.into(), value))
                .collect(),
        }
    }
}

/// Weighted compliance percentages per category plus the "Overall" bucket,
/// each rounded to one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreBreakdown {
    percentages: HashMap<String, f64>,
}

impl ScoreBreakdown {
    pub fn overall(&self) -> f64 {
        self.percentage(OVERALL_KEY).unwrap_or(0.0)
    }

    pub fn percentage(&self, bucket: &str) -> Option<f64> {
        self.percentages.get(bucket).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.percentages
            .iter()
            .map(|(bucket, pct)| (bucket.as_str(), *pct))
    }

    pub fn len(&self) -> usize {
        self.percentages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.percentages.is_empty()
    }
}

#[derive(Default)]
struct BucketTotals {
    earned: f64,
    possible: f64,
}

impl BucketTotals {
    fn percentage(&self) -> f64 {
        // Guard division for empty buckets; a zero-question catalog must
        // still report {"Overall": 0.0}.
        let possible = if self.possible == 0.0 {
            1.0
        } else {
            self.possible
        };
        round_percentage(self.earned / possible * 100.0)
    }
}

/// Computes the weighted compliance breakdown.
///
/// Yes earns 100% of a question's weight, Unsure 50%, No 0%. Missing answers
/// default to Unsure here and nowhere else. Pure and deterministic: identical
/// inputs yield bit-identical percentages.
pub fn compute_scores(catalog: &QuestionCatalog, answers: &AnswerSet) -> ScoreBreakdown {
    let mut overall = BucketTotals::default();
    let mut categories: HashMap<String, BucketTotals> = HashMap::new();

    for question in catalog.questions() {
        let weight = f64::from(question.weight);
        let factor = answers.answer_or_unsure(question.id).credit_factor();

        let bucket = categories
            .entry(question.category.label().to_string())
            .or_default();
        bucket.earned += weight * factor;
        bucket.possible += weight;

        overall.earned += weight * factor;
        overall.possible += weight;
    }

    let mut percentages: HashMap<String, f64> = categories
        .into_iter()
        .map(|(bucket, tally)| (bucket, tally.percentage()))
        .collect();
    percentages.insert(OVERALL_KEY.to_string(), overall.percentage());

    ScoreBreakdown { percentages }
}

// Ties at the tenths place round to even, so a 6.25% bucket reports 6.2.
fn round_percentage(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::{
        QuestionDefinition, RequirementKind, SafeguardCategory,
    };

    fn two_question_catalog() -> QuestionCatalog {
        let questions = vec![
            QuestionDefinition {
                id: "Q1",
                category: SafeguardCategory::Administrative,
                weight: 2,
                question: "First control in place?",
                citation: "164.308(a)(1)",
                required: RequirementKind::Required,
                trigger_answers: &[AnswerValue::No, AnswerValue::Unsure],
                finding_title: "First control missing",
                default_likelihood: 3,
                default_impact: 3,
                recommendation: "Implement the first control.",
            },
            QuestionDefinition {
                id: "Q2",
                category: SafeguardCategory::Administrative,
                weight: 1,
                question: "Second control in place?",
                citation: "164.308(a)(2)",
                required: RequirementKind::Required,
                trigger_answers: &[AnswerValue::No],
                finding_title: "Second control missing",
                default_likelihood: 1,
                default_impact: 1,
                recommendation: "Implement the second control.",
            },
        ];
        QuestionCatalog::from_questions(questions).expect("catalog validates")
    }

    fn all_answers(catalog: &QuestionCatalog, value: AnswerValue) -> AnswerSet {
        catalog
            .questions()
            .iter()
            .map(|question| (question.id, value))
            .collect()
    }

    #[test]
    fn all_yes_scores_one_hundred_percent() {
        let catalog = QuestionCatalog::full();
        let answers = all_answers(&catalog, AnswerValue::Yes);
        let breakdown = compute_scores(&catalog, &answers);
        assert_eq!(breakdown.overall(), 100.0);
        for category in SafeguardCategory::ordered() {
            assert_eq!(breakdown.percentage(category.label()), Some(100.0));
        }
    }

    #[test]
    fn all_no_scores_zero_percent() {
        let catalog = QuestionCatalog::full();
        let answers = all_answers(&catalog, AnswerValue::No);
        let breakdown = compute_scores(&catalog, &answers);
        assert_eq!(breakdown.overall(), 0.0);
    }

    #[test]
    fn missing_answers_default_to_unsure() {
        let catalog = QuestionCatalog::core();
        let breakdown = compute_scores(&catalog, &AnswerSet::new());
        assert_eq!(breakdown.overall(), 50.0);
    }

    #[test]
    fn weighted_example_matches_expected_breakdown() {
        let catalog = two_question_catalog();
        let answers: AnswerSet = [("Q1", AnswerValue::No), ("Q2", AnswerValue::Yes)]
            .into_iter()
            .collect();
        let breakdown = compute_scores(&catalog, &answers);
        assert_eq!(breakdown.percentage("Administrative"), Some(33.3));
        assert_eq!(breakdown.overall(), 33.3);
    }

    #[test]
    fn flipping_one_answer_moves_the_category_by_its_weight_share() {
        let catalog = QuestionCatalog::core();
        let mut answers = all_answers(&catalog, AnswerValue::Yes);
        let before = compute_scores(&catalog, &answers);

        let flipped = &catalog.questions()[0];
        answers.insert(flipped.id, AnswerValue::No);
        let after = compute_scores(&catalog, &answers);

        let possible: f64 = catalog
            .questions_for_category(flipped.category)
            .iter()
            .map(|question| f64::from(question.weight))
            .sum();
        let expected_delta = 100.0 * f64::from(flipped.weight) / possible;
        let category = flipped.category.label();
        let actual_delta = before.percentage(category).expect("category scored")
            - after.percentage(category).expect("category scored");
        assert!(
            (actual_delta - expected_delta).abs() <= 0.1,
            "expected delta {expected_delta}, got {actual_delta}"
        );
    }

    #[test]
    fn percentage_ties_round_to_even() {
        assert_eq!(round_percentage(6.25), 6.2);
        assert_eq!(round_percentage(6.75), 6.8);
        assert_eq!(round_percentage(18.75), 18.8);
        assert_eq!(round_percentage(33.4), 33.4);
    }

    #[test]
    fn external_catalog_midpoints_round_to_even() {
        // Weights total 8; a lone Unsure on the weight-1 question earns 0.5,
        // an exact 6.25% midpoint.
        let base = two_question_catalog().questions()[1].clone();
        let questions = vec![
            QuestionDefinition { id: "Q1", weight: 1, ..base.clone() },
            QuestionDefinition { id: "Q2", weight: 1, ..base.clone() },
            QuestionDefinition { id: "Q3", weight: 3, ..base.clone() },
            QuestionDefinition { id: "Q4", weight: 3, ..base },
        ];
        let catalog = QuestionCatalog::from_questions(questions).expect("catalog validates");
        let answers: AnswerSet = [
            ("Q1", AnswerValue::Unsure),
            ("Q2", AnswerValue::No),
            ("Q3", AnswerValue::No),
            ("Q4", AnswerValue::No),
        ]
        .into_iter()
        .collect();

        let breakdown = compute_scores(&catalog, &answers);
        assert_eq!(breakdown.overall(), 6.2);
    }

    #[test]
    fn zero_question_catalog_reports_overall_zero() {
        let catalog = QuestionCatalog::from_questions(Vec::new()).expect("empty is valid");
        let breakdown = compute_scores(&catalog, &AnswerSet::new());
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown.overall(), 0.0);
    }

    #[test]
    fn compute_scores_is_idempotent() {
        let catalog = QuestionCatalog::core();
        let answers = all_answers(&catalog, AnswerValue::Unsure);
        assert_eq!(
            compute_scores(&catalog, &answers),
            compute_scores(&catalog, &answers)
        );
    }
}
