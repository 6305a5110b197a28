use super::catalog::QuestionCatalog;
use super::domain::{AnswerValue, RiskLevel, SafeguardCategory};
use super::scoring::AnswerSet;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// A risk finding derived from a triggering answer. Immutable once created;
/// field names match the original report schema so findings round-trip
/// through the polish service unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub id: String,
    pub category: SafeguardCategory,
    pub title: String,
    pub citation: String,
    pub answer: AnswerValue,
    pub likelihood: u8,
    pub impact: u8,
    pub score: u8,
    pub risk_level: RiskLevel,
    pub recommendation: String,
    pub observation: String,
}

/// Converts triggering answers into findings, in catalog order.
///
/// Lookup here is strict: a question with no recorded answer never matches
/// its trigger set, so it emits nothing. Likelihood and impact are the
/// per-question defaults regardless of which trigger answer was given.
pub fn derive_findings(catalog: &QuestionCatalog, answers: &AnswerSet) -> Vec<Finding> {
    let mut findings = Vec::new();
    for question in catalog.questions() {
        let Some(answer) = answers.answer(question.id) else {
            continue;
        };
        if !question.trigger_answers.contains(&answer) {
            continue;
        }

        let likelihood = question.default_likelihood;
        let impact = question.default_impact;
        let score = likelihood * impact;
        findings.push(Finding {
            id: question.id.to_string(),
            category: question.category,
            title: question.finding_title.to_string(),
            citation: question.citation.to_string(),
            answer,
            likelihood,
            impact,
            score,
            risk_level: RiskLevel::from_score(score),
            recommendation: question.recommendation.to_string(),
            observation: format!("Response was '{}' for: {}", answer, question.question),
        });
    }
    findings
}

/// Presentation order: High -> Medium -> Low, then descending score. The sort
/// is stable, so findings with equal level and score keep catalog order.
pub fn sorted_for_display(findings: &[Finding]) -> Vec<Finding> {
    let mut sorted = findings.to_vec();
    sorted.sort_by_key(|finding| (finding.risk_level.display_rank(), Reverse(finding.score)));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::{QuestionDefinition, RequirementKind};

    fn question(
        id: &'static str,
        trigger_answers: &'static [AnswerValue],
        likelihood: u8,
        impact: u8,
    ) -> QuestionDefinition {
        QuestionDefinition {
            id,
            category: SafeguardCategory::Technical,
            weight: 2,
            question: "Is the control implemented?",
            citation: "164.312(a)(1)",
            required: RequirementKind::Required,
            trigger_answers,
            finding_title: "Control not implemented",
            default_likelihood: likelihood,
            default_impact: impact,
            recommendation: "Implement the control.",
        }
    }

    #[test]
    fn missing_answer_never_triggers() {
        let catalog = QuestionCatalog::from_questions(vec![question(
            "Q1",
            &[AnswerValue::No, AnswerValue::Unsure],
            3,
            3,
        )])
        .expect("catalog validates");
        assert!(derive_findings(&catalog, &AnswerSet::new()).is_empty());
    }

    #[test]
    fn empty_trigger_set_never_produces_a_finding() {
        let catalog = QuestionCatalog::from_questions(vec![question("Q1", &[], 3, 3)])
            .expect("catalog validates");
        for answer in [AnswerValue::Yes, AnswerValue::No, AnswerValue::Unsure] {
            let answers: AnswerSet = [("Q1", answer)].into_iter().collect();
            assert!(derive_findings(&catalog, &answers).is_empty());
        }
    }

    #[test]
    fn finding_count_equals_triggering_answer_count() {
        let catalog = QuestionCatalog::full();
        let answers: AnswerSet = catalog
            .questions()
            .iter()
            .enumerate()
            .map(|(index, q)| {
                let answer = match index % 3 {
                    0 => AnswerValue::Yes,
                    1 => AnswerValue::No,
                    _ => AnswerValue::Unsure,
                };
                (q.id, answer)
            })
            .collect();

        let expected = catalog
            .questions()
            .iter()
            .filter(|q| {
                answers
                    .answer(q.id)
                    .is_some_and(|answer| q.trigger_answers.contains(&answer))
            })
            .count();
        assert_eq!(derive_findings(&catalog, &answers).len(), expected);
    }

    #[test]
    fn finding_fields_come_from_the_question_definition() {
        let catalog = QuestionCatalog::from_questions(vec![question(
            "Q1",
            &[AnswerValue::Unsure],
            2,
            3,
        )])
        .expect("catalog validates");
        let answers: AnswerSet = [("Q1", AnswerValue::Unsure)].into_iter().collect();

        let findings = derive_findings(&catalog, &answers);
        assert_eq!(findings.len(), 1);
        let finding = &findings[0];
        assert_eq!(finding.id, "Q1");
        assert_eq!(finding.score, 6);
        assert_eq!(finding.risk_level, RiskLevel::Medium);
        assert_eq!(
            finding.observation,
            "Response was 'Unsure' for: Is the control implemented?"
        );
    }

    #[test]
    fn output_keeps_catalog_order_and_display_sort_is_stable() {
        let catalog = QuestionCatalog::from_questions(vec![
            question("LOW", &[AnswerValue::No], 1, 2),
            question("HIGH", &[AnswerValue::No], 3, 3),
            question("MED_A", &[AnswerValue::No], 2, 2),
            question("MED_B", &[AnswerValue::No], 2, 2),
        ])
        .expect("catalog validates");
        let answers: AnswerSet = catalog
            .questions()
            .iter()
            .map(|q| (q.id, AnswerValue::No))
            .collect();

        let findings = derive_findings(&catalog, &answers);
        let ids: Vec<&str> = findings.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["LOW", "HIGH", "MED_A", "MED_B"]);

        let sorted = sorted_for_display(&findings);
        let ids: Vec<&str> = sorted.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["HIGH", "MED_A", "MED_B", "LOW"]);
    }

    #[test]
    fn derive_findings_is_idempotent() {
        let catalog = QuestionCatalog::core();
        let answers: AnswerSet = catalog
            .questions()
            .iter()
            .map(|q| (q.id, AnswerValue::No))
            .collect();
        assert_eq!(
            derive_findings(&catalog, &answers),
            derive_findings(&catalog, &answers)
        );
    }
}
