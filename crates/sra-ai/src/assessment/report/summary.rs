use super::views::ReportView;
use crate::assessment::catalog::QuestionCatalog;
use crate::assessment::domain::RiskLevel;
use crate::assessment::findings::{derive_findings, Finding};
use crate::assessment::polish::{self, FindingsPolisher, OrganizationContext};
use crate::assessment::scoring::{compute_scores, AnswerSet, ScoreBreakdown};
use tracing::warn;

/// Complete assessment output for one evaluation. Constructed once and never
/// mutated; downstream renderers (dashboard, PDF) consume it as-is.
#[derive(Debug, Clone)]
pub struct Report {
    pub summary: String,
    pub findings: Vec<Finding>,
    pub overall_level: RiskLevel,
    pub overall_score: u8,
    pub score_breakdown: ScoreBreakdown,
}

impl Report {
    pub fn view(&self) -> ReportView {
        ReportView::from_report(self)
    }
}

/// Runs the full pipeline: findings, optional AI polish, overall risk, score
/// breakdown, and the executive summary.
///
/// Pure apart from the polish call, which is best-effort: any failure there
/// is logged and the unpolished findings are used, so report generation never
/// aborts on the external service's account.
pub fn generate_report(
    context: &OrganizationContext,
    catalog: &QuestionCatalog,
    answers: &AnswerSet,
    polisher: Option<&dyn FindingsPolisher>,
) -> Report {
    let mut findings = derive_findings(catalog, answers);

    if let Some(polisher) = polisher {
        if !findings.is_empty() {
            findings = apply_polish(polisher, context, findings);
        }
    }

    // Floor of 1 keeps the empty-findings report at a defined Low level.
    let overall_score = findings
        .iter()
        .map(|finding| finding.score)
        .max()
        .unwrap_or(1);
    let overall_level = RiskLevel::from_score(overall_score);

    let score_breakdown = compute_scores(catalog, answers);
    let summary = build_summary(
        score_breakdown.overall(),
        overall_level,
        overall_score,
        findings.len(),
    );

    Report {
        summary,
        findings,
        overall_level,
        overall_score,
        score_breakdown,
    }
}

fn apply_polish(
    polisher: &dyn FindingsPolisher,
    context: &OrganizationContext,
    findings: Vec<Finding>,
) -> Vec<Finding> {
    let outcome = polisher
        .polish(context, &findings)
        .and_then(|polished| polish::reconcile(&findings, polished));
    match outcome {
        Ok(polished) => polished,
        Err(err) => {
            warn!(error = %err, "findings polish failed, keeping rule-generated text");
            findings
        }
    }
}

fn build_summary(
    overall_compliance: f64,
    overall_level: RiskLevel,
    overall_score: u8,
    finding_count: usize,
) -> String {
    format!(
        "**HIPAA Compliance Score:** {overall_compliance:.1}%\n\n\
         **Overall Risk Level:** {} (highest finding score: {overall_score})\n\n\
         **Total Findings Identified:** {finding_count}",
        overall_level.label()
    )
}
