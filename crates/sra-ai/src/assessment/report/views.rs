use super::summary::Report;
use crate::assessment::domain::{RiskLevel, SafeguardCategory};
use crate::assessment::findings::{sorted_for_display, Finding};
use crate::assessment::scoring::OVERALL_KEY;
use serde::Serialize;

/// Serializable dashboard payload: KPI counts, category chart rows in
/// safeguard order, and findings pre-sorted for display.
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub summary: String,
    pub compliance_score: f64,
    pub overall_level: RiskLevel,
    pub overall_level_label: &'static str,
    pub overall_score: u8,
    pub finding_counts: FindingCounts,
    pub score_breakdown: Vec<CategoryScoreEntry>,
    pub findings: Vec<Finding>,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct FindingCounts {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryScoreEntry {
    pub category: &'static str,
    pub percentage: f64,
}

impl ReportView {
    pub(crate) fn from_report(report: &Report) -> Self {
        let mut counts = FindingCounts {
            total: report.findings.len(),
            ..FindingCounts::default()
        };
        for finding in &report.findings {
            match finding.risk_level {
                RiskLevel::High => counts.high += 1,
                RiskLevel::Medium => counts.medium += 1,
                RiskLevel::Low => counts.low += 1,
            }
        }

        let score_breakdown = SafeguardCategory::ordered()
            .into_iter()
            .filter_map(|category| {
                report
                    .score_breakdown
                    .percentage(category.label())
                    .map(|percentage| CategoryScoreEntry {
                        category: category.label(),
                        percentage,
                    })
            })
            .chain(std::iter::once(CategoryScoreEntry {
                category: OVERALL_KEY,
                percentage: report.score_breakdown.overall(),
            }))
            .collect();

        Self {
            summary: report.summary.clone(),
            compliance_score: report.score_breakdown.overall(),
            overall_level: report.overall_level,
            overall_level_label: report.overall_level.label(),
            overall_score: report.overall_score,
            finding_counts: counts,
            score_breakdown,
            findings: sorted_for_display(&report.findings),
        }
    }
}
