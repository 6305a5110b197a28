use crate::infra::{build_polisher, load_answers, AssessmentMode};
use clap::Args;
use sra_ai::assessment::polish::OrganizationContext;
use sra_ai::assessment::{generate_report, AnswerSet, Report};
use sra_ai::assessment::domain::AnswerValue;
use sra_ai::config::AppConfig;
use sra_ai::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessReportArgs {
    /// JSON file mapping question ids to Yes/No/Unsure answers
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Question library to assess against
    #[arg(long, value_enum, default_value_t = AssessmentMode::Core)]
    pub(crate) mode: AssessmentMode,
    /// Rewrite finding prose with the configured AI backend
    #[arg(long)]
    pub(crate) polish: bool,
    /// Organization name for the report header
    #[arg(long, default_value = "")]
    pub(crate) organization: String,
    /// Organization type (e.g. "Clinic (20-150)", "Rural Hospital")
    #[arg(long, default_value = "")]
    pub(crate) org_type: String,
    /// Employee count bracket
    #[arg(long, default_value = "")]
    pub(crate) employees: String,
    /// Whether the organization uses an MSP (Yes/No/Unsure)
    #[arg(long, default_value = "")]
    pub(crate) uses_msp: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Run the demo against the full Security Rule library
    #[arg(long)]
    pub(crate) full: bool,
}

pub(crate) fn run_assessment_report(args: AssessReportArgs) -> Result<(), AppError> {
    let AssessReportArgs {
        answers,
        mode,
        polish,
        organization,
        org_type,
        employees,
        uses_msp,
    } = args;

    let answers = load_answers(&answers)?;
    let context = OrganizationContext {
        organization,
        organization_type: org_type,
        employees,
        uses_msp,
    };

    let polisher = if polish {
        let config = AppConfig::load()?;
        build_polisher(&config.polish)
    } else {
        None
    };

    let catalog = mode.catalog();
    let report = generate_report(&context, &catalog, &answers, polisher.as_deref());
    render_report(&context, &report);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let mode = if args.full {
        AssessmentMode::Full
    } else {
        AssessmentMode::Core
    };
    let catalog = mode.catalog();

    // A plausible small clinic: solid on the basics, behind on risk analysis,
    // deprovisioning, and MFA.
    let answers: AnswerSet = catalog
        .questions()
        .iter()
        .map(|question| {
            let answer = match question.id {
                "RA1" | "TERM1" => AnswerValue::No,
                "MFA1" | "LOG1" => AnswerValue::Unsure,
                _ => AnswerValue::Yes,
            };
            (question.id, answer)
        })
        .collect();

    let context = OrganizationContext {
        organization: "Prairie Family Clinic".to_string(),
        organization_type: "Clinic (20-150)".to_string(),
        employees: "20-50".to_string(),
        uses_msp: "Yes".to_string(),
    };

    println!("HIPAA SRA demo ({} questions)\n", catalog.len());
    let report = generate_report(&context, &catalog, &answers, None);
    render_report(&context, &report);
    Ok(())
}

fn render_report(context: &OrganizationContext, report: &Report) {
    if !context.organization.is_empty() {
        println!("Organization: {}", context.organization);
        if !context.organization_type.is_empty() {
            println!(
                "Type: {} | Employees: {} | Uses MSP: {}",
                context.organization_type, context.employees, context.uses_msp
            );
        }
        println!();
    }

    println!("{}\n", report.summary);

    let view = report.view();
    println!(
        "Findings by level: {} High / {} Medium / {} Low",
        view.finding_counts.high, view.finding_counts.medium, view.finding_counts.low
    );

    println!("\nCompliance score by safeguard category");
    for entry in &view.score_breakdown {
        println!("  {:<16} {:>5.1}%", entry.category, entry.percentage);
    }

    if view.findings.is_empty() {
        println!("\nNo findings were triggered based on responses.");
        return;
    }

    println!("\nFindings");
    for finding in &view.findings {
        println!(
            "  ({}) {} — {}",
            finding.risk_level.label(),
            finding.title,
            finding.citation
        );
        println!("      Category: {}", finding.category.label());
        println!("      Observation: {}", finding.observation);
        println!("      Recommendation: {}", finding.recommendation);
        println!(
            "      Likelihood: {} | Impact: {} | Score: {}",
            finding.likelihood, finding.impact, finding.score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_runs_without_external_services() {
        run_demo(DemoArgs::default()).expect("demo completes");
        run_demo(DemoArgs { full: true }).expect("full demo completes");
    }
}
