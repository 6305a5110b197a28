pub mod catalog;
pub mod domain;
pub mod findings;
pub mod polish;
pub mod report;
pub mod scoring;

pub use catalog::QuestionCatalog;
pub use findings::{derive_findings, sorted_for_display, Finding};
pub use polish::{FindingsPolisher, OrganizationContext};
pub use report::{generate_report, Report};
pub use scoring::{compute_scores, AnswerSet, ScoreBreakdown};
