mod openai;

pub use openai::{OpenAiPolishClient, PolishSettings};

use super::findings::Finding;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;

/// Organization metadata used for polish prompts and report headers only;
/// never an input to scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrganizationContext {
    #[serde(default)]
    pub organization: String,
    #[serde(default, rename = "type")]
    pub organization_type: String,
    #[serde(default)]
    pub employees: String,
    #[serde(default)]
    pub uses_msp: String,
}

#[derive(Debug, thiserror::Error)]
pub enum PolishError {
    #[error("polish backend failed: {0}")]
    Backend(String),
    #[error("polish response malformed: {0}")]
    MalformedResponse(String),
    #[error("polish returned {actual} findings, expected {expected}")]
    MismatchedCount { expected: usize, actual: usize },
    #[error("polish response missing finding '{0}'")]
    MissingFinding(String),
    #[error("polish runtime unavailable: {0}")]
    Runtime(String),
}

/// Rewritten prose for a single finding. Only the text fields travel back
/// from the service; every structural field is retained from the original.
#[derive(Debug, Clone, Deserialize)]
pub struct PolishedFinding {
    pub id: String,
    pub observation: String,
    pub recommendation: String,
}

/// Seam for the external text-polish service. A substitutable value makes the
/// aggregator deterministic under test.
pub trait FindingsPolisher: Debug + Send + Sync {
    fn polish(
        &self,
        context: &OrganizationContext,
        findings: &[Finding],
    ) -> Result<Vec<PolishedFinding>, PolishError>;
}

/// Merges polished prose back into the original findings.
///
/// The service is matched by id and must return exactly one entry per input
/// finding; reordering is tolerated, omissions and extras are not. Structural
/// fields (score, level, citation, ...) always come from the originals.
pub(crate) fn reconcile(
    originals: &[Finding],
    polished: Vec<PolishedFinding>,
) -> Result<Vec<Finding>, PolishError> {
    if polished.len() != originals.len() {
        return Err(PolishError::MismatchedCount {
            expected: originals.len(),
            actual: polished.len(),
        });
    }

    let mut by_id: HashMap<String, PolishedFinding> = polished
        .into_iter()
        .map(|entry| (entry.id.clone(), entry))
        .collect();

    originals
        .iter()
        .map(|original| {
            let polished = by_id
                .remove(&original.id)
                .ok_or_else(|| PolishError::MissingFinding(original.id.clone()))?;
            let mut merged = original.clone();
            merged.observation = polished.observation;
            merged.recommendation = polished.recommendation;
            Ok(merged)
        })
        .collect()
}
