use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use sra_ai::assessment::polish::{OpenAiPolishClient, PolishSettings};
use sra_ai::assessment::{AnswerSet, FindingsPolisher, QuestionCatalog};
use sra_ai::config::PolishConfig;
use sra_ai::error::AppError;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) polisher: Option<Arc<dyn FindingsPolisher>>,
}

/// Which question library an evaluation runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub(crate) enum AssessmentMode {
    /// Core high-impact questions for fast onboarding.
    #[default]
    Core,
    /// Complete Security Rule coverage.
    Full,
}

impl AssessmentMode {
    pub(crate) fn catalog(self) -> QuestionCatalog {
        match self {
            Self::Core => QuestionCatalog::core(),
            Self::Full => QuestionCatalog::full(),
        }
    }
}

/// Builds the polish gateway when an API key is configured; the service runs
/// with rule-generated finding text otherwise.
pub(crate) fn build_polisher(config: &PolishConfig) -> Option<Arc<dyn FindingsPolisher>> {
    let api_key = config.api_key.clone()?;
    let mut settings = PolishSettings::new(api_key);
    settings.model = config.model.clone();
    settings.timeout_secs = config.timeout_secs;
    match OpenAiPolishClient::new(settings) {
        Ok(client) => Some(Arc::new(client)),
        Err(err) => {
            warn!(error = %err, "polish client unavailable, continuing without AI polish");
            None
        }
    }
}

/// Reads an answer map (question id -> Yes/No/Unsure) from a JSON file.
pub(crate) fn load_answers(path: &Path) -> Result<AnswerSet, AppError> {
    let file = std::fs::File::open(path)?;
    serde_json::from_reader(file).map_err(|err| {
        AppError::InvalidRequest(format!("answers file {} is invalid: {err}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_map_to_the_expected_catalogs() {
        assert!(AssessmentMode::Core.catalog().len() < AssessmentMode::Full.catalog().len());
    }

    #[test]
    fn polisher_is_skipped_without_an_api_key() {
        let config = PolishConfig {
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            timeout_secs: 30,
        };
        assert!(build_polisher(&config).is_none());
    }
}
