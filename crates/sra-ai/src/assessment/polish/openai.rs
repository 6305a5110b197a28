use super::{FindingsPolisher, OrganizationContext, PolishError, PolishedFinding};
use crate::assessment::findings::Finding;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as _;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Connection settings for the polish backend.
#[derive(Debug, Clone)]
pub struct PolishSettings {
    pub api_key: String,
    pub model: String,
    pub timeout_secs: u64,
    pub base_url: String,
}

impl PolishSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "gpt-4o-mini".to_string(),
            timeout_secs: 30,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Chat-completions client for rewriting finding prose. Wraps the async HTTP
/// client behind a dedicated runtime so the synchronous report aggregator can
/// call it; one attempt per report, the timeout is the only bound.
pub struct OpenAiPolishClient {
    client: reqwest::Client,
    runtime: Runtime,
    settings: PolishSettings,
}

impl OpenAiPolishClient {
    pub fn new(settings: PolishSettings) -> Result<Self, PolishError> {
        if settings.api_key.is_empty() {
            return Err(PolishError::Backend("missing API key".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|err| PolishError::Backend(err.to_string()))?;
        let runtime = Runtime::new().map_err(|err| PolishError::Runtime(err.to_string()))?;

        Ok(Self {
            client,
            runtime,
            settings,
        })
    }

    fn build_prompt(&self, context: &OrganizationContext, findings: &[Finding]) -> String {
        let mut prompt = String::new();
        prompt.push_str(
            "You are a HIPAA Security Rule assessor. Rewrite each finding below to be audit-ready.\n\
             Keep: id, title, citation, likelihood, impact, score, risk_level, category.\n\
             Improve: observation (2-3 sentences) and recommendation (actionable, concise).\n\n",
        );

        writeln!(prompt, "Organization context:").expect("write context header");
        writeln!(prompt, "- Organization: {}", context.organization).expect("write org");
        writeln!(prompt, "- Type: {}", context.organization_type).expect("write type");
        writeln!(prompt, "- Employees: {}", context.employees).expect("write employees");
        writeln!(prompt, "- Uses MSP: {}", context.uses_msp).expect("write msp");

        let findings_json =
            serde_json::to_string_pretty(findings).unwrap_or_else(|_| "[]".to_string());
        writeln!(prompt, "\nFindings:\n{findings_json}").expect("write findings");

        prompt.push_str(
            "\nReturn JSON in the format {\"findings\": [...]} with one entry per input finding, \
             each carrying the same id plus the rewritten observation and recommendation. \
             Respond with valid JSON only.",
        );
        prompt
    }

    fn send_request(&self, prompt: String) -> Result<String, PolishError> {
        let body = ChatRequest {
            model: self.settings.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You write audit-ready HIPAA risk assessment findings.".to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let url = format!("{}/chat/completions", self.settings.base_url);
        debug!(model = %self.settings.model, "sending polish request");

        let response = self.runtime.block_on(async {
            self.client
                .post(&url)
                .bearer_auth(&self.settings.api_key)
                .json(&body)
                .send()
                .await
        });
        let response = response.map_err(|err| PolishError::Backend(err.to_string()))?;

        let status = response.status();
        let text = self
            .runtime
            .block_on(response.text())
            .map_err(|err| PolishError::Backend(err.to_string()))?;
        if !status.is_success() {
            return Err(PolishError::Backend(format!("HTTP {status}: {text}")));
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|err| PolishError::MalformedResponse(err.to_string()))?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| PolishError::MalformedResponse("no choices in response".to_string()))
    }
}

impl fmt::Debug for OpenAiPolishClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiPolishClient")
            .field("model", &self.settings.model)
            .finish_non_exhaustive()
    }
}

impl FindingsPolisher for OpenAiPolishClient {
    fn polish(
        &self,
        context: &OrganizationContext,
        findings: &[Finding],
    ) -> Result<Vec<PolishedFinding>, PolishError> {
        let prompt = self.build_prompt(context, findings);
        let content = self.send_request(prompt)?;

        let payload: PolishPayload = serde_json::from_str(&content)
            .map_err(|err| PolishError::MalformedResponse(err.to_string()))?;
        Ok(payload.findings)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct PolishPayload {
    findings: Vec<PolishedFinding>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_requires_an_api_key() {
        let settings = PolishSettings::new("");
        assert!(matches!(
            OpenAiPolishClient::new(settings),
            Err(PolishError::Backend(_))
        ));
    }

    #[test]
    fn settings_default_to_a_conservative_timeout() {
        let settings = PolishSettings::new("sk-test");
        assert_eq!(settings.timeout_secs, 30);
        assert_eq!(settings.model, "gpt-4o-mini");
    }

    #[test]
    fn payload_parses_strict_findings_schema() {
        let content = r#"{"findings":[{"id":"RA1","observation":"New text.","recommendation":"Do this."}]}"#;
        let payload: PolishPayload = serde_json::from_str(content).expect("parses");
        assert_eq!(payload.findings.len(), 1);
        assert_eq!(payload.findings[0].id, "RA1");
    }
}
