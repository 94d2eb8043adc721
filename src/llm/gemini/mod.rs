//! Google Gemini `generateContent` client constrained to JSON output.
//!
//! Every call sets `responseMimeType = application/json` together with a
//! `responseSchema`, so the first candidate's text is expected to be a JSON
//! document. Images travel as `inlineData` parts ahead of the instruction.

use crate::config::DEFAULT_API_BASE_URL;
use crate::error::LlmError;
use crate::llm::{
    build_provider_client, sanitize_api_error,
    traits::{StructuredModel, StructuredRequest},
};
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;

mod types;
use types::{
    Content, GeminiInlineData, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    Part,
};

const PROVIDER: &str = "gemini";

pub struct GeminiClient {
    api_key: Option<String>,
    base_url: String,
    client: Client,
}

impl GeminiClient {
    pub fn new(api_key: Option<&str>) -> Self {
        Self {
            api_key: api_key
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(String::from),
            base_url: DEFAULT_API_BASE_URL.to_string(),
            client: build_provider_client(),
        }
    }

    /// Point the client at another endpoint root (proxies, tests).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> Result<&str, LlmError> {
        self.api_key.as_deref().ok_or_else(|| LlmError::MissingApiKey {
            provider: PROVIDER.to_string(),
        })
    }

    fn model_name(model: &str) -> String {
        if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{model}")
        }
    }

    fn build_request(request: &StructuredRequest) -> GenerateContentRequest {
        let mut parts = Vec::with_capacity(2);
        if let Some(image) = &request.image {
            parts.push(Part::inline_data(GeminiInlineData {
                mime_type: image.mime_type.clone(),
                data: image.data.clone(),
            }));
        }
        parts.push(Part::text(request.instruction.clone()));

        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
                response_mime_type: "application/json",
                response_schema: request.response_schema.clone(),
            },
        }
    }

    fn extract_text(result: &GenerateContentResponse) -> Result<String, LlmError> {
        let text: String = result
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(LlmError::EmptyResponse {
                provider: PROVIDER.to_string(),
            });
        }

        Ok(text)
    }

    fn request_error(&self, err: reqwest::Error) -> LlmError {
        LlmError::Request {
            provider: PROVIDER.to_string(),
            message: sanitize_api_error(&err.without_url().to_string(), self.api_key.as_deref()),
        }
    }

    async fn call_api(&self, request: &StructuredRequest) -> Result<String, LlmError> {
        let api_key = self.api_key()?;
        let model_name = Self::model_name(&request.model);
        let url = format!(
            "{}/v1beta/{model_name}:generateContent?key={api_key}",
            self.base_url
        );
        let body = Self::build_request(request);

        tracing::debug!(model = %model_name, image = request.image.is_some(), "gemini request");

        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|err| self.request_error(err))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                provider: PROVIDER.to_string(),
                status: status.as_u16(),
                message: sanitize_api_error(&error_text, Some(api_key)),
            });
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| self.request_error(err))?;

        if let Some(err) = result.error.as_ref() {
            return Err(LlmError::Api {
                provider: PROVIDER.to_string(),
                status: status.as_u16(),
                message: sanitize_api_error(&err.message, Some(api_key)),
            });
        }

        if let Some(candidate) = result.candidates.as_ref().and_then(|c| c.first()) {
            tracing::debug!(
                finish_reason = candidate.finish_reason.as_deref().unwrap_or("unknown"),
                model_version = result.model_version.as_deref().unwrap_or("unknown"),
                "gemini response"
            );
        }

        Self::extract_text(&result)
    }
}

impl Part {
    fn text(text: String) -> Self {
        Self {
            text: Some(text),
            inline_data: None,
        }
    }

    fn inline_data(data: GeminiInlineData) -> Self {
        Self {
            text: None,
            inline_data: Some(data),
        }
    }
}

impl StructuredModel for GeminiClient {
    fn name(&self) -> &str {
        PROVIDER
    }

    fn generate_json<'a>(
        &'a self,
        request: &'a StructuredRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, LlmError>> + Send + 'a>> {
        Box::pin(async move { self.call_api(request).await })
    }
}
