use crate::error::LlmError;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;

/// Base64 image sent alongside the instruction text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    /// Raw base64 payload, without any `data:` prefix.
    pub data: String,
}

/// One generation call whose answer must be a JSON document matching
/// `response_schema`.
#[derive(Debug, Clone)]
pub struct StructuredRequest {
    pub model: String,
    pub instruction: String,
    pub image: Option<InlineImage>,
    /// OpenAPI-style schema in the provider's dialect (`OBJECT`, `STRING`, ...).
    pub response_schema: Value,
    pub temperature: f64,
}

impl StructuredRequest {
    pub fn new(model: impl Into<String>, instruction: impl Into<String>, schema: Value) -> Self {
        Self {
            model: model.into(),
            instruction: instruction.into(),
            image: None,
            response_schema: schema,
            temperature: 0.4,
        }
    }

    pub fn with_image(mut self, image: InlineImage) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}

pub trait StructuredModel: Send + Sync {
    /// Provider identifier (e.g. "gemini").
    fn name(&self) -> &str;

    /// Issue exactly one request and return the raw JSON text the model
    /// produced. Parsing is left to the caller.
    fn generate_json<'a>(
        &'a self,
        request: &'a StructuredRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, LlmError>> + Send + 'a>>;
}
