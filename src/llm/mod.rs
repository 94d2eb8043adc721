// ── Infrastructure ───────────────────────────────────────────────────────────
pub mod http_client;
pub mod redact;
pub mod traits;

// ── Provider implementations ────────────────────────────────────────────────
pub mod gemini;

// ── Re-exports ──────────────────────────────────────────────────────────────
pub use gemini::GeminiClient;
pub use http_client::build_provider_client;
pub use redact::sanitize_api_error;
pub use traits::{InlineImage, StructuredModel, StructuredRequest};
