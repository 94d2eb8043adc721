use crate::calendar::CalendarEvent;
use crate::error::LlmError;
use crate::llm::{StructuredModel, StructuredRequest};
use crate::wardrobe::{Category, ClothingItem};
use crate::weather::WeatherInfo;
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;

pub const SUGGESTION_FAILED_MESSAGE: &str = "Styling logic failed.";
pub const NO_SUGGESTION_MESSAGE: &str = "Could not generate suggestion.";

/// Outfit picked by the model: item ids in wear order plus its reasoning.
///
/// An empty `items` list means no suggestion is available.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuggestionResult {
    pub items: Vec<String>,
    pub reasoning: String,
}

impl SuggestionResult {
    fn unavailable(reasoning: &str) -> Self {
        Self {
            items: Vec::new(),
            reasoning: reasoning.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The slice of an item the model gets to see.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary<'a> {
    pub id: &'a str,
    pub category: Category,
    pub sub_category: &'a str,
    pub color: &'a str,
    pub style: &'a str,
    pub wear_count: u32,
}

impl<'a> From<&'a ClothingItem> for ItemSummary<'a> {
    fn from(item: &'a ClothingItem) -> Self {
        Self {
            id: &item.id,
            category: item.category,
            sub_category: &item.sub_category,
            color: &item.color,
            style: &item.style,
            wear_count: item.wear_count,
        }
    }
}

fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "items": {
                "type": "ARRAY",
                "items": {"type": "STRING"},
                "description": "Array of item IDs"
            },
            "reasoning": {"type": "STRING", "description": "Why this outfit was chosen"}
        },
        "required": ["items", "reasoning"]
    })
}

/// Render the styling prompt. The selection rules live here as instructions
/// to the model; nothing enforces them locally.
pub fn build_prompt(
    wardrobe: &[ClothingItem],
    weather: &WeatherInfo,
    events: &[CalendarEvent],
) -> String {
    let summary: Vec<ItemSummary<'_>> = wardrobe.iter().map(ItemSummary::from).collect();
    let wardrobe_json = serde_json::to_string(&summary).unwrap_or_else(|_| "[]".into());
    let events_json = serde_json::to_string(events).unwrap_or_else(|_| "[]".into());

    format!(
        "Based on the following wardrobe items, current weather, and social calendar, suggest ONE perfect outfit.\n\
         Wardrobe: {wardrobe_json}\n\
         Weather: {weather}\n\
         Events today: {events_json}\n\
         \n\
         Consider:\n\
         1. Appropriateness for events.\n\
         2. Weather conditions.\n\
         3. Avoid over-worn items (high wearCount).\n\
         4. Color coordination.",
        weather = weather.summary(),
    )
}

/// Asks the model for one outfit from the current wardrobe.
pub struct SuggestionClient {
    model: Arc<dyn StructuredModel>,
    model_name: String,
    temperature: f64,
}

impl SuggestionClient {
    pub fn new(model: Arc<dyn StructuredModel>, model_name: impl Into<String>) -> Self {
        Self {
            model,
            model_name: model_name.into(),
            temperature: 0.4,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// One request, no retry. Failures come back as an empty result with a
    /// fixed reasoning message.
    pub async fn suggest(
        &self,
        wardrobe: &[ClothingItem],
        weather: &WeatherInfo,
        events: &[CalendarEvent],
    ) -> SuggestionResult {
        let prompt = build_prompt(wardrobe, weather, events);
        let request = StructuredRequest::new(&self.model_name, prompt, response_schema())
            .with_temperature(self.temperature);

        tracing::debug!(
            items = wardrobe.len(),
            events = events.len(),
            "requesting outfit suggestion"
        );

        match self.model.generate_json(&request).await {
            Ok(text) => parse_suggestion(&text).unwrap_or_else(|| {
                tracing::warn!(
                    provider = self.model.name(),
                    "suggestion response is not a JSON object"
                );
                SuggestionResult::unavailable(SUGGESTION_FAILED_MESSAGE)
            }),
            Err(LlmError::EmptyResponse { .. }) => {
                tracing::warn!(provider = self.model.name(), "suggestion response was empty");
                SuggestionResult::unavailable(NO_SUGGESTION_MESSAGE)
            }
            Err(err) => {
                tracing::warn!(
                    provider = self.model.name(),
                    "suggestion request failed: {err}"
                );
                SuggestionResult::unavailable(SUGGESTION_FAILED_MESSAGE)
            }
        }
    }
}

/// Parse a suggestion response. Missing `items` means none; missing
/// `reasoning` means empty text. `None` when the text is not a JSON object.
pub fn parse_suggestion(text: &str) -> Option<SuggestionResult> {
    let value: Value = serde_json::from_str(text.trim()).ok()?;
    let fields = value.as_object()?;

    let items = fields
        .get("items")
        .and_then(Value::as_array)
        .map(|ids| {
            ids.iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    let reasoning = fields
        .get("reasoning")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Some(SuggestionResult { items, reasoning })
}
