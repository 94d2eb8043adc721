use crate::llm::{StructuredModel, StructuredRequest};
use crate::media::inline_image;
use crate::wardrobe::{Category, ItemDescriptor};
use serde_json::{Map, Value, json};
use std::str::FromStr;
use std::sync::Arc;

pub const CLASSIFY_INSTRUCTION: &str =
    "Analyze this clothing item and provide its details in JSON format.";

fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "category": {
                "type": "STRING",
                "description": "Category: Top, Bottom, Outerwear, Shoes, Accessory, Dress"
            },
            "subCategory": {"type": "STRING", "description": "e.g., T-shirt, Jeans, Blazer"},
            "color": {"type": "STRING"},
            "style": {"type": "STRING", "description": "e.g., Casual, Formal, Streetwear"},
            "season": {
                "type": "ARRAY",
                "items": {"type": "STRING"},
                "description": "e.g., Summer, Winter"
            }
        },
        "required": ["category", "subCategory", "color", "style", "season"]
    })
}

/// Turns a captured photo into advisory item attributes.
pub struct ClassificationClient {
    model: Arc<dyn StructuredModel>,
    model_name: String,
    temperature: f64,
}

impl ClassificationClient {
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

    /// Classify `image` (a `data:` URL or raw base64). Always returns a
    /// descriptor: failures yield [`ItemDescriptor::fallback`].
    pub async fn analyze(&self, image: &str) -> ItemDescriptor {
        let request =
            StructuredRequest::new(&self.model_name, CLASSIFY_INSTRUCTION, response_schema())
                .with_image(inline_image(image))
                .with_temperature(self.temperature);

        let text = match self.model.generate_json(&request).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(
                    provider = self.model.name(),
                    "classification request failed, using fallback: {err}"
                );
                return ItemDescriptor::fallback();
            }
        };

        parse_descriptor(&text).unwrap_or_else(|| {
            tracing::warn!(
                provider = self.model.name(),
                "classification response is not a JSON object, using fallback"
            );
            ItemDescriptor::fallback()
        })
    }
}

/// Parse a classification response, defaulting each missing or malformed
/// field. `None` only when the text is not a JSON object at all.
pub fn parse_descriptor(text: &str) -> Option<ItemDescriptor> {
    let value: Value = serde_json::from_str(text.trim()).ok()?;
    let fields = value.as_object()?;
    let defaults = ItemDescriptor::default();

    Some(ItemDescriptor {
        category: string_field(fields, "category")
            .and_then(|label| Category::from_str(label).ok())
            .unwrap_or(defaults.category),
        sub_category: string_field(fields, "subCategory")
            .map_or(defaults.sub_category, str::to_string),
        color: string_field(fields, "color").map_or(defaults.color, str::to_string),
        style: string_field(fields, "style").map_or(defaults.style, str::to_string),
        season: fields
            .get("season")
            .and_then(Value::as_array)
            .map(|seasons| {
                seasons
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or(defaults.season),
    })
}

fn string_field<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    fields
        .get(name)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
