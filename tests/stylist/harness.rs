use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use aurastyle::error::LlmError;
use aurastyle::llm::{StructuredModel, StructuredRequest};
use aurastyle::wardrobe::{Category, ClothingItem, ItemDescriptor};

/// Model double that replays one canned answer and records every request.
pub struct ScriptedModel {
    reply: Result<String, LlmError>,
    calls: AtomicUsize,
    seen: Mutex<Vec<StructuredRequest>>,
}

impl ScriptedModel {
    pub fn replying(text: &str) -> Self {
        Self::with_reply(Ok(text.to_string()))
    }

    pub fn failing(err: LlmError) -> Self {
        Self::with_reply(Err(err))
    }

    fn with_reply(reply: Result<String, LlmError>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<StructuredRequest> {
        self.seen.lock().unwrap().last().cloned()
    }
}

impl StructuredModel for ScriptedModel {
    fn name(&self) -> &str {
        "scripted"
    }

    fn generate_json<'a>(
        &'a self,
        request: &'a StructuredRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, LlmError>> + Send + 'a>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(request.clone());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(LlmError::EmptyResponse { provider }) => Err(LlmError::EmptyResponse {
                    provider: provider.clone(),
                }),
                Err(other) => Err(LlmError::Request {
                    provider: "scripted".into(),
                    message: other.to_string(),
                }),
            }
        })
    }
}

pub fn wardrobe_item(id: &str, category: Category, sub_category: &str) -> ClothingItem {
    let mut item = ClothingItem::from_descriptor(
        "data:image/png;base64,iVBORw0KGgo=",
        ItemDescriptor {
            category,
            sub_category: sub_category.into(),
            ..ItemDescriptor::default()
        },
    );
    item.id = id.into();
    item
}
