use super::suggest::{SuggestionClient, SuggestionResult};
use crate::calendar::CalendarEvent;
use crate::wardrobe::ClothingItem;
use crate::weather::WeatherInfo;

/// Suggestions are only requested once the wardrobe holds this many items.
pub const SUGGESTION_MIN_ITEMS: usize = 3;

/// A suggestion resolved against the current wardrobe.
#[derive(Debug, Clone, PartialEq)]
pub struct Outfit {
    pub items: Vec<ClothingItem>,
    pub reasoning: String,
}

impl Outfit {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Map suggested ids onto wardrobe items, keeping suggestion order and
/// silently dropping ids that are no longer in the wardrobe.
pub fn resolve_outfit(result: &SuggestionResult, wardrobe: &[ClothingItem]) -> Outfit {
    let items = result
        .items
        .iter()
        .filter_map(|id| {
            let found = wardrobe.iter().find(|item| item.id == *id);
            if found.is_none() {
                tracing::debug!(id = %id, "dropping suggested item missing from wardrobe");
            }
            found.cloned()
        })
        .collect();

    Outfit {
        items,
        reasoning: result.reasoning.clone(),
    }
}

pub fn can_suggest(wardrobe: &[ClothingItem]) -> bool {
    wardrobe.len() >= SUGGESTION_MIN_ITEMS
}

/// Dashboard behaviour around the suggestion client: request automatically
/// the first time the wardrobe is large enough, then hold that outfit until
/// an explicit refresh.
#[derive(Debug, Default)]
pub struct SuggestionTrigger {
    current: Option<Outfit>,
}

impl SuggestionTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Outfit> {
        self.current.as_ref()
    }

    /// Call after every wardrobe change. Issues a request only when the
    /// wardrobe has at least [`SUGGESTION_MIN_ITEMS`] items and no outfit is
    /// held yet.
    pub async fn on_wardrobe_changed(
        &mut self,
        client: &SuggestionClient,
        wardrobe: &[ClothingItem],
        weather: &WeatherInfo,
        events: &[CalendarEvent],
    ) -> Option<&Outfit> {
        if self.current.is_none() && can_suggest(wardrobe) {
            self.request(client, wardrobe, weather, events).await;
        }
        self.current.as_ref()
    }

    /// Replace the held outfit with a fresh suggestion. Still a no-op below
    /// [`SUGGESTION_MIN_ITEMS`].
    pub async fn refresh(
        &mut self,
        client: &SuggestionClient,
        wardrobe: &[ClothingItem],
        weather: &WeatherInfo,
        events: &[CalendarEvent],
    ) -> Option<&Outfit> {
        if can_suggest(wardrobe) {
            self.request(client, wardrobe, weather, events).await;
        } else {
            tracing::debug!(
                items = wardrobe.len(),
                "wardrobe too small for a suggestion"
            );
        }
        self.current.as_ref()
    }

    async fn request(
        &mut self,
        client: &SuggestionClient,
        wardrobe: &[ClothingItem],
        weather: &WeatherInfo,
        events: &[CalendarEvent],
    ) {
        let result = client.suggest(wardrobe, weather, events).await;
        self.current = Some(resolve_outfit(&result, wardrobe));
    }
}
