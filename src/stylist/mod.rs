//! The two AI-backed operations: classifying a photographed item and
//! suggesting today's outfit. Both clients are stateless and never fail;
//! see each module for its fallback.

pub mod classify;
pub mod outfit;
pub mod suggest;

pub use classify::{ClassificationClient, parse_descriptor};
pub use outfit::{Outfit, SUGGESTION_MIN_ITEMS, SuggestionTrigger, can_suggest, resolve_outfit};
pub use suggest::{
    NO_SUGGESTION_MESSAGE, SUGGESTION_FAILED_MESSAGE, SuggestionClient, SuggestionResult,
    build_prompt, parse_suggestion,
};
