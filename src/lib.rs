#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod app;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod media;
pub mod stylist;
pub mod wardrobe;
pub mod weather;

pub use calendar::{CalendarEvent, EventStore, EventType};
pub use config::Config;
pub use error::{AuraError, ConfigError, LlmError, StorageError};
pub use stylist::{ClassificationClient, Outfit, SuggestionClient, SuggestionResult};
pub use wardrobe::{Category, ClothingItem, ItemDescriptor, ItemStore};
pub use weather::WeatherInfo;
