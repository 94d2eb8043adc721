use crate::Config;
use crate::app::render;
use crate::calendar::EventStore;
use crate::cli::{Cli, Commands, EventSpec, ItemOverrides, WardrobeCommands};
use crate::llm::{GeminiClient, StructuredModel};
use crate::media::encode_image_file;
use crate::stylist::{ClassificationClient, SuggestionClient, SuggestionTrigger};
use crate::wardrobe::{ClothingItem, FileStorage, ItemStore, KeyValueStorage, WardrobeFilter};
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

fn build_model(config: &Config) -> Arc<dyn StructuredModel> {
    let client = GeminiClient::new(config.api_key.as_deref()).with_base_url(&config.api_base_url);
    if !client.has_api_key() {
        tracing::warn!(
            "no Gemini API key configured (set AURASTYLE_API_KEY or GEMINI_API_KEY); \
             AI features will fall back to defaults"
        );
    }
    Arc::new(client)
}

fn open_store(config: &Config) -> ItemStore {
    let storage = FileStorage::new(&config.data_dir);
    tracing::debug!(data_dir = %storage.root().display(), "opening wardrobe");
    let storage: Arc<dyn KeyValueStorage> = Arc::new(storage);
    ItemStore::open(storage)
}

async fn add_item(
    config: &Config,
    store: &mut ItemStore,
    image_path: &Path,
    overrides: ItemOverrides,
) -> crate::error::Result<ClothingItem> {
    let image = encode_image_file(image_path)?;

    let classifier = ClassificationClient::new(build_model(config), &config.classify_model)
        .with_temperature(config.temperature);
    let detected = classifier.analyze(&image).await;
    let descriptor = overrides.apply(detected);

    let item = ClothingItem::from_descriptor(image, descriptor);
    store.add(item.clone());
    info!(id = %item.id, category = %item.category, "added wardrobe item");
    Ok(item)
}

async fn suggest(config: &Config, store: &ItemStore, event_specs: Vec<EventSpec>) -> String {
    let mut events = EventStore::new();
    for spec in event_specs {
        events.create(&spec.title, spec.kind);
    }

    let client = SuggestionClient::new(build_model(config), &config.suggest_model)
        .with_temperature(config.temperature);
    let mut trigger = SuggestionTrigger::new();
    let outfit = trigger
        .on_wardrobe_changed(&client, store.items(), &config.weather, &events.today())
        .await;

    render::outfit(outfit, store.len())
}

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    let mut store = open_store(&config);

    match cli.command {
        Commands::Wardrobe { command } => match command {
            WardrobeCommands::List { category, search } => {
                let filter = WardrobeFilter { category, search };
                println!("{}", render::item_list(&store.filter(&filter)));
            }
            WardrobeCommands::Add { image, overrides } => {
                let item = add_item(&config, &mut store, &image, overrides).await?;
                println!("Added {}", render::item_line(&item));
            }
            WardrobeCommands::Remove { id } => {
                let existed = store.get(&id).is_some();
                store.remove(&id);
                if existed {
                    println!("Removed {id}");
                } else {
                    println!("No item with id {id}");
                }
            }
        },
        Commands::Stats => println!("{}", render::stats(&store.stats())),
        Commands::Weather => println!("{}", render::weather(&config.weather)),
        Commands::Suggest { events } => println!("{}", suggest(&config, &store, events).await),
    }

    Ok(())
}
