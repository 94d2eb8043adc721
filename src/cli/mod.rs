use crate::calendar::EventType;
use crate::wardrobe::{Category, ItemDescriptor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// `AuraStyle` - your digital wardrobe.
#[derive(Parser, Debug)]
#[command(name = "aurastyle")]
#[command(version)]
#[command(about = "Catalogue clothes and get AI outfit suggestions.", long_about = None)]
pub struct Cli {
    /// Log request flow and fallbacks at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse and edit the wardrobe
    Wardrobe {
        #[command(subcommand)]
        command: WardrobeCommands,
    },

    /// Item counts per category
    Stats,

    /// Suggest today's outfit (needs at least 3 items)
    Suggest {
        /// Event happening today as "Title" or "Title:Type" (Work, Casual, Formal, Date, Sports).
        /// A suffix that is not a known type stays part of the title.
        #[arg(short, long = "event", value_parser = parse_event_arg)]
        events: Vec<EventSpec>,
    },

    /// Show the configured weather
    Weather,
}

#[derive(Subcommand, Debug)]
pub enum WardrobeCommands {
    /// List items, newest first
    List {
        /// Only show one category
        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,

        /// Match sub-category or color (case-insensitive)
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Photograph-to-wardrobe: classify an image and add it
    Add {
        /// Path to the item photo
        image: PathBuf,

        #[command(flatten)]
        overrides: ItemOverrides,
    },

    /// Delete an item by id
    Remove {
        id: String,
    },
}

/// Corrections applied on top of the classifier's advisory descriptor.
#[derive(Args, Debug, Default, Clone)]
pub struct ItemOverrides {
    #[arg(long, value_parser = parse_category)]
    pub category: Option<Category>,

    #[arg(long)]
    pub sub_category: Option<String>,

    #[arg(long)]
    pub color: Option<String>,

    #[arg(long)]
    pub style: Option<String>,

    /// Replaces the detected seasons; repeat for several
    #[arg(long = "season")]
    pub seasons: Vec<String>,
}

impl ItemOverrides {
    pub fn apply(self, mut descriptor: ItemDescriptor) -> ItemDescriptor {
        if let Some(category) = self.category {
            descriptor.category = category;
        }
        if let Some(sub_category) = self.sub_category {
            descriptor.sub_category = sub_category;
        }
        if let Some(color) = self.color {
            descriptor.color = color;
        }
        if let Some(style) = self.style {
            descriptor.style = style;
        }
        if !self.seasons.is_empty() {
            descriptor.season = self.seasons;
        }
        descriptor
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSpec {
    pub title: String,
    pub kind: EventType,
}

/// `"Title"` or `"Title:Type"`. The suffix after the last colon is taken as
/// the type only when it names one; otherwise the whole argument is the
/// title, so `"Lunch at 12:30"` stays intact.
pub fn parse_event_arg(raw: &str) -> Result<EventSpec, String> {
    let (title, kind) = raw
        .rsplit_once(':')
        .and_then(|(title, suffix)| {
            EventType::from_str(suffix.trim())
                .ok()
                .map(|kind| (title, kind))
        })
        .unwrap_or((raw, EventType::default()));

    let title = title.trim();
    if title.is_empty() {
        return Err("event title must not be empty".into());
    }
    Ok(EventSpec {
        title: title.to_string(),
        kind,
    })
}

pub fn parse_category(raw: &str) -> Result<Category, String> {
    Category::from_str(raw.trim()).map_err(|_| {
        format!(
            "unknown category {raw:?}; expected Top, Bottom, Outerwear, Shoes, Accessory or Dress"
        )
    })
}
