use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    #[default]
    Top,
    Bottom,
    Outerwear,
    Shoes,
    Accessory,
    Dress,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Top,
        Category::Bottom,
        Category::Outerwear,
        Category::Shoes,
        Category::Accessory,
        Category::Dress,
    ];
}

/// A catalogued piece of clothing.
///
/// Field names serialize in camelCase; the persisted wardrobe slot is a bare
/// JSON array of these records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    pub id: String,
    /// Opaque image reference, normally a `data:<mime>;base64,...` URL.
    pub image: String,
    pub category: Category,
    pub sub_category: String,
    pub color: String,
    pub style: String,
    #[serde(default)]
    pub season: Vec<String>,
    #[serde(default)]
    pub wear_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_worn: Option<DateTime<Utc>>,
    pub date_added: DateTime<Utc>,
}

impl ClothingItem {
    /// Commit a confirmed descriptor and its captured image as a new item.
    pub fn from_descriptor(image: impl Into<String>, descriptor: ItemDescriptor) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            image: image.into(),
            category: descriptor.category,
            sub_category: descriptor.sub_category,
            color: descriptor.color,
            style: descriptor.style,
            season: descriptor.season,
            wear_count: 0,
            last_worn: None,
            date_added: Utc::now(),
        }
    }
}

/// Advisory attributes for a captured item, produced by classification and
/// open to user correction before the item is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDescriptor {
    pub category: Category,
    pub sub_category: String,
    pub color: String,
    pub style: String,
    pub season: Vec<String>,
}

pub const DEFAULT_SUB_CATEGORY: &str = "Clothing Item";
pub const DEFAULT_COLOR: &str = "Unknown";
pub const DEFAULT_STYLE: &str = "Casual";

impl Default for ItemDescriptor {
    /// Per-field defaults applied when a classification response omits a field.
    fn default() -> Self {
        Self {
            category: Category::Top,
            sub_category: DEFAULT_SUB_CATEGORY.into(),
            color: DEFAULT_COLOR.into(),
            style: DEFAULT_STYLE.into(),
            season: Vec::new(),
        }
    }
}

impl ItemDescriptor {
    /// Used whole when classification fails outright.
    pub fn fallback() -> Self {
        Self {
            category: Category::Top,
            sub_category: "Classic Shirt".into(),
            color: "Neutral".into(),
            style: "Casual".into(),
            season: vec!["Spring".into(), "Summer".into()],
        }
    }
}
