use crate::stylist::{Outfit, SUGGESTION_MIN_ITEMS};
use crate::wardrobe::{ClothingItem, WardrobeStats};
use crate::weather::WeatherInfo;
use std::fmt::Write;

pub fn item_line(item: &ClothingItem) -> String {
    let mut line = format!(
        "{}  {:<9}  {} ({}, {})  worn {}x",
        item.id, item.category, item.sub_category, item.color, item.style, item.wear_count
    );
    if !item.season.is_empty() {
        let _ = write!(line, "  [{}]", item.season.join(", "));
    }
    line
}

pub fn item_list(items: &[&ClothingItem]) -> String {
    if items.is_empty() {
        return "No items found.".to_string();
    }
    items
        .iter()
        .map(|item| item_line(item))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn stats(stats: &WardrobeStats) -> String {
    let mut out = format!("Total Items: {}", stats.total);
    for (category, count) in &stats.by_category {
        let _ = write!(out, "\n  {category:<9}  {count}");
    }
    out
}

pub fn weather(weather: &WeatherInfo) -> String {
    format!("{} {}", weather.icon, weather.summary())
}

pub fn outfit(outfit: Option<&Outfit>, wardrobe_len: usize) -> String {
    let Some(outfit) = outfit else {
        return format!(
            "Add at least {SUGGESTION_MIN_ITEMS} items to get outfit suggestions (you have {wardrobe_len})."
        );
    };

    if outfit.is_empty() {
        return format!("No suggestion available. {}", outfit.reasoning)
            .trim_end()
            .to_string();
    }

    let mut out = String::from("Today's outfit:");
    for item in &outfit.items {
        let _ = write!(out, "\n  - {} ({}, {})", item.sub_category, item.color, item.category);
    }
    if !outfit.reasoning.is_empty() {
        let _ = write!(out, "\n\n{}", outfit.reasoning);
    }
    out
}
