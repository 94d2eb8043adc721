use std::sync::Arc;

use aurastyle::wardrobe::{
    Category, ClothingItem, ItemDescriptor, ItemStore, KeyValueStorage, MemoryStorage,
    WardrobeFilter,
};

fn item(id: &str, category: Category, sub_category: &str, color: &str) -> ClothingItem {
    let mut item = ClothingItem::from_descriptor(
        "img",
        ItemDescriptor {
            category,
            sub_category: sub_category.into(),
            color: color.into(),
            ..ItemDescriptor::default()
        },
    );
    item.id = id.into();
    item
}

fn sample_store() -> ItemStore {
    let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
    let mut store = ItemStore::open(storage);
    store.add(item("1", Category::Top, "T-Shirt", "White"));
    store.add(item("2", Category::Top, "Blouse", "Navy Blue"));
    store.add(item("3", Category::Bottom, "Jeans", "Blue"));
    store.add(item("4", Category::Shoes, "Sneakers", "White"));
    store
}

#[test]
fn category_filter_keeps_store_order() {
    let store = sample_store();
    let filter = WardrobeFilter {
        category: Some(Category::Top),
        search: String::new(),
    };
    let ids: Vec<&str> = store.filter(&filter).iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1"]);
}

#[test]
fn search_matches_color_or_sub_category_case_insensitively() {
    let store = sample_store();

    let by_color = WardrobeFilter {
        category: None,
        search: "blue".into(),
    };
    assert_eq!(store.filter(&by_color).len(), 2);

    let by_name = WardrobeFilter {
        category: None,
        search: "SNEAK".into(),
    };
    let hits = store.filter(&by_name);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "4");
}

#[test]
fn category_and_search_combine() {
    let store = sample_store();
    let filter = WardrobeFilter {
        category: Some(Category::Shoes),
        search: "white".into(),
    };
    let hits = store.filter(&filter);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].sub_category, "Sneakers");
}

#[test]
fn stats_count_every_category() {
    let stats = sample_store().stats();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.count(Category::Top), 2);
    assert_eq!(stats.count(Category::Bottom), 1);
    assert_eq!(stats.count(Category::Shoes), 1);
    assert_eq!(stats.count(Category::Dress), 0);
}
