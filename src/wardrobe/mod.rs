pub mod storage;
pub mod store;
pub mod types;

pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{ItemStore, WARDROBE_KEY, WardrobeFilter, WardrobeStats};
pub use types::{Category, ClothingItem, ItemDescriptor};
