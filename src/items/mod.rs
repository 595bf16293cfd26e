//! Item records

pub mod item;
pub mod category;

pub use item::ParsedItem;
pub use category::ItemCategory;
