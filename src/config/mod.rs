//! Configuration item model and the editable item list

pub mod item;
pub mod list;

// Re-export commonly used types
pub use item::{ConfigItem, DetentOption, DetentPositionEntry, FieldUpdate, ItemField};
pub use list::ItemList;
