//! Form components of the editor window

pub mod export_buttons;
pub mod item_editor;
pub mod item_list;
