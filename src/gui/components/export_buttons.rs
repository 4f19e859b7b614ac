//! Add / generate / copy buttons

use eframe::egui;

use crate::gui::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    None,
    AddItem,
    GenerateFile,
    CopyToClipboard,
}

/// Renders the action buttons; all of them are disabled while the list is invalid
pub fn ui(ui: &mut egui::Ui, is_valid: bool) -> ButtonAction {
    let mut action = ButtonAction::None;

    ui.add_space(ITEM_SPACING);

    if ui
        .add_enabled(is_valid, egui::Button::new("➕ Add New Item"))
        .clicked()
    {
        action = ButtonAction::AddItem;
    }

    ui.add_space(ITEM_SPACING);

    ui.horizontal(|ui| {
        if ui
            .add_enabled(is_valid, egui::Button::new("💾 Generate Config"))
            .on_hover_text("Save smart_knob_conf.json")
            .clicked()
        {
            action = ButtonAction::GenerateFile;
        }

        if ui
            .add_enabled(is_valid, egui::Button::new("📋 Copy Config"))
            .on_hover_text("Copy compact JSON to the clipboard")
            .clicked()
        {
            action = ButtonAction::CopyToClipboard;
        }
    });

    if !is_valid {
        ui.label(
            egui::RichText::new("Complete the highlighted fields to enable export")
                .small()
                .weak(),
        );
    }

    action
}
