//! Reorderable list of item forms

use eframe::egui;

use super::item_editor::{self, ItemAction};
use crate::config::ConfigItem;
use crate::gui::constants::*;
use crate::validation;

/// Insertion slot to list index for a splice move
///
/// The slot counts positions between rows (0 = before the first row,
/// `len` = after the last); removing the dragged row first shifts later
/// slots down by one.
pub fn drop_target(from: usize, slot: usize) -> usize {
    if from < slot { slot - 1 } else { slot }
}

/// Renders every item with a drag handle and returns the requested changes
pub fn ui(ui: &mut egui::Ui, items: &[ConfigItem]) -> Vec<ItemAction> {
    let mut actions = Vec::new();
    let mut from_idx = None;
    let mut to_slot = None;

    let frame = egui::Frame::default().inner_margin(4.0);

    // Drop zone containing all items
    let (_, dropped_payload) = ui.dnd_drop_zone::<usize, ()>(frame, |ui| {
        for (row_idx, item) in items.iter().enumerate() {
            let response = ui
                .group(|ui| {
                    ui.horizontal(|ui| {
                        let handle_id = egui::Id::new("config_item_handle").with(item.id);
                        ui.dnd_drag_source(handle_id, row_idx, |ui| {
                            ui.label(egui::RichText::new("≡").heading().strong());
                        })
                        .response
                        .on_hover_text("Drag to reorder");

                        let heading = if item.name.is_empty() {
                            format!("Item #{}", item.id)
                        } else {
                            item.name.clone()
                        };
                        ui.label(egui::RichText::new(heading).strong());

                        if !validation::is_item_valid(item) {
                            ui.colored_label(INVALID_OUTLINE, "(incomplete)");
                        }
                    });

                    item_editor::ui(ui, item, &mut actions);
                })
                .response;

            ui.add_space(ITEM_SPACING);

            // Insertion preview while another item hovers over this one
            if let (Some(pointer), Some(hovered_payload)) = (
                ui.input(|i| i.pointer.interact_pos()),
                response.dnd_hover_payload::<usize>(),
            ) {
                let rect = response.rect;
                let stroke = egui::Stroke::new(2.0, ui.visuals().selection.stroke.color);

                let insert_slot = if *hovered_payload == row_idx {
                    ui.painter().hline(rect.x_range(), rect.center().y, stroke);
                    row_idx
                } else if pointer.y < rect.center().y {
                    ui.painter().hline(rect.x_range(), rect.top(), stroke);
                    row_idx
                } else {
                    ui.painter().hline(rect.x_range(), rect.bottom(), stroke);
                    row_idx + 1
                };

                if let Some(dragged_payload) = response.dnd_release_payload::<usize>() {
                    from_idx = Some(*dragged_payload);
                    to_slot = Some(insert_slot);
                }
            }
        }
    });

    // Dropped on the empty area below the items
    if let Some(dragged_payload) = dropped_payload {
        if to_slot.is_none() {
            from_idx = Some(*dragged_payload);
            to_slot = Some(items.len());
        }
    }

    if let (Some(from), Some(slot)) = (from_idx, to_slot) {
        let to = drop_target(from, slot);
        if from != to {
            actions.push(ItemAction::Move { from, to });
        }
    }

    actions
}
