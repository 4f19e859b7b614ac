//! Form for a single configuration item

use eframe::egui;

use crate::color::HexColor;
use crate::config::{ConfigItem, DetentOption, FieldUpdate, ItemField, ItemList};
use crate::constants::{item as item_defaults, rotation, strength};
use crate::gui::constants::*;
use crate::numeric;
use crate::validation;

/// Change requested by the form, applied to the list after the frame is drawn
#[derive(Debug, Clone, PartialEq)]
pub enum ItemAction {
    Update(u32, FieldUpdate),
    Delete(u32),
    AddDetent(u32),
    SetDetentPosition { id: u32, index: usize, position: i64 },
    SetDetentStrength { id: u32, index: usize, strength: f64 },
    RemoveDetent { id: u32, index: usize },
    Move { from: usize, to: usize },
}

impl ItemAction {
    pub fn apply(self, items: &mut ItemList) -> bool {
        match self {
            ItemAction::Update(id, update) => items.update_field(id, update),
            ItemAction::Delete(id) => items.remove(id),
            ItemAction::AddDetent(id) => items.add_detent_position(id),
            ItemAction::SetDetentPosition { id, index, position } => {
                items.set_detent_position(id, index, &position.to_string())
            }
            ItemAction::SetDetentStrength { id, index, strength } => {
                items.set_detent_strength(id, index, &strength.to_string())
            }
            ItemAction::RemoveDetent { id, index } => items.remove_detent_position(id, index),
            ItemAction::Move { from, to } => items.move_item(from, to),
        }
    }
}

/// Outline a field red when it fails validation
fn mark_invalid(ui: &egui::Ui, response: &egui::Response, valid: bool) {
    if !valid {
        ui.painter().rect_stroke(
            response.rect.expand(1.0),
            2.0,
            egui::Stroke::new(1.5, INVALID_OUTLINE),
            egui::StrokeKind::Outside,
        );
    }
}

/// Renders the fields of one item (the drag handle is drawn by the list)
pub fn ui(ui: &mut egui::Ui, item: &ConfigItem, actions: &mut Vec<ItemAction>) {
    let id = item.id;

    ui.horizontal(|ui| {
        let mut name = item.name.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut name)
                .hint_text("Item Name (max 16 chars)")
                .char_limit(item_defaults::MAX_NAME_LENGTH)
                .desired_width(NAME_FIELD_WIDTH),
        );
        if response.changed() {
            actions.push(ItemAction::Update(id, FieldUpdate::Name(name)));
        }
        mark_invalid(ui, &response, validation::is_field_valid(item, ItemField::Name));

        let mut entity_id = item.entity_id.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut entity_id)
                .hint_text("Entity ID")
                .desired_width(ENTITY_FIELD_WIDTH),
        );
        if response.changed() {
            actions.push(ItemAction::Update(id, FieldUpdate::EntityId(entity_id)));
        }
        mark_invalid(ui, &response, validation::is_field_valid(item, ItemField::EntityId));

        let selected_text = item.detent_option.map_or("Detent Option", DetentOption::label);
        let response = egui::ComboBox::from_id_salt(("detent_option", id))
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for option in DetentOption::ALL {
                    let selected = item.detent_option == Some(option);
                    if ui.selectable_label(selected, option.label()).clicked() && !selected {
                        actions.push(ItemAction::Update(id, FieldUpdate::DetentOption(Some(option))));
                    }
                }
            })
            .response;
        mark_invalid(ui, &response, validation::is_field_valid(item, ItemField::DetentOption));

        if ui.button("🗑 Delete").clicked() {
            actions.push(ItemAction::Delete(id));
        }
    });

    if item.is_custom() {
        ui.add_space(ITEM_SPACING / 2.0);
        ui.horizontal(|ui| {
            ui.label("Detent Strength:");
            let mut value = numeric::parse_float(&item.custom_detent_strength).unwrap_or(strength::MIN);
            let response = ui.add(
                egui::DragValue::new(&mut value)
                    .range(strength::MIN..=strength::MAX)
                    .speed(0.1)
                    .fixed_decimals(1),
            );
            if response.changed() {
                actions.push(ItemAction::Update(
                    id,
                    FieldUpdate::CustomDetentStrength(numeric::format_number(value)),
                ));
            }
            mark_invalid(ui, &response, validation::is_field_valid(item, ItemField::CustomDetentStrength));
            ui.label(
                egui::RichText::new("0.0 (no detents) to 9.9 (very strong)")
                    .small()
                    .italics(),
            );
        });
    }

    if item.detent_option == Some(DetentOption::StrongDetents) {
        ui.colored_label(
            WARNING_COLOR,
            "⚠ Strong detents are not recommended. Consider \"Weak Detents\" for a better feel.",
        );
    }

    ui.add_space(ITEM_SPACING / 2.0);

    ui.horizontal(|ui| {
        ui.label("LED Color:");
        let mut rgb = item
            .color
            .parse::<HexColor>()
            .or_else(|_| item_defaults::DEFAULT_COLOR.parse::<HexColor>())
            .map(HexColor::to_array)
            .unwrap_or_default();
        if ui.color_edit_button_srgb(&mut rgb).changed() {
            actions.push(ItemAction::Update(id, FieldUpdate::Color(HexColor::from_array(rgb).to_string())));
        }
        ui.label(egui::RichText::new(&item.color).monospace().weak());
    });

    ui.horizontal(|ui| {
        ui.label("Min Value:");
        let mut min = item.min.clone();
        let response = ui.add(egui::TextEdit::singleline(&mut min).hint_text("Min").desired_width(NUMBER_FIELD_WIDTH));
        if response.changed() {
            actions.push(ItemAction::Update(id, FieldUpdate::Min(min)));
        }
        mark_invalid(ui, &response, validation::is_field_valid(item, ItemField::Min));

        ui.add_space(ITEM_SPACING);

        ui.label("Max Value:");
        let mut max = item.max.clone();
        let response = ui.add(egui::TextEdit::singleline(&mut max).hint_text("Max").desired_width(NUMBER_FIELD_WIDTH));
        if response.changed() {
            actions.push(ItemAction::Update(id, FieldUpdate::Max(max)));
        }
        mark_invalid(ui, &response, validation::is_field_valid(item, ItemField::Max));
    });

    if numeric::parse_int(&item.max) == Some(rotation::UNBOUNDED) {
        ui.label(
            egui::RichText::new("ℹ Max -1 means no end stops. Rotation will be unlimited.")
                .small()
                .weak(),
        );
    }

    rotation_ui(ui, item, actions);

    let mut emphasize = item.emphasize_extreme_values;
    if ui
        .checkbox(&mut emphasize, "Emphasize extreme values (stronger detents at min and max)")
        .changed()
    {
        actions.push(ItemAction::Update(id, FieldUpdate::EmphasizeExtremeValues(emphasize)));
    }

    if item.is_custom() {
        detent_positions_ui(ui, item, actions);
    }
}

fn rotation_ui(ui: &mut egui::Ui, item: &ConfigItem, actions: &mut Vec<ItemAction>) {
    let id = item.id;
    ui.horizontal(|ui| {
        let mut custom = !item.rotation.is_empty();
        if ui.checkbox(&mut custom, "Rotation (Optional):").changed() {
            let rotation = if custom { "1".to_string() } else { String::new() };
            actions.push(ItemAction::Update(id, FieldUpdate::Rotation(rotation)));
        }

        if custom {
            let mut value = numeric::parse_float(&item.rotation).unwrap_or(1.0);
            let response = ui.add(
                egui::DragValue::new(&mut value)
                    .range(0.01..=100.0)
                    .speed(0.01)
                    .max_decimals(2),
            );
            if response.changed() {
                actions.push(ItemAction::Update(id, FieldUpdate::Rotation(numeric::format_number(value))));
            }
            mark_invalid(ui, &response, validation::is_field_valid(item, ItemField::Rotation));
            ui.label(egui::RichText::new("step out of 100 per turn").small().italics());
        } else {
            ui.label(egui::RichText::new("Auto").weak());
        }
    });
}

fn detent_positions_ui(ui: &mut egui::Ui, item: &ConfigItem, actions: &mut Vec<ItemAction>) {
    let id = item.id;
    let bounds = item.bounds();

    ui.add_space(ITEM_SPACING / 2.0);
    ui.label(egui::RichText::new("Custom Detent Positions").strong());

    if item.detent_positions.is_empty() {
        ui.label(
            egui::RichText::new("(No custom positions; emphasis detents are generated when enabled)")
                .small()
                .italics()
                .weak(),
        );
    }

    for (index, entry) in item.detent_positions.iter().enumerate() {
        ui.horizontal(|ui| {
            ui.label(format!("{}.", index + 1));

            ui.label("Position:");
            let mut position = numeric::parse_int(&entry.position)
                .or_else(|| numeric::parse_int(&item.min))
                .unwrap_or(0);
            let mut drag = egui::DragValue::new(&mut position).speed(0.2);
            if let Some((min, max)) = bounds.filter(|(min, max)| min <= max) {
                drag = drag.range(min..=max);
            }
            let response = ui.add(drag);
            if response.changed() {
                actions.push(ItemAction::SetDetentPosition { id, index, position });
            }
            mark_invalid(ui, &response, validation::is_detent_position_valid(item, &entry.position));

            ui.label("Strength:");
            let mut value = numeric::parse_float(&entry.strength).unwrap_or(strength::MIN);
            let response = ui.add(
                egui::DragValue::new(&mut value)
                    .range(strength::MIN..=strength::MAX)
                    .speed(0.1)
                    .fixed_decimals(1),
            );
            if response.changed() {
                actions.push(ItemAction::SetDetentStrength { id, index, strength: value });
            }
            mark_invalid(ui, &response, numeric::is_strength_in_range(&entry.strength));

            if ui.small_button("✖").on_hover_text("Remove position").clicked() {
                actions.push(ItemAction::RemoveDetent { id, index });
            }
        });
    }

    if ui.button("➕ Add Position").clicked() {
        actions.push(ItemAction::AddDetent(id));
    }
}
