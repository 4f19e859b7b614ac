//! Field and item validation
//!
//! The rule set is fixed. Everything here is a pure predicate over the item
//! text, cheap enough to re-run on every frame.

use crate::config::{ConfigItem, DetentOption, DetentPositionEntry, ItemField};
use crate::constants::item::MAX_NAME_LENGTH;
use crate::numeric;

/// Check a single field of an item
///
/// Fields without a rule (color, detent positions, emphasis flag) are always
/// valid; the custom strength is only checked when the option is `Custom`.
pub fn is_field_valid(item: &ConfigItem, field: ItemField) -> bool {
    match field {
        ItemField::Name => is_name_valid(&item.name),
        ItemField::EntityId => !item.entity_id.is_empty(),
        ItemField::DetentOption => item.detent_option.is_some(),
        ItemField::CustomDetentStrength => {
            !item.is_custom() || numeric::is_strength_in_range(&item.custom_detent_strength)
        }
        ItemField::Min => !item.min.is_empty(),
        ItemField::Max => !item.max.is_empty(),
        ItemField::Rotation => is_rotation_valid(&item.rotation),
        ItemField::Color | ItemField::DetentPositions | ItemField::EmphasizeExtremeValues => true,
    }
}

/// Check that a detent position is an integer inside the item's range
pub fn is_detent_position_valid(item: &ConfigItem, position: &str) -> bool {
    let Some(position) = numeric::parse_int(position) else {
        return false;
    };
    match item.bounds() {
        Some((min, max)) => (min..=max).contains(&position),
        None => true,
    }
}

/// Check a whole detent entry: position in range and strength in [0, 9.9]
pub fn is_detent_entry_valid(item: &ConfigItem, entry: &DetentPositionEntry) -> bool {
    is_detent_position_valid(item, &entry.position) && numeric::is_strength_in_range(&entry.strength)
}

/// Check every rule that gates export for one item
pub fn is_item_valid(item: &ConfigItem) -> bool {
    if !is_name_valid(&item.name) || item.entity_id.is_empty() {
        return false;
    }

    let Some(option) = item.detent_option else {
        return false;
    };

    if option == DetentOption::Custom {
        if !numeric::is_strength_in_range(&item.custom_detent_strength) {
            return false;
        }
        if !item.detent_positions.iter().all(|entry| is_detent_entry_valid(item, entry)) {
            return false;
        }
    }

    if item.min.is_empty() || item.max.is_empty() {
        return false;
    }

    is_rotation_valid(&item.rotation)
}

/// True when every item is valid; an empty list is valid
pub fn check_all_items_valid(items: &[ConfigItem]) -> bool {
    items.iter().all(is_item_valid)
}

/// Number of items that fail validation
pub fn count_invalid_items(items: &[ConfigItem]) -> usize {
    items.iter().filter(|item| !is_item_valid(item)).count()
}

fn is_name_valid(name: &str) -> bool {
    (1..=MAX_NAME_LENGTH).contains(&name.chars().count())
}

fn is_rotation_valid(rotation: &str) -> bool {
    rotation.is_empty() || numeric::parse_float(rotation).is_some_and(|value| value > 0.0)
}
