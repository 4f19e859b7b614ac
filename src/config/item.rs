//! Smart knob configuration item model
//!
//! Every numeric field is kept as the text the user typed so that partially
//! entered values survive between frames; the validation and transform
//! modules interpret the text.

use std::fmt;
use std::str::FromStr;

use crate::constants::{item, rotation, strength};
use crate::error::ConfigError;
use crate::numeric;

/// Detent behavior of a knob
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetentOption {
    NoDetents,
    WeakDetents,
    StrongDetents,
    Custom,
}

impl DetentOption {
    /// All options in display order
    pub const ALL: [DetentOption; 4] = [
        DetentOption::NoDetents,
        DetentOption::WeakDetents,
        DetentOption::StrongDetents,
        DetentOption::Custom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DetentOption::NoDetents => "No Detents",
            DetentOption::WeakDetents => "Weak Detents",
            DetentOption::StrongDetents => "Strong Detents",
            DetentOption::Custom => "Custom",
        }
    }

    /// Strength of the predefined options; custom strength lives on the item
    pub fn fixed_strength(self) -> Option<f64> {
        match self {
            DetentOption::NoDetents => Some(strength::NONE),
            DetentOption::WeakDetents => Some(strength::WEAK),
            DetentOption::StrongDetents => Some(strength::STRONG),
            DetentOption::Custom => None,
        }
    }
}

impl fmt::Display for DetentOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DetentOption {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DetentOption::ALL
            .into_iter()
            .find(|option| option.label() == s)
            .ok_or_else(|| ConfigError::UnknownDetentOption(s.to_string()))
    }
}

/// One user-defined detent: integer position text and strength text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetentPositionEntry {
    pub position: String,
    pub strength: String,
}

impl DetentPositionEntry {
    pub fn new(position: impl Into<String>, strength: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            strength: strength.into(),
        }
    }
}

/// One row of the editable item list
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigItem {
    pub id: u32,
    pub name: String,
    pub entity_id: String,
    /// `None` until the user picks an option
    pub detent_option: Option<DetentOption>,
    pub custom_detent_strength: String,
    pub min: String,
    /// `-1` means no end stops
    pub max: String,
    /// Empty means the width is derived from the range
    pub rotation: String,
    pub color: String,
    pub detent_positions: Vec<DetentPositionEntry>,
    pub emphasize_extreme_values: bool,
}

impl ConfigItem {
    /// Empty item as created by "Add New Item"
    pub fn new(id: u32) -> Self {
        Self {
            id,
            name: String::new(),
            entity_id: String::new(),
            detent_option: None,
            custom_detent_strength: item::DEFAULT_CUSTOM_DETENT_STRENGTH.to_string(),
            min: item::DEFAULT_MIN.to_string(),
            max: item::DEFAULT_MAX.to_string(),
            rotation: String::new(),
            color: item::DEFAULT_COLOR.to_string(),
            detent_positions: Vec::new(),
            emphasize_extreme_values: false,
        }
    }

    pub fn is_custom(&self) -> bool {
        self.detent_option == Some(DetentOption::Custom)
    }

    /// `(min, max)` when both bounds parse and the range has end stops
    pub fn bounds(&self) -> Option<(i64, i64)> {
        let min = numeric::parse_int(&self.min)?;
        let max = numeric::parse_int(&self.max)?;
        (max != rotation::UNBOUNDED).then_some((min, max))
    }

    /// Copy of this item with one field replaced, after input normalization
    pub fn with_update(&self, update: FieldUpdate) -> Self {
        let mut updated = self.clone();
        match update.normalized() {
            FieldUpdate::Name(value) => updated.name = value,
            FieldUpdate::EntityId(value) => updated.entity_id = value,
            FieldUpdate::DetentOption(value) => updated.detent_option = value,
            FieldUpdate::CustomDetentStrength(value) => updated.custom_detent_strength = value,
            FieldUpdate::Min(value) => updated.min = value,
            FieldUpdate::Max(value) => updated.max = value,
            FieldUpdate::Rotation(value) => updated.rotation = value,
            FieldUpdate::Color(value) => updated.color = value,
            FieldUpdate::DetentPositions(value) => updated.detent_positions = value,
            FieldUpdate::EmphasizeExtremeValues(value) => updated.emphasize_extreme_values = value,
        }
        updated
    }
}

/// Field names, used to ask the validator about a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemField {
    Name,
    EntityId,
    DetentOption,
    CustomDetentStrength,
    Min,
    Max,
    Rotation,
    Color,
    DetentPositions,
    EmphasizeExtremeValues,
}

/// New value for one field of an item
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Name(String),
    EntityId(String),
    DetentOption(Option<DetentOption>),
    CustomDetentStrength(String),
    Min(String),
    Max(String),
    Rotation(String),
    Color(String),
    DetentPositions(Vec<DetentPositionEntry>),
    EmphasizeExtremeValues(bool),
}

impl FieldUpdate {
    pub fn field(&self) -> ItemField {
        match self {
            FieldUpdate::Name(_) => ItemField::Name,
            FieldUpdate::EntityId(_) => ItemField::EntityId,
            FieldUpdate::DetentOption(_) => ItemField::DetentOption,
            FieldUpdate::CustomDetentStrength(_) => ItemField::CustomDetentStrength,
            FieldUpdate::Min(_) => ItemField::Min,
            FieldUpdate::Max(_) => ItemField::Max,
            FieldUpdate::Rotation(_) => ItemField::Rotation,
            FieldUpdate::Color(_) => ItemField::Color,
            FieldUpdate::DetentPositions(_) => ItemField::DetentPositions,
            FieldUpdate::EmphasizeExtremeValues(_) => ItemField::EmphasizeExtremeValues,
        }
    }

    /// Apply data-entry policy: truncate names, clamp strengths, tidy rotation
    pub fn normalized(self) -> Self {
        match self {
            FieldUpdate::Name(value) => FieldUpdate::Name(truncate_name(&value)),
            FieldUpdate::CustomDetentStrength(value) => {
                FieldUpdate::CustomDetentStrength(numeric::normalize_strength(&value))
            }
            FieldUpdate::Rotation(value) => FieldUpdate::Rotation(numeric::normalize_decimal(&value)),
            other => other,
        }
    }
}

/// Keep at most the first 16 characters of a name
pub fn truncate_name(name: &str) -> String {
    name.chars().take(item::MAX_NAME_LENGTH).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_defaults() {
        let item = ConfigItem::new(7);
        assert_eq!(item.id, 7);
        assert!(item.name.is_empty());
        assert!(item.entity_id.is_empty());
        assert_eq!(item.detent_option, None);
        assert_eq!(item.custom_detent_strength, "0.5");
        assert_eq!(item.min, "0");
        assert_eq!(item.max, "-1");
        assert_eq!(item.color, "#0088ff");
        assert!(item.rotation.is_empty());
        assert!(item.detent_positions.is_empty());
        assert!(!item.emphasize_extreme_values);
    }

    #[test]
    fn test_detent_option_labels_parse_back() {
        for option in DetentOption::ALL {
            assert_eq!(option.label().parse::<DetentOption>().unwrap(), option);
        }
    }

    #[test]
    fn test_unknown_detent_option_is_error() {
        let err = "Medium Detents".parse::<DetentOption>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownDetentOption("Medium Detents".to_string()));
        assert!("".parse::<DetentOption>().is_err());
    }

    #[test]
    fn test_fixed_strengths() {
        assert_eq!(DetentOption::NoDetents.fixed_strength(), Some(0.0));
        assert_eq!(DetentOption::WeakDetents.fixed_strength(), Some(1.0));
        assert_eq!(DetentOption::StrongDetents.fixed_strength(), Some(2.0));
        assert_eq!(DetentOption::Custom.fixed_strength(), None);
    }

    #[test]
    fn test_name_truncated_on_update() {
        let item = ConfigItem::new(1).with_update(FieldUpdate::Name("Living Room Ceiling Light".into()));
        assert_eq!(item.name, "Living Room Ceil");
        assert_eq!(item.name.chars().count(), 16);
    }

    #[test]
    fn test_name_truncation_counts_characters() {
        let item = ConfigItem::new(1).with_update(FieldUpdate::Name("ÄÖÜäöüßÄÖÜäöüßÄÖÜ".into()));
        assert_eq!(item.name.chars().count(), 16);
    }

    #[test]
    fn test_custom_strength_clamped_on_update() {
        let item = ConfigItem::new(1).with_update(FieldUpdate::CustomDetentStrength("12.34".into()));
        assert_eq!(item.custom_detent_strength, "9.9");

        let item = item.with_update(FieldUpdate::CustomDetentStrength("-3".into()));
        assert_eq!(item.custom_detent_strength, "0.0");
    }

    #[test]
    fn test_rotation_normalized_on_update() {
        let item = ConfigItem::new(1).with_update(FieldUpdate::Rotation("1.50".into()));
        assert_eq!(item.rotation, "1.5");

        let item = item.with_update(FieldUpdate::Rotation(String::new()));
        assert!(item.rotation.is_empty());
    }

    #[test]
    fn test_update_leaves_other_fields_alone() {
        let original = ConfigItem::new(3);
        let updated = original.with_update(FieldUpdate::EntityId("light.kitchen".into()));
        assert_eq!(updated.entity_id, "light.kitchen");
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.name, original.name);
        assert_eq!(updated.color, original.color);
    }

    #[test]
    fn test_bounds() {
        let mut item = ConfigItem::new(1);
        assert_eq!(item.bounds(), None);

        item.max = "10".into();
        assert_eq!(item.bounds(), Some((0, 10)));

        item.min = "abc".into();
        assert_eq!(item.bounds(), None);
    }

    #[test]
    fn test_update_field_names() {
        assert_eq!(FieldUpdate::Min("1".into()).field(), ItemField::Min);
        assert_eq!(FieldUpdate::EmphasizeExtremeValues(true).field(), ItemField::EmphasizeExtremeValues);
    }
}
