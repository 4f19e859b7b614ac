//! Item list to device configuration transform
//!
//! Turns the editable items into the records the knob firmware reads. The
//! transform never fails: text that does not parse falls back to the
//! documented defaults, so a malformed item still yields a record. Callers are
//! expected to gate export on [`crate::validation::check_all_items_valid`].

use std::f64::consts::TAU;

use serde::{Serialize, Serializer};
use tracing::warn;

use crate::color;
use crate::config::{ConfigItem, DetentOption};
use crate::constants::{output, rotation, strength};
use crate::numeric;

/// One entry of the exported JSON array
///
/// Field order is the key order of the emitted JSON object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputRecord {
    pub position: i64,
    pub min_position: i64,
    pub max_position: i64,
    pub width_radians: f64,
    #[serde(serialize_with = "serialize_number")]
    pub detent_strength: f64,
    pub endstop_strength: i64,
    pub text: String,
    pub led_hue: u16,
    pub entity_id: String,
    /// Omitted from the JSON when empty, together with `snap_point_bias`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub detent_positions: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "serialize_numbers")]
    pub snap_point_bias: Vec<f64>,
}

/// Transform every item, preserving list order
pub fn format_config_items(items: &[ConfigItem]) -> Vec<OutputRecord> {
    items.iter().map(format_config_item).collect()
}

pub fn format_config_item(item: &ConfigItem) -> OutputRecord {
    let min_position = numeric::parse_int(&item.min).unwrap_or(0);
    let max_position = numeric::parse_int(&item.max).unwrap_or(rotation::UNBOUNDED);

    let width_radians = width_radians(positive_rotation(&item.rotation), item.bounds());
    let detent_strength = resolve_detent_strength(item);
    let (detent_positions, snap_point_bias) = detent_arrays(item, min_position, max_position);

    let led_hue = match color::hex_to_hue(&item.color) {
        Ok(hue) => hue,
        Err(err) => {
            warn!(id = item.id, error = %err, "Unreadable item color, using hue 0");
            0
        }
    };

    OutputRecord {
        position: output::INITIAL_POSITION,
        min_position,
        max_position,
        width_radians,
        detent_strength,
        endstop_strength: output::ENDSTOP_STRENGTH,
        text: label_text(item),
        led_hue,
        entity_id: item.entity_id.clone(),
        detent_positions,
        snap_point_bias,
    }
}

/// Angular width of one step
///
/// An explicit rotation `r` is a step of `r` out of 100 nominal steps per
/// turn. Without one, bounded ranges share 80% of a turn (20% for a two
/// position 0/1 switch) and unbounded ranges use 1% of a turn per step.
pub fn width_radians(rotation: Option<f64>, bounds: Option<(i64, i64)>) -> f64 {
    if let Some(r) = rotation.filter(|r| *r > 0.0) {
        return TAU / (rotation::NOMINAL_STEPS / r);
    }

    match bounds {
        Some((0, 1)) => TAU * rotation::BINARY_TURN_FRACTION,
        Some((min, max)) => {
            let steps = max as f64 - min as f64 + 1.0;
            TAU * rotation::BOUNDED_TURN_FRACTION / steps
        }
        None => TAU * rotation::UNBOUNDED_TURN_FRACTION,
    }
}

/// Base detent strength written for an item
///
/// A non-zero custom strength wins for every option, then the fixed mapping
/// of the option, then 0.
pub fn resolve_detent_strength(item: &ConfigItem) -> f64 {
    let custom = custom_strength(item);
    if custom != 0.0 {
        return custom;
    }
    match item.detent_option {
        Some(option) => option.fixed_strength().unwrap_or(strength::NONE),
        None => {
            warn!(id = item.id, "Item has no detent option, using strength 0");
            strength::NONE
        }
    }
}

/// Parallel detent position and bias arrays, empty when none apply
pub fn detent_arrays(item: &ConfigItem, min_position: i64, max_position: i64) -> (Vec<i64>, Vec<f64>) {
    if item.is_custom() && !item.detent_positions.is_empty() {
        return item
            .detent_positions
            .iter()
            .filter_map(|entry| {
                let position = numeric::parse_int(&entry.position)?;
                let bias = numeric::parse_float(&entry.strength)
                    .filter(|value| !value.is_nan())
                    .unwrap_or(0.0);
                Some((position, bias))
            })
            .unzip();
    }

    let has_end_stops = min_position != rotation::UNBOUNDED && max_position != rotation::UNBOUNDED;
    if !item.emphasize_extreme_values || !has_end_stops {
        return (Vec::new(), Vec::new());
    }

    let base = match item.detent_option {
        Some(DetentOption::Custom) => custom_strength(item),
        Some(option) => option.fixed_strength().unwrap_or(strength::NONE),
        None => strength::NONE,
    };
    emphasized_detents(min_position, max_position, base)
}

/// Detents at both ends and the middle, ends at double strength
pub fn emphasized_detents(min: i64, max: i64, base: f64) -> (Vec<i64>, Vec<f64>) {
    let middle = (i128::from(min) + i128::from(max)).div_euclid(2) as i64;
    let edge = base * strength::EMPHASIS_FACTOR;
    (vec![min, middle, max], vec![edge, base, edge])
}

/// Display text: name, newline, detent description
pub fn label_text(item: &ConfigItem) -> String {
    match item.detent_option {
        Some(DetentOption::Custom) => format!("{}\nCustom ({})", item.name, item.custom_detent_strength),
        Some(option) => format!("{}\n{}", item.name, option.label()),
        None => format!("{}\n", item.name),
    }
}

fn custom_strength(item: &ConfigItem) -> f64 {
    numeric::parse_float(&item.custom_detent_strength)
        .filter(|value| !value.is_nan())
        .unwrap_or(0.0)
}

fn positive_rotation(text: &str) -> Option<f64> {
    numeric::parse_float(text).filter(|value| *value > 0.0)
}

/// Write whole numbers without a decimal point (`2` rather than `2.0`)
fn serialize_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        // Whole number - serialize as integer
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

fn serialize_numbers<S>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    struct Number(f64);

    impl Serialize for Number {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serialize_number(&self.0, serializer)
        }
    }

    serializer.collect_seq(values.iter().map(|value| Number(*value)))
}
