//! GUI-specific constants for layout and notification colors

use egui;

/// Window title
pub const APP_TITLE: &str = "Smart Knob Config Creator";

/// Editor window dimensions
pub const WINDOW_WIDTH: f32 = 720.0;
pub const WINDOW_HEIGHT: f32 = 820.0;
pub const WINDOW_MIN_WIDTH: f32 = 560.0;
pub const WINDOW_MIN_HEIGHT: f32 = 480.0;

/// Layout spacing
pub const PADDING: f32 = 8.0;
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;

/// Field widths
pub const NAME_FIELD_WIDTH: f32 = 170.0;
pub const ENTITY_FIELD_WIDTH: f32 = 220.0;
pub const NUMBER_FIELD_WIDTH: f32 = 70.0;

/// Status colors
pub const NOTIFY_SUCCESS: egui::Color32 = egui::Color32::from_rgb(0, 200, 0);
pub const NOTIFY_FAILURE: egui::Color32 = egui::Color32::from_rgb(200, 0, 0);
pub const WARNING_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 200, 0);

/// Outline drawn around fields that fail validation
pub const INVALID_OUTLINE: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);
