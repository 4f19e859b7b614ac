//! Application-wide constants
//!
//! This module contains all magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Item field limits and defaults
pub mod item {
    /// Maximum number of characters kept in an item name
    pub const MAX_NAME_LENGTH: usize = 16;

    /// Default LED color (blue)
    pub const DEFAULT_COLOR: &str = "#0088ff";

    /// Default strength used when an item switches to custom detents
    pub const DEFAULT_CUSTOM_DETENT_STRENGTH: &str = "0.5";

    /// Default lower rotation bound
    pub const DEFAULT_MIN: &str = "0";

    /// Default upper rotation bound (-1 = no end stops)
    pub const DEFAULT_MAX: &str = "-1";

    /// First id handed out to an empty list
    pub const FIRST_ID: u32 = 1;
}

/// Detent strength limits
pub mod strength {
    /// Lowest accepted detent strength
    pub const MIN: f64 = 0.0;

    /// Highest accepted detent strength
    pub const MAX: f64 = 9.9;

    /// Fixed strength for "No Detents"
    pub const NONE: f64 = 0.0;

    /// Fixed strength for "Weak Detents"
    pub const WEAK: f64 = 1.0;

    /// Fixed strength for "Strong Detents"
    pub const STRONG: f64 = 2.0;

    /// Multiplier applied to the outer detents when extremes are emphasized
    pub const EMPHASIS_FACTOR: f64 = 2.0;
}

/// Rotation range and angular width constants
pub mod rotation {
    /// `max` value meaning "no end stops"
    pub const UNBOUNDED: i64 = -1;

    /// Nominal number of steps a rotation value is expressed against
    pub const NOMINAL_STEPS: f64 = 100.0;

    /// Share of a full turn used by a two-position (on/off) range
    pub const BINARY_TURN_FRACTION: f64 = 0.2;

    /// Share of a full turn spread across a bounded range
    pub const BOUNDED_TURN_FRACTION: f64 = 0.8;

    /// Share of a full turn used per step when there are no end stops
    pub const UNBOUNDED_TURN_FRACTION: f64 = 0.01;
}

/// Fixed output record values
pub mod output {
    /// Initial physical position written for every item
    pub const INITIAL_POSITION: i64 = 0;

    /// Endstop strength written for every item
    pub const ENDSTOP_STRENGTH: i64 = 1;
}

/// Export sink constants
pub mod export {
    /// File name used by the file sink
    pub const FILENAME: &str = "smart_knob_conf.json";

    /// MIME type of the exported file
    pub const MIME_TYPE: &str = "application/json";

    /// How long a notification stays visible
    pub const NOTIFICATION_DURATION_MS: u64 = 5000;
}
