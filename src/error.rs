//! Error types for item configuration and export

use thiserror::Error;

/// Configuration value that cannot be represented by the item model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Detent option label outside the supported set
    #[error("unknown detent option: {0:?}")]
    UnknownDetentOption(String),

    /// Color text that is not `#rrggbb`
    #[error("invalid color {0:?} (expected #rrggbb)")]
    InvalidColor(String),
}

/// Export attempt that produced no output
#[derive(Debug, Error)]
pub enum ExportError {
    /// At least one item failed validation
    #[error("{invalid} of {total} item(s) are invalid")]
    InvalidItems { invalid: usize, total: usize },

    /// Output records could not be encoded as JSON
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The sink rejected the payload
    #[error("failed to write to {sink}: {reason:#}")]
    Sink {
        sink: &'static str,
        reason: anyhow::Error,
    },
}
