//! Export of the transformed configuration to a sink
//!
//! Every attempt re-validates the list first. An invalid list never reaches
//! the sink; the caller gets a single failure notification instead.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::config::ConfigItem;
use crate::constants::export::{FILENAME, MIME_TYPE};
use crate::error::ExportError;
use crate::notification::Notification;
use crate::transform::{self, OutputRecord};
use crate::validation;

/// Shown when export is attempted while some item is invalid
pub const INVALID_ITEMS_MESSAGE: &str = "Cannot export: fix the highlighted fields first.";

/// JSON layout of the exported array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Two-space indented, for files
    Pretty,
    /// No whitespace, for the clipboard
    Compact,
}

impl ExportFormat {
    pub fn render(self, records: &[OutputRecord]) -> serde_json::Result<String> {
        match self {
            ExportFormat::Pretty => serde_json::to_string_pretty(records),
            ExportFormat::Compact => serde_json::to_string(records),
        }
    }
}

/// Destination for an exported configuration
pub trait ExportSink {
    /// Short name used in logs and errors
    fn name(&self) -> &'static str;

    fn format(&self) -> ExportFormat;

    fn write(&mut self, payload: &str) -> Result<()>;

    fn success_message(&self) -> String;

    fn failure_message(&self) -> String;
}

/// Writes pretty JSON to `smart_knob_conf.json` in a directory
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// User's download directory, or the working directory if unknown
    pub fn default_dir() -> PathBuf {
        dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(FILENAME)
    }
}

impl ExportSink for FileSink {
    fn name(&self) -> &'static str {
        "file"
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Pretty
    }

    fn write(&mut self, payload: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create output directory {:?}", self.dir))?;

        let path = self.path();
        fs::write(&path, payload).with_context(|| format!("Failed to write config to {:?}", path))?;

        info!(path = ?path, mime = MIME_TYPE, bytes = payload.len(), "Wrote config file");
        Ok(())
    }

    fn success_message(&self) -> String {
        format!("Configuration saved to {}", self.path().display())
    }

    fn failure_message(&self) -> String {
        "Failed to save configuration!".to_string()
    }
}

/// Copies compact JSON to the system clipboard
///
/// The clipboard handle is opened on first use and kept, since on X11 the
/// owning process serves the contents.
#[derive(Default)]
pub struct ClipboardSink {
    clipboard: Option<arboard::Clipboard>,
}

impl ClipboardSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExportSink for ClipboardSink {
    fn name(&self) -> &'static str {
        "clipboard"
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Compact
    }

    fn write(&mut self, payload: &str) -> Result<()> {
        // A handle that failed is dropped and reopened on the next attempt
        let mut clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().context("Clipboard is not available")?,
        };
        clipboard.set_text(payload).context("Failed to write to clipboard")?;
        self.clipboard = Some(clipboard);

        info!(bytes = payload.len(), "Copied config to clipboard");
        Ok(())
    }

    fn success_message(&self) -> String {
        "Compact configuration copied to clipboard!".to_string()
    }

    fn failure_message(&self) -> String {
        "Failed to copy configuration!".to_string()
    }
}

/// Validate, transform and write; returns the number of bytes written
pub fn try_export(items: &[ConfigItem], sink: &mut dyn ExportSink) -> Result<usize, ExportError> {
    let invalid = validation::count_invalid_items(items);
    if invalid > 0 {
        return Err(ExportError::InvalidItems {
            invalid,
            total: items.len(),
        });
    }

    let records = transform::format_config_items(items);
    let payload = sink.format().render(&records)?;

    sink.write(&payload).map_err(|reason| ExportError::Sink {
        sink: sink.name(),
        reason,
    })?;

    Ok(payload.len())
}

/// Run an export and describe the outcome as exactly one notification
pub fn export(items: &[ConfigItem], sink: &mut dyn ExportSink) -> Notification {
    match try_export(items, sink) {
        Ok(bytes) => {
            info!(sink = sink.name(), items = items.len(), bytes, "Exported configuration");
            Notification::success(sink.success_message())
        }
        Err(err @ ExportError::InvalidItems { .. }) => {
            warn!(sink = sink.name(), error = %err, "Export blocked by invalid items");
            Notification::failure(INVALID_ITEMS_MESSAGE)
        }
        Err(err) => {
            error!(sink = sink.name(), error = %err, "Export failed");
            Notification::failure(sink.failure_message())
        }
    }
}
