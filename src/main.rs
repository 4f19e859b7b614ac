#![forbid(unsafe_code)]

mod color;
mod config;
mod constants;
mod error;
mod export;
mod gui;
mod notification;
mod numeric;
mod transform;
mod validation;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use export::FileSink;

/// Build JSON configurations for a smart knob
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Log level (trace, debug, info, warn, error); falls back to LOG_LEVEL
    #[arg(long)]
    log_level: Option<String>,

    /// Directory "Generate Config" writes smart_knob_conf.json into
    /// (defaults to the download directory)
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn parse_log_level(level: &str) -> TraceLevel {
    match level.to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = cli
        .log_level
        .clone()
        .or_else(|| std::env::var("LOG_LEVEL").ok())
        .map_or(TraceLevel::INFO, |level| parse_log_level(&level));

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let output_dir = cli.output_dir.unwrap_or_else(FileSink::default_dir);
    info!(output_dir = ?output_dir, "Starting smart knob config editor");

    gui::run_gui(FileSink::new(output_dir))
}
