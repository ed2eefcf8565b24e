use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Stockroom: interactive item catalog
#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(version = "0.1.0")]
#[command(about = "Interactive item catalog with indexed lookup, undo, and an urgent-item worklist")]
pub struct Cli {
    /// Catalog data file used by Save and Load
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Settings file (stockroom.yaml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Set log level
    #[arg(long)]
    pub log_level: Option<LogLevel>,
}

/// Log levels
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
