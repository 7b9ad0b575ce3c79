pub mod report;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for dicomview
#[derive(Parser, Debug)]
#[command(name = "dicomview")]
#[command(about = "DICOM series discovery and frame extraction tool")]
#[command(version)]
pub struct Cli {
    /// Directory containing DICOM files or a DICOMDIR export
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Export every series as PNG frames plus a metadata file into this
    /// directory
    #[arg(short, long, value_name = "DIR")]
    pub export: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}
