//! Command-line argument definitions for the Astrolabe CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, output wrapping
//! depth, configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Astrolabe diagram converter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input draw.io file
    #[arg(help = "Path to the input .drawio or .xml file")]
    pub input: String,

    /// Path to the output TikZ/LaTeX file
    #[arg(short, long, default_value = "diagram.tex")]
    pub output: String,

    /// Emit only the tikzpicture environment, without the document shell
    #[arg(long)]
    pub fragment: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
