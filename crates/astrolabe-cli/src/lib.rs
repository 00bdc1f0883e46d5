//! CLI logic for the Astrolabe diagram converter.
//!
//! This module contains the core CLI logic: input validation, configuration
//! loading, and driving the conversion pipeline.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::Path};

use log::info;

use astrolabe::{AstrolabeError, Converter};

/// Run the Astrolabe CLI application
///
/// This function reads the input diagram, runs the conversion pipeline, and
/// writes the resulting TikZ source to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `AstrolabeError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Inputs with an unsupported extension or exceeding the size limit
/// - Inputs with no drawable elements
pub fn run(args: &Args) -> Result<(), AstrolabeError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Converting diagram"
    );

    // The file extension check is a boundary rule, applied before any I/O
    let extension = Path::new(&args.input)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");
    if !matches!(extension, "drawio" | "xml") {
        return Err(AstrolabeError::InvalidFormat(format!(
            "unsupported input extension `.{extension}`, expected .drawio or .xml"
        )));
    }

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let xml = fs::read_to_string(&args.input)?;

    let converter = Converter::new(app_config);

    let elements = converter.try_parse(&xml)?;
    let tikz = if args.fragment {
        converter.render_fragment(&elements)
    } else {
        converter.render_document(&elements)
    };

    info!(element_count = elements.len(); "Diagram converted");

    // Write output file
    fs::write(&args.output, &tikz)?;

    info!(output_file = args.output, code_size = tikz.len(); "TikZ exported successfully");

    Ok(())
}
