//! Example: Generating TikZ from programmatically built elements
//!
//! This example demonstrates how to feed the generator directly with
//! normalized elements, without parsing draw.io XML.

use astrolabe::{
    Converter,
    draw::ArrowKind,
    element::{DiagramElement, ShapeKind},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building elements directly...\n");

    let client = DiagramElement {
        id: "client".to_string(),
        text: "Web Client".to_string(),
        x: 40.0,
        y: 40.0,
        width: 160.0,
        height: 60.0,
        ..Default::default()
    };

    let server = DiagramElement {
        id: "server".to_string(),
        kind: ShapeKind::Ellipse,
        text: "API Server".to_string(),
        fill_color: "#dae8fc".to_string(),
        x: 40.0,
        y: 240.0,
        width: 160.0,
        height: 60.0,
        ..Default::default()
    };

    let request = DiagramElement {
        kind: ShapeKind::Line,
        source: Some("client".to_string()),
        target: Some("server".to_string()),
        end_arrow: Some(ArrowKind::Block),
        ..Default::default()
    };

    let elements = vec![client, server, request];

    // Render the elements to a complete LaTeX document
    println!("Rendering to TikZ...");
    let converter = Converter::default();
    let tikz = converter.render_document(&elements);

    println!("TikZ generated successfully!");
    println!("TikZ length: {} bytes", tikz.len());

    // Write to file
    let output_path = "from_elements_output.tex";
    std::fs::write(output_path, &tikz)?;
    println!("TikZ written to: {}", output_path);

    Ok(())
}
