//! Parser for draw.io / mxGraph diagram XML.
//!
//! This crate turns raw diagram XML into an ordered, flat sequence of
//! normalized [`DiagramElement`]s. Every `mxCell` with a geometry sub-node
//! becomes one element, with shape kind, colors, stroke, arrowheads, and
//! connector endpoints resolved from the cell's free-form `style` string.
//!
//! The public entry point is [`parse`], which is deliberately fail-soft: a
//! garbled or partially-parseable file manifests as "no elements found"
//! downstream, never as an error raised to the caller. Callers that want the
//! underlying XML error can use [`try_parse`].

pub mod error;

mod cell;
mod style;

#[cfg(test)]
mod parser_tests;

use log::{debug, warn};

use astrolabe_core::element::DiagramElement;

use error::ParseError;

/// Parses diagram XML into a sequence of normalized elements.
///
/// Elements are returned in document order. Cells without a geometry
/// sub-node and cells parented directly to the implicit root container are
/// excluded.
///
/// Malformed XML is reported through a log diagnostic and yields an empty
/// sequence; this function never fails.
///
/// # Examples
///
/// ```
/// let xml = r#"
///     <mxGraphModel><root>
///       <mxCell id="a" parent="1" vertex="1" style="ellipse;">
///         <mxGeometry x="0" y="0" width="80" height="40" as="geometry"/>
///       </mxCell>
///     </root></mxGraphModel>
/// "#;
///
/// let elements = astrolabe_parser::parse(xml);
/// assert_eq!(elements.len(), 1);
/// ```
pub fn parse(xml: &str) -> Vec<DiagramElement> {
    match try_parse(xml) {
        Ok(elements) => elements,
        Err(err) => {
            warn!(err:%; "Failed to parse diagram XML");
            Vec::new()
        }
    }
}

/// Parses diagram XML, surfacing XML well-formedness errors to the caller.
///
/// # Errors
///
/// Returns [`ParseError`] when the input is not well-formed XML. Data-quality
/// problems inside well-formed XML (missing attributes, unparseable numbers,
/// unknown style tokens) never fail: they fall back to documented defaults.
pub fn try_parse(xml: &str) -> Result<Vec<DiagramElement>, ParseError> {
    let doc = roxmltree::Document::parse(xml)?;

    let elements: Vec<DiagramElement> = doc
        .descendants()
        .filter(|node| node.has_tag_name("mxCell"))
        .filter_map(cell::element_from_cell)
        .collect();

    debug!(count = elements.len(); "Parsed diagram elements");

    Ok(elements)
}
