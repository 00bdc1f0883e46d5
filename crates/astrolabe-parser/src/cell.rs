//! Per-cell extraction of normalized diagram elements.
//!
//! Each `mxCell` node maps to at most one [`DiagramElement`]. Cells without
//! a geometry sub-node are not drawable and produce nothing; cells parented
//! directly to the implicit root container (`parent="0"`) are the format's
//! layer objects and are excluded as well.

use roxmltree::Node;

use astrolabe_core::{
    draw::{ArrowKind, StrokeStyle},
    element::{DiagramElement, ShapeKind},
};

use crate::style::StyleTable;

/// Extracts a normalized element from a single `mxCell` node.
///
/// Returns `None` for cells that should not be emitted (no geometry, or
/// parented to the root container). An edge cell missing one or both
/// endpoint references is still emitted; skipping unresolvable connectors is
/// the generator's responsibility.
pub(crate) fn element_from_cell(cell: Node<'_, '_>) -> Option<DiagramElement> {
    let geometry = cell
        .descendants()
        .find(|node| node.has_tag_name("mxGeometry"))?;

    // The implicit layer-zero container is not itself a drawable object.
    if cell.attribute("parent") == Some("0") {
        return None;
    }

    let style = StyleTable::new(cell.attribute("style").unwrap_or(""));
    let text = cell.attribute("value").unwrap_or("").to_string();
    let is_edge = cell.attribute("edge") == Some("1");

    let kind = classify(&style, is_edge);
    let math = style.flag("math") || text.contains('$');

    let stroke_style = if style.flag("dashed") {
        StrokeStyle::Dashed
    } else if let Some(pattern) = style.get("dashPattern") {
        StrokeStyle::Custom(pattern.to_string())
    } else {
        StrokeStyle::Solid
    };

    let (source, target) = if kind.is_connector() {
        (
            cell.attribute("source").map(str::to_string),
            cell.attribute("target").map(str::to_string),
        )
    } else {
        (None, None)
    };

    Some(DiagramElement {
        id: cell.attribute("id").unwrap_or("").to_string(),
        kind,
        x: numeric_attribute(geometry, "x"),
        y: numeric_attribute(geometry, "y"),
        width: numeric_attribute(geometry, "width"),
        height: numeric_attribute(geometry, "height"),
        math,
        stroke_color: style
            .get("strokeColor")
            .unwrap_or(astrolabe_core::element::DEFAULT_STROKE_COLOR)
            .to_string(),
        fill_color: style
            .get("fillColor")
            .unwrap_or(astrolabe_core::element::DEFAULT_FILL_COLOR)
            .to_string(),
        stroke_width: style.get_parsed("strokeWidth", 1.0),
        stroke_style,
        font_size: style.get_parsed("fontSize", astrolabe_core::element::DEFAULT_FONT_SIZE),
        font_style: style.get("fontStyle").map(str::to_string),
        start_arrow: style.get("startArrow").map(ArrowKind::classify),
        end_arrow: style.get("endArrow").map(ArrowKind::classify),
        source,
        target,
        text,
    })
}

/// Classifies the shape kind from the style string.
///
/// Checked by substring presence in a fixed precedence order; style strings
/// commonly combine tokens, and the first match in this order wins.
fn classify(style: &StyleTable<'_>, is_edge: bool) -> ShapeKind {
    if style.contains("ellipse") {
        ShapeKind::Ellipse
    } else if style.contains("rhombus") || style.contains("diamond") {
        ShapeKind::Diamond
    } else if style.contains("triangle") {
        ShapeKind::Triangle
    } else if style.contains("parallelogram") {
        ShapeKind::Parallelogram
    } else if style.contains("line") || style.contains("connector") || is_edge {
        ShapeKind::Line
    } else {
        ShapeKind::Rectangle
    }
}

/// Reads a floating-point attribute, defaulting to zero on absence or
/// non-numeric text.
fn numeric_attribute(node: Node<'_, '_>, name: &str) -> f64 {
    node.attribute(name)
        .and_then(|value| value.parse().ok())
        .unwrap_or(0.0)
}
