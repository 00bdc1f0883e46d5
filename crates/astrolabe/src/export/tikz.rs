//! TikZ source generation from normalized diagram elements.
//!
//! Shapes become `\node` statements, connectors become `\draw` paths between
//! resolved node identifiers. Source coordinates (origin top-left, y growing
//! downward) map into TikZ coordinates (y growing upward) through a vertical
//! flip anchored at the diagram's bottom extent, followed by a linear scale.
//!
//! Node identifiers are synthetic (`node0`, `node1`, ...) and scoped to a
//! single generation pass; the source cell ids are only used to resolve
//! connector endpoints through the node map built during node emission.

use std::collections::HashMap;
use std::fmt::Write as _;

use log::{debug, trace};

use astrolabe_core::{
    color::hex_to_tikz,
    element::{DEFAULT_STROKE_COLOR, DiagramElement, ShapeKind},
    geometry::Point,
};

use crate::config::GeometryConfig;

/// Fixed document preamble: the drawing-language package plus the extensions
/// needed for arrows, shapes, and color.
const PREAMBLE: &str = "\\documentclass{article}\n\
    \\usepackage{tikz}\n\
    \\usepackage{xcolor}\n\
    \\usepackage{amsmath}\n\
    \\usetikzlibrary{arrows,shapes,positioning}\n\n\
    \\begin{document}\n\n";

/// Fixed closing boilerplate.
const CLOSING: &str = "\\end{document}\n";

/// An entry in the per-pass node map: the synthetic TikZ identifier and the
/// shape's center in source coordinates.
struct NodeRef {
    name: String,
    center: Point,
}

/// Renderer for one generation pass.
///
/// Rendering is a pure function of the element sequence and the geometry
/// configuration: the same input yields byte-identical output.
pub(crate) struct TikzRenderer<'a> {
    geometry: &'a GeometryConfig,
}

impl<'a> TikzRenderer<'a> {
    pub(crate) fn new(geometry: &'a GeometryConfig) -> Self {
        Self { geometry }
    }

    /// Renders a complete LaTeX document: preamble, picture fragment,
    /// closing boilerplate.
    pub(crate) fn document(&self, elements: &[DiagramElement]) -> String {
        format!("{PREAMBLE}{}\n{CLOSING}", self.fragment(elements))
    }

    /// Renders a bare `tikzpicture` environment, embeddable in a
    /// caller-supplied document shell.
    pub(crate) fn fragment(&self, elements: &[DiagramElement]) -> String {
        let max_y = self.canvas_extent(elements);

        let shapes: Vec<&DiagramElement> =
            elements.iter().filter(|e| !e.is_connector()).collect();
        let connectors = elements.iter().filter(|e| e.is_connector());

        let mut out = String::from("\\begin{tikzpicture}[scale=1]\n\n");
        let node_map = self.emit_nodes(&mut out, &shapes, max_y);

        out.push('\n');

        for connector in connectors {
            self.emit_connector(&mut out, connector, &node_map);
        }

        out.push_str("\n\\end{tikzpicture}\n");
        out
    }

    /// Computes the vertical-flip anchor: the maximum bottom edge across all
    /// elements with positive extent, floored at the configured minimum
    /// canvas height.
    fn canvas_extent(&self, elements: &[DiagramElement]) -> f64 {
        elements
            .iter()
            .map(DiagramElement::bottom)
            .filter(|bottom| *bottom > 0.0)
            .fold(self.geometry.min_canvas_height(), f64::max)
    }

    /// Maps a point from source coordinates to a formatted TikZ coordinate,
    /// applying the vertical flip and the linear scale.
    fn map_point(&self, point: Point, max_y: f64) -> String {
        let scale = self.geometry.scale();
        format!(
            "({:.2},{:.2})",
            point.x * scale,
            (max_y - point.y) * scale
        )
    }

    /// Emits one `\node` statement per sized shape, in input order, and
    /// returns the node map used for connector resolution.
    ///
    /// Size-less shapes are silently dropped but still consume a synthetic
    /// identifier index.
    fn emit_nodes<'e>(
        &self,
        out: &mut String,
        shapes: &[&'e DiagramElement],
        max_y: f64,
    ) -> HashMap<&'e str, NodeRef> {
        let mut node_map = HashMap::new();

        for (index, shape) in shapes.iter().enumerate() {
            if !shape.has_size() {
                debug!(id = shape.id; "Skipping shape without usable size");
                continue;
            }

            let name = format!("node{index}");
            let center = shape.center();

            if !shape.id.is_empty() {
                node_map.insert(
                    shape.id.as_str(),
                    NodeRef {
                        name: name.clone(),
                        center,
                    },
                );
            }

            let scale = self.geometry.scale();
            let primitive = shape_primitive(shape.kind);
            let fill = color_or(&shape.fill_color, "white");
            let stroke = color_or(&shape.stroke_color, "black");
            let line_width = self.line_width_suffix(shape.stroke_width);
            let label = sanitize_label(&shape.text, shape.math);
            let at = self.map_point(center, max_y);

            let _ = writeln!(
                out,
                "  \\node[{primitive}, minimum width={:.2}cm, minimum height={:.2}cm, \
                 fill={fill}, draw={stroke}{line_width}, inner sep=0pt, outer sep=0pt, \
                 align=center, text centered] ({name}) at {at} {{{label}}};",
                shape.width * scale,
                shape.height * scale,
            );
        }

        node_map
    }

    /// Emits one `\draw` path per resolvable connector.
    ///
    /// Connectors missing an endpoint reference, or whose reference does not
    /// match any emitted shape, produce nothing; a dangling reference is not
    /// an error, simply unrenderable.
    fn emit_connector(
        &self,
        out: &mut String,
        connector: &DiagramElement,
        node_map: &HashMap<&str, NodeRef>,
    ) {
        let (Some(source), Some(target)) = (&connector.source, &connector.target) else {
            return;
        };
        let (Some(from), Some(to)) = (node_map.get(source.as_str()), node_map.get(target.as_str()))
        else {
            debug!(id = connector.id; "Skipping connector with unresolvable endpoint");
            return;
        };

        trace!(
            from = from.name,
            to = to.name,
            from_x = from.center.x,
            from_y = from.center.y,
            to_x = to.center.x,
            to_y = to.center.y;
            "Resolved connector endpoints"
        );

        let options = self.connector_options(connector);
        let style = if !options.is_empty() {
            format!("[{}]", options.join(", "))
        } else if connector.end_arrow.is_none() && connector.start_arrow.is_none() {
            // No arrow attributes at all: a bare drawn line
            "[draw]".to_string()
        } else {
            String::new()
        };

        let _ = writeln!(out, "  \\draw{style} ({}) -- ({});", from.name, to.name);
    }

    /// Composes the style options for a connector: arrow spec, stroke
    /// pattern, line width, and non-default stroke color.
    fn connector_options(&self, connector: &DiagramElement) -> Vec<String> {
        let mut options: Vec<String> = Vec::new();

        if let Some(token) = connector.end_arrow.and_then(|end| end.end_token()) {
            options.push(token.to_string());
        }

        // The start-side tip prepends to the end-side token so a single
        // combined arrow spec results; without an end-side token the tip
        // stands alone with a trailing dash (a connector arrowed only at
        // its source).
        if let Some(tip) = connector.start_arrow.and_then(|start| start.start_token()) {
            match options.first_mut() {
                Some(first) => *first = format!("{tip}{first}"),
                None => options.push(format!("{tip}-")),
            }
        }

        if let Some(token) = connector.stroke_style.to_tikz_token() {
            options.push(token);
        }

        if connector.stroke_width > 1.0 {
            options.push(format!(
                "line width={:.2}pt",
                connector.stroke_width * self.geometry.line_width_factor()
            ));
        }

        if connector.stroke_color != DEFAULT_STROKE_COLOR {
            options.push(format!("draw={}", hex_to_tikz(&connector.stroke_color)));
        }

        options
    }

    /// Returns the `, line width=Xpt` suffix for stroke widths above 1, or
    /// nothing otherwise.
    fn line_width_suffix(&self, stroke_width: f64) -> String {
        if stroke_width > 1.0 {
            format!(
                ", line width={:.2}pt",
                stroke_width * self.geometry.line_width_factor()
            )
        } else {
            String::new()
        }
    }
}

/// Maps a shape kind to a TikZ node primitive. Kinds without a direct TikZ
/// counterpart fall back to a rectangle.
fn shape_primitive(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Ellipse => "circle",
        ShapeKind::Diamond => "diamond",
        ShapeKind::Triangle => "triangle",
        _ => "rectangle",
    }
}

/// Converts a hex color for node emission; the literal `none` falls back to
/// the given plain color name.
fn color_or(hex: &str, fallback: &'static str) -> String {
    if hex == "none" {
        fallback.to_string()
    } else {
        hex_to_tikz(hex)
    }
}

/// Sanitizes a label for TikZ emission.
///
/// Math labels are wrapped for math-mode rendering unless they already
/// appear wrapped; literal labels escape the brace characters that are
/// structurally significant in TikZ.
fn sanitize_label(text: &str, math: bool) -> String {
    if math {
        if text.contains("\\(") {
            text.to_string()
        } else {
            format!("$${text}$$")
        }
    } else {
        text.replace('{', "\\{").replace('}', "\\}")
    }
}
