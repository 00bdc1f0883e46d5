//! The normalized diagram element model.
//!
//! [`DiagramElement`] is the sole entity flowing between the parser and the
//! generator: one per drawable mxGraph cell, with geometry, style, and
//! connector endpoints resolved to concrete values or documented defaults.
//! Elements live for a single parse/generate cycle; there is no persistent
//! store.

use serde::Serialize;

use crate::{
    draw::{ArrowKind, StrokeStyle},
    geometry::Point,
};

/// Default stroke color when the style string carries none.
pub const DEFAULT_STROKE_COLOR: &str = "#000000";

/// Default fill color when the style string carries none.
pub const DEFAULT_FILL_COLOR: &str = "#ffffff";

/// Default font size in points.
pub const DEFAULT_FONT_SIZE: u32 = 12;

/// The closed set of shape kinds a diagram element can take.
///
/// `Line` and `Arrow` are connectors; everything else is a shape rendered as
/// a sized node. The kind defaults to `Rectangle` even when the source style
/// string is unrecognized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ShapeKind {
    /// Rectangular node (default)
    #[default]
    Rectangle,
    /// Elliptic node, rendered as a TikZ circle
    Ellipse,
    /// Connector without implied decoration
    Line,
    /// Free-standing text
    Text,
    /// Connector with implied decoration
    Arrow,
    /// Diamond / rhombus node
    Diamond,
    /// Parallelogram node (falls back to a rectangle primitive)
    Parallelogram,
    /// Triangle node
    Triangle,
}

impl ShapeKind {
    /// Returns `true` for the connector kinds (`Line` and `Arrow`).
    pub fn is_connector(&self) -> bool {
        matches!(self, Self::Line | Self::Arrow)
    }
}

/// A normalized diagram element, produced by the parser and consumed by the
/// generator.
///
/// Geometry is in source-document units (origin top-left, y growing
/// downward); missing numeric attributes default to zero. A shape with a
/// zero width or height has no usable size and is not rendered.
#[derive(Debug, Clone, Serialize)]
pub struct DiagramElement {
    /// Stable identifier from the source; used only to resolve connector
    /// endpoints, never rendered. Empty when the source cell carries none.
    pub id: String,
    /// Shape kind classified from the style string.
    pub kind: ShapeKind,
    /// Left edge in source units.
    pub x: f64,
    /// Top edge in source units.
    pub y: f64,
    /// Width in source units; zero means "no usable size".
    pub width: f64,
    /// Height in source units; zero means "no usable size".
    pub height: f64,
    /// Literal label text, possibly containing markup or math notation.
    pub text: String,
    /// Whether the label is mathematical notation and must be wrapped for
    /// math-mode rendering rather than escaped as literal text.
    ///
    /// This is a heuristic: a label that merely contains a literal `$` with
    /// no mathematical intent will false-positive.
    pub math: bool,
    /// Stroke color as a hex string; defaults to black.
    pub stroke_color: String,
    /// Fill color as a hex string; defaults to white.
    pub fill_color: String,
    /// Stroke width in source units; defaults to 1.
    pub stroke_width: f64,
    /// Line pattern.
    pub stroke_style: StrokeStyle,
    /// Label font size in points.
    pub font_size: u32,
    /// Raw drawio font style value, carried for completeness.
    pub font_style: Option<String>,
    /// Source endpoint reference (connectors only).
    pub source: Option<String>,
    /// Target endpoint reference (connectors only).
    pub target: Option<String>,
    /// Arrowhead at the source side (connectors only).
    pub start_arrow: Option<ArrowKind>,
    /// Arrowhead at the target side (connectors only).
    pub end_arrow: Option<ArrowKind>,
}

impl Default for DiagramElement {
    fn default() -> Self {
        Self {
            id: String::new(),
            kind: ShapeKind::default(),
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            text: String::new(),
            math: false,
            stroke_color: DEFAULT_STROKE_COLOR.to_string(),
            fill_color: DEFAULT_FILL_COLOR.to_string(),
            stroke_width: 1.0,
            stroke_style: StrokeStyle::default(),
            font_size: DEFAULT_FONT_SIZE,
            font_style: None,
            source: None,
            target: None,
            start_arrow: None,
            end_arrow: None,
        }
    }
}

impl DiagramElement {
    /// Returns `true` when this element is a connector.
    pub fn is_connector(&self) -> bool {
        self.kind.is_connector()
    }

    /// Returns `true` when this element has a usable (non-zero) width and
    /// height and can be rendered as a sized node.
    pub fn has_size(&self) -> bool {
        self.width != 0.0 && self.height != 0.0
    }

    /// Returns the center point of the element's bounding box, in source
    /// units.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns the bottom edge (`y + height`) of the element in source
    /// units, used for canvas-extent calculation.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}
