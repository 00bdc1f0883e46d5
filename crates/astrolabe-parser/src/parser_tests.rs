//! Unit tests for the draw.io XML parser.
//!
//! These tests verify cell filtering, shape classification precedence,
//! style attribute extraction with documented defaults, and the fail-soft
//! behavior on malformed XML.

use astrolabe_core::{
    draw::{ArrowKind, StrokeStyle},
    element::{DiagramElement, ShapeKind},
};

use crate::{parse, try_parse};

/// Wraps cell markup in the usual mxGraphModel/root envelope.
fn graph(cells: &str) -> String {
    format!("<mxGraphModel><root>{cells}</root></mxGraphModel>")
}

/// Parses a single-cell document and returns its one element.
fn parse_single_cell(cell: &str) -> DiagramElement {
    let elements = parse(&graph(cell));
    assert_eq!(elements.len(), 1, "expected exactly one element");
    elements.into_iter().next().unwrap()
}

const GEOMETRY: &str = r#"<mxGeometry x="20" y="40" width="120" height="60" as="geometry"/>"#;

#[test]
fn cell_without_geometry_produces_no_element() {
    let xml = graph(r#"<mxCell id="styles" parent="1" style="ellipse;"/>"#);
    assert!(parse(&xml).is_empty());
}

#[test]
fn root_parented_cells_are_excluded() {
    let xml = graph(&format!(
        r#"<mxCell id="layer" parent="0">{GEOMETRY}</mxCell>
           <mxCell id="a" parent="1" vertex="1">{GEOMETRY}</mxCell>"#
    ));

    let elements = parse(&xml);
    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].id, "a");
}

#[test]
fn cell_without_parent_attribute_is_emitted() {
    let xml = graph(&format!(r#"<mxCell id="floating">{GEOMETRY}</mxCell>"#));
    assert_eq!(parse(&xml).len(), 1);
}

#[test]
fn geometry_is_extracted_with_zero_defaults() {
    let elem = parse_single_cell(
        r#"<mxCell id="a" parent="1"><mxGeometry x="7.5" width="bogus" as="geometry"/></mxCell>"#,
    );

    assert_eq!(elem.x, 7.5);
    assert_eq!(elem.y, 0.0);
    assert_eq!(elem.width, 0.0);
    assert_eq!(elem.height, 0.0);
}

#[test]
fn classification_precedence_ellipse_wins() {
    // A style carrying several recognizable tokens classifies by precedence
    let elem = parse_single_cell(&format!(
        r#"<mxCell id="a" parent="1" style="triangle;ellipse;line;">{GEOMETRY}</mxCell>"#
    ));
    assert_eq!(elem.kind, ShapeKind::Ellipse);
}

#[test]
fn classification_precedence_order() {
    let cases = [
        ("ellipse;", ShapeKind::Ellipse),
        ("rhombus;", ShapeKind::Diamond),
        ("diamond;", ShapeKind::Diamond),
        ("triangle;", ShapeKind::Triangle),
        ("parallelogram;", ShapeKind::Parallelogram),
        ("line;", ShapeKind::Line),
        ("connector;", ShapeKind::Line),
        ("rounded=0;", ShapeKind::Rectangle),
        ("", ShapeKind::Rectangle),
    ];

    for (style, expected) in cases {
        let elem = parse_single_cell(&format!(
            r#"<mxCell id="a" parent="1" style="{style}">{GEOMETRY}</mxCell>"#
        ));
        assert_eq!(elem.kind, expected, "style `{style}`");
    }
}

#[test]
fn edge_flag_classifies_as_line() {
    let elem = parse_single_cell(&format!(
        r#"<mxCell id="e" parent="1" edge="1" source="a" target="b">{GEOMETRY}</mxCell>"#
    ));

    assert_eq!(elem.kind, ShapeKind::Line);
    assert!(elem.is_connector());
    assert_eq!(elem.source.as_deref(), Some("a"));
    assert_eq!(elem.target.as_deref(), Some("b"));
}

#[test]
fn edge_with_missing_endpoint_is_still_emitted() {
    let elem = parse_single_cell(&format!(
        r#"<mxCell id="e" parent="1" edge="1" source="a">{GEOMETRY}</mxCell>"#
    ));

    assert!(elem.is_connector());
    assert_eq!(elem.source.as_deref(), Some("a"));
    assert!(elem.target.is_none());
}

#[test]
fn non_connector_never_carries_endpoints() {
    // A vertex-styled cell with stray endpoint attributes stays a shape
    let elem = parse_single_cell(&format!(
        r#"<mxCell id="a" parent="1" style="ellipse;" source="x" target="y">{GEOMETRY}</mxCell>"#
    ));

    assert!(!elem.is_connector());
    assert!(elem.source.is_none());
    assert!(elem.target.is_none());
}

#[test]
fn style_attributes_are_extracted() {
    let elem = parse_single_cell(&format!(
        r#"<mxCell id="a" parent="1"
             style="rounded=0;fillColor=#dae8fc;strokeColor=#6c8ebf;fontSize=18;strokeWidth=2.5;fontStyle=1">
             {GEOMETRY}</mxCell>"#
    ));

    assert_eq!(elem.fill_color, "#dae8fc");
    assert_eq!(elem.stroke_color, "#6c8ebf");
    assert_eq!(elem.font_size, 18);
    assert_eq!(elem.stroke_width, 2.5);
    assert_eq!(elem.font_style.as_deref(), Some("1"));
}

#[test]
fn missing_style_attributes_default_independently() {
    let elem = parse_single_cell(&format!(
        r#"<mxCell id="a" parent="1" style="fontSize=abc;strokeColor=#ff0000">{GEOMETRY}</mxCell>"#
    ));

    // A garbled fontSize does not affect the extracted strokeColor
    assert_eq!(elem.font_size, 12);
    assert_eq!(elem.stroke_color, "#ff0000");
    assert_eq!(elem.fill_color, "#ffffff");
    assert_eq!(elem.stroke_width, 1.0);
    assert_eq!(elem.stroke_style, StrokeStyle::Solid);
}

#[test]
fn non_decimal_stroke_width_defaults_to_one() {
    for value in ["-2", "1e3", "inf"] {
        let elem = parse_single_cell(&format!(
            r#"<mxCell id="a" parent="1" style="strokeWidth={value};">{GEOMETRY}</mxCell>"#
        ));
        assert_eq!(elem.stroke_width, 1.0, "strokeWidth={value}");
    }
}

#[test]
fn dashed_flag_and_dash_pattern() {
    let dashed = parse_single_cell(&format!(
        r#"<mxCell id="a" parent="1" style="dashed=1;">{GEOMETRY}</mxCell>"#
    ));
    assert_eq!(dashed.stroke_style, StrokeStyle::Dashed);

    let pattern = parse_single_cell(&format!(
        r#"<mxCell id="a" parent="1" style="dashPattern=8 8;">{GEOMETRY}</mxCell>"#
    ));
    assert_eq!(pattern.stroke_style, StrokeStyle::Custom("8 8".to_string()));

    // The dashed flag takes precedence over an explicit pattern
    let both = parse_single_cell(&format!(
        r#"<mxCell id="a" parent="1" style="dashed=1;dashPattern=8 8;">{GEOMETRY}</mxCell>"#
    ));
    assert_eq!(both.stroke_style, StrokeStyle::Dashed);
}

#[test]
fn arrowheads_are_classified() {
    let elem = parse_single_cell(&format!(
        r#"<mxCell id="e" parent="1" edge="1" style="endArrow=block;startArrow=oval;">{GEOMETRY}</mxCell>"#
    ));

    assert_eq!(elem.end_arrow, Some(ArrowKind::Block));
    assert_eq!(elem.start_arrow, Some(ArrowKind::Oval));
}

#[test]
fn unknown_arrowhead_is_preserved_as_other() {
    let elem = parse_single_cell(&format!(
        r#"<mxCell id="e" parent="1" edge="1" style="endArrow=fancyTip;">{GEOMETRY}</mxCell>"#
    ));

    assert_eq!(elem.end_arrow, Some(ArrowKind::Other));
    assert!(elem.start_arrow.is_none());
}

#[test]
fn math_flag_from_style_or_dollar_sign() {
    let from_style = parse_single_cell(&format!(
        r#"<mxCell id="a" parent="1" style="math=1;" value="x_1">{GEOMETRY}</mxCell>"#
    ));
    assert!(from_style.math);

    let from_label = parse_single_cell(&format!(
        r#"<mxCell id="a" parent="1" value="$x^2$">{GEOMETRY}</mxCell>"#
    ));
    assert!(from_label.math);

    let plain = parse_single_cell(&format!(
        r#"<mxCell id="a" parent="1" value="Plain label">{GEOMETRY}</mxCell>"#
    ));
    assert!(!plain.math);
}

#[test]
fn elements_preserve_document_order() {
    let xml = graph(&format!(
        r#"<mxCell id="first" parent="1">{GEOMETRY}</mxCell>
           <mxCell id="second" parent="1">{GEOMETRY}</mxCell>
           <mxCell id="third" parent="1" edge="1">{GEOMETRY}</mxCell>"#
    ));

    let ids: Vec<String> = parse(&xml).into_iter().map(|e| e.id).collect();
    assert_eq!(ids, ["first", "second", "third"]);
}

#[test]
fn malformed_xml_yields_empty_sequence() {
    assert!(parse("<mxGraphModel><root><mxCell").is_empty());
    assert!(parse("not xml at all").is_empty());
}

#[test]
fn try_parse_surfaces_xml_errors() {
    assert!(try_parse("<mxGraphModel><unclosed>").is_err());
    assert!(try_parse(&graph("")).unwrap().is_empty());
}

#[test]
fn well_formed_but_foreign_xml_yields_empty_sequence() {
    assert!(parse("<svg><rect width=\"10\" height=\"10\"/></svg>").is_empty());
}
