use std::fs;

use tempfile::tempdir;

use astrolabe_cli::Args;

const FLOW_DIAGRAM: &str = r#"
    <mxGraphModel><root>
      <mxCell id="0"/>
      <mxCell id="1" parent="0"/>
      <mxCell id="a" parent="1" vertex="1" value="Input" style="rounded=0;">
        <mxGeometry x="40" y="40" width="120" height="60" as="geometry"/>
      </mxCell>
      <mxCell id="b" parent="1" vertex="1" value="Output" style="ellipse;">
        <mxGeometry x="40" y="240" width="120" height="60" as="geometry"/>
      </mxCell>
      <mxCell id="e" parent="1" edge="1" source="a" target="b" style="endArrow=block;">
        <mxGeometry relative="1" as="geometry"/>
      </mxCell>
    </root></mxGraphModel>
"#;

fn args(input: &str, output: &str, fragment: bool) -> Args {
    Args {
        input: input.to_string(),
        output: output.to_string(),
        fragment,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_converts_drawio_file_to_document() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("flow.drawio");
    let output = temp_dir.path().join("flow.tex");
    fs::write(&input, FLOW_DIAGRAM).unwrap();

    let result = astrolabe_cli::run(&args(
        &input.to_string_lossy(),
        &output.to_string_lossy(),
        false,
    ));
    assert!(result.is_ok(), "conversion failed: {:?}", result.err());

    let tikz = fs::read_to_string(&output).unwrap();
    assert!(tikz.starts_with("\\documentclass{article}"));
    assert!(tikz.contains("\\draw[->] (node0) -- (node1);"));
    assert!(tikz.ends_with("\\end{document}\n"));
}

#[test]
fn e2e_fragment_mode_emits_bare_picture() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("flow.xml");
    let output = temp_dir.path().join("flow.tikz");
    fs::write(&input, FLOW_DIAGRAM).unwrap();

    let result = astrolabe_cli::run(&args(
        &input.to_string_lossy(),
        &output.to_string_lossy(),
        true,
    ));
    assert!(result.is_ok(), "conversion failed: {:?}", result.err());

    let tikz = fs::read_to_string(&output).unwrap();
    assert!(tikz.starts_with("\\begin{tikzpicture}"));
    assert!(!tikz.contains("\\documentclass"));
}

#[test]
fn e2e_rejects_unsupported_extension() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("flow.svg");
    let output = temp_dir.path().join("flow.tex");
    fs::write(&input, FLOW_DIAGRAM).unwrap();

    let result = astrolabe_cli::run(&args(
        &input.to_string_lossy(),
        &output.to_string_lossy(),
        false,
    ));
    assert!(result.is_err(), "unsupported extension should be rejected");
    assert!(!output.exists());
}

#[test]
fn e2e_malformed_xml_fails_without_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("broken.drawio");
    let output = temp_dir.path().join("broken.tex");
    fs::write(&input, "<mxGraphModel><root><mxCell").unwrap();

    let result = astrolabe_cli::run(&args(
        &input.to_string_lossy(),
        &output.to_string_lossy(),
        false,
    ));
    assert!(result.is_err(), "malformed XML should be an error");
    assert!(!output.exists());
}

#[test]
fn e2e_missing_input_file_is_an_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("out.tex");

    let result = astrolabe_cli::run(&args("does-not-exist.drawio", &output.to_string_lossy(), false));
    assert!(matches!(result, Err(astrolabe::AstrolabeError::Io(_))));
}
