//! Astrolabe - converts draw.io diagrams into TikZ vector-drawing source.
//!
//! The pipeline has two pure, stateless stages composed with no feedback:
//! the parser turns raw diagram XML into a flat sequence of normalized
//! [`element::DiagramElement`]s, and the generator turns that sequence into
//! TikZ source embeddable in a LaTeX document. Both stages are synchronous
//! and side-effect-free aside from diagnostic logging, so a single
//! [`Converter`] can serve any number of conversions, concurrently or not.

pub mod config;

mod envelope;
mod error;
mod export;

pub use astrolabe_core::{color, draw, element, geometry};

pub use envelope::{Conversion, ConversionResult, ConversionStatus};
pub use error::AstrolabeError;

use log::{debug, info};

use astrolabe_core::element::DiagramElement;

use config::AppConfig;
use export::tikz::TikzRenderer;

/// Converter for turning draw.io XML into TikZ source.
///
/// This provides an API for running the conversion pipeline stage by stage
/// (parse, then render) or end to end with boundary checks applied.
///
/// # Examples
///
/// ```
/// use astrolabe::{Converter, config::AppConfig};
///
/// let xml = r#"
///     <mxGraphModel><root>
///       <mxCell id="a" parent="1" vertex="1" value="Start">
///         <mxGeometry x="0" y="0" width="120" height="60" as="geometry"/>
///       </mxCell>
///     </root></mxGraphModel>
/// "#;
///
/// let converter = Converter::new(AppConfig::default());
/// let elements = converter.parse(xml);
/// let tikz = converter.render_document(&elements);
/// assert!(tikz.contains("\\begin{tikzpicture}"));
///
/// // Or use the default config
/// let converter = Converter::default();
/// ```
#[derive(Default)]
pub struct Converter {
    config: AppConfig,
}

impl Converter {
    /// Creates a new converter with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parses diagram XML into a sequence of normalized elements.
    ///
    /// Fail-soft: malformed XML yields an empty sequence and a log
    /// diagnostic, never an error.
    pub fn parse(&self, xml: &str) -> Vec<DiagramElement> {
        info!("Parsing diagram XML");
        let elements = astrolabe_parser::parse(xml);
        debug!(count = elements.len(); "Diagram parsed");
        elements
    }

    /// Renders elements into a complete LaTeX document (preamble, picture,
    /// closing boilerplate).
    pub fn render_document(&self, elements: &[DiagramElement]) -> String {
        TikzRenderer::new(self.config.geometry()).document(elements)
    }

    /// Renders elements into a bare `tikzpicture` fragment, embeddable in a
    /// caller-supplied document shell.
    pub fn render_fragment(&self, elements: &[DiagramElement]) -> String {
        TikzRenderer::new(self.config.geometry()).fragment(elements)
    }

    /// Parses diagram XML with the boundary checks applied: input size
    /// limit, diagram-marker presence, and the drawable-element check.
    ///
    /// # Errors
    ///
    /// Returns [`AstrolabeError`] when the input exceeds the configured size
    /// limit, does not look like draw.io XML, or contains no drawable
    /// elements (which covers malformed XML as well).
    pub fn try_parse(&self, xml: &str) -> Result<Vec<DiagramElement>, AstrolabeError> {
        let limit = self.config.limits().max_input_bytes();
        if xml.len() > limit {
            return Err(AstrolabeError::InputTooLarge {
                size: xml.len(),
                limit,
            });
        }

        if !xml.contains("mxCell") && !xml.contains("mxGraphModel") {
            return Err(AstrolabeError::InvalidFormat(
                "missing mxGraphModel/mxCell markers".to_string(),
            ));
        }

        let elements = self.parse(xml);
        if elements.is_empty() {
            return Err(AstrolabeError::NoDrawableElements);
        }

        Ok(elements)
    }

    /// Runs the full pipeline with boundary checks and renders a complete
    /// document.
    ///
    /// # Errors
    ///
    /// Propagates the boundary errors of [`Converter::try_parse`].
    pub fn try_convert(&self, xml: &str) -> Result<Conversion, AstrolabeError> {
        let elements = self.try_parse(xml)?;
        let tikz = self.render_document(&elements);
        info!(element_count = elements.len(), code_size = tikz.len(); "Conversion complete");

        Ok(Conversion {
            tikz,
            element_count: elements.len(),
        })
    }

    /// Runs the full pipeline and wraps the outcome into the serializable
    /// result envelope. This never fails; errors become an error-status
    /// envelope.
    pub fn convert(&self, xml: &str) -> ConversionResult {
        match self.try_convert(xml) {
            Ok(conversion) => ConversionResult::success(conversion),
            Err(err) => ConversionResult::error(err.to_string()),
        }
    }
}
