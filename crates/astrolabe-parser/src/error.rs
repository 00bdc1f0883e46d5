//! Error types for the diagram XML parser.

use thiserror::Error;

/// Error type for the parsing stage.
///
/// Only XML well-formedness problems surface here; everything else in the
/// parser degrades to defaults instead of failing.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),
}
