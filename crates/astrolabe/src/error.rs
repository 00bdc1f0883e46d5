//! Error types for Astrolabe operations.
//!
//! This module provides the main error type [`AstrolabeError`], covering the
//! boundary-level error taxonomy. The core pipeline itself never fails for
//! data-quality problems: malformed XML degrades to an empty element
//! sequence, and unresolvable attributes degrade to documented defaults.

use std::io;

use thiserror::Error;

/// The main error type for Astrolabe operations.
#[derive(Debug, Error)]
pub enum AstrolabeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("input size {size} bytes exceeds the {limit} byte limit")]
    InputTooLarge { size: usize, limit: usize },

    #[error("invalid draw.io XML format: {0}")]
    InvalidFormat(String),

    #[error("no drawable elements found in the XML")]
    NoDrawableElements,

    #[error("configuration error: {0}")]
    Config(String),
}
