//! The result envelope returned to the boundary layer.
//!
//! The surrounding surface (HTTP handler, CLI, clipboard action) consumes a
//! flat, serializable summary of a conversion rather than the internal error
//! enum: generated source, element and byte counts, and a status with an
//! optional message.

use serde::Serialize;

/// Outcome status of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionStatus {
    Success,
    Error,
}

/// A successful conversion: the generated TikZ document and the number of
/// elements it was generated from.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Complete TikZ document source.
    pub tikz: String,
    /// Number of normalized elements produced by the parser (shapes and
    /// connectors, including ones that were not renderable).
    pub element_count: usize,
}

/// Envelope carrying either a successful conversion or an error message.
///
/// Serializes with camelCase field names (`elementCount`, `codeSize`) for
/// consumption by the surrounding JSON surface.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    /// Generated TikZ source; empty on error.
    pub tikz: String,
    /// Number of parsed elements; zero on error.
    pub element_count: usize,
    /// Byte size of the generated source.
    pub code_size: usize,
    /// Outcome status.
    pub status: ConversionStatus,
    /// Error message when `status` is [`ConversionStatus::Error`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConversionResult {
    /// Builds a success envelope from a completed conversion.
    pub fn success(conversion: Conversion) -> Self {
        Self {
            code_size: conversion.tikz.len(),
            tikz: conversion.tikz,
            element_count: conversion.element_count,
            status: ConversionStatus::Success,
            error: None,
        }
    }

    /// Builds an error envelope from a message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            tikz: String::new(),
            element_count: 0,
            code_size: 0,
            status: ConversionStatus::Error,
            error: Some(message.into()),
        }
    }
}
