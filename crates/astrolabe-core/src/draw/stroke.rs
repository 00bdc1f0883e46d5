//! Stroke and line-style definitions.
//!
//! Draw.io encodes line patterns in the style string either as a `dashed=1`
//! flag or as a raw `dashPattern` value. The generator maps these to TikZ
//! style tokens (`dashed`, `dotted`, `dash pattern=...`).

use std::str::FromStr;

use serde::Serialize;

/// Defines the visual style of a stroke, including dash patterns.
///
/// # TikZ Mapping
///
/// - `Solid`: no style token
/// - `Dashed`: `dashed`
/// - `Dotted`: `dotted`
/// - `Custom(pattern)`: `dash pattern=<pattern>`, except that the drawio
///   pattern `"1 2"` is treated as `dotted`
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashed line
    Dashed,
    /// Dotted line
    Dotted,
    /// Raw drawio dash pattern, passed through to TikZ
    Custom(String),
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            // Any other value is treated as a custom dash pattern
            _ => Ok(Self::Custom(s.to_string())),
        }
    }
}

impl StrokeStyle {
    /// Returns the TikZ style token for this stroke, or `None` for solid
    /// lines.
    ///
    /// The drawio dash pattern `"1 2"` renders as small dots in practice, so
    /// it maps to `dotted` rather than a raw pattern.
    pub fn to_tikz_token(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("dashed".to_string()),
            Self::Dotted => Some("dotted".to_string()),
            Self::Custom(pattern) if pattern == "1 2" => Some("dotted".to_string()),
            Self::Custom(pattern) => Some(format!("dash pattern={pattern}")),
        }
    }

    /// Returns `true` for the solid (default) style.
    pub fn is_solid(&self) -> bool {
        matches!(self, Self::Solid)
    }
}
