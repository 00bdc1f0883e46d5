//! Configuration types for the Astrolabe converter.
//!
//! This module provides configuration structures that control coordinate
//! mapping and boundary limits. All types implement [`serde::Deserialize`]
//! for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining geometry and limit settings.
//! - [`GeometryConfig`] - Coordinate scale, minimum canvas extent, line-width scaling.
//! - [`LimitConfig`] - Input-size boundary enforced before parsing.
//!
//! # Example
//!
//! ```
//! # use astrolabe::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.geometry().scale(), 0.015);
//! ```

use serde::Deserialize;

/// Top-level configuration combining geometry and limit settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Geometry configuration section.
    #[serde(default)]
    geometry: GeometryConfig,

    /// Limit configuration section.
    #[serde(default)]
    limits: LimitConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified geometry and limit
    /// configurations.
    pub fn new(geometry: GeometryConfig, limits: LimitConfig) -> Self {
        Self { geometry, limits }
    }

    /// Returns the geometry configuration.
    pub fn geometry(&self) -> &GeometryConfig {
        &self.geometry
    }

    /// Returns the limit configuration.
    pub fn limits(&self) -> &LimitConfig {
        &self.limits
    }
}

/// Coordinate-mapping configuration for the generator.
///
/// Source coordinates are multiplied by `scale` after the vertical-axis
/// flip; the flip anchor is floored at `min_canvas_height` so degenerate
/// diagrams stay within a bounded positive-coordinate region.
#[derive(Debug, Clone, Deserialize)]
pub struct GeometryConfig {
    /// Linear scale factor from source units to centimeters.
    #[serde(default = "default_scale")]
    scale: f64,

    /// Minimum canvas extent used as the vertical-flip anchor floor.
    #[serde(default = "default_min_canvas_height")]
    min_canvas_height: f64,

    /// Factor applied to source stroke widths above 1 to get TikZ line
    /// widths in points.
    #[serde(default = "default_line_width_factor")]
    line_width_factor: f64,
}

impl GeometryConfig {
    /// Returns the linear scale factor.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the minimum canvas extent.
    pub fn min_canvas_height(&self) -> f64 {
        self.min_canvas_height
    }

    /// Returns the stroke-width scale factor.
    pub fn line_width_factor(&self) -> f64 {
        self.line_width_factor
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            min_canvas_height: default_min_canvas_height(),
            line_width_factor: default_line_width_factor(),
        }
    }
}

/// Input-size boundary enforced before the parser runs.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitConfig {
    /// Maximum accepted input size in bytes.
    #[serde(default = "default_max_input_bytes")]
    max_input_bytes: usize,
}

impl LimitConfig {
    /// Returns the maximum accepted input size in bytes.
    pub fn max_input_bytes(&self) -> usize {
        self.max_input_bytes
    }
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: default_max_input_bytes(),
        }
    }
}

fn default_scale() -> f64 {
    0.015
}

fn default_min_canvas_height() -> f64 {
    1000.0
}

fn default_line_width_factor() -> f64 {
    0.5
}

fn default_max_input_bytes() -> usize {
    10 * 1024 * 1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.geometry().scale(), 0.015);
        assert_eq!(config.geometry().min_canvas_height(), 1000.0);
        assert_eq!(config.geometry().line_width_factor(), 0.5);
        assert_eq!(config.limits().max_input_bytes(), 10 * 1024 * 1024);
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
                [geometry]
                scale = 0.02
            "#,
        )
        .unwrap();

        assert_eq!(config.geometry().scale(), 0.02);
        assert_eq!(config.geometry().min_canvas_height(), 1000.0);
        assert_eq!(config.limits().max_input_bytes(), 10 * 1024 * 1024);
    }
}
