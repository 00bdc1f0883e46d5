//! Astrolabe Core Types and Definitions
//!
//! This crate provides the foundational types for the Astrolabe diagram
//! converter. It includes:
//!
//! - **Elements**: The normalized diagram element model ([`element`] module)
//! - **Colors**: Hex color parsing and TikZ color literals ([`color`] module)
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Stroke and arrowhead definitions ([`draw`] module)

pub mod color;
pub mod draw;
pub mod element;
pub mod geometry;
