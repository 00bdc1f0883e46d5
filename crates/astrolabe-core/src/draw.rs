//! Visual definitions shared by the parser and the generator.
//!
//! - [`StrokeStyle`]: line patterns (solid, dashed, dotted, raw dash pattern)
//! - [`ArrowKind`]: arrowhead kinds and their TikZ tip tokens

mod arrow;
mod stroke;

pub use arrow::ArrowKind;
pub use stroke::StrokeStyle;
