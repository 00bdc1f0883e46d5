//! Export backends for normalized diagram elements.
//!
//! The only backend is TikZ: a textual vector-drawing language embeddable in
//! LaTeX documents.

pub(crate) mod tikz;
