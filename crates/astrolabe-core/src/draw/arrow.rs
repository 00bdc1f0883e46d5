//! Arrowhead kinds and their TikZ tip tokens.
//!
//! Draw.io names arrowheads in the style string (`endArrow=block`,
//! `startArrow=oval`, ...). The TikZ `arrows` library composes both tips
//! into a single style token, e.g. `<->` for a double-headed connector or
//! `o-` for a connector decorated only at its source.

use serde::Serialize;

/// An arrowhead kind on one side of a connector.
///
/// `Other` captures an arrowhead that was present in the source but not
/// recognized; on the target side it degrades to a standard arrowhead, on
/// the source side it is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArrowKind {
    /// Filled block or triangle arrowhead
    Block,
    /// Open 45-degree triangle
    Open,
    /// Circle tip
    Oval,
    /// Diamond tip
    Diamond,
    /// Explicitly no arrowhead
    None,
    /// Present but unrecognized arrowhead name
    Other,
}

impl ArrowKind {
    /// Classifies a drawio arrowhead name (case-insensitive).
    ///
    /// `block` and `triangle` both map to [`ArrowKind::Block`]; anything
    /// unrecognized maps to [`ArrowKind::Other`].
    pub fn classify(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "block" | "triangle" => Self::Block,
            "open" => Self::Open,
            "oval" => Self::Oval,
            "diamond" => Self::Diamond,
            "none" => Self::None,
            _ => Self::Other,
        }
    }

    /// Returns the TikZ style token for this kind on the target (end) side,
    /// or `None` when no arrowhead should be drawn.
    ///
    /// An unrecognized kind degrades to the standard `->` arrowhead.
    pub fn end_token(&self) -> Option<&'static str> {
        match self {
            Self::Block | Self::Other => Some("->"),
            Self::Open => Some("-open triangle 45-"),
            Self::Oval => Some("-o"),
            Self::Diamond => Some("-diamond"),
            Self::None => None,
        }
    }

    /// Returns the TikZ tip fragment for this kind on the source (start)
    /// side, or `None` when no arrowhead should be drawn.
    ///
    /// The fragment is prepended to the end-side token to form a combined
    /// arrow spec; an unrecognized kind contributes nothing.
    pub fn start_token(&self) -> Option<&'static str> {
        match self {
            Self::Block => Some("<"),
            Self::Open => Some("open triangle 45-"),
            Self::Oval => Some("o"),
            Self::Diamond => Some("diamond"),
            Self::None | Self::Other => None,
        }
    }
}
