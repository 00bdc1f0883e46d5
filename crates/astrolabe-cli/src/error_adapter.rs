//! Error adapter for converting AstrolabeError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use astrolabe::AstrolabeError;

/// Adapter wrapping an [`AstrolabeError`] for miette rendering.
pub struct ErrorAdapter<'a>(pub &'a AstrolabeError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            AstrolabeError::Io(_) => "astrolabe::io",
            AstrolabeError::InputTooLarge { .. } => "astrolabe::too_large",
            AstrolabeError::InvalidFormat(_) => "astrolabe::invalid_format",
            AstrolabeError::NoDrawableElements => "astrolabe::no_elements",
            AstrolabeError::Config(_) => "astrolabe::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            AstrolabeError::InvalidFormat(_) => {
                "export the diagram from draw.io as an uncompressed .drawio or .xml file"
            }
            AstrolabeError::NoDrawableElements => {
                "the file parsed but contained no positioned cells; check that it is a draw.io diagram"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_per_variant() {
        let err = AstrolabeError::NoDrawableElements;
        let adapter = ErrorAdapter(&err);
        assert_eq!(adapter.code().unwrap().to_string(), "astrolabe::no_elements");

        let err = AstrolabeError::InputTooLarge { size: 2, limit: 1 };
        let adapter = ErrorAdapter(&err);
        assert_eq!(adapter.code().unwrap().to_string(), "astrolabe::too_large");
    }

    #[test]
    fn test_help_only_for_user_fixable_errors() {
        let err = AstrolabeError::InvalidFormat("missing markers".to_string());
        assert!(ErrorAdapter(&err).help().is_some());

        let err = AstrolabeError::Config("bad toml".to_string());
        assert!(ErrorAdapter(&err).help().is_none());
    }

    #[test]
    fn test_display_matches_inner_error() {
        let err = AstrolabeError::NoDrawableElements;
        assert_eq!(
            ErrorAdapter(&err).to_string(),
            "no drawable elements found in the XML"
        );
    }
}
