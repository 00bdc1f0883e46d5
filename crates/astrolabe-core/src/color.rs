//! Hex color parsing and TikZ color literals.
//!
//! Draw.io styles carry colors as hex strings (`#RRGGBB` or `#RGB`, with the
//! leading `#` optional). The TikZ/xcolor side expects a fractional RGB
//! literal of the form `{rgb,1:red,<r>;green,<g>;blue,<b>}` with three
//! decimal digits per component.
//!
//! Conversion is deliberately forgiving: an unparseable color string maps to
//! opaque black instead of failing the whole conversion.

use log::debug;
use thiserror::Error;

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex color length: expected 3 or 6 digits, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex digit in color `{0}`")]
    InvalidDigit(String),
}

/// A color with fractional RGB components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    red: f64,
    green: f64,
    blue: f64,
}

impl Rgb {
    /// Opaque black, the fallback for unparseable colors.
    pub const BLACK: Rgb = Rgb {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
    };

    /// Parses a hex color string into fractional RGB components.
    ///
    /// Accepts 6-digit (`#RRGGBB`) and 3-digit (`#RGB`) forms; the leading
    /// `#` is optional. Each 3-digit component expands by digit duplication
    /// (`#F0A` is `#FF00AA`).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] when the string has an unsupported length or
    /// contains non-hex digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use astrolabe_core::color::Rgb;
    ///
    /// let red = Rgb::from_hex("#FF0000").unwrap();
    /// assert_eq!(red.to_tikz(), "{rgb,1:red,1.000;green,0.000;blue,0.000}");
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let clean = hex.trim_start_matches('#');

        // Length and slicing below are byte-based; multi-byte characters
        // can never be hex digits, so reject them before indexing.
        if !clean.is_ascii() {
            return Err(ColorError::InvalidDigit(hex.to_string()));
        }

        let (red, green, blue) = match clean.len() {
            6 => (
                channel(&clean[0..2], hex)?,
                channel(&clean[2..4], hex)?,
                channel(&clean[4..6], hex)?,
            ),
            3 => (
                doubled_channel(&clean[0..1], hex)?,
                doubled_channel(&clean[1..2], hex)?,
                doubled_channel(&clean[2..3], hex)?,
            ),
            len => return Err(ColorError::InvalidLength(len)),
        };

        Ok(Self { red, green, blue })
    }

    /// Returns the red component in `[0, 1]`.
    pub fn red(&self) -> f64 {
        self.red
    }

    /// Returns the green component in `[0, 1]`.
    pub fn green(&self) -> f64 {
        self.green
    }

    /// Returns the blue component in `[0, 1]`.
    pub fn blue(&self) -> f64 {
        self.blue
    }

    /// Formats the color as an xcolor literal with 3 decimal digits per
    /// component, e.g. `{rgb,1:red,1.000;green,0.502;blue,0.000}`.
    pub fn to_tikz(&self) -> String {
        format!(
            "{{rgb,1:red,{:.3};green,{:.3};blue,{:.3}}}",
            self.red, self.green, self.blue
        )
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Converts a hex color string to an xcolor literal, falling back to opaque
/// black when the string cannot be parsed.
///
/// This is the lenient entry point used during generation: data-quality
/// problems in the source diagram must not fail the conversion.
pub fn hex_to_tikz(hex: &str) -> String {
    match Rgb::from_hex(hex) {
        Ok(rgb) => rgb.to_tikz(),
        Err(err) => {
            debug!(color = hex, err:%; "Unparseable color, falling back to black");
            Rgb::BLACK.to_tikz()
        }
    }
}

fn channel(digits: &str, original: &str) -> Result<f64, ColorError> {
    u8::from_str_radix(digits, 16)
        .map(|v| f64::from(v) / 255.0)
        .map_err(|_| ColorError::InvalidDigit(original.to_string()))
}

fn doubled_channel(digit: &str, original: &str) -> Result<f64, ColorError> {
    channel(&format!("{digit}{digit}"), original)
}
