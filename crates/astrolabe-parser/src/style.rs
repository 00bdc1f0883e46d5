//! Key/value access over draw.io style strings.
//!
//! A drawio style is a semicolon-delimited list of entries, each either a
//! bare token (`ellipse`) or a `key=value` pair (`fillColor=#dae8fc`).
//! [`StyleTable`] splits the string once and offers typed lookups; every
//! lookup is independent, so the absence or garbling of one attribute never
//! affects another.

use std::str::FromStr;

/// Parsed view of a drawio style string.
///
/// The first occurrence of a key wins; styles that repeat a key keep the
/// first value.
#[derive(Debug)]
pub(crate) struct StyleTable<'a> {
    raw: &'a str,
    entries: Vec<(&'a str, &'a str)>,
}

impl<'a> StyleTable<'a> {
    /// Splits a style string into key/value entries. Bare tokens are stored
    /// with an empty value.
    pub(crate) fn new(style: &'a str) -> Self {
        let entries = style
            .split(';')
            .filter(|entry| !entry.is_empty())
            .map(|entry| match entry.split_once('=') {
                Some((key, value)) => (key, value),
                None => (entry, ""),
            })
            .collect();

        Self { raw: style, entries }
    }

    /// Returns the value of the first entry with the given key.
    pub(crate) fn get(&self, key: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    /// Parses the value of the first entry with the given key, falling back
    /// to `default` when the key is absent or its value does not parse.
    ///
    /// Only plain unsigned decimal forms (`12`, `1.5`) are accepted; signed,
    /// exponent, and non-finite spellings fall back to the default even
    /// though `FromStr` would take them.
    pub(crate) fn get_parsed<T: FromStr>(&self, key: &str, default: T) -> T {
        self.get(key)
            .filter(|value| is_plain_decimal(value))
            .and_then(|value| value.parse().ok())
            .unwrap_or(default)
    }

    /// Returns `true` when the key is present with the value `1`.
    pub(crate) fn flag(&self, key: &str) -> bool {
        self.get(key) == Some("1")
    }

    /// Returns `true` when the raw style string contains the given token as
    /// a substring. Shape classification works on substring presence, not on
    /// split entries, mirroring the source format's conventions.
    pub(crate) fn contains(&self, token: &str) -> bool {
        self.raw.contains(token)
    }
}

/// Digits with at most one interior decimal point, nothing else.
fn is_plain_decimal(value: &str) -> bool {
    let (int, frac) = match value.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (value, None),
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(int) && frac.is_none_or(all_digits)
}
