//! Untrusted text input.
//!
//! [`RawText`] accepts whatever the search collaborators hand over: borrowed or
//! owned strings, a missing value, or raw bytes of unknown encoding. None of
//! the conversions can fail.

use std::borrow::Cow;
use std::fmt;

/// Concatenated document content of unknown quality.
///
/// A missing value is the empty string; invalid UTF-8 is replaced with
/// `U+FFFD`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawText<'a>(Cow<'a, str>);

impl<'a> RawText<'a> {
    /// The empty text.
    pub const fn empty() -> Self {
        Self(Cow::Borrowed(""))
    }

    /// Coerce any displayable value to text.
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> RawText<'static> {
        RawText(Cow::Owned(value.to_string()))
    }

    /// Decode bytes, replacing invalid sequences.
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self(String::from_utf8_lossy(bytes))
    }

    /// The text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the text has no non-whitespace content.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Consume into an owned string.
    pub fn into_owned(self) -> String {
        self.0.into_owned()
    }
}

impl<'a> From<&'a str> for RawText<'a> {
    fn from(value: &'a str) -> Self {
        Self(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for RawText<'a> {
    fn from(value: &'a String) -> Self {
        Self(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for RawText<'static> {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

impl<'a> From<Option<&'a str>> for RawText<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or_else(RawText::empty, RawText::from)
    }
}

impl From<Option<String>> for RawText<'static> {
    fn from(value: Option<String>) -> Self {
        value.map_or_else(RawText::empty, RawText::from)
    }
}

impl<'a> From<&'a [u8]> for RawText<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::from_bytes(value)
    }
}

impl AsRef<str> for RawText<'_> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RawText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_empty() {
        let text = RawText::from(None::<&str>);
        assert_eq!(text.as_str(), "");
        assert!(text.is_blank());
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let bytes: &[u8] = b"caf\xff con leche";
        let text = RawText::from(bytes);
        assert!(text.as_str().contains('\u{FFFD}'));
        assert!(text.as_str().ends_with("con leche"));
    }

    #[test]
    fn display_coerces_numbers() {
        assert_eq!(RawText::display(&42).as_str(), "42");
        assert_eq!(RawText::display(&1.5).as_str(), "1.5");
    }

    #[test]
    fn borrowed_text_is_not_copied() {
        let source = String::from("hola mundo");
        let text = RawText::from(&source);
        assert_eq!(text.as_str().as_ptr(), source.as_ptr());
    }

    #[test]
    fn whitespace_only_is_blank() {
        assert!(RawText::from(" \n\t ").is_blank());
        assert!(!RawText::from(" x ").is_blank());
    }
}
