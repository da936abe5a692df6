//! The literal string value: raw bytes plus their delimited text form.

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;

use crate::escape::Escaper;
use crate::unescape::decode;

/// Opening delimiter of a literal string.
pub const OPEN: u8 = b'(';
/// Closing delimiter of a literal string.
pub const CLOSE: u8 = b')';

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    #[error("literal string must start with '('")]
    MissingOpen,
    #[error("literal string is missing its closing ')'")]
    Unterminated,
    #[error("unexpected data after closing ')' at offset {offset}")]
    TrailingData { offset: usize },
}

/// Returns the offset one past the `)` that closes the literal starting at
/// `text[0]`, or `None` if `text` does not start with `(` or the literal is
/// never closed.
///
/// Escaped characters are skipped. Unescaped parentheses inside the body are
/// allowed as long as they are balanced, which is what other producers emit.
///
/// ```
/// use pdfstr_core::find_literal_end;
///
/// assert_eq!(find_literal_end(b"(a\\)b) 0 Tj"), Some(6));
/// assert_eq!(find_literal_end(b"(a(b)c)"), Some(7));
/// assert_eq!(find_literal_end(b"(abc"), None);
/// ```
pub fn find_literal_end(text: &[u8]) -> Option<usize> {
    if text.first() != Some(&OPEN) {
        return None;
    }
    let mut depth = 0usize;
    let mut pos = 0;
    while pos < text.len() {
        match text[pos] {
            b'\\' => {
                pos += 2;
                continue;
            }
            OPEN => depth += 1,
            CLOSE => {
                depth -= 1;
                if depth == 0 {
                    return Some(pos + 1);
                }
            }
            _ => {}
        }
        pos += 1;
    }
    None
}

/// A byte string stored as a PDF literal string.
///
/// Any byte sequence is accepted, including empty ones and ones holding the
/// delimiters or NUL bytes. The text form is always `(`, the escaped bytes
/// and `)`, and [`PdfString::from_literal`] reads it back unchanged.
///
/// ```
/// use pdfstr_core::PdfString;
///
/// let value = PdfString::new(&b"(\x00)"[..]);
/// let text = value.to_text();
/// assert_eq!(text, "(\\(\\000\\))");
/// assert_eq!(text.parse::<PdfString>().unwrap(), value);
/// ```
#[derive(Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PdfString {
    value: Bytes,
}

impl fmt::Debug for PdfString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PdfString")
            .field(&self.to_text_with(&Escaper::unwrapped()))
            .finish()
    }
}

impl PdfString {
    pub fn new(value: impl Into<Bytes>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Parses a complete literal, delimiters included.
    ///
    /// Leading or trailing whitespace is not skipped; the text has to start
    /// with `(` and end with the matching `)`.
    pub fn from_literal(text: impl AsRef<[u8]>) -> Result<Self, LiteralError> {
        let text = text.as_ref();
        if text.first() != Some(&OPEN) {
            return Err(LiteralError::MissingOpen);
        }
        let end = find_literal_end(text).ok_or(LiteralError::Unterminated)?;
        if end != text.len() {
            return Err(LiteralError::TrailingData { offset: end });
        }
        Ok(Self::new(decode(&text[1..end - 1])))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.value
    }

    pub fn into_bytes(self) -> Bytes {
        self.value
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// The delimited text form, wrapped at the default line limit.
    pub fn to_text(&self) -> String {
        self.to_text_with(&Escaper::default())
    }

    pub fn to_text_with(&self, escaper: &Escaper) -> String {
        let mut out = String::with_capacity(self.value.len() + self.value.len() / 4 + 2);
        out.push(char::from(OPEN));
        escaper.encode_into(&self.value, &mut out);
        out.push(char::from(CLOSE));
        out
    }
}

impl fmt::Display for PdfString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl FromStr for PdfString {
    type Err = LiteralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_literal(s)
    }
}

impl AsRef<[u8]> for PdfString {
    fn as_ref(&self) -> &[u8] {
        &self.value
    }
}

impl From<Bytes> for PdfString {
    fn from(value: Bytes) -> Self {
        Self::new(value)
    }
}

impl From<Vec<u8>> for PdfString {
    fn from(value: Vec<u8>) -> Self {
        Self::new(value)
    }
}

impl From<&[u8]> for PdfString {
    fn from(value: &[u8]) -> Self {
        Self::new(Bytes::copy_from_slice(value))
    }
}

impl From<&str> for PdfString {
    fn from(value: &str) -> Self {
        Self::from(value.as_bytes())
    }
}

impl From<PdfString> for Bytes {
    fn from(value: PdfString) -> Self {
        value.value
    }
}
