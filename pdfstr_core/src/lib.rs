//! Binary-safe codec for PDF literal strings.
//!
//! A PDF literal string is a run of bytes written between `(` and `)`. Bytes
//! that would break the surrounding document are escaped with a backslash:
//!
//! - `\n`, `\r`, `\t`, `\b`, `\f` for the usual control characters
//! - `\(`, `\)` and `\\` for the delimiters and the escape character itself
//! - `\ddd` (three octal digits) for every other byte outside `0x20..=0x7e`
//!
//! Long bodies are broken with a continuation marker (a backslash followed by
//! a line feed) so that no physical line grows without bound. Decoders drop
//! the marker.
//!
//! ```
//! use pdfstr_core::{PdfString, decode, encode};
//!
//! let body = encode(b"a(b)\n\x00");
//! assert_eq!(body, "a\\(b\\)\\n\\000");
//! assert_eq!(decode(&body), b"a(b)\n\x00");
//!
//! let value = PdfString::from(&b"x\\y"[..]);
//! assert_eq!(value.to_text(), "(x\\\\y)");
//! ```
//!
//! The codec knows nothing about the document it is embedded in. Finding the
//! body of a literal inside a larger document is the caller's concern;
//! [`find_literal_end`] is provided for callers that already know where the
//! literal starts.

pub mod config;
pub mod escape;
pub mod literal;
pub mod unescape;

pub use config::CodecConfig;
pub use escape::{CONTINUATION, DEFAULT_LINE_LIMIT, Escaper, encode};
pub use literal::{LiteralError, PdfString, find_literal_end};
pub use unescape::decode;
