//! Decoding of literal string bodies back into raw bytes.
//!
//! The decoder never rejects input. Text written by other producers may use
//! escapes this crate never emits (short octal escapes, unknown selectors,
//! a lone trailing backslash), and each of them has a defined best-effort
//! meaning below.

use tracing::trace;

/// Decodes the body of a literal string (without delimiters).
///
/// - `\n`, `\r`, `\t`, `\b`, `\f`, `\(`, `\)` and `\\` yield one byte each.
/// - A backslash followed by a line feed is a continuation marker and yields
///   nothing. A carriage return right after it is dropped too.
/// - A backslash followed by one to three digits yields one byte holding
///   their base-8 value. Values past `0o377` (and the digits `8` and `9`,
///   taken at face value) are masked to the low eight bits.
/// - A backslash followed by any other character yields that character.
/// - A backslash at the very end of the input is kept as is.
///
/// ```
/// assert_eq!(pdfstr_core::decode("a\\\nb\\101\\9"), b"abA\x09");
/// ```
pub fn decode(text: impl AsRef<[u8]>) -> Vec<u8> {
    let text = text.as_ref();
    let mut out = Vec::with_capacity(text.len());
    let mut pos = 0;

    while pos < text.len() {
        let byte = text[pos];
        if byte != b'\\' {
            out.push(byte);
            pos += 1;
            continue;
        }
        if pos == text.len() - 1 {
            trace!("keeping trailing backslash");
            out.push(byte);
            break;
        }

        let selector = text[pos + 1];
        pos += 2;
        match selector {
            b'n' => out.push(b'\n'),
            b'r' => out.push(b'\r'),
            b't' => out.push(b'\t'),
            b'b' => out.push(0x08),
            b'f' => out.push(0x0c),
            b'(' | b')' | b'\\' => out.push(selector),
            b'\n' => {
                if text.get(pos) == Some(&b'\r') {
                    pos += 1;
                }
            }
            b'0'..=b'9' => {
                let mut value = u32::from(selector - b'0');
                for _ in 0..2 {
                    match text.get(pos) {
                        Some(&digit @ b'0'..=b'9') => {
                            value = value * 8 + u32::from(digit - b'0');
                            pos += 1;
                        }
                        _ => break,
                    }
                }
                if value > 0xff {
                    trace!(value, "octal escape out of byte range");
                }
                out.push((value & 0xff) as u8);
            }
            other => {
                trace!(selector = other, "unknown escape selector");
                out.push(other);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        assert_eq!(decode(""), b"");
        assert_eq!(decode("hello world"), b"hello world");
    }

    #[test]
    fn test_named_escapes() {
        assert_eq!(decode("\\n\\r\\t\\b\\f"), [10, 13, 9, 8, 12]);
        assert_eq!(decode("\\(\\)\\\\"), b"()\\");
    }

    #[test]
    fn test_octal_lengths() {
        assert_eq!(decode("\\0"), [0]);
        assert_eq!(decode("\\53"), [0o53]);
        assert_eq!(decode("\\053"), [0o53]);
        assert_eq!(decode("\\377"), [255]);
        assert_eq!(decode("\\9"), [9]);
    }

    #[test]
    fn test_octal_stops_at_three_digits() {
        assert_eq!(decode("\\0531"), b"+1");
        assert_eq!(decode("\\12x"), b"\nx");
    }

    #[test]
    fn test_octal_out_of_range_is_masked() {
        // 0o777 = 511, low byte 0xff
        assert_eq!(decode("\\777"), [0xff]);
        // 9*64 + 9*8 + 9 = 657, low byte 0x91
        assert_eq!(decode("\\999"), [0x91]);
        assert_eq!(decode("\\400"), [0]);
    }

    #[test]
    fn test_continuation_lf() {
        assert_eq!(decode("abc\\\ndef"), b"abcdef");
    }

    #[test]
    fn test_continuation_lf_cr() {
        assert_eq!(decode("abc\\\n\rdef"), b"abcdef");
        // only one CR is swallowed
        assert_eq!(decode("abc\\\n\r\rdef"), b"abc\rdef");
    }

    #[test]
    fn test_continuation_at_end() {
        assert_eq!(decode("abc\\\n"), b"abc");
    }

    #[test]
    fn test_trailing_backslash() {
        assert_eq!(decode("abc\\"), b"abc\\");
        assert_eq!(decode("\\"), b"\\");
    }

    #[test]
    fn test_unknown_selector() {
        assert_eq!(decode("\\q\\ "), b"q ");
    }

    #[test]
    fn test_raw_bytes_pass_through() {
        assert_eq!(decode([0xc3, 0xa9, b'\\', b'n']), [0xc3, 0xa9, b'\n']);
        // unescaped line breaks and delimiters from other producers
        assert_eq!(decode("a\nb(c)"), b"a\nb(c)");
    }
}
