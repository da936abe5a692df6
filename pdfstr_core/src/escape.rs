//! Escaping of raw bytes into the body of a literal string.

use crate::config::CodecConfig;

/// Number of characters a physical line may exceed before the escaper
/// starts a new one.
pub const DEFAULT_LINE_LIMIT: usize = 128;

/// Continuation marker: a backslash followed by a line feed.
pub const CONTINUATION: &str = "\\\n";

/// Escapes bytes for embedding between literal string delimiters.
///
/// The only setting is the line limit. Before each byte is written, the
/// escaper checks how many characters were written since the last
/// continuation marker; once that count exceeds the limit a new marker is
/// emitted. Since the check runs before a unit of up to four characters is
/// appended, a physical line may end up to four characters past the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Escaper {
    line_limit: Option<usize>,
}

impl Default for Escaper {
    fn default() -> Self {
        Self::new(Some(DEFAULT_LINE_LIMIT))
    }
}

impl Escaper {
    /// Creates an escaper that wraps after `line_limit` characters, or never
    /// wraps if `None`.
    pub const fn new(line_limit: Option<usize>) -> Self {
        Self { line_limit }
    }

    /// An escaper that never emits continuation markers.
    pub const fn unwrapped() -> Self {
        Self::new(None)
    }

    pub fn from_config(config: &CodecConfig) -> Self {
        if config.wrap_lines {
            Self::new(Some(config.line_limit))
        } else {
            Self::unwrapped()
        }
    }

    pub fn line_limit(&self) -> Option<usize> {
        self.line_limit
    }

    /// Escapes `bytes` into a new string. The delimiters are not included.
    pub fn encode(&self, bytes: impl AsRef<[u8]>) -> String {
        let bytes = bytes.as_ref();
        let mut out = String::with_capacity(bytes.len() + bytes.len() / 4);
        self.encode_into(bytes, &mut out);
        out
    }

    /// Appends the escaped form of `bytes` to `out`.
    ///
    /// Line length is counted from the end of `out` as it was on entry, so
    /// a prefix the caller already wrote (such as an opening delimiter) does
    /// not count towards the first line.
    pub fn encode_into(&self, bytes: &[u8], out: &mut String) {
        let mut last_break = out.len();
        for &byte in bytes {
            if self
                .line_limit
                .is_some_and(|limit| out.len() - last_break > limit)
            {
                out.push_str(CONTINUATION);
                last_break = out.len();
            }
            push_escaped(byte, out);
        }
    }
}

/// Escapes `bytes` with the default line limit.
///
/// ```
/// assert_eq!(pdfstr_core::encode([0u8, 255]), "\\000\\377");
/// ```
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    Escaper::default().encode(bytes)
}

fn push_escaped(byte: u8, out: &mut String) {
    match byte {
        b'\n' => out.push_str("\\n"),
        b'\r' => out.push_str("\\r"),
        b'\t' => out.push_str("\\t"),
        0x08 => out.push_str("\\b"),
        0x0c => out.push_str("\\f"),
        b'(' => out.push_str("\\("),
        b')' => out.push_str("\\)"),
        b'\\' => out.push_str("\\\\"),
        0x20..=0x7e => out.push(char::from(byte)),
        _ => {
            out.push('\\');
            for shift in [6, 3, 0] {
                out.push(char::from(b'0' + ((byte >> shift) & 0o7)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(encode(b""), "");
        assert_eq!(Escaper::unwrapped().encode(b""), "");
    }

    #[test]
    fn test_printable_passthrough() {
        for byte in 0x20u8..=0x7e {
            if matches!(byte, b'(' | b')' | b'\\') {
                continue;
            }
            assert_eq!(encode([byte]), char::from(byte).to_string());
        }
    }

    #[test]
    fn test_control_escapes() {
        assert_eq!(encode([10, 13, 9, 8, 12]), "\\n\\r\\t\\b\\f");
    }

    #[test]
    fn test_reserved_escapes() {
        assert_eq!(encode(b"()\\"), "\\(\\)\\\\");
    }

    #[test]
    fn test_octal_escapes() {
        assert_eq!(encode([0]), "\\000");
        assert_eq!(encode([255]), "\\377");
        assert_eq!(encode([7]), "\\007");
        assert_eq!(encode([0x1b]), "\\033");
        assert_eq!(encode([0x7f]), "\\177");
        assert_eq!(encode([0x80]), "\\200");
    }

    #[test]
    fn test_no_wrap_at_limit() {
        // 129 single-character units: the guard only fires once more than
        // 128 characters sit on the line, i.e. before the 130th unit.
        let input = vec![b'a'; 129];
        assert_eq!(encode(&input), "a".repeat(129));
    }

    #[test]
    fn test_wrap_after_limit() {
        let input = vec![b'a'; 130];
        let expected = format!("{}\\\n{}", "a".repeat(129), "a");
        assert_eq!(encode(&input), expected);
    }

    #[test]
    fn test_wrap_counts_output_not_input() {
        // Every NUL byte becomes four characters, so the first marker shows
        // up after 33 input bytes (132 characters).
        let input = vec![0u8; 40];
        let out = encode(&input);
        let first = out.find(CONTINUATION).unwrap();
        assert_eq!(first, 33 * 4);
    }

    #[test]
    fn test_wrapped_lines_are_bounded() {
        let input: Vec<u8> = (0..2048u32).map(|i| (i * 37 % 256) as u8).collect();
        let out = encode(&input);
        assert!(out.contains(CONTINUATION));
        for line in out.split(CONTINUATION) {
            assert!(line.len() <= DEFAULT_LINE_LIMIT + 4, "line too long: {}", line.len());
        }
    }

    #[test]
    fn test_unwrapped_never_breaks() {
        let input = vec![0u8; 1000];
        let out = Escaper::unwrapped().encode(&input);
        assert_eq!(out.len(), 4000);
        assert!(!out.contains('\n'));
    }

    #[test]
    fn test_custom_limit() {
        let out = Escaper::new(Some(4)).encode(b"abcdefghij");
        assert_eq!(out, "abcde\\\nfghij");
    }

    #[test]
    fn test_encode_into_ignores_existing_prefix() {
        let mut out = "x".repeat(500);
        Escaper::default().encode_into(b"abc", &mut out);
        assert_eq!(out, format!("{}abc", "x".repeat(500)));
    }

    #[test]
    fn test_from_config() {
        let config = CodecConfig {
            wrap_lines: false,
            line_limit: 10,
        };
        assert_eq!(Escaper::from_config(&config).line_limit(), None);

        let config = CodecConfig {
            wrap_lines: true,
            line_limit: 10,
        };
        assert_eq!(Escaper::from_config(&config).line_limit(), Some(10));
        assert_eq!(
            Escaper::from_config(&CodecConfig::default()),
            Escaper::default()
        );
    }
}
