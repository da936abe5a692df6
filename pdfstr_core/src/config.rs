use serde::{Deserialize, Serialize};

use crate::escape::DEFAULT_LINE_LIMIT;

/// Codec settings, usually read from the `[codec]` table of a TOML file.
///
/// Missing keys fall back to the defaults, so an empty table is valid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CodecConfig {
    /// Insert continuation markers into long encoded bodies.
    pub wrap_lines: bool,
    /// Characters a physical line may hold before a marker is inserted.
    pub line_limit: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            wrap_lines: true,
            line_limit: DEFAULT_LINE_LIMIT,
        }
    }
}
