use std::{fs, path::Path};

use anyhow::Context;
use pdfstr_core::CodecConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CliConfig {
    #[serde(default)]
    pub codec: CodecConfig,
}

impl CliConfig {
    /// Reads the config file, falling back to defaults if it does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!("no config file at {path:?}, using defaults");
            return Ok(Self::default());
        }
        let toml_content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&toml_content)
            .with_context(|| format!("could not parse config file {}", path.display()))
    }
}
