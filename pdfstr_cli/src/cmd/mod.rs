use std::path::PathBuf;

use anyhow::Result;
use pdfstr_core::{CodecConfig, Escaper};

use crate::config::CliConfig;

mod decode;
mod encode;

pub use decode::run_decode;
pub use encode::run_encode;

pub fn run_command(config_file: PathBuf, cmd: crate::Commands) -> Result<()> {
    match cmd {
        crate::Commands::Config { cmd } => cmd.run(config_file),
        crate::Commands::Encode {
            input,
            out,
            literal,
            line_limit,
            no_wrap,
        } => {
            let config = CliConfig::load(&config_file)?;
            let escaper = escaper_for(config.codec, line_limit, no_wrap);
            run_encode(input, out, literal, escaper)
        }
        crate::Commands::Decode {
            input,
            out,
            literal,
        } => run_decode(input, out, literal),
    }
}

/// Applies command line overrides on top of the config file settings.
fn escaper_for(mut codec: CodecConfig, line_limit: Option<usize>, no_wrap: bool) -> Escaper {
    if let Some(limit) = line_limit {
        codec.wrap_lines = true;
        codec.line_limit = limit;
    }
    if no_wrap {
        codec.wrap_lines = false;
    }
    Escaper::from_config(&codec)
}
