use std::{fs, io::Write, path::PathBuf};

use anyhow::Context;
use clap::Subcommand;
use pdfstr_core::CodecConfig;
use toml_edit::{DocumentMut, Item, Table, value};
use tracing::info;

use crate::config::CliConfig;

#[derive(Subcommand)]
pub enum CmdConfig {
    /// Creates the config file if it doesn't exist and fills in missing codec defaults
    Init,
    /// Prints the effective settings
    Show,
}

impl CmdConfig {
    pub fn run(self, config_file: PathBuf) -> anyhow::Result<()> {
        match self {
            Self::Init => init(config_file),
            Self::Show => {
                let config = CliConfig::load(&config_file)?;
                print!("{}", toml::to_string(&config)?);
                Ok(())
            }
        }
    }
}

fn init(config_file: PathBuf) -> anyhow::Result<()> {
    let mut doc = if config_file.exists() {
        fs::read_to_string(&config_file)?
    } else {
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        "".to_owned()
    }
    .parse::<DocumentMut>()
    .context("could not parse config file")?;

    let defaults = CodecConfig::default();
    let codec = doc
        .entry("codec")
        .or_insert(Item::Table(Table::new()))
        .as_table_mut()
        .context("`codec` in config file is not a table")?;
    codec
        .entry("wrap_lines")
        .or_insert(value(defaults.wrap_lines));
    codec
        .entry("line_limit")
        .or_insert(value(defaults.line_limit as i64));

    info!("writing to config file {config_file:?}");

    let tmp_path = config_file.with_extension("tmp");
    let mut tmp = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&tmp_path)?;
    tmp.write_all(doc.to_string().as_bytes())?;
    tmp.sync_all()?;
    fs::rename(&tmp_path, config_file)?;
    Ok(())
}
