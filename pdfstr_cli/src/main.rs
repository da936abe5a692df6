use crate::init_config::CmdConfig;
use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use clap_verbosity_flag::InfoLevel;
use directories::ProjectDirs;
use std::path::PathBuf;

mod cmd;
mod config;
mod helpers;
mod init_config;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// config file to read codec settings from
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(flatten)]
    verbosity: clap_verbosity_flag::Verbosity<InfoLevel>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Modify or inspect the config file
    Config {
        #[command(subcommand)]
        cmd: CmdConfig,
    },
    /// Escape raw bytes into the body of a literal string
    Encode {
        /// Input file; reads stdin if missing or "-"
        input: Option<PathBuf>,
        /// Output file; writes stdout if missing
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,
        /// Wrap the escaped body in "(" and ")"
        #[arg(long, action = ArgAction::SetTrue)]
        literal: bool,
        /// Characters per line before a continuation marker is inserted
        #[arg(long, value_name = "COUNT", conflicts_with = "no_wrap")]
        line_limit: Option<usize>,
        /// Never insert continuation markers
        #[arg(long, action = ArgAction::SetTrue)]
        no_wrap: bool,
    },
    /// Turn an escaped literal string body back into raw bytes
    Decode {
        /// Input file; reads stdin if missing or "-"
        input: Option<PathBuf>,
        /// Output file; writes stdout if missing
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,
        /// Expect a complete literal including "(" and ")".
        /// Surrounding whitespace is ignored in this mode.
        #[arg(long, action = ArgAction::SetTrue)]
        literal: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity)
        .with_writer(std::io::stderr)
        .init();

    // Default config location: ~/.config/pdfstr/config.toml
    let config_file = match cli.config {
        Some(path) => path,
        None => ProjectDirs::from("", "", "pdfstr")
            .context("failed to determine config directory path")?
            .config_dir()
            .join("config.toml"),
    };

    cmd::run_command(config_file, cli.cmd)
}
