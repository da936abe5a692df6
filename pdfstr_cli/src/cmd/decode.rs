use std::path::PathBuf;

use anyhow::{Context, Result};
use pdfstr_core::{PdfString, decode};
use tracing::debug;

use crate::helpers::{read_input, write_output};

pub fn run_decode(input: Option<PathBuf>, out: Option<PathBuf>, literal: bool) -> Result<()> {
    let text = read_input(input.as_deref())?;

    let bytes = if literal {
        PdfString::from_literal(text.trim_ascii())
            .context("input is not a literal string")?
            .into_bytes()
            .to_vec()
    } else {
        decode(&text)
    };
    debug!(
        input_len = text.len(),
        output_len = bytes.len(),
        "decoded literal string"
    );

    write_output(out.as_deref(), &bytes)
}
