use std::path::PathBuf;

use anyhow::Result;
use pdfstr_core::{Escaper, PdfString};
use tracing::debug;

use crate::helpers::{read_input, write_output};

pub fn run_encode(
    input: Option<PathBuf>,
    out: Option<PathBuf>,
    literal: bool,
    escaper: Escaper,
) -> Result<()> {
    let bytes = read_input(input.as_deref())?;
    let input_len = bytes.len();

    let text = if literal {
        PdfString::from(bytes).to_text_with(&escaper)
    } else {
        escaper.encode(&bytes)
    };
    debug!(
        input_len,
        output_len = text.len(),
        line_limit = ?escaper.line_limit(),
        "encoded literal string"
    );

    write_output(out.as_deref(), text.as_bytes())
}
