use crate::cipher::{Mode, Transposition};
use crate::config::CipherSpec;
use crate::error::Result;
use std::fs;
use std::path::Path;
use tracing::info;

/// Read a text file, dropping trailing line terminators
pub fn read_text(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)?;
    Ok(text.trim_end_matches(['\n', '\r']).to_string())
}

/// Encrypt or decrypt a string
pub fn transform_text(text: &str, spec: &CipherSpec, mode: Mode) -> Result<String> {
    let result = spec.transform_str(text, mode)?;
    info!(cipher = %spec.kind(), %mode, symbols = result.chars().count(), "transformed text");
    Ok(result)
}

/// Encrypt or decrypt a file into another file.
/// Returns the number of symbols written.
pub fn transform_file(input: &Path, output: &Path, spec: &CipherSpec, mode: Mode) -> Result<usize> {
    let text = read_text(input)?;
    let result = transform_text(&text, spec, mode)?;
    fs::write(output, format!("{}\n", result))?;
    Ok(result.chars().count())
}
