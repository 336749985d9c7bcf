//! Input discovery and per-page output files.

use crate::CliError;
use shapeink_core::{ConvertConfig, Document, convert_page_to_file};
use std::fs;
use std::path::{Path, PathBuf};

/// Expand directories to the `.json` files they contain, sorted by name.
pub fn collect_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut found: Vec<PathBuf> = fs::read_dir(input)?
                .flatten()
                .map(|entry| entry.path())
                .filter(|path| path.is_file() && is_json(path))
                .collect();
            found.sort();
            if found.is_empty() {
                log::warn!("No .json documents in {}", input.display());
            }
            files.extend(found);
        } else {
            files.push(input.clone());
        }
    }
    Ok(files)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Output file for page `index` (0-based) of `input`: `{stem}_{index + 1}.{ext}`.
pub fn page_output_path(
    input: &Path,
    out_dir: Option<&Path>,
    index: usize,
    config: &ConvertConfig,
) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    let dir = out_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    dir.join(format!("{}_{}.{}", stem, index + 1, config.format.extension()))
}

/// Convert every page of one document file. Returns the files written.
pub fn convert_file(
    input: &Path,
    out_dir: Option<&Path>,
    config: &ConvertConfig,
) -> Result<Vec<PathBuf>, CliError> {
    let document = Document::load(input)?;
    if document.pages.is_empty() {
        log::warn!("{} has no pages", input.display());
    }

    let mut written = Vec::with_capacity(document.pages.len());
    for (index, page) in document.pages.iter().enumerate() {
        let output = page_output_path(input, out_dir, index, config);
        let stats = convert_page_to_file(page, &output, config)?;
        log::info!(
            "Wrote {} ({} elements, {} skipped)",
            output.display(),
            stats.elements,
            stats.skipped
        );
        written.push(output);
    }
    Ok(written)
}
