//! High-level, ergonomic library API: normalize a decoded buffer, a single
//! file, or a directory of logo assets, with per-item error isolation in the
//! batch helpers. Prefer these entrypoints over the low-level processing
//! modules when embedding LOGONORM.
use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::{info, warn};

use crate::core::params::NormalizeParams;
use crate::core::processing::pipeline::normalize_logo;
use crate::error::{Error, Result};
use crate::io::reader::{normalized_output_path, open_rgba};
use crate::io::writers::png::write_rgba_png;
use crate::types::OutputFormat;

/// Outcome counters for a batch run. No item failure aborts the batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Normalizes an already-decoded RGBA buffer. Pure; no disk I/O.
pub fn normalize_to_buffer(img: RgbaImage, params: &NormalizeParams) -> Result<RgbaImage> {
    normalize_logo(img, params)
}

/// Normalizes one file and writes the PNG result to an explicit output path.
/// Returns the final dimensions.
pub fn normalize_file_to_path(
    input: &Path,
    output: &Path,
    params: &NormalizeParams,
) -> Result<(u32, u32)> {
    let img = open_rgba(input)?;
    let normalized = normalize_logo(img, params)?;
    match params.format {
        OutputFormat::PNG => write_rgba_png(output, &normalized)?,
    }
    Ok(normalized.dimensions())
}

/// Normalizes one file and writes the result beside it under the same stem
/// with a `.png` extension (overwriting a `.png` source in place).
pub fn normalize_file_in_place(input: &Path, params: &NormalizeParams) -> Result<(u32, u32)> {
    let output = normalized_output_path(input);
    normalize_file_to_path(input, &output, params)
}

fn is_logo_source(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("png") || ext.eq_ignore_ascii_case("webp")
    )
}

/// Processes an explicit list of filenames inside `dir`, the way a build step
/// pins its known assets. Missing and undecodable inputs are logged and
/// counted; the batch always runs to completion.
pub fn process_files(dir: &Path, files: &[String], params: &NormalizeParams) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for name in files {
        let path = dir.join(name);
        match normalize_file_in_place(&path, params) {
            Ok((w, h)) => {
                info!("Saved {:?}: {}x{}", normalized_output_path(&path), w, h);
                report.processed += 1;
            }
            Err(Error::NotFound { path }) => {
                warn!("Skipping {:?}: not found", path);
                report.skipped += 1;
            }
            Err(e) => {
                warn!("Failed to process {:?}: {}", path, e);
                report.errors += 1;
            }
        }
    }

    Ok(report)
}

/// Processes every PNG/WEBP file in a directory. Non-raster entries and
/// subdirectories are skipped with a message.
pub fn process_directory(dir: &Path, params: &NormalizeParams) -> Result<BatchReport> {
    let mut report = BatchReport::default();
    let mut names: Vec<PathBuf> = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_logo_source(&path) {
            names.push(path);
        } else {
            info!("Skipping non-logo entry: {:?}", path);
            report.skipped += 1;
        }
    }
    // Deterministic order regardless of directory iteration order.
    names.sort();

    for path in names {
        // A .webp whose .png sibling already exists was normalized by an
        // earlier run (or by this one); don't clobber the output again.
        let output = normalized_output_path(&path);
        if output != path && output.exists() {
            info!("Skipping {:?}: {:?} already present", path, output);
            report.skipped += 1;
            continue;
        }
        match normalize_file_in_place(&path, params) {
            Ok((w, h)) => {
                info!("Saved {:?}: {}x{}", normalized_output_path(&path), w, h);
                report.processed += 1;
            }
            Err(e) => {
                warn!("Failed to process {:?}: {}", path, e);
                report.errors += 1;
            }
        }
    }

    Ok(report)
}
