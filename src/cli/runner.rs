use std::path::PathBuf;

use tracing::{info, warn};

use logonorm::api::{normalize_file_to_path, process_directory, process_files};
use logonorm::io::reader::normalized_output_path;
use logonorm::{Error, NormalizeParams};

use super::args::CliArgs;
use super::errors::AppError;

fn params_from_args(args: &CliArgs) -> Result<NormalizeParams, Box<dyn std::error::Error>> {
    let base = match &args.preset {
        Some(path) => NormalizeParams::from_preset(path)?,
        None => NormalizeParams::default(),
    };

    // Explicit flags override individual preset (or default) values.
    let params = NormalizeParams {
        format: args.format.unwrap_or(base.format),
        threshold: args.threshold.unwrap_or(base.threshold),
        target_height: args.target_height.unwrap_or(base.target_height),
        trim: args.trim.unwrap_or(base.trim),
    };

    if params.target_height == 0 {
        return Err(AppError::ZeroHeight {
            height: params.target_height,
        }
        .into());
    }

    Ok(params)
}

fn process_single_file(
    input: &PathBuf,
    output: Option<&PathBuf>,
    params: &NormalizeParams,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = match output {
        Some(path) => path.clone(),
        None => normalized_output_path(input),
    };

    info!("Processing: {:?} -> {:?}", input, output);
    let (width, height) = normalize_file_to_path(input, &output, params)?;
    info!("Saved {:?}: {}x{}", output, width, height);
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = params_from_args(&args)?;
    let batch_mode = args.input_dir.is_some();

    if !batch_mode && !args.files.is_empty() {
        return Err(AppError::FilesWithoutInputDir.into());
    }

    if batch_mode {
        let input_dir = args.input_dir.ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;

        info!("Starting batch processing from directory: {:?}", input_dir);

        let report = if args.files.is_empty() {
            process_directory(&input_dir, &params)?
        } else {
            process_files(&input_dir, &args.files, &params)?
        };

        info!("Batch processing complete!");
        info!("Processed: {}", report.processed);
        info!("Skipped: {}", report.skipped);
        info!("Errors: {}", report.errors);
    } else {
        let input = args.input.ok_or(AppError::MissingArgument {
            arg: "--input".to_string(),
        })?;

        // --in-place and --output are mutually exclusive at parse time; the
        // flag just makes the default same-stem destination explicit.
        let output = if args.in_place {
            None
        } else {
            args.output.as_ref()
        };

        match process_single_file(&input, output, &params) {
            Ok(()) => info!("Successfully processed: {:?}\n", input),
            Err(e) => {
                // Per-item isolation: a single bad input is reported, not fatal,
                // except for argument-level mistakes surfaced above.
                if let Some(Error::NotFound { path }) = e.downcast_ref::<Error>() {
                    warn!("Skipping {:?}: not found", path);
                } else {
                    return Err(e);
                }
            }
        }
    }

    Ok(())
}
