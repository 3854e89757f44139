use clap::Parser;
use std::path::PathBuf;

use logonorm::types::{OutputFormat, TrimMode};

#[derive(Parser)]
#[command(name = "logonorm", version, about = "LOGONORM CLI")]
pub struct CliArgs {
    /// Input image file (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output filename (single file mode; defaults to the input stem + .png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the result beside the input under the same stem with a .png
    /// extension (the default when --output is omitted)
    #[arg(long, default_value_t = false, conflicts_with = "output")]
    pub in_place: bool,

    /// Input directory containing logo files (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Process only these filenames inside --input-dir instead of every
    /// PNG/WEBP found there
    #[arg(long, num_args = 1..)]
    pub files: Vec<String>,

    /// JSON preset file with normalization parameters; the flags below
    /// override individual preset values
    #[arg(long)]
    pub preset: Option<PathBuf>,

    /// Output format [default: png]
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Channel value R, G, and B must all exceed for a pixel to count as
    /// background white [default: 200]
    #[arg(long)]
    pub threshold: Option<u8>,

    /// Output height in pixels; width follows the trimmed aspect ratio
    /// [default: 100]
    #[arg(long)]
    pub target_height: Option<u32>,

    /// Trim strategy [default: alpha]
    #[arg(long, value_enum)]
    pub trim: Option<TrimMode>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
