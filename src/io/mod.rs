//! I/O layer: decoding logo rasters into RGBA buffers, writing PNG outputs,
//! and the output-path convention (same stem, `.png` extension).
pub mod reader;
pub use reader::{normalized_output_path, open_rgba};

pub mod writers;
