use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{OutputFormat, TrimMode};

/// Normalization parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeParams {
    pub format: OutputFormat,
    /// Channel value a pixel's R, G, and B must all exceed to count as
    /// background white
    pub threshold: u8,
    /// Output height in pixels; width follows the trimmed aspect ratio
    pub target_height: u32,
    pub trim: TrimMode,
}

impl NormalizeParams {
    /// Loads parameters from a JSON preset file.
    pub fn from_preset(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl Default for NormalizeParams {
    fn default() -> Self {
        Self {
            format: OutputFormat::PNG,
            threshold: 200,
            target_height: 100,
            trim: TrimMode::Alpha,
        }
    }
}
