//! Shared types and enums used across LOGONORM.
//! Includes `OutputFormat`, `TrimMode`, and the `BoundingBox` produced by the
//! trim pass.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum OutputFormat {
    PNG,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::PNG => write!(f, "PNG"),
        }
    }
}

/// Strategy for locating the content bounding box before cropping.
///
/// Only the alpha-based trim is implemented: near-white pixels are knocked out
/// to alpha 0 first, so the alpha channel alone delimits the content region.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum TrimMode {
    Alpha,
}

impl std::fmt::Display for TrimMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrimMode::Alpha => write!(f, "Alpha"),
        }
    }
}

/// Pixel rectangle enclosing all non-background content.
/// `right` and `bottom` are exclusive, so `width()`/`height()` are plain
/// differences and a valid box is never zero-sized.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {})..({}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
