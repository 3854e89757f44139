use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Target height must be greater than 0, got: {height}")]
    ZeroHeight { height: u32 },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("--files requires --input-dir")]
    FilesWithoutInputDir,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
