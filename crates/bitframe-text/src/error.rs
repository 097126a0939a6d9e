use std::path::PathBuf;

/// Errors that can occur while reading or writing bit text.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// Failed to open the input file.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create the output file.
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An I/O error occurred on an open stream.
    #[error("bit text I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TextError>;
