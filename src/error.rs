//! Error types for hilite
//!
//! The highlight engine itself never fails; these cover rule loading,
//! configuration and terminal output.

use thiserror::Error;

/// Result type alias for hilite operations
pub type Result<T> = std::result::Result<T, HiliteError>;

/// Error types
#[derive(Error, Debug)]
pub enum HiliteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed rule file: {0}")]
    RuleParse(#[from] toml::de::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("{0}")]
    Message(String),
}
