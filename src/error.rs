//! Error types for the elfscope crate.
//!
//! Format problems found while decoding live in
//! [`ElfError`](crate::formats::elf::ElfError); this module wraps them together
//! with I/O and configuration failures for the crate-level entry points.

use thiserror::Error;

use crate::formats::elf::ElfError;

/// Main error type for elfscope operations.
#[derive(Debug, Error)]
pub enum ElfscopeError {
    /// Structural check failed while loading an image
    #[error("Invalid ELF image: {0}")]
    Elf(#[from] ElfError),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Loader configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for elfscope operations
pub type Result<T> = std::result::Result<T, ElfscopeError>;

impl From<serde_json::Error> for ElfscopeError {
    fn from(err: serde_json::Error) -> Self {
        ElfscopeError::Config(err.to_string())
    }
}
