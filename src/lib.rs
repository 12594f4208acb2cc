//! Read-only inspection of 32-bit little-endian ELF object files.
//!
//! The format code lives under [`formats::elf`]: a declarative record codec,
//! the entity records built on it, the image loader that cross-references
//! them, and a virtual-address view over the loadable segments.

pub mod config;
pub mod error;
pub mod formats;
pub mod logging;

pub use config::LoadConfig;
pub use error::{ElfscopeError, Result};
pub use formats::elf::{ElfImage, MemoryView};

use std::path::Path;

/// Read a file into memory and load it as an ELF image.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<ElfImage> {
    let data = std::fs::read(path.as_ref())?;
    tracing::debug!(size_bytes = data.len(), "read input file");
    Ok(ElfImage::parse(data)?)
}

/// Like [`load_file`], with an explicit loader configuration.
pub fn load_file_with_config<P: AsRef<Path>>(path: P, config: &LoadConfig) -> Result<ElfImage> {
    let data = std::fs::read(path.as_ref())?;
    Ok(ElfImage::parse_with_config(data, config)?)
}
