//! Core ELF error types and shared definitions

use thiserror::Error;

/// ELF parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElfError {
    #[error("Invalid ELF magic")]
    InvalidMagic,
    #[error("Unsupported ELF class: {0} (only 32-bit is supported)")]
    UnsupportedClass(u8),
    #[error("Unsupported ELF data encoding: {0} (only LSB is supported)")]
    UnsupportedData(u8),
    #[error("Unsupported ELF version: {0}")]
    UnsupportedVersion(u8),
    #[error("Truncated {what} at {offset:#x}: needed {needed} bytes, {available} available")]
    Truncated {
        what: &'static str,
        offset: usize,
        needed: usize,
        available: usize,
    },
    #[error("{table} at {offset:#x} is out of bounds: expected {expected} bytes, got {actual}")]
    TableLength {
        table: &'static str,
        offset: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Field {field} of {record} does not match its layout")]
    FieldMismatch {
        record: &'static str,
        field: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ElfError>;

/// Returned by name lookups whose index falls outside the string table.
pub const UNKNOWN_NAME: &str = "*unknown*";
