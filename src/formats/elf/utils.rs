//! Utility functions for ELF parsing

use std::borrow::Cow;

/// Read a NUL-terminated string starting at `offset`.
///
/// Returns `None` when `offset` is outside `data`. A string running to the
/// end of `data` without a terminator is returned whole.
pub fn read_cstring(data: &[u8], offset: usize) -> Option<Cow<'_, str>> {
    let slice = data.get(offset..)?;
    if offset >= data.len() {
        return None;
    }
    let end = memchr::memchr(0, slice).unwrap_or(slice.len());
    Some(String::from_utf8_lossy(&slice[..end]))
}

/// Bytes `[offset, offset + len)` of `data`, clipped to what is present.
pub fn file_range(data: &[u8], offset: usize, len: usize) -> &[u8] {
    match data.get(offset..) {
        Some(rest) => &rest[..len.min(rest.len())],
        None => &[],
    }
}

/// Slice the table at `offset` spanning exactly `len` bytes, or report how
/// many bytes were actually there.
pub fn exact_range(data: &[u8], offset: usize, len: usize) -> Result<&[u8], usize> {
    let range = file_range(data, offset, len);
    if range.len() == len {
        Ok(range)
    } else {
        Err(range.len())
    }
}
