//! MemoryView: reads by virtual address over the loadable segments.
//!
//! Segments are consulted in program-header order and need not be sorted or
//! contiguous. Address ranges that no segment covers contribute no bytes, so
//! a read may come back shorter than requested.

use crate::formats::elf::segments::Segment;

/// Errors that can occur during memory reads.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MemoryError {
    #[error("unsupported slice step: {0}")]
    UnsupportedStep(usize),
    #[error("address range {addr:#x}..+{len:#x} not fully mapped ({got} bytes available)")]
    Unmapped { addr: u64, len: usize, got: usize },
}

/// Virtual-address view over an image's `PT_LOAD` segments.
#[derive(Debug, Clone)]
pub struct MemoryView<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> MemoryView<'a> {
    pub fn new(segments: Vec<Segment<'a>>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Whether some segment maps `addr`.
    pub fn contains(&self, addr: u64) -> bool {
        self.segments.iter().any(|s| s.header.contains_vaddr(addr))
    }

    /// Bytes of `[start, stop)`.
    ///
    /// The remaining request advances by the bytes actually copied, so when a
    /// segment's file range is clipped by the end of the file, a later
    /// segment mapping the same addresses can supply the rest.
    pub fn read(&self, start: u64, stop: u64) -> Vec<u8> {
        let mut out = Vec::new();
        let mut start = start;
        for segment in &self.segments {
            if start >= stop {
                break;
            }
            let seg_start = segment.header.p_vaddr as u64;
            let seg_end = seg_start + segment.header.p_memsz as u64;
            let lo = start.max(seg_start);
            let hi = stop.min(seg_end);
            if lo >= hi {
                continue;
            }

            let from = (lo - seg_start) as usize;
            let copied = segment.copy_range(from, (hi - lo) as usize, &mut out);
            start = lo + copied as u64;
        }
        out
    }

    /// Slice-style read; only a step of 1 is supported.
    pub fn slice(&self, start: u64, stop: u64, step: usize) -> Result<Vec<u8>, MemoryError> {
        if step != 1 {
            return Err(MemoryError::UnsupportedStep(step));
        }
        Ok(self.read(start, stop))
    }

    /// Exactly `len` bytes at `addr`, failing if any of them is unmapped.
    /// A range running past the end of the address space is never mapped.
    pub fn read_exact(&self, addr: u64, len: usize) -> Result<Vec<u8>, MemoryError> {
        let bytes = self.read(addr, addr.saturating_add(len as u64));
        if bytes.len() != len {
            return Err(MemoryError::Unmapped {
                addr,
                len,
                got: bytes.len(),
            });
        }
        Ok(bytes)
    }

    pub fn read_u16(&self, addr: u64) -> Result<u16, MemoryError> {
        let b = self.read_exact(addr, 2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    pub fn read_u32(&self, addr: u64) -> Result<u32, MemoryError> {
        let b = self.read_exact(addr, 4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }
}
