//! Program headers and the segment view

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::formats::elf::consts::*;
use crate::formats::elf::names::{self, Symbolic};
use crate::formats::elf::record::{FieldKind, FieldSpec, FieldValue, Fields, Record};
use crate::formats::elf::sections::Section;
use crate::formats::elf::types::Result;
use crate::formats::elf::utils::file_range;
use crate::formats::elf::ElfImage;

/// ELF32 program header (32 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramHeader {
    pub p_type: u32,
    pub p_offset: u32,
    pub p_vaddr: u32,
    pub p_paddr: u32,
    pub p_filesz: u32,
    pub p_memsz: u32,
    pub p_flags: u32,
    pub p_align: u32,
}

impl Record for ProgramHeader {
    const NAME: &'static str = "ProgramHeader";
    const LAYOUT: &'static [FieldSpec] = &[
        FieldSpec::decorated("type", FieldKind::U32, names::segment_type),
        FieldSpec::new("offset", FieldKind::U32),
        FieldSpec::new("vaddr", FieldKind::U32),
        FieldSpec::new("paddr", FieldKind::U32),
        FieldSpec::new("filesz", FieldKind::U32),
        FieldSpec::new("memsz", FieldKind::U32),
        FieldSpec::decorated("flags", FieldKind::U32, names::segment_flags),
        FieldSpec::new("align", FieldKind::U32),
    ];

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            p_type: fields.u32("type")?,
            p_offset: fields.u32("offset")?,
            p_vaddr: fields.u32("vaddr")?,
            p_paddr: fields.u32("paddr")?,
            p_filesz: fields.u32("filesz")?,
            p_memsz: fields.u32("memsz")?,
            p_flags: fields.u32("flags")?,
            p_align: fields.u32("align")?,
        })
    }

    fn to_values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::U32(self.p_type),
            FieldValue::U32(self.p_offset),
            FieldValue::U32(self.p_vaddr),
            FieldValue::U32(self.p_paddr),
            FieldValue::U32(self.p_filesz),
            FieldValue::U32(self.p_memsz),
            FieldValue::U32(self.p_flags),
            FieldValue::U32(self.p_align),
        ]
    }
}

impl ProgramHeader {
    pub fn segment_type(&self) -> Symbolic {
        names::segment_type(self.p_type)
    }

    pub fn flags(&self) -> Symbolic {
        names::segment_flags(self.p_flags)
    }

    pub fn is_load(&self) -> bool {
        self.p_type == PT_LOAD
    }

    /// Whether `addr` falls inside `[p_vaddr, p_vaddr + p_memsz)`.
    pub fn contains_vaddr(&self, addr: u64) -> bool {
        let start = self.p_vaddr as u64;
        addr >= start && addr < start + self.p_memsz as u64
    }
}

impl fmt::Display for ProgramHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields())
    }
}

/// A program header together with the image it belongs to.
#[derive(Clone, Copy)]
pub struct Segment<'a> {
    image: &'a ElfImage,
    index: usize,
    pub header: &'a ProgramHeader,
}

impl<'a> Segment<'a> {
    pub(crate) fn new(image: &'a ElfImage, index: usize, header: &'a ProgramHeader) -> Self {
        Self {
            image,
            index,
            header,
        }
    }

    /// Position in the program header table.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_executable(&self) -> bool {
        self.header.p_flags & PF_X != 0
    }

    pub fn is_writable(&self) -> bool {
        self.header.p_flags & PF_W != 0
    }

    pub fn is_readable(&self) -> bool {
        self.header.p_flags & PF_R != 0
    }

    /// Memory image of a `PT_LOAD` segment: the file range
    /// `[offset, offset + filesz)` followed by `memsz - filesz` zero bytes.
    /// Other segment types have no data.
    pub fn data(&self) -> Cow<'a, [u8]> {
        if !self.header.is_load() {
            return Cow::Borrowed(&[]);
        }
        let file = file_range(
            self.image.data(),
            self.header.p_offset as usize,
            self.header.p_filesz as usize,
        );
        let padding = self.header.p_memsz.saturating_sub(self.header.p_filesz) as usize;
        if padding == 0 {
            return Cow::Borrowed(file);
        }
        let mut bytes = Vec::with_capacity(file.len() + padding);
        bytes.extend_from_slice(file);
        bytes.resize(file.len() + padding, 0);
        Cow::Owned(bytes)
    }

    /// Append `data()[from..from + len]` (clipped to its end) to `out`
    /// without materializing the zero padding. Returns the bytes appended.
    pub fn copy_range(&self, from: usize, len: usize, out: &mut Vec<u8>) -> usize {
        if !self.header.is_load() {
            return 0;
        }
        let file = file_range(
            self.image.data(),
            self.header.p_offset as usize,
            self.header.p_filesz as usize,
        );
        let padding = self.header.p_memsz.saturating_sub(self.header.p_filesz) as usize;
        let total = file.len() + padding;
        if from >= total {
            return 0;
        }
        let end = from.saturating_add(len).min(total);
        if from < file.len() {
            out.extend_from_slice(&file[from..end.min(file.len())]);
        }
        let zeros_from = from.max(file.len());
        if end > zeros_from {
            out.resize(out.len() + (end - zeros_from), 0);
        }
        end - from
    }

    /// Sections whose file offset lies in `[offset, offset + filesz]`, in
    /// ascending offset order. The upper bound is inclusive, so a section
    /// starting exactly at the segment's end is counted. A `PT_PHDR` segment
    /// describes the header table itself and reports no sections.
    pub fn sections(&self) -> Vec<Section<'a>> {
        if self.header.p_type == PT_PHDR {
            return Vec::new();
        }
        let start = self.header.p_offset as u64;
        let end = start + self.header.p_filesz as u64;
        let mut contained: Vec<Section<'a>> = self
            .image
            .sections()
            .filter(|s| (start..=end).contains(&(s.header.sh_offset as u64)))
            .collect();
        contained.sort_by_key(|s| s.header.sh_offset);
        contained
    }
}

impl fmt::Debug for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Segment")
            .field("index", &self.index)
            .field("header", self.header)
            .finish()
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<ProgramHeader {:#x}:{:#x}({:#x}) type:{} flags:{}>",
            self.header.p_vaddr,
            self.header.p_memsz,
            self.header.p_filesz,
            self.header.segment_type(),
            self.header.flags()
        )
    }
}
