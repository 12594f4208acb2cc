//! Section headers and the section view

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use tracing::warn;

use crate::formats::elf::consts::*;
use crate::formats::elf::names::{self, Symbolic};
use crate::formats::elf::record::{FieldKind, FieldSpec, FieldValue, Fields, Record};
use crate::formats::elf::types::{Result, UNKNOWN_NAME};
use crate::formats::elf::utils::{file_range, read_cstring};
use crate::formats::elf::ElfImage;

/// ELF32 section header (40 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionHeader {
    pub sh_name: u32,
    pub sh_type: u32,
    pub sh_flags: u32,
    pub sh_addr: u32,
    pub sh_offset: u32,
    pub sh_size: u32,
    pub sh_link: u32,
    pub sh_info: u32,
    pub sh_addralign: u32,
    pub sh_entsize: u32,
}

impl Record for SectionHeader {
    const NAME: &'static str = "SectionHeader";
    const LAYOUT: &'static [FieldSpec] = &[
        FieldSpec::new("namendx", FieldKind::U32),
        FieldSpec::decorated("type", FieldKind::U32, names::section_type),
        FieldSpec::decorated("flags", FieldKind::U32, names::section_flags),
        FieldSpec::new("addr", FieldKind::U32),
        FieldSpec::new("offset", FieldKind::U32),
        FieldSpec::new("size", FieldKind::U32),
        FieldSpec::new("link", FieldKind::U32),
        FieldSpec::new("info", FieldKind::U32),
        FieldSpec::new("addralign", FieldKind::U32),
        FieldSpec::new("entsize", FieldKind::U32),
    ];

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            sh_name: fields.u32("namendx")?,
            sh_type: fields.u32("type")?,
            sh_flags: fields.u32("flags")?,
            sh_addr: fields.u32("addr")?,
            sh_offset: fields.u32("offset")?,
            sh_size: fields.u32("size")?,
            sh_link: fields.u32("link")?,
            sh_info: fields.u32("info")?,
            sh_addralign: fields.u32("addralign")?,
            sh_entsize: fields.u32("entsize")?,
        })
    }

    fn to_values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::U32(self.sh_name),
            FieldValue::U32(self.sh_type),
            FieldValue::U32(self.sh_flags),
            FieldValue::U32(self.sh_addr),
            FieldValue::U32(self.sh_offset),
            FieldValue::U32(self.sh_size),
            FieldValue::U32(self.sh_link),
            FieldValue::U32(self.sh_info),
            FieldValue::U32(self.sh_addralign),
            FieldValue::U32(self.sh_entsize),
        ]
    }
}

impl SectionHeader {
    pub fn section_type(&self) -> Symbolic {
        names::section_type(self.sh_type)
    }

    pub fn flags(&self) -> Symbolic {
        names::section_flags(self.sh_flags)
    }

    /// Occupies no file space (`.bss` and friends).
    pub fn is_nobits(&self) -> bool {
        self.sh_type == SHT_NOBITS
    }

    /// `SHT_REL` table, the kind the loader decodes.
    pub fn is_relocation_table(&self) -> bool {
        self.sh_type == SHT_REL
    }
}

impl fmt::Display for SectionHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields())
    }
}

/// A section header together with the image it belongs to.
#[derive(Clone, Copy)]
pub struct Section<'a> {
    image: &'a ElfImage,
    index: usize,
    pub header: &'a SectionHeader,
}

impl<'a> Section<'a> {
    pub(crate) fn new(image: &'a ElfImage, index: usize, header: &'a SectionHeader) -> Self {
        Self {
            image,
            index,
            header,
        }
    }

    /// Position in the section header table.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Name from the section-name string table.
    pub fn name(&self) -> Cow<'a, str> {
        self.image.lookup_section_name(self.header.sh_name)
    }

    pub fn size(&self) -> u32 {
        self.header.sh_size
    }

    pub fn addr(&self) -> u32 {
        self.header.sh_addr
    }

    pub fn offset(&self) -> u32 {
        self.header.sh_offset
    }

    pub fn link(&self) -> u32 {
        self.header.sh_link
    }

    /// Section contents. `SHT_NOBITS` sections read as `size` zero bytes;
    /// everything else is the file range `[offset, offset + size)`, clipped
    /// to the end of the file.
    pub fn data(&self) -> Cow<'a, [u8]> {
        if self.header.is_nobits() {
            return Cow::Owned(vec![0; self.header.sh_size as usize]);
        }
        Cow::Borrowed(file_range(
            self.image.data(),
            self.header.sh_offset as usize,
            self.header.sh_size as usize,
        ))
    }

    /// String starting at `index` in this section, read as a string table.
    pub fn lookup_string(&self, index: u32) -> Cow<'a, str> {
        match self.data() {
            Cow::Borrowed(bytes) => {
                read_cstring(bytes, index as usize).unwrap_or(Cow::Borrowed(UNKNOWN_NAME))
            }
            Cow::Owned(bytes) => read_cstring(&bytes, index as usize)
                .map(|s| Cow::Owned(s.into_owned()))
                .unwrap_or(Cow::Borrowed(UNKNOWN_NAME)),
        }
    }

    /// Decode the section contents as a table of `R`.
    ///
    /// Entries are `max(sh_entsize, R::SIZE)` bytes apart; a trailing partial
    /// entry is ignored. An entry failing validation is skipped.
    pub fn decode_entries<R: Record>(&self) -> Vec<R> {
        let stride = (self.header.sh_entsize as usize).max(R::SIZE);
        let data = self.data();
        data.chunks_exact(stride)
            .enumerate()
            .filter_map(|(i, chunk)| match R::decode(chunk) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!(
                        section = self.index,
                        entry = i,
                        record = R::NAME,
                        error = %err,
                        "skipping invalid entry"
                    );
                    None
                }
            })
            .collect()
    }

    /// Segments whose file range holds this section's offset.
    pub fn segments(&self) -> Vec<crate::formats::elf::Segment<'a>> {
        let index = self.index;
        self.image
            .segments()
            .filter(|seg| seg.sections().iter().any(|s| s.index == index))
            .collect()
    }
}

impl fmt::Debug for Section<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Section")
            .field("index", &self.index)
            .field("name", &self.name())
            .field("header", self.header)
            .finish()
    }
}

impl fmt::Display for Section<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Section {}: {:#x}:{:#x} type:{} flags:{}>",
            self.name(),
            self.header.sh_addr,
            self.header.sh_size,
            self.header.section_type(),
            self.header.flags()
        )
    }
}
