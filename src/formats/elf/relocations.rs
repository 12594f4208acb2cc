//! Relocation entries

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::formats::elf::record::{FieldKind, FieldSpec, FieldValue, Fields, Record};
use crate::formats::elf::sections::Section;
use crate::formats::elf::types::Result;
use crate::formats::elf::ElfImage;

/// Symbol index in the top 24 bits, type in the low 8.
fn pack_info(symbol_index: u32, reloc_type: u32) -> u32 {
    (symbol_index << 8) | (reloc_type & 0xff)
}

/// ELF32 `Elf32_Rel` (8 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rel {
    pub r_offset: u32,
    pub r_info: u32,
}

impl Record for Rel {
    const NAME: &'static str = "Rel";
    const LAYOUT: &'static [FieldSpec] = &[
        FieldSpec::new("offset", FieldKind::U32),
        FieldSpec::new("info", FieldKind::U32),
    ];

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            r_offset: fields.u32("offset")?,
            r_info: fields.u32("info")?,
        })
    }

    fn to_values(&self) -> Vec<FieldValue> {
        vec![FieldValue::U32(self.r_offset), FieldValue::U32(self.r_info)]
    }
}

/// ELF32 `Elf32_Rela` (12 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rela {
    pub r_offset: u32,
    pub r_info: u32,
    pub r_addend: i32,
}

impl Record for Rela {
    const NAME: &'static str = "Rela";
    const LAYOUT: &'static [FieldSpec] = &[
        FieldSpec::new("offset", FieldKind::U32),
        FieldSpec::new("info", FieldKind::U32),
        FieldSpec::new("addend", FieldKind::I32),
    ];

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            r_offset: fields.u32("offset")?,
            r_info: fields.u32("info")?,
            r_addend: fields.i32("addend")?,
        })
    }

    fn to_values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::U32(self.r_offset),
            FieldValue::U32(self.r_info),
            FieldValue::I32(self.r_addend),
        ]
    }
}

macro_rules! impl_reloc_info {
    ($ty:ty) => {
        impl $ty {
            pub fn symbol_index(&self) -> u32 {
                self.r_info >> 8
            }

            pub fn set_symbol_index(&mut self, index: u32) {
                self.r_info = pack_info(index, self.reloc_type());
            }

            pub fn reloc_type(&self) -> u32 {
                self.r_info & 0xff
            }

            pub fn set_reloc_type(&mut self, reloc_type: u32) {
                self.r_info = pack_info(self.symbol_index(), reloc_type);
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.fields())
            }
        }
    };
}

impl_reloc_info!(Rel);
impl_reloc_info!(Rela);

/// A `Rel` entry tagged with the relocation section it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relocation {
    pub section_index: usize,
    pub rel: Rel,
}

impl Relocation {
    /// The relocation-table section holding this entry.
    pub fn section<'a>(&self, image: &'a ElfImage) -> Option<Section<'a>> {
        image.section(self.section_index)
    }

    pub fn offset(&self) -> u32 {
        self.rel.r_offset
    }

    pub fn symbol_index(&self) -> u32 {
        self.rel.symbol_index()
    }

    pub fn reloc_type(&self) -> u32 {
        self.rel.reloc_type()
    }
}
