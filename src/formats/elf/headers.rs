//! ELF file header

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::formats::elf::consts::*;
use crate::formats::elf::names::{self, Symbolic};
use crate::formats::elf::record::{FieldKind, FieldSpec, FieldValue, Fields, Record};
use crate::formats::elf::types::{ElfError, Result};

/// ELF32 file header (52 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElfHeader {
    pub ident: [u8; EI_NIDENT],
    pub e_type: u16,
    pub e_machine: u16,
    pub e_version: u32,
    pub e_entry: u32,
    pub e_phoff: u32,
    pub e_shoff: u32,
    pub e_flags: u32,
    pub e_ehsize: u16,
    pub e_phentsize: u16,
    pub e_phnum: u16,
    pub e_shentsize: u16,
    pub e_shnum: u16,
    pub e_shstrndx: u16,
}

impl Record for ElfHeader {
    const NAME: &'static str = "ElfHeader";
    const LAYOUT: &'static [FieldSpec] = &[
        FieldSpec::new("ident", FieldKind::Bytes(EI_NIDENT)),
        FieldSpec::decorated("type", FieldKind::U16, names::file_type),
        FieldSpec::decorated("machine", FieldKind::U16, names::machine),
        FieldSpec::new("version", FieldKind::U32),
        FieldSpec::new("entry", FieldKind::U32),
        FieldSpec::new("phoff", FieldKind::U32),
        FieldSpec::new("shoff", FieldKind::U32),
        FieldSpec::new("flags", FieldKind::U32),
        FieldSpec::new("ehsize", FieldKind::U16),
        FieldSpec::new("phentsize", FieldKind::U16),
        FieldSpec::new("phnum", FieldKind::U16),
        FieldSpec::new("shentsize", FieldKind::U16),
        FieldSpec::new("shnum", FieldKind::U16),
        FieldSpec::new("shstrndx", FieldKind::U16),
    ];

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            ident: fields.bytes("ident")?,
            e_type: fields.u16("type")?,
            e_machine: fields.u16("machine")?,
            e_version: fields.u32("version")?,
            e_entry: fields.u32("entry")?,
            e_phoff: fields.u32("phoff")?,
            e_shoff: fields.u32("shoff")?,
            e_flags: fields.u32("flags")?,
            e_ehsize: fields.u16("ehsize")?,
            e_phentsize: fields.u16("phentsize")?,
            e_phnum: fields.u16("phnum")?,
            e_shentsize: fields.u16("shentsize")?,
            e_shnum: fields.u16("shnum")?,
            e_shstrndx: fields.u16("shstrndx")?,
        })
    }

    fn to_values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Bytes(self.ident.to_vec()),
            FieldValue::U16(self.e_type),
            FieldValue::U16(self.e_machine),
            FieldValue::U32(self.e_version),
            FieldValue::U32(self.e_entry),
            FieldValue::U32(self.e_phoff),
            FieldValue::U32(self.e_shoff),
            FieldValue::U32(self.e_flags),
            FieldValue::U16(self.e_ehsize),
            FieldValue::U16(self.e_phentsize),
            FieldValue::U16(self.e_phnum),
            FieldValue::U16(self.e_shentsize),
            FieldValue::U16(self.e_shnum),
            FieldValue::U16(self.e_shstrndx),
        ]
    }

    /// Magic, class, byte order and identification version.
    fn validate(&self) -> Result<()> {
        if &self.ident[..4] != ELFMAG {
            return Err(ElfError::InvalidMagic);
        }
        if self.class() != ELFCLASS32 {
            return Err(ElfError::UnsupportedClass(self.class()));
        }
        if self.data_encoding() != ELFDATA2LSB {
            return Err(ElfError::UnsupportedData(self.data_encoding()));
        }
        if self.ident_version() != EV_CURRENT {
            return Err(ElfError::UnsupportedVersion(self.ident_version()));
        }
        Ok(())
    }
}

impl ElfHeader {
    pub fn class(&self) -> u8 {
        self.ident[EI_CLASS]
    }

    pub fn data_encoding(&self) -> u8 {
        self.ident[EI_DATA]
    }

    pub fn ident_version(&self) -> u8 {
        self.ident[EI_VERSION]
    }

    pub fn osabi(&self) -> u8 {
        self.ident[EI_OSABI]
    }

    pub fn abiversion(&self) -> u8 {
        self.ident[EI_ABIVERSION]
    }

    pub fn file_type(&self) -> Symbolic {
        names::file_type(self.e_type as u32)
    }

    pub fn machine(&self) -> Symbolic {
        names::machine(self.e_machine as u32)
    }

    pub fn entry_point(&self) -> u32 {
        self.e_entry
    }
}

impl fmt::Display for ElfHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields())
    }
}
