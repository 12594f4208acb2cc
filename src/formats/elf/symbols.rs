//! Symbol table entries

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::formats::elf::consts::*;
use crate::formats::elf::names::{self, Symbolic};
use crate::formats::elf::record::{FieldKind, FieldSpec, FieldValue, Fields, Record};
use crate::formats::elf::sections::Section;
use crate::formats::elf::types::{Result, UNKNOWN_NAME};
use crate::formats::elf::ElfImage;

/// ELF32 symbol (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub st_name: u32,
    pub st_value: u32,
    pub st_size: u32,
    pub st_info: u8,
    pub st_other: u8,
    pub st_shndx: u16,
}

impl Record for Symbol {
    const NAME: &'static str = "Symbol";
    const LAYOUT: &'static [FieldSpec] = &[
        FieldSpec::new("namendx", FieldKind::U32),
        FieldSpec::new("value", FieldKind::U32),
        FieldSpec::new("size", FieldKind::U32),
        FieldSpec::new("info", FieldKind::U8),
        FieldSpec::new("other", FieldKind::U8),
        FieldSpec::new("shndx", FieldKind::U16),
    ];

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            st_name: fields.u32("namendx")?,
            st_value: fields.u32("value")?,
            st_size: fields.u32("size")?,
            st_info: fields.u8("info")?,
            st_other: fields.u8("other")?,
            st_shndx: fields.u16("shndx")?,
        })
    }

    fn to_values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::U32(self.st_name),
            FieldValue::U32(self.st_value),
            FieldValue::U32(self.st_size),
            FieldValue::U8(self.st_info),
            FieldValue::U8(self.st_other),
            FieldValue::U16(self.st_shndx),
        ]
    }
}

impl Symbol {
    /// Low nibble of `st_info`.
    pub fn symbol_type(&self) -> Symbolic {
        names::symbol_type((self.st_info & 0xf) as u32)
    }

    /// Replace the type nibble, keeping the binding.
    pub fn set_symbol_type(&mut self, value: u8) {
        self.st_info = (self.st_info & 0xf0) | (value & 0xf);
    }

    /// High nibble of `st_info`.
    pub fn binding(&self) -> Symbolic {
        names::symbol_binding((self.st_info >> 4) as u32)
    }

    /// Replace the binding nibble, keeping the type.
    pub fn set_binding(&mut self, value: u8) {
        self.st_info = (value << 4) | (self.st_info & 0xf);
    }

    pub fn visibility(&self) -> Symbolic {
        names::symbol_visibility((self.st_other & 0x3) as u32)
    }

    pub fn is_undefined(&self) -> bool {
        self.st_shndx as u32 == SHN_UNDEF
    }

    pub fn is_function(&self) -> bool {
        self.symbol_type() == STT_FUNC
    }

    pub fn is_object(&self) -> bool {
        self.symbol_type() == STT_OBJECT
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields())
    }
}

/// A symbol together with its image and the symbol-table section holding it.
#[derive(Clone, Copy)]
pub struct ElfSymbol<'a> {
    image: &'a ElfImage,
    symtab: usize,
    pub symbol: &'a Symbol,
}

impl<'a> ElfSymbol<'a> {
    pub(crate) fn new(image: &'a ElfImage, symtab: usize, symbol: &'a Symbol) -> Self {
        Self {
            image,
            symtab,
            symbol,
        }
    }

    /// The symbol-table section this symbol was read from.
    pub fn symbol_table(&self) -> Option<Section<'a>> {
        self.image.section(self.symtab)
    }

    /// Name from the string table named by the symbol table's `sh_link`.
    pub fn name(&self) -> Cow<'a, str> {
        self.symbol_table()
            .and_then(|symtab| self.image.section(symtab.link() as usize))
            .map(|strtab| strtab.lookup_string(self.symbol.st_name))
            .unwrap_or(Cow::Borrowed(UNKNOWN_NAME))
    }

    /// Section indexed by `st_shndx`, or `None` when the index is outside the
    /// section table (e.g. `SHN_ABS`, `SHN_COMMON`).
    pub fn section(&self) -> Option<Section<'a>> {
        self.image.section(self.symbol.st_shndx as usize)
    }

    pub fn value(&self) -> u32 {
        self.symbol.st_value
    }

    pub fn size(&self) -> u32 {
        self.symbol.st_size
    }
}

impl fmt::Debug for ElfSymbol<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElfSymbol")
            .field("name", &self.name())
            .field("symtab", &self.symtab)
            .field("symbol", self.symbol)
            .finish()
    }
}

impl fmt::Display for ElfSymbol<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let section = self
            .section()
            .map(|s| s.name())
            .unwrap_or(Cow::Borrowed("*NO SECTION*"));
        write!(
            f,
            "<Symbol {} {:#x}:{:#x} section: {}>",
            self.name(),
            self.symbol.st_value,
            self.symbol.st_size,
            section
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn main_symbol() -> Symbol {
        Symbol {
            st_name: 8,
            st_value: 0x1000,
            st_size: 0x50,
            st_info: ((STB_GLOBAL << 4) | STT_FUNC) as u8,
            st_other: STV_HIDDEN as u8,
            st_shndx: 1,
        }
    }

    #[test]
    fn test_info_nibbles() {
        let sym = main_symbol();
        assert_eq!(sym.symbol_type(), STT_FUNC);
        assert_eq!(sym.binding(), STB_GLOBAL);
        assert_eq!(sym.binding().to_string(), "STB_GLOBAL");
        assert_eq!(sym.visibility().to_string(), "STV_HIDDEN");
        assert!(sym.is_function());
        assert!(!sym.is_undefined());
    }

    #[test]
    fn test_set_type_keeps_binding() {
        let mut sym = main_symbol();
        sym.set_binding(1);
        sym.set_symbol_type(3);
        assert_eq!(sym.binding(), 1);
        assert_eq!(sym.symbol_type(), 3);
        assert_eq!(sym.st_info, 0x13);

        sym.set_binding(STB_WEAK as u8);
        assert_eq!(sym.symbol_type(), STT_SECTION);
        assert_eq!(sym.st_info, 0x23);

        // Out-of-range type bits are masked off
        sym.set_symbol_type(0x1f);
        assert_eq!(sym.binding(), STB_WEAK);
        assert_eq!(sym.symbol_type(), 0xf);
    }

    #[test]
    fn test_symbol_round_trip() {
        let sym = main_symbol();
        let bytes = sym.encode();
        assert_eq!(bytes.len(), Symbol::SIZE);
        assert_eq!(Symbol::SIZE, 16);
        assert_eq!(Symbol::decode(&bytes).unwrap(), sym);
        assert_eq!(&bytes[12..], &[0x12, 0x02, 0x01, 0x00]);
    }
}
